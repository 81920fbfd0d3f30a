//! Command line parsing
//!
//! A line is split on whitespace. The first token names the command
//! (case-insensitive), the rest are its arguments. Extra arguments are ignored.

use crate::error::CommandError;
use carpark::Vehicle;
use std::str::FromStr;

/// Command name, resolved before its arguments are looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    CreateParkingLot,
    Park,
    Leave,
    Status,
    TypeOfVehicles,
    RegistrationNumbersForColour,
    SlotNumbersForColour,
    SlotNumberForRegistration,
    Exit,
}

impl CommandKind {
    /// Whether the command operates on an existing lot
    pub fn needs_lot(self) -> bool {
        !matches!(self, Self::CreateParkingLot | Self::Exit)
    }

    /// Usage line shown when arguments are missing
    pub fn usage(self) -> &'static str {
        match self {
            Self::CreateParkingLot => "create_parking_lot <number_of_slots>",
            Self::Park => "park <registration_number> <color> <type>",
            Self::Leave => "leave <slot_number>",
            Self::Status => "status",
            Self::TypeOfVehicles => "type_of_vehicles <type>",
            Self::RegistrationNumbersForColour => {
                "registration_numbers_for_vehicles_with_colour <color>"
            }
            Self::SlotNumbersForColour => "slot_numbers_for_vehicles_with_colour <color>",
            Self::SlotNumberForRegistration => {
                "slot_number_for_registration_number <registration_number>"
            }
            Self::Exit => "exit",
        }
    }

    /// Number of required arguments
    fn arity(self) -> usize {
        match self {
            Self::Status | Self::Exit => 0,
            Self::Park => 3,
            _ => 1,
        }
    }
}

impl FromStr for CommandKind {
    type Err = CommandError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let kind = match name.to_ascii_lowercase().as_str() {
            "create_parking_lot" => Self::CreateParkingLot,
            "park" => Self::Park,
            "leave" => Self::Leave,
            "status" => Self::Status,
            "type_of_vehicles" => Self::TypeOfVehicles,
            "registration_numbers_for_vehicles_with_colour" => Self::RegistrationNumbersForColour,
            "slot_numbers_for_vehicles_with_colour" => Self::SlotNumbersForColour,
            "slot_number_for_registration_number" => Self::SlotNumberForRegistration,
            "exit" => Self::Exit,
            _ => return Err(CommandError::Invalid),
        };
        Ok(kind)
    }
}

/// A fully parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateParkingLot { capacity: usize },
    Park(Vehicle),
    /// Slot as typed, so out-of-range and negative numbers reach the lot
    Leave { slot: i64 },
    Status,
    TypeOfVehicles { vehicle_type: String },
    RegistrationNumbersForColour { color: String },
    SlotNumbersForColour { color: String },
    SlotNumberForRegistration { registration_number: String },
    Exit,
}

impl Command {
    /// Build a command of `kind` from its argument tokens
    pub fn from_args(kind: CommandKind, args: &[&str]) -> Result<Self, CommandError> {
        if args.len() < kind.arity() {
            return Err(CommandError::Usage(kind.usage()));
        }

        let command = match kind {
            CommandKind::CreateParkingLot => Self::CreateParkingLot {
                capacity: parse_number(args[0], "capacity")?,
            },
            CommandKind::Park => Self::Park(Vehicle::new(args[0], args[1], args[2])),
            CommandKind::Leave => Self::Leave {
                slot: parse_number(args[0], "slot number")?,
            },
            CommandKind::Status => Self::Status,
            CommandKind::TypeOfVehicles => Self::TypeOfVehicles {
                vehicle_type: args[0].to_string(),
            },
            CommandKind::RegistrationNumbersForColour => Self::RegistrationNumbersForColour {
                color: args[0].to_string(),
            },
            CommandKind::SlotNumbersForColour => Self::SlotNumbersForColour {
                color: args[0].to_string(),
            },
            CommandKind::SlotNumberForRegistration => Self::SlotNumberForRegistration {
                registration_number: args[0].to_string(),
            },
            CommandKind::Exit => Self::Exit,
        };
        Ok(command)
    }
}

/// Split a line into its command name and arguments
///
/// Returns `None` for a blank line.
pub fn tokenize(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    Some((name, tokens.collect()))
}

fn parse_number<T: FromStr>(token: &str, what: &'static str) -> Result<T, CommandError> {
    token.parse().map_err(|_| CommandError::InvalidNumber {
        token: token.to_string(),
        what,
    })
}
