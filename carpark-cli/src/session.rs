//! Session state and command dispatch

use crate::command::{Command, CommandKind, tokenize};
use crate::error::CommandError;
use carpark::{LotError, ParkingLot, SlotNumber, Vehicle};
use tracing::{debug, warn};

/// Outcome of a successfully dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Created { capacity: usize },
    Parked { slot: SlotNumber },
    Freed { slot: i64 },
    /// Park into a full lot, or leave from an empty slot
    Refused(LotError),
    Status(Vec<(SlotNumber, Vehicle)>),
    Count(usize),
    Registrations(Vec<String>),
    Slots(Vec<SlotNumber>),
    Slot(Option<SlotNumber>),
    Exit,
}

/// The dispatcher's state: no lot until `create_parking_lot` has run
#[derive(Debug, Default)]
pub enum Session {
    #[default]
    Uninitialized,
    Active(ParkingLot),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current lot, if one has been created
    pub fn lot(&self) -> Option<&ParkingLot> {
        match self {
            Self::Uninitialized => None,
            Self::Active(lot) => Some(lot),
        }
    }

    /// Parse and run one input line
    ///
    /// Returns `None` for a blank line. The lot check runs before argument
    /// parsing, so `park` without arguments on a fresh session reports
    /// [`CommandError::NotCreated`].
    pub fn dispatch(&mut self, line: &str) -> Option<Result<Response, CommandError>> {
        let (name, args) = tokenize(line)?;
        let result = name
            .parse::<CommandKind>()
            .and_then(|kind| {
                if kind.needs_lot() && self.lot().is_none() {
                    return Err(CommandError::NotCreated);
                }
                Command::from_args(kind, &args)
            })
            .and_then(|command| self.execute(command));

        if let Err(e) = &result {
            warn!(line, error = %e, "command rejected");
        }
        Some(result)
    }

    /// The current lot, or `NotCreated`
    fn lot_mut(&mut self) -> Result<&mut ParkingLot, CommandError> {
        match self {
            Self::Uninitialized => Err(CommandError::NotCreated),
            Self::Active(lot) => Ok(lot),
        }
    }

    /// Run a parsed command
    pub fn execute(&mut self, command: Command) -> Result<Response, CommandError> {
        debug!(?command, "dispatch");

        let response = match command {
            Command::CreateParkingLot { capacity } => {
                *self = Self::Active(ParkingLot::new(capacity));
                Response::Created { capacity }
            }
            Command::Exit => Response::Exit,
            Command::Park(vehicle) => match self.lot_mut()?.park(vehicle) {
                Ok(slot) => Response::Parked { slot },
                Err(e) => Response::Refused(e),
            },
            Command::Leave { slot } => match self.lot_mut()?.leave(slot) {
                Ok(_) => Response::Freed { slot },
                Err(e) => Response::Refused(e),
            },
            Command::Status => Response::Status(
                self.lot_mut()?
                    .status()
                    .map(|(slot, vehicle)| (slot, vehicle.clone()))
                    .collect(),
            ),
            Command::TypeOfVehicles { vehicle_type } => {
                Response::Count(self.lot_mut()?.count_by_type(&vehicle_type))
            }
            Command::RegistrationNumbersForColour { color } => Response::Registrations(
                self.lot_mut()?
                    .registrations_by_color(&color)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ),
            Command::SlotNumbersForColour { color } => {
                Response::Slots(self.lot_mut()?.slots_by_color(&color))
            }
            Command::SlotNumberForRegistration {
                registration_number,
            } => Response::Slot(self.lot_mut()?.slot_by_registration(&registration_number)),
        };
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, line: &str) -> Result<Response, CommandError> {
        session.dispatch(line).expect("non-blank line")
    }

    #[test]
    fn test_blank_line_is_skipped() {
        let mut session = Session::new();
        assert!(session.dispatch("").is_none());
        assert!(session.dispatch(" \t ").is_none());
    }

    #[test]
    fn test_requires_lot() {
        let mut session = Session::new();
        assert_eq!(run(&mut session, "status"), Err(CommandError::NotCreated));
        // Lot check comes before the argument check
        assert_eq!(run(&mut session, "park"), Err(CommandError::NotCreated));
        assert_eq!(run(&mut session, "leave x"), Err(CommandError::NotCreated));
        assert_eq!(run(&mut session, "exit"), Ok(Response::Exit));
    }

    #[test]
    fn test_example_scenario() {
        let mut session = Session::new();
        assert_eq!(
            run(&mut session, "create_parking_lot 2"),
            Ok(Response::Created { capacity: 2 })
        );
        assert_eq!(
            run(&mut session, "park KA-01 White Car"),
            Ok(Response::Parked { slot: 1 })
        );
        assert_eq!(
            run(&mut session, "park KA-02 Black Car"),
            Ok(Response::Parked { slot: 2 })
        );
        assert_eq!(
            run(&mut session, "park KA-03 Red Car"),
            Ok(Response::Refused(LotError::Full))
        );
        assert_eq!(run(&mut session, "leave 1"), Ok(Response::Freed { slot: 1 }));
        assert_eq!(
            run(&mut session, "park KA-03 Red Car"),
            Ok(Response::Parked { slot: 1 })
        );
    }

    #[test]
    fn test_recreate_discards_state() {
        let mut session = Session::new();
        run(&mut session, "create_parking_lot 1").unwrap();
        run(&mut session, "park KA-01 White Car").unwrap();
        run(&mut session, "create_parking_lot 3").unwrap();

        let lot = session.lot().unwrap();
        assert_eq!(lot.capacity(), 3);
        assert!(lot.is_empty());
    }

    #[test]
    fn test_queries() {
        let mut session = Session::new();
        run(&mut session, "create_parking_lot 4").unwrap();
        run(&mut session, "park KA-01 White Car").unwrap();
        run(&mut session, "park KA-02 Black Bike").unwrap();
        run(&mut session, "park KA-03 white car").unwrap();

        assert_eq!(
            run(&mut session, "type_of_vehicles CAR"),
            Ok(Response::Count(2))
        );
        assert_eq!(
            run(&mut session, "registration_numbers_for_vehicles_with_colour WHITE"),
            Ok(Response::Registrations(vec![
                "KA-01".to_string(),
                "KA-03".to_string()
            ]))
        );
        assert_eq!(
            run(&mut session, "slot_numbers_for_vehicles_with_colour black"),
            Ok(Response::Slots(vec![2]))
        );
        assert_eq!(
            run(&mut session, "slot_number_for_registration_number ka-03"),
            Ok(Response::Slot(Some(3)))
        );
        assert_eq!(
            run(&mut session, "slot_number_for_registration_number KA-99"),
            Ok(Response::Slot(None))
        );
    }

    #[test]
    fn test_leave_empty_slot() {
        let mut session = Session::new();
        run(&mut session, "create_parking_lot 2").unwrap();
        assert_eq!(
            run(&mut session, "leave 2"),
            Ok(Response::Refused(LotError::AlreadyEmpty(2)))
        );
        assert_eq!(
            run(&mut session, "leave 40"),
            Ok(Response::Refused(LotError::AlreadyEmpty(40)))
        );
        assert_eq!(
            run(&mut session, "leave -1"),
            Ok(Response::Refused(LotError::AlreadyEmpty(-1)))
        );
    }

    #[test]
    fn test_status_snapshot() {
        let mut session = Session::new();
        run(&mut session, "create_parking_lot 3").unwrap();
        assert_eq!(run(&mut session, "status"), Ok(Response::Status(vec![])));

        run(&mut session, "park KA-01 White Car").unwrap();
        assert_eq!(
            run(&mut session, "status"),
            Ok(Response::Status(vec![(
                1,
                Vehicle::new("KA-01", "White", "Car")
            )]))
        );
    }
}
