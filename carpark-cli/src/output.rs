//! Output formatting for command responses

use crate::error::CommandError;
use crate::session::Response;
use itertools::Itertools;
use std::io::{self, Write};

const BANNER: &str = "Welcome to Parking System!";
const FIRST_PROMPT: &str = "Enter a command (e.g., create_parking_lot 6) or type 'exit' to quit:";
const NEXT_PROMPT: &str = "Enter the next command or type 'exit' to quit:";
const STATUS_HEADER: &str = "Slot No.\tRegistration No\tType\tColour";

/// Writes responses, errors and prompts to an output stream
pub struct OutputFormatter<W: Write> {
    out: W,
    prompts: bool,
}

impl<W: Write> OutputFormatter<W> {
    /// Create a formatter; `prompts` enables the banner and per-command prompts
    pub fn new(out: W, prompts: bool) -> Self {
        Self { out, prompts }
    }

    pub fn print_banner(&mut self) -> io::Result<()> {
        if self.prompts {
            writeln!(self.out, "{}", BANNER)?;
            writeln!(self.out, "{}", FIRST_PROMPT)?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn print_prompt(&mut self) -> io::Result<()> {
        if self.prompts {
            writeln!(self.out, "{}", NEXT_PROMPT)?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Print the outcome of one command line
    pub fn print_result(&mut self, result: &Result<Response, CommandError>) -> io::Result<()> {
        let text = match result {
            Ok(response) => format_response(response),
            Err(e) => e.to_string(),
        };
        writeln!(self.out, "{}", text)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render a response as the text shown to the user
pub fn format_response(response: &Response) -> String {
    match response {
        Response::Created { capacity } => format!("Created a parking lot with {} slots", capacity),
        Response::Parked { slot } => format!("Allocated slot number: {}", slot),
        Response::Freed { slot } => format!("Slot number {} is free", slot),
        Response::Refused(e) => e.to_string(),
        Response::Status(rows) if rows.is_empty() => "Parking lot is empty.".to_string(),
        Response::Status(rows) => {
            let body = rows.iter().map(|(slot, v)| {
                format!(
                    "{}\t{}\t{}\t{}",
                    slot,
                    v.registration_number(),
                    v.vehicle_type(),
                    v.color()
                )
            });
            std::iter::once(STATUS_HEADER.to_string()).chain(body).join("\n")
        }
        Response::Count(n) => n.to_string(),
        Response::Registrations(list) => list.iter().join(", "),
        Response::Slots(list) => list.iter().join(", "),
        Response::Slot(Some(slot)) => slot.to_string(),
        Response::Slot(None) => "Not found".to_string(),
        Response::Exit => "Exiting the Parking System. Goodbye!".to_string(),
    }
}
