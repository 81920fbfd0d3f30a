//! Line-oriented command loop

use crate::error::{CliError, CommandError};
use crate::output::OutputFormatter;
use crate::session::{Response, Session};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Read commands from `input` until `exit` or end of input
///
/// Rejected commands, including lines that are not valid UTF-8, are reported
/// on `output` and never end the loop. Only IO failures are returned as errors.
pub fn run<R: BufRead, W: Write>(mut input: R, output: W, prompts: bool) -> Result<(), CliError> {
    let mut formatter = OutputFormatter::new(output, prompts);
    let mut session = Session::new();
    let mut buf = Vec::new();

    formatter.print_banner()?;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let result = match std::str::from_utf8(&buf) {
            Ok(line) => match session.dispatch(line) {
                Some(result) => result,
                None => continue,
            },
            Err(e) => {
                warn!(error = %e, "undecodable line");
                Err(CommandError::NotUtf8)
            }
        };

        formatter.print_result(&result)?;
        if matches!(result, Ok(Response::Exit)) {
            info!("exit requested");
            return Ok(());
        }
        formatter.print_prompt()?;
    }

    info!("end of input");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        run_bytes(script.as_bytes())
    }

    fn run_bytes(script: &[u8]) -> String {
        let mut out = Vec::new();
        run(script, &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_example_scenario() {
        let out = run_script(
            "create_parking_lot 2\n\
             park KA-01 White Car\n\
             park KA-02 Black Car\n\
             park KA-03 Red Car\n\
             leave 1\n\
             park KA-03 Red Car\n",
        );
        assert_eq!(
            out,
            "Created a parking lot with 2 slots\n\
             Allocated slot number: 1\n\
             Allocated slot number: 2\n\
             Sorry, parking lot is full\n\
             Slot number 1 is free\n\
             Allocated slot number: 1\n"
        );
    }

    #[test]
    fn test_exit_stops_reading() {
        let out = run_script("create_parking_lot 1\nexit\npark KA-01 White Car\n");
        assert_eq!(
            out,
            "Created a parking lot with 1 slots\nExiting the Parking System. Goodbye!\n"
        );
    }

    #[test]
    fn test_errors_do_not_stop_loop() {
        let out = run_script(
            "status\n\
             \n\
             bogus\n\
             create_parking_lot two\n\
             create_parking_lot 1\n\
             leave\n\
             leave 5\n\
             status\n",
        );
        assert_eq!(
            out,
            "Parking lot not created yet.\n\
             Invalid command. Please try again.\n\
             Error: invalid number 'two' for capacity\n\
             Created a parking lot with 1 slots\n\
             Usage: leave <slot_number>\n\
             Slot number 5 is already empty\n\
             Parking lot is empty.\n"
        );
    }

    #[test]
    fn test_leave_negative_slot() {
        let out = run_script("create_parking_lot 2\nleave -1\nleave 0\n");
        assert_eq!(
            out,
            "Created a parking lot with 2 slots\n\
             Slot number -1 is already empty\n\
             Slot number 0 is already empty\n"
        );
    }

    #[test]
    fn test_invalid_utf8_line_is_reported() {
        let out = run_bytes(b"create_parking_lot 2\npark \xff\xfe White Car\nstatus\n");
        assert_eq!(
            out,
            "Created a parking lot with 2 slots\n\
             Error: command line is not valid UTF-8\n\
             Parking lot is empty.\n"
        );
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let out = run_script("create_parking_lot 1\r\npark KA-01 White Car");
        assert_eq!(
            out,
            "Created a parking lot with 1 slots\nAllocated slot number: 1\n"
        );
    }

    #[test]
    fn test_empty_colour_query_prints_empty_line() {
        let out = run_script(
            "create_parking_lot 1\n\
             registration_numbers_for_vehicles_with_colour Red\n\
             slot_numbers_for_vehicles_with_colour Red\n",
        );
        assert_eq!(out, "Created a parking lot with 1 slots\n\n\n");
    }

    #[test]
    fn test_prompts_between_commands() {
        let mut out = Vec::new();
        run("create_parking_lot 1\n".as_bytes(), &mut out, true).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Welcome to Parking System!");
        assert_eq!(lines[2], "Created a parking lot with 1 slots");
        assert_eq!(lines[3], "Enter the next command or type 'exit' to quit:");
    }
}
