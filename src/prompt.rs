use std::io::{self, BufRead, Write};

pub static DEPARTURE_PROMPT: &str = "Enter departure station ID: ";
pub static ARRIVAL_PROMPT: &str = "Enter arrival station ID: ";
pub static CRITERIA_PROMPT: &str = "Enter sorting criteria: ";

/// Asks for a single query parameter. The line terminator is not part of the
/// answer and end of input gives an empty one.
pub fn read_param<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    match input.lines().next() {
        Some(line) => line,
        None => Ok(String::new()),
    }
}
