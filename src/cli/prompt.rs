//! Interactive yes/no confirmation.

use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// Asks `question` on stdout and reads the answer from stdin.
///
/// An empty answer picks `default`.
pub fn prompt_yes_no(question: &str, default: bool) -> AppResult<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ask(&mut stdin.lock(), &mut stdout.lock(), question, default)
}

/// Same as [`prompt_yes_no`] over arbitrary streams.
///
/// Unrecognized answers repeat the question. End of input counts as `default`.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> AppResult<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };

    loop {
        write!(output, "{} {} ", question, hint)?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(default);
        }

        match answer.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer yes or no.")?,
        }
    }
}
