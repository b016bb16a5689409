use std::io::{BufRead, Write};

use crate::error::{AppError, AppResult};

/// Prompts the user to choose from a numbered list of options.
///
/// Prints a header naming `label`, the options with 1-based positions, then
/// loops on the range prompt until a valid selection is read: an in-range
/// integer returns the corresponding 0-based index, an out-of-range integer
/// re-prompts silently, and a non-numeric token prints an invalid-input
/// message before re-prompting. Blocks indefinitely on valid input; only a
/// closed input stream ends the loop early.
///
/// Generic over reader and writer so tests can drive it with in-memory
/// buffers.
pub fn prompt_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    options: &[&str],
) -> AppResult<usize> {
    writeln!(output, "\nSelect a {}:", label)?;
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, option)?;
    }

    loop {
        write!(output, "Enter choice (1-{}): ", options.len())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        // Out-of-range integers (including negatives) re-prompt silently;
        // only non-numeric tokens get the invalid-input message.
        match line.trim().parse::<i64>() {
            Ok(choice) if (1..=options.len() as i64).contains(&choice) => {
                return Ok(choice as usize - 1)
            }
            Ok(_) => continue,
            Err(_) => writeln!(output, "Invalid input. Please enter a number.")?,
        }
    }
}
