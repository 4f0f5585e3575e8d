//! Console prompt helpers shared by the interactive commands.

use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::io::{self, Write};

/// Print a prompt and read one trimmed line. `None` means stdin was
/// closed; the caller decides whether that ends the session.
pub fn read_line(prompt: &str) -> AppResult<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut s = String::new();
    let n = io::stdin().read_line(&mut s)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim().to_string()))
}

/// Ask a yes/no confirmation from the user. Only an explicit affirmative
/// answer confirms; anything else cancels.
pub fn confirm(prompt: &str) -> AppResult<bool> {
    match read_line(&format!("{} [y/N]: ", prompt))? {
        Some(answer) => Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes")),
        None => Ok(false),
    }
}

fn parse_hours(s: &str) -> AppResult<f64> {
    let v: f64 = s
        .parse()
        .map_err(|_| AppError::MalformedInput(format!("not a number: '{}'", s)))?;
    if !v.is_finite() || v < 0.0 {
        return Err(AppError::MalformedInput(format!(
            "hours must be a non-negative number, got '{}'",
            s
        )));
    }
    Ok(v)
}

/// Keep asking until the operator types a non-negative number. The loop
/// is iterative, so a run of invalid answers never grows the stack.
/// `None` means stdin was closed.
pub fn read_hours(prompt: &str) -> AppResult<Option<f64>> {
    loop {
        let Some(answer) = read_line(prompt)? else {
            return Ok(None);
        };
        match parse_hours(&answer) {
            Ok(v) => return Ok(Some(v)),
            Err(_) => messages::warning("Please enter a valid non-negative number."),
        }
    }
}

/// Like [`read_hours`], but a blank answer skips the question.
pub fn read_hours_or_skip(prompt: &str) -> AppResult<Option<f64>> {
    loop {
        let Some(answer) = read_line(prompt)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            return Ok(None);
        }
        match parse_hours(&answer) {
            Ok(v) => return Ok(Some(v)),
            Err(_) => {
                messages::warning("Please enter a valid number or press RETURN to skip.")
            }
        }
    }
}
