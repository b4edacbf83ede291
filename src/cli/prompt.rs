//! Line-based prompts for the interactive menu
//!
//! Every prompt returns `Ok(None)` once input is exhausted so the menu can
//! shut down cleanly when stdin is closed.

use std::io::{BufRead, Write};

use crate::error::{BreadError, BreadResult};

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for everything the menu prints
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter, returning its writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `prompt` and read one trimmed line
    pub fn read_line(&mut self, prompt: &str) -> BreadResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the answer is an integer in `min..=max`
    pub fn choose(&mut self, prompt: &str, min: i64, max: i64) -> BreadResult<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match parse_in_range(&line, min, max) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected choice");
                    writeln!(self.output, "Please only type digits.")?;
                    writeln!(self.output, "Valid input are digits from {} to {}.", min, max)?;
                }
            }
        }
    }

    /// Ask until the answer is an integer, positive or negative
    pub fn integer(&mut self, prompt: &str) -> BreadResult<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match parse_integer(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected quantity");
                    writeln!(self.output, "Please only type digits.")?;
                }
            }
        }
    }

    /// Ask a yes/no question; a blank answer takes `default`
    pub fn confirm(&mut self, prompt: &str, default: bool) -> BreadResult<Option<bool>> {
        let Some(line) = self.read_line(prompt)? else {
            return Ok(None);
        };

        Ok(Some(match line.to_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        }))
    }
}

/// Parse a whole-number answer
pub fn parse_integer(input: &str) -> BreadResult<i64> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| BreadError::Validation(format!("'{}' is not a whole number", input)))
}

/// Parse a whole-number answer that must fall in `min..=max`
pub fn parse_in_range(input: &str, min: i64, max: i64) -> BreadResult<i64> {
    let value = parse_integer(input)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(BreadError::Validation(format!(
            "{} is outside {}..={}",
            value, min, max
        )))
    }
}
