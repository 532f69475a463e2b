use std::io::{BufRead, Write};

use crate::utils::error::{AppError, AppResult};

/// Line oriented question/answer over any reader and writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn say(&mut self, line: &str) -> AppResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `question` without a newline and read one answer line. Only the
    /// line terminator is removed from the answer. Bytes that are not UTF-8
    /// become U+FFFD instead of failing the read.
    pub fn ask(&mut self, question: &str) -> AppResult<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(AppError::InputClosed);
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Keep asking until `valid` accepts the answer. `max_attempts` of `None`
    /// never gives up.
    pub fn ask_until(
        &mut self,
        question: &str,
        retry_message: &str,
        max_attempts: Option<u32>,
        valid: impl Fn(&str) -> bool,
    ) -> AppResult<String> {
        let mut attempts = 0u32;
        loop {
            let answer = self.ask(question)?;
            if valid(&answer) {
                return Ok(answer);
            }
            attempts += 1;
            self.say(retry_message)?;
            if let Some(max) = max_attempts {
                if attempts >= max {
                    tracing::warn!(question, attempts, "giving up on input");
                    return Err(AppError::ValidationError(format!(
                        "No valid answer after {} attempts",
                        attempts
                    )));
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
