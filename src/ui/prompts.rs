//! ui::prompts
//!
//! Line-oriented prompts over any reader and writer.
//!
//! # Design
//!
//! The prompter never validates. It returns the line as typed (minus the
//! line terminator) and leaves trimming and emptiness checks to the caller.
//! End of input is reported as [`PromptError::Cancelled`] so the menu can
//! shut down cleanly. In quiet mode the prompt text is not written.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Reads answers from `input`, writing prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    show_prompts: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, show_prompts: bool) -> Self {
        Self {
            input,
            output,
            show_prompts,
        }
    }

    /// Prompt for one line of text.
    pub fn input(&mut self, message: &str) -> Result<String, PromptError> {
        if self.show_prompts {
            write!(self.output, "{}", message)?;
            self.output.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Cancelled);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Write text that is only shown alongside prompts (banners, menus).
    pub fn chrome(&mut self, text: &str) -> Result<(), PromptError> {
        if self.show_prompts {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }

    /// Write a status line. Always shown.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Give back the writer, e.g. to inspect captured output in tests.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_without_terminator() {
        let mut prompter = Prompter::new("first\r\nsecond\n".as_bytes(), Vec::new(), true);
        assert_eq!(prompter.input("> ").unwrap(), "first");
        assert_eq!(prompter.input("> ").unwrap(), "second");
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "> > ");
    }

    #[test]
    fn eof_is_cancelled() {
        let mut prompter = Prompter::new("".as_bytes(), Vec::new(), true);
        assert!(matches!(prompter.input("> "), Err(PromptError::Cancelled)));
    }

    #[test]
    fn blank_line_is_not_eof() {
        let mut prompter = Prompter::new("\n".as_bytes(), Vec::new(), true);
        assert_eq!(prompter.input("> ").unwrap(), "");
    }

    #[test]
    fn quiet_hides_prompts_and_chrome() {
        let mut prompter = Prompter::new("x\n".as_bytes(), Vec::new(), false);
        prompter.chrome("=== Menu ===").unwrap();
        prompter.input("> ").unwrap();
        prompter.say("status").unwrap();
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "status\n");
    }
}
