use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::error::QuizError;
use crate::input::{GameInput, Prompt};

#[derive(Debug)]
pub struct TerminalInput {
    stdin: io::Stdin,
}

impl TerminalInput {
    pub fn new() -> Self {
        TerminalInput { stdin: io::stdin() }
    }
}

impl GameInput for TerminalInput {
    fn read_line(&mut self, prompt: &Prompt) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes_read = self
            .stdin
            .lock()
            .read_line(&mut line)
            .context("Could not read from standard input")?;
        if bytes_read == 0 {
            return Err(QuizError::InputClosed.into());
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_owned())
    }
}
