use anyhow::Result;
use std::fmt;

use crate::output::{GameOutput, Message};

#[cfg(test)]
pub mod mock;
pub mod terminal;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Prompt {
    Difficulty,
    Answer,
    DismissChart,
    Retry,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::Difficulty => write!(f, "Choose your difficulty level (Easy/Difficult): "),
            Prompt::Answer => write!(f, "Your answer: "),
            Prompt::DismissChart => write!(f, "Press Enter to continue..."),
            Prompt::Retry => write!(f, "Do you want to retry? (yes/no): "),
        }
    }
}

pub trait GameInput {
    /// Blocks until a full line is available. Fails once the input is exhausted.
    fn read_line(&mut self, prompt: &Prompt) -> Result<String>;
}

/// Keeps asking until `parse` accepts the input, saying `retry` after every rejection.
pub fn ask_until<I, O, T, F>(
    input: &mut I,
    output: &mut O,
    prompt: Prompt,
    retry: &Message,
    mut parse: F,
) -> Result<T>
where
    I: GameInput,
    O: GameOutput,
    F: FnMut(&str) -> Option<T>,
{
    loop {
        let line = input.read_line(&prompt)?;
        if let Some(value) = parse(&line) {
            return Ok(value);
        }
        output.say(retry);
    }
}
