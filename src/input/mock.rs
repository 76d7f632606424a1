use anyhow::Result;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use crate::error::QuizError;
use crate::game::clock::MockClock;
use crate::input::{GameInput, Prompt};

/// Replays scripted lines. Optionally advances a clock on every answer, as a slow player would.
#[derive(Clone, Default)]
pub struct MockGameInput {
    lines: Arc<RwLock<VecDeque<String>>>,
    prompts: Arc<RwLock<Vec<Prompt>>>,
    answer_delay: Option<(MockClock, Duration)>,
}

impl MockGameInput {
    pub fn new(lines: &[&str]) -> Self {
        MockGameInput {
            lines: Arc::new(RwLock::new(lines.iter().map(|l| l.to_string()).collect())),
            ..Default::default()
        }
    }

    pub fn with_answer_delay(mut self, clock: &MockClock, delay: Duration) -> Self {
        self.answer_delay = Some((clock.clone(), delay));
        self
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.read().clone()
    }

    pub fn remaining_lines(&self) -> usize {
        self.lines.read().len()
    }
}

impl GameInput for MockGameInput {
    fn read_line(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts.write().push(*prompt);
        if let (Prompt::Answer, Some((clock, delay))) = (prompt, &self.answer_delay) {
            clock.advance(*delay);
        }
        self.lines
            .write()
            .pop_front()
            .ok_or_else(|| QuizError::InputClosed.into())
    }
}
