use std::time::Duration;

use crate::game::question::Question;
use crate::game::score::ScoreHistory;

pub mod chart;
#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerRetry,
    DifficultyDefaulted,
    Farewell,
    FinalScore { score: u32, rounds: usize },
    GuessCorrect,
    GuessIncorrect(String),
    QuestionBegins(usize, Question),
    ScoreChart(ScoreHistory, u32),
    SessionAborted(String),
    TimeRemaining(Duration),
    TimeUp,
}

pub trait GameOutput {
    fn say(&mut self, message: &Message);
}
