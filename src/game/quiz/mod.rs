use anyhow::Result;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

use crate::dataset::Dataset;
use crate::game::clock::Clock;
use crate::game::difficulty::DifficultyChoice;
use crate::game::question::{Choice, Question};
use crate::game::score::ScoreHistory;
use crate::game::settings::Settings;
use crate::input::{ask_until, GameInput, Prompt};
use crate::output::{GameOutput, Message};


/// Round numbers start at 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    AwaitingAnswer(usize),
    Scored(usize),
    TimedOut(usize),
    Finished,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuizSummary {
    pub score: u32,
    pub rounds_played: usize,
    pub history: ScoreHistory,
    pub timed_out: bool,
}

/// One play-through: up to `rounds` questions within the difficulty's time budget.
pub struct Quiz<'a> {
    dataset: &'a Dataset,
    choice: DifficultyChoice,
    rounds: usize,
    score: u32,
    history: ScoreHistory,
    rounds_played: usize,
    timed_out: bool,
    started_at: Duration,
    current_phase: Phase,
}

impl<'a> Quiz<'a> {
    pub fn new<C: Clock>(
        dataset: &'a Dataset,
        choice: DifficultyChoice,
        settings: &Settings,
        clock: &C,
    ) -> Self {
        let current_phase = if settings.rounds == 0 {
            Phase::Finished
        } else {
            Phase::AwaitingAnswer(1)
        };
        Quiz {
            dataset,
            choice,
            rounds: settings.rounds,
            score: 0,
            history: ScoreHistory::new(),
            rounds_played: 0,
            timed_out: false,
            started_at: clock.now(),
            current_phase,
        }
    }

    pub fn play<I, O, C, R>(
        mut self,
        input: &mut I,
        output: &mut O,
        clock: &C,
        rng: &mut R,
    ) -> Result<QuizSummary>
    where
        I: GameInput,
        O: GameOutput,
        C: Clock,
        R: Rng + ?Sized,
    {
        while let Phase::AwaitingAnswer(round) = self.current_phase {
            let remaining = self.choice.time_budget.saturating_sub(self.elapsed(clock));
            output.say(&Message::TimeRemaining(remaining));

            let question = Question::generate(self.dataset, &self.choice.year_filter, rng)?;
            output.say(&Message::QuestionBegins(round, question.clone()));

            let choice = ask_until(
                input,
                output,
                Prompt::Answer,
                &Message::AnswerRetry,
                Choice::parse,
            )?;
            self.score_answer(&question, choice, output);
            self.rounds_played = round;
            self.set_current_phase(Phase::Scored(round));
            self.advance(clock, output);
        }

        Ok(QuizSummary {
            score: self.score,
            rounds_played: self.rounds_played,
            history: self.history,
            timed_out: self.timed_out,
        })
    }

    fn elapsed<C: Clock>(&self, clock: &C) -> Duration {
        clock.now().saturating_sub(self.started_at)
    }

    fn score_answer<O: GameOutput>(&mut self, question: &Question, choice: Choice, output: &mut O) {
        if question.is_correct(choice) {
            self.score += 1;
            output.say(&Message::GuessCorrect);
        } else {
            output.say(&Message::GuessIncorrect(question.movie.title.clone()));
        }
        self.history.record(self.score);
    }

    fn set_current_phase(&mut self, phase: Phase) {
        debug!("Entering quiz phase: {:?}", phase);
        self.current_phase = phase;
    }

    fn advance<C: Clock, O: GameOutput>(&mut self, clock: &C, output: &mut O) {
        match self.current_phase {
            Phase::Scored(round) => {
                if self.elapsed(clock) > self.choice.time_budget {
                    self.set_current_phase(Phase::TimedOut(round));
                    self.advance(clock, output);
                } else if round >= self.rounds {
                    self.set_current_phase(Phase::Finished);
                } else {
                    self.set_current_phase(Phase::AwaitingAnswer(round + 1));
                }
            }
            Phase::TimedOut(_) => {
                output.say(&Message::TimeUp);
                self.timed_out = true;
                self.set_current_phase(Phase::Finished);
            }
            Phase::AwaitingAnswer(_) | Phase::Finished => (),
        }
    }
}
