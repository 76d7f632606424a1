use anyhow::Result;
use rand::Rng;
use tracing::{info, warn};

pub mod clock;
pub mod difficulty;
pub mod question;
pub mod quiz;
pub mod score;
pub mod settings;


use crate::dataset::Dataset;
use crate::error::QuizError;
use crate::game::clock::Clock;
use crate::game::difficulty::choose_difficulty;
use crate::game::quiz::{Quiz, QuizSummary};
use crate::game::settings::Settings;
use crate::input::{GameInput, Prompt};
use crate::output::{GameOutput, Message};

pub struct Game<I, O, C, R> {
    dataset: Dataset,
    settings: Settings,
    input: I,
    output: O,
    clock: C,
    rng: R,
}

impl<I: GameInput, O: GameOutput, C: Clock, R: Rng> Game<I, O, C, R> {
    pub fn new(dataset: Dataset, settings: Settings, input: I, output: O, clock: C, rng: R) -> Self {
        Game {
            dataset,
            settings,
            input,
            output,
            clock,
            rng,
        }
    }

    /// Plays quiz sessions until the player declines to retry.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.play_session()?;
            let retry = self.input.read_line(&Prompt::Retry)?;
            if retry.trim().to_lowercase() == "no" {
                self.output.say(&Message::Farewell);
                return Ok(());
            }
            info!("Restarting quiz");
        }
    }

    /// Returns `None` when the session had to be abandoned.
    pub fn play_session(&mut self) -> Result<Option<QuizSummary>> {
        let label = self.input.read_line(&Prompt::Difficulty)?;
        let choice = choose_difficulty(&label, &self.settings);
        if choice.defaulted {
            self.output.say(&Message::DifficultyDefaulted);
        }
        info!("Starting {} quiz", choice.difficulty);

        let quiz = Quiz::new(&self.dataset, choice, &self.settings, &self.clock);
        let summary = match quiz.play(
            &mut self.input,
            &mut self.output,
            &self.clock,
            &mut self.rng,
        ) {
            Ok(summary) => summary,
            Err(e) => {
                let is_empty_selection = matches!(
                    e.downcast_ref::<QuizError>(),
                    Some(QuizError::EmptySelection { .. })
                );
                if !is_empty_selection {
                    return Err(e);
                }
                warn!("Quiz session aborted: {}", e);
                self.output.say(&Message::SessionAborted(e.to_string()));
                return Ok(None);
            }
        };

        info!(
            "Quiz over with {}/{} points (timed out: {})",
            summary.score, summary.rounds_played, summary.timed_out
        );
        self.output.say(&Message::FinalScore {
            score: summary.score,
            rounds: summary.rounds_played,
        });
        self.output.say(&Message::ScoreChart(
            summary.history.clone(),
            self.settings.rounds as u32,
        ));
        self.input.read_line(&Prompt::DismissChart)?;
        Ok(Some(summary))
    }
}
