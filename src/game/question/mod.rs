use anyhow::Result;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::dataset::{Dataset, MovieRecord};
use crate::error::QuizError;
use crate::game::difficulty::YearFilter;


#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub const ALL: [Choice; 4] = [Choice::A, Choice::B, Choice::C, Choice::D];

    pub fn parse(input: &str) -> Option<Choice> {
        match input.trim().to_uppercase().as_ref() {
            "A" => Some(Choice::A),
            "B" => Some(Choice::B),
            "C" => Some(Choice::C),
            "D" => Some(Choice::D),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        };
        write!(f, "{}", label)
    }
}

const DISTRACTOR_COUNT: usize = Choice::ALL.len() - 1;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub movie: MovieRecord,
    pub answers: Vec<String>,
}

impl Question {
    pub fn generate<R: Rng + ?Sized>(
        dataset: &Dataset,
        year_filter: &YearFilter,
        rng: &mut R,
    ) -> Result<Question> {
        let (prompt, movie) = generate_question(dataset, year_filter, rng)?;
        let answers = generate_answers(dataset, movie, rng)?;
        Ok(Question {
            prompt,
            movie: movie.clone(),
            answers,
        })
    }

    pub fn answer(&self, choice: Choice) -> Option<&str> {
        self.answers.get(choice.index()).map(String::as_str)
    }

    pub fn labeled_answers(&self) -> impl Iterator<Item = (Choice, &str)> {
        Choice::ALL
            .iter()
            .copied()
            .zip(self.answers.iter().map(String::as_str))
    }

    pub fn is_correct(&self, choice: Choice) -> bool {
        self.answer(choice) == Some(self.movie.title.as_str())
    }
}

pub fn describe(movie: &MovieRecord) -> String {
    format!(
        "What is the title of the film released in {} directed by {}, starring {}, produced in {} and belonging to the genre {}?",
        movie.year, movie.director, movie.actor, movie.country, movie.genres
    )
}

/// Picks a movie from the difficulty bucket and describes it.
pub fn generate_question<'a, R: Rng + ?Sized>(
    dataset: &'a Dataset,
    year_filter: &YearFilter,
    rng: &mut R,
) -> Result<(String, &'a MovieRecord)> {
    let bucket: Vec<&MovieRecord> = dataset
        .records()
        .iter()
        .filter(|m| year_filter.accepts(m.year))
        .collect();
    let movie = *bucket.choose(rng).ok_or(QuizError::EmptySelection {
        needed: 1,
        available: 0,
    })?;
    Ok((describe(movie), movie))
}

/// Returns the correct title and three distractors, shuffled.
/// Distractors come from the whole dataset, regardless of difficulty.
pub fn generate_answers<R: Rng + ?Sized>(
    dataset: &Dataset,
    correct_movie: &MovieRecord,
    rng: &mut R,
) -> Result<Vec<String>> {
    let candidates: Vec<&str> = dataset
        .records()
        .iter()
        .map(|m| m.title.as_str())
        .filter(|title| *title != correct_movie.title)
        .unique()
        .collect();
    if candidates.len() < DISTRACTOR_COUNT {
        return Err(QuizError::EmptySelection {
            needed: DISTRACTOR_COUNT,
            available: candidates.len(),
        }
        .into());
    }

    let mut answers: Vec<String> = candidates
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .map(|title| title.to_string())
        .collect();
    answers.push(correct_movie.title.clone());
    answers.shuffle(rng);
    Ok(answers)
}
