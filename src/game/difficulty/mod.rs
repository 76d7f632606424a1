use std::fmt;
use std::time::Duration;

use crate::game::settings::Settings;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Difficulty {
    Easy,
    Difficult,
}

impl Difficulty {
    pub fn parse(label: &str) -> Option<Difficulty> {
        match label.trim().to_lowercase().as_ref() {
            "easy" => Some(Difficulty::Easy),
            "difficult" => Some(Difficulty::Difficult),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Difficult => write!(f, "Difficult"),
        }
    }
}

/// Release years eligible for questions. The pivot year itself is never eligible.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum YearFilter {
    After(u32),
    Before(u32),
}

impl YearFilter {
    pub fn accepts(&self, year: u32) -> bool {
        match *self {
            YearFilter::After(pivot) => year > pivot,
            YearFilter::Before(pivot) => year < pivot,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DifficultyChoice {
    pub difficulty: Difficulty,
    pub year_filter: YearFilter,
    pub time_budget: Duration,
    pub defaulted: bool,
}

impl DifficultyChoice {
    pub fn new(difficulty: Difficulty, settings: &Settings) -> Self {
        let (year_filter, time_budget) = match difficulty {
            Difficulty::Easy => (
                YearFilter::After(settings.pivot_year),
                settings.easy_time_limit,
            ),
            Difficulty::Difficult => (
                YearFilter::Before(settings.pivot_year),
                settings.difficult_time_limit,
            ),
        };
        DifficultyChoice {
            difficulty,
            year_filter,
            time_budget,
            defaulted: false,
        }
    }
}

/// Unrecognized labels fall back to easy and are flagged as `defaulted`.
pub fn choose_difficulty(label: &str, settings: &Settings) -> DifficultyChoice {
    match Difficulty::parse(label) {
        Some(difficulty) => DifficultyChoice::new(difficulty, settings),
        None => DifficultyChoice {
            defaulted: true,
            ..DifficultyChoice::new(Difficulty::Easy, settings)
        },
    }
}
