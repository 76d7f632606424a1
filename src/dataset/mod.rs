use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Reader};
use csv::StringRecord;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::error::QuizError;

#[cfg(test)]
mod tests;

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xls", "xlsx", "xlsm", "xlsb", "ods"];

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "movie_title",
    "year",
    "director_name",
    "actor_name",
    "country",
    "genres",
];

lazy_static! {
    static ref YEAR_REGEX: Regex = Regex::new(r"^\+?(\d+)(\.\d*)?$").unwrap();
}

/// Turns `Action|Comedy|Drama` into `action, comedy and drama`.
pub fn format_genres(genres: &str) -> String {
    let genres = genres.to_lowercase();
    let tokens: Vec<&str> = genres.split('|').collect();
    match tokens.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        _ => genres.clone(),
    }
}

/// Anything that is not a non-negative number becomes 0. Decimals are truncated.
pub fn coerce_year(year: &str) -> u32 {
    YEAR_REGEX
        .captures(year.trim())
        .and_then(|captures| captures[1].parse().ok())
        .unwrap_or(0)
}

fn present(field: Option<String>) -> Option<String> {
    field
        .map(|f| f.trim().to_owned())
        .filter(|f| !f.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct RawMovie {
    pub movie_title: Option<String>,
    pub year: Option<String>,
    pub director_name: Option<String>,
    pub actor_name: Option<String>,
    pub country: Option<String>,
    pub genres: Option<String>,
}

impl RawMovie {
    fn clean(self) -> Option<MovieRecord> {
        Some(MovieRecord {
            title: present(self.movie_title)?,
            year: coerce_year(&present(self.year)?),
            director: present(self.director_name)?,
            actor: present(self.actor_name)?,
            country: present(self.country)?,
            genres: format_genres(&present(self.genres)?),
        })
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub year: u32,
    pub director: String,
    pub actor: String,
    pub country: String,
    pub genres: String,
}

#[derive(Debug, Default)]
pub struct Dataset {
    movies: Vec<MovieRecord>,
}

fn is_spreadsheet(source: &Path) -> bool {
    source
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| SPREADSHEET_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn check_columns(headers: &StringRecord) -> Result<()> {
    let missing_columns: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing_columns.is_empty() {
        return Err(QuizError::MissingColumns(missing_columns).into());
    }
    Ok(())
}

impl Dataset {
    /// Spreadsheets are picked by file extension, anything else is read as CSV.
    pub fn open(source: &Path) -> Result<Dataset> {
        if is_spreadsheet(source) {
            return Dataset::from_spreadsheet(source);
        }
        let file = File::open(source).with_context(|| format!("Could not open {:?}", source))?;
        Dataset::from_reader(file)
    }

    /// Reads the first worksheet. Its first row holds the column names.
    pub fn from_spreadsheet(source: &Path) -> Result<Dataset> {
        let mut workbook =
            open_workbook_auto(source).with_context(|| format!("Could not open {:?}", source))?;
        let sheet = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| anyhow!("No worksheet in {:?}", source))?
            .with_context(|| format!("Could not read first worksheet of {:?}", source))?;

        let mut rows = sheet.rows().map(|row| {
            row.iter()
                .map(|cell| cell.to_string())
                .collect::<StringRecord>()
        });
        let mut headers = rows.next().unwrap_or_default();
        headers.trim();
        check_columns(&headers)?;

        let raw_movies = rows.map(|row| row.deserialize::<RawMovie>(Some(&headers)));
        Dataset::from_raw_movies(raw_movies)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        check_columns(&headers)?;

        Dataset::from_raw_movies(csv_reader.deserialize::<RawMovie>())
    }

    fn from_raw_movies<I>(raw_movies: I) -> Result<Dataset>
    where
        I: Iterator<Item = csv::Result<RawMovie>>,
    {
        let mut movies = Vec::new();
        let mut dropped = 0;
        for (index, movie) in raw_movies.enumerate() {
            let raw_movie: RawMovie = movie.with_context(|| format!("Invalid row {}", index + 1))?;
            match raw_movie.clean() {
                Some(movie) => movies.push(movie),
                None => {
                    debug!("Dropping incomplete row {}", index + 1);
                    dropped += 1;
                }
            }
        }

        info!(
            "Loaded {} movies ({} incomplete rows dropped)",
            movies.len(),
            dropped
        );
        Ok(Dataset { movies })
    }

    #[cfg(test)]
    pub fn from_records(movies: Vec<MovieRecord>) -> Dataset {
        Dataset { movies }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
impl MovieRecord {
    pub fn sample(title: &str, year: u32) -> Self {
        MovieRecord {
            title: title.to_owned(),
            year,
            director: format!("director of {}", title),
            actor: format!("star of {}", title),
            country: "USA".to_owned(),
            genres: "comedy and drama".to_owned(),
        }
    }
}
