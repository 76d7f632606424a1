use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("not enough movies to build a question (needed {needed}, found {available})")]
    EmptySelection { needed: usize, available: usize },
    #[error("input stream was closed")]
    InputClosed,
}
