use crate::command::ParseError;
use thiserror::Error;

/// Failure of a single command. None of them stops the interactive loop.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid Entry. Try again.")]
    Unknown(String),
    #[error("Invalid Entry. Usage: {usage}")]
    Usage { usage: &'static str },
    #[error("Invalid Entry. {source}. Usage: {usage}")]
    Parse {
        source: ParseError,
        usage: &'static str,
    },
    #[error("No such {0}")]
    NotFound(Missing),
    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),
}

#[derive(Debug, Error)]
pub enum Missing {
    #[error("student with GitHub account {0}")]
    Student(String),
    #[error("project titled {0}")]
    Project(String),
    #[error("grade for {github} on project {title}")]
    Grade { github: String, title: String },
}
