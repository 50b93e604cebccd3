use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("event feed error: {0}")]
    EventFeed(String),
    #[error("commit detail error: {0}")]
    CommitDetail(String),
    #[error("unknown file status '{status}' for {filename}")]
    UnknownFileStatus { status: String, filename: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
