//! Unified application error type.
//! All modules (store, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Data file error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Operator input
    // ---------------------------
    #[error("Invalid input: {0}")]
    MalformedInput(String),

    // ---------------------------
    // Log file structure
    // ---------------------------
    #[error("Malformed log: {0}")]
    MalformedLog(String),
}

pub type AppResult<T> = Result<T, AppError>;
