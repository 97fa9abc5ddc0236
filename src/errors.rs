//! Unified application error type.
//! Every stage of the pipeline (config, slack, core, export) returns AppError,
//! and every error is fatal: it bubbles up to `main`, which reports it and exits.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Remote service
    // ---------------------------
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Slack API error: {0}")]
    Api(String),

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type AppResult<T> = Result<T, AppError>;
