//! Unified application error type.
//! Every module (db, store, classifier, core, cli) returns AppError so the
//! binary has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Classifier
    // ---------------------------
    #[error("Failed to load model artifacts: {0}")]
    ModelLoad(String),

    #[error("Cannot classify an empty batch of entries")]
    EmptyBatch,

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Too many entries: {given} given, at most {max} allowed")]
    TooManyEntries { given: usize, max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Session / users
    // ---------------------------
    #[error("Not logged in. Run `scope login <ID> --name <NAME>` first")]
    NotAuthenticated,

    #[error("Already logged in as '{0}'. Run `scope logout` first")]
    AlreadyAuthenticated(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    // ---------------------------
    // Config / export
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
