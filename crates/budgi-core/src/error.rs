//! Error types for Budgi
//!
//! The engine itself is total and never fails; errors only arise at the
//! snapshot boundary when reading exported store data.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
