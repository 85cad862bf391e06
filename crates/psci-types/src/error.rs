// ─────────────────────────────────────────────────────────────────────
// PSCI Helpers — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PsciError {
    /// Caller broke a precondition; raised before any computation starts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Solver ran but produced an unusable result.
    #[error("Numerical failure after {iterations} iterations: {message}")]
    NumericalFailure { iterations: usize, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PsciResult<T> = Result<T, PsciError>;
