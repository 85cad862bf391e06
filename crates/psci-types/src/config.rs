// ─────────────────────────────────────────────────────────────────────
// PSCI Helpers — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{NEWTON_MAX_ITERS, NEWTON_TOL};
use crate::error::{PsciError, PsciResult};
use serde::{Deserialize, Serialize};

/// Newton-Raphson controls for the Legendre root finder.
///
/// Either field may be omitted in JSON; missing fields take the defaults
/// (`tol = 1e-14`, `max_iters = 100`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonConfig {
    /// Absolute tolerance on |z_new - z_old|.
    #[serde(default = "default_tol")]
    pub tol: f64,
    /// Iterations allowed per root.
    #[serde(default = "default_max_iters")]
    pub max_iters: usize,
}

fn default_tol() -> f64 {
    NEWTON_TOL
}
fn default_max_iters() -> usize {
    NEWTON_MAX_ITERS
}

impl Default for NewtonConfig {
    fn default() -> Self {
        NewtonConfig {
            tol: default_tol(),
            max_iters: default_max_iters(),
        }
    }
}

impl NewtonConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> PsciResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json(contents: &str) -> PsciResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PsciResult<()> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(PsciError::ConfigError(format!(
                "Newton tolerance must be finite and > 0, got {}",
                self.tol
            )));
        }
        if self.max_iters == 0 {
            return Err(PsciError::ConfigError(
                "Newton iteration cap must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
