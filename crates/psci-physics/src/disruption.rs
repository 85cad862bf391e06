// ─────────────────────────────────────────────────────────────────────
// PSCI Helpers — Disruption Threshold
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gravity-regime catastrophic disruption threshold Q*D.
//!
//! Q*D is the specific impact energy that disperses half of the target
//! mass. In the gravity regime it follows a power law in target radius,
//!   Q*D(R) = B (R / 1 m)^b   [J/kg],
//! with (B, b) fitted to Spheral++ runs together with Benz & Asphaug (1999)
//! data (Movshovitz et al. 2014). The target density is folded into B.

use psci_types::constants::{QSTAR_RADIUS_MAX, QSTAR_RADIUS_MIN};
use psci_types::error::{PsciError, PsciResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Target material / power-law fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScalingMethod {
    #[default]
    #[serde(rename = "MKN14_ice")]
    Mkn14Ice,
    #[serde(rename = "MKN14_basalt")]
    Mkn14Basalt,
}

impl ScalingMethod {
    /// Power-law coefficients (B in J/kg, exponent b).
    pub fn coefficients(self) -> (f64, f64) {
        match self {
            ScalingMethod::Mkn14Ice => (0.05, 1.1876),
            ScalingMethod::Mkn14Basalt => (1.48, 0.9893),
        }
    }
}

impl FromStr for ScalingMethod {
    type Err = PsciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MKN14_ice" => Ok(ScalingMethod::Mkn14Ice),
            "MKN14_basalt" => Ok(ScalingMethod::Mkn14Basalt),
            other => Err(PsciError::InvalidArgument(format!(
                "unknown scaling method '{other}', expected MKN14_ice or MKN14_basalt"
            ))),
        }
    }
}

/// Q*D in J/kg for a target of radius `target_radius` metres.
///
/// The power laws are only calibrated for 100 km <= R <= 1000 km; radii
/// outside that range are rejected.
pub fn q_star_d(target_radius: f64, method: ScalingMethod) -> PsciResult<f64> {
    if !target_radius.is_finite() || target_radius <= 0.0 {
        return Err(PsciError::InvalidArgument(format!(
            "target radius must be finite and positive, got {target_radius}"
        )));
    }
    if !(QSTAR_RADIUS_MIN..=QSTAR_RADIUS_MAX).contains(&target_radius) {
        return Err(PsciError::InvalidArgument(format!(
            "target radius {target_radius} m outside calibrated range \
             [{QSTAR_RADIUS_MIN:e}, {QSTAR_RADIUS_MAX:e}] m"
        )));
    }
    let (big_b, b) = method.coefficients();
    Ok(big_b * target_radius.powf(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ice_reference_value() {
        let q = q_star_d(1e5, ScalingMethod::Mkn14Ice).unwrap();
        let expected = 0.05 * 1e5_f64.powf(1.1876);
        assert!((q - expected).abs() <= 1e-12 * expected);
        // ~4.4e4 J/kg for a 100 km icy body.
        assert!(q > 4.0e4 && q < 5.0e4, "Q*D = {q}");
    }

    #[test]
    fn test_basalt_reference_value() {
        let q = q_star_d(5e5, ScalingMethod::Mkn14Basalt).unwrap();
        let expected = 1.48 * 5e5_f64.powf(0.9893);
        assert!((q - expected).abs() <= 1e-12 * expected);
    }

    #[test]
    fn test_default_is_ice() {
        assert_eq!(ScalingMethod::default(), ScalingMethod::Mkn14Ice);
    }

    #[test]
    fn test_rejects_out_of_range_radius() {
        for r in [0.0, -1.0, 9.9e4, 1.01e6, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(q_star_d(r, ScalingMethod::Mkn14Ice), Err(PsciError::InvalidArgument(_))),
                "radius {r} accepted"
            );
        }
    }

    #[test]
    fn test_parse_method_names() {
        assert_eq!(
            "MKN14_basalt".parse::<ScalingMethod>().unwrap(),
            ScalingMethod::Mkn14Basalt
        );
        assert!("BA99".parse::<ScalingMethod>().is_err());
    }
}
