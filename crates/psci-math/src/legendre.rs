// ─────────────────────────────────────────────────────────────────────
// PSCI Helpers — Legendre Polynomials
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ordinary Legendre polynomials P_n(x).
//!
//! Degrees up to [`EXPLICIT_MAX_DEGREE`] use expanded closed forms
//! (Horner in x²), which beat the recurrence in inner loops. Higher
//! degrees fall back to the three-term recurrence
//!   P_0 = 1, P_1 = x, k P_k = (2k - 1) x P_{k-1} - (k - 1) P_{k-2}.
//!
//! [`legendre`] and [`legendre_array`] do no input checking. Use
//! [`try_legendre`] when the degree or abscissa come from untrusted input.

use ndarray::{Array, ArrayBase, Data, Dimension};
use psci_types::error::{PsciError, PsciResult};

/// Highest degree served by a closed-form expression.
pub const EXPLICIT_MAX_DEGREE: usize = 12;

/// Evaluate P_n(x).
#[inline]
pub fn legendre(n: usize, x: f64) -> f64 {
    let x2 = x * x;
    match n {
        0 => 1.0,
        1 => x,
        2 => 0.5 * (3.0 * x2 - 1.0),
        3 => 0.5 * x * (5.0 * x2 - 3.0),
        4 => (35.0 * x2 * x2 - 30.0 * x2 + 3.0) / 8.0,
        5 => x * ((63.0 * x2 - 70.0) * x2 + 15.0) / 8.0,
        6 => (((231.0 * x2 - 315.0) * x2 + 105.0) * x2 - 5.0) / 16.0,
        7 => x * (((429.0 * x2 - 693.0) * x2 + 315.0) * x2 - 35.0) / 16.0,
        8 => ((((6435.0 * x2 - 12012.0) * x2 + 6930.0) * x2 - 1260.0) * x2 + 35.0) / 128.0,
        9 => {
            x * ((((12155.0 * x2 - 25740.0) * x2 + 18018.0) * x2 - 4620.0) * x2 + 315.0) / 128.0
        }
        10 => {
            (((((46189.0 * x2 - 109395.0) * x2 + 90090.0) * x2 - 30030.0) * x2 + 3465.0) * x2
                - 63.0)
                / 256.0
        }
        11 => {
            x * (((((88179.0 * x2 - 230945.0) * x2 + 218790.0) * x2 - 90090.0) * x2 + 15015.0)
                * x2
                - 693.0)
                / 256.0
        }
        12 => {
            ((((((676039.0 * x2 - 1939938.0) * x2 + 2078505.0) * x2 - 1021020.0) * x2
                + 225225.0)
                * x2
                - 18018.0)
                * x2
                + 231.0)
                / 1024.0
        }
        _ => legendre_recurrence(n, x),
    }
}

/// Evaluate P_n(x) with the three-term recurrence, any degree.
pub fn legendre_recurrence(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let mut p_prev = 1.0;
    let mut p = x;
    for k in 2..=n {
        let kf = k as f64;
        let p_next = ((2.0 * kf - 1.0) * x * p - (kf - 1.0) * p_prev) / kf;
        p_prev = p;
        p = p_next;
    }
    p
}

/// Elementwise P_n over an array of any shape.
pub fn legendre_array<S, D>(n: usize, x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|xi| legendre(n, xi))
}

/// Checked evaluation: rejects negative degrees and non-finite abscissas.
pub fn try_legendre(n: i64, x: f64) -> PsciResult<f64> {
    let degree = usize::try_from(n).map_err(|_| {
        PsciError::InvalidArgument(format!("Legendre degree must be >= 0, got {n}"))
    })?;
    if !x.is_finite() {
        return Err(PsciError::InvalidArgument(format!(
            "Legendre abscissa must be finite, got {x}"
        )));
    }
    Ok(legendre(degree, x))
}
