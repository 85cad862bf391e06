// ─────────────────────────────────────────────────────────────────────
// PSCI Helpers — Gauss-Legendre Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gauss-Legendre abscissas and weights on an arbitrary interval.
//!
//! Roots of P_n are found by Newton-Raphson from the asymptotic seed
//!   z_0 = cos(pi (j + 3/4) / (n + 1/2)),
//! with P_n and P_{n-1} from the three-term recurrence and
//!   P_n'(z) = n (P_{n-1}(z) - z P_n(z)) / (1 - z^2).
//! Roots are symmetric about 0, so only ceil(n/2) are solved for and the
//! rest mirrored. Each root maps to the interval as xmid -/+ z dx/2 with
//! weight dx / ((1 - z^2) P_n'(z)^2).
//!
//! An n-point rule integrates polynomials of degree <= 2n - 1 exactly.

use ndarray::Array1;
use psci_types::config::NewtonConfig;
use psci_types::error::{PsciError, PsciResult};
use std::f64::consts::PI;

/// Quadrature rule on [a, b]: `integral f ≈ sum(w_i f(x_i))`.
#[derive(Debug, Clone)]
pub struct QuadratureRule {
    /// Abscissas, strictly increasing.
    pub x: Array1<f64>,
    /// Weights, all positive, summing to b - a.
    pub w: Array1<f64>,
    /// Lower bound of the interval.
    pub a: f64,
    /// Upper bound of the interval.
    pub b: f64,
}

impl QuadratureRule {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for rules built by [`gauss_legendre`], which need n > 2.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Apply the rule to `f`.
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        self.x
            .iter()
            .zip(self.w.iter())
            .map(|(&xi, &wi)| wi * f(xi))
            .sum()
    }

    /// Affine map of the rule onto [a, b].
    pub fn reseat(&self, a: f64, b: f64) -> Self {
        let scaling = (b - a) / (self.b - self.a);
        let mid_old = 0.5 * (self.a + self.b);
        let mid_new = 0.5 * (a + b);
        QuadratureRule {
            x: self.x.mapv(|xi| scaling * (xi - mid_old) + mid_new),
            w: self.w.mapv(|wi| wi * scaling),
            a,
            b,
        }
    }

    /// Split into `(abscissas, weights)`.
    pub fn into_parts(self) -> (Array1<f64>, Array1<f64>) {
        (self.x, self.w)
    }
}

/// n-point Gauss-Legendre rule on [x1, x2] with default Newton controls.
///
/// Requires finite `x1 < x2` and `n > 2`. Bad arguments are
/// `InvalidArgument`. A width `x2 - x1` that overflows to infinity passes
/// those checks and is reported as `NumericalFailure` by the final
/// finiteness check on abscissas and weights.
pub fn gauss_legendre(x1: f64, x2: f64, n: usize) -> PsciResult<QuadratureRule> {
    gauss_legendre_with(x1, x2, n, &NewtonConfig::default())
}

/// n-point Gauss-Legendre rule on [x1, x2] with explicit Newton controls.
pub fn gauss_legendre_with(
    x1: f64,
    x2: f64,
    n: usize,
    config: &NewtonConfig,
) -> PsciResult<QuadratureRule> {
    if !x1.is_finite() {
        return Err(PsciError::InvalidArgument(format!(
            "x1 must be real and finite, got {x1}"
        )));
    }
    if !x2.is_finite() {
        return Err(PsciError::InvalidArgument(format!(
            "x2 must be real and finite, got {x2}"
        )));
    }
    if n <= 2 {
        return Err(PsciError::InvalidArgument(format!(
            "number of nodes must be > 2, got {n}"
        )));
    }
    if x2 <= x1 {
        return Err(PsciError::InvalidArgument(format!(
            "interval must have positive width, got [{x1}, {x2}]"
        )));
    }
    config.validate()?;

    let m = n.div_ceil(2);
    let xmid = 0.5 * (x1 + x2);
    let dx = x2 - x1;
    let mut x = Array1::from_elem(n, f64::NAN);
    let mut w = Array1::from_elem(n, f64::NAN);

    for j in 0..m {
        let (z, pp) = legendre_root(n, j, config)?;
        x[j] = xmid - z * dx / 2.0;
        x[n - 1 - j] = xmid + z * dx / 2.0;
        w[j] = dx / ((1.0 - z * z) * pp * pp);
        w[n - 1 - j] = w[j];
    }

    if let Some(i) = x.iter().position(|v| !v.is_finite()) {
        log::warn!("abscissa {i} of {n}-point Gauss-Legendre rule is not finite");
        return Err(PsciError::NumericalFailure {
            iterations: 0,
            message: format!("abscissa {i} of {n}-point rule is not finite"),
        });
    }
    if let Some(i) = w.iter().position(|v| !v.is_finite()) {
        log::warn!("weight {i} of {n}-point Gauss-Legendre rule is not finite");
        return Err(PsciError::NumericalFailure {
            iterations: 0,
            message: format!("weight {i} of {n}-point rule is not finite"),
        });
    }

    Ok(QuadratureRule {
        x,
        w,
        a: x1,
        b: x2,
    })
}

/// (P_n(z), P_{n-1}(z)) by upward recurrence.
#[inline]
fn legendre_pair(n: usize, z: f64) -> (f64, f64) {
    let mut p_prev = 1.0;
    let mut p = z;
    for k in 2..=n {
        let kf = k as f64;
        let p_next = ((2.0 * kf - 1.0) * z * p - (kf - 1.0) * p_prev) / kf;
        p_prev = p;
        p = p_next;
    }
    (p, p_prev)
}

/// Newton-polish the j-th largest root of P_n; returns (root, P_n'(root)).
fn legendre_root(n: usize, j: usize, config: &NewtonConfig) -> PsciResult<(f64, f64)> {
    let nf = n as f64;
    let mut z = (PI * (j as f64 + 0.75) / (nf + 0.5)).cos();

    for iter in 1..=config.max_iters {
        let (pn, pnm1) = legendre_pair(n, z);
        let pp = nf * (pnm1 - z * pn) / (1.0 - z * z);
        let z_old = z;
        z = z_old - pn / pp;

        if !z.is_finite() {
            log::warn!("Newton step for root {j} of P_{n} left the reals at iteration {iter}");
            return Err(PsciError::NumericalFailure {
                iterations: iter,
                message: format!("non-finite iterate for root {j} of P_{n}"),
            });
        }
        if (z - z_old).abs() < config.tol {
            log::debug!("root {j} of P_{n}: z = {z:.17} after {iter} iterations");
            return Ok((z, pp));
        }
    }

    log::warn!(
        "root {j} of P_{n} did not converge to {:e} in {} iterations",
        config.tol,
        config.max_iters
    );
    Err(PsciError::NumericalFailure {
        iterations: config.max_iters,
        message: format!("root {j} of P_{n} did not converge"),
    })
}
