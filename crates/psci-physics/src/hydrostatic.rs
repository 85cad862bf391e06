// ─────────────────────────────────────────────────────────────────────
// PSCI Helpers — Hydrostatic Pressure
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pressure inside small, incompressible, hydrostatic planets.
//!
//! Integrates dp/dr = -rho(r) g(r) for piecewise-constant density with
//! p(a) = 0 at the surface and p continuous across the core/mantle
//! boundary. Profile functions take the planet radius to be max(r).
//! Units follow `g`: SI radii (m) and densities (kg/m^3) with
//! [`G_SI`](psci_types::constants::G_SI) give pascals.

use ndarray::{Array1, ArrayView1};
use psci_types::error::{PsciError, PsciResult};
use std::f64::consts::PI;

fn check_positive(name: &str, value: f64) -> PsciResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PsciError::InvalidArgument(format!(
            "{name} must be finite and positive, got {value}"
        )));
    }
    Ok(())
}

/// Validate radii and return the outer radius max(r).
fn outer_radius(r: ArrayView1<'_, f64>) -> PsciResult<f64> {
    if r.is_empty() {
        return Err(PsciError::InvalidArgument(
            "radius array must not be empty".to_string(),
        ));
    }
    if let Some(bad) = r.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(PsciError::InvalidArgument(format!(
            "radii must be finite and >= 0, got {bad}"
        )));
    }
    Ok(r.fold(0.0_f64, |acc, &v| acc.max(v)))
}

/// Central pressure of a uniform planet of radius `radius`: 2pi/3 G rho^2 a^2.
pub fn one_layer_central_pressure(radius: f64, rho: f64, g: f64) -> PsciResult<f64> {
    check_positive("radius", radius)?;
    check_positive("rho", rho)?;
    check_positive("G", g)?;
    Ok(2.0 * PI / 3.0 * g * rho * rho * radius * radius)
}

/// Pressure at each radius in `r` for a uniform planet of radius max(r).
pub fn one_layer_pressure_profile(
    r: ArrayView1<'_, f64>,
    rho: f64,
    g: f64,
) -> PsciResult<Array1<f64>> {
    let a = outer_radius(r)?;
    check_positive("rho", rho)?;
    check_positive("G", g)?;
    let k = 2.0 * PI / 3.0 * g * rho * rho;
    Ok(r.mapv(|ri| k * (a * a - ri * ri)))
}

/// Integration constants (c1, c2) of the two-layer solution.
fn two_layer_constants(a: f64, rc: f64, rhoc: f64, rhom: f64, g: f64) -> (f64, f64) {
    let k = 4.0 * PI / 3.0 * g;
    let c2 = k * (0.5 * rhom * rhom * a * a - rhom * (rhoc - rhom) * rc.powi(3) / a);
    let c1 = k * (0.5 * rhoc * rhoc - 1.5 * rhom * rhom + rhoc * rhom) * rc * rc + c2;
    (c1, c2)
}

fn check_two_layer(a: f64, rc: f64, rhoc: f64, rhom: f64, g: f64) -> PsciResult<()> {
    check_positive("rc", rc)?;
    check_positive("rhoc", rhoc)?;
    check_positive("rhom", rhom)?;
    check_positive("G", g)?;
    if rc >= a {
        return Err(PsciError::InvalidArgument(format!(
            "core radius {rc} must be smaller than planet radius {a}"
        )));
    }
    Ok(())
}

/// Central pressure of a two-layer planet (core `rc`, `rhoc`; mantle `rhom`).
pub fn two_layer_central_pressure(
    radius: f64,
    rc: f64,
    rhoc: f64,
    rhom: f64,
    g: f64,
) -> PsciResult<f64> {
    check_positive("radius", radius)?;
    check_two_layer(radius, rc, rhoc, rhom, g)?;
    let (c1, _) = two_layer_constants(radius, rc, rhoc, rhom, g);
    Ok(c1)
}

/// Pressure at each radius in `r` for a two-layer planet of radius max(r).
pub fn two_layer_pressure_profile(
    r: ArrayView1<'_, f64>,
    rc: f64,
    rhoc: f64,
    rhom: f64,
    g: f64,
) -> PsciResult<Array1<f64>> {
    let a = outer_radius(r)?;
    check_two_layer(a, rc, rhoc, rhom, g)?;
    let (c1, c2) = two_layer_constants(a, rc, rhoc, rhom, g);
    let k = 4.0 * PI / 3.0 * g;
    let rc3 = rc.powi(3);

    Ok(r.mapv(|ri| {
        if ri <= rc {
            c1 - k * 0.5 * rhoc * rhoc * ri * ri
        } else {
            c2 - k * (0.5 * rhom * rhom * ri * ri - rhom * (rhoc - rhom) * rc3 / ri)
        }
    }))
}
