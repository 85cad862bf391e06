// ─────────────────────────────────────────────────────────────────────
// PSCI Helpers — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Universal gravitational constant (m^3 kg^-1 s^-2), rounded as used by
/// the pressure-profile helpers.
pub const G_SI: f64 = 6.674e-11;

/// Absolute Newton step tolerance for Legendre roots on [-1, 1].
pub const NEWTON_TOL: f64 = 1e-14;

/// Newton iteration cap per root before reporting non-convergence.
pub const NEWTON_MAX_ITERS: usize = 100;

/// Lower bound of the gravity-regime radius range for Q*D power laws (m).
pub const QSTAR_RADIUS_MIN: f64 = 1e5;

/// Upper bound of the gravity-regime radius range for Q*D power laws (m).
pub const QSTAR_RADIUS_MAX: f64 = 1e6;
