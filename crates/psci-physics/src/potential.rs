// ─────────────────────────────────────────────────────────────────────
// PSCI Helpers — Gravitational Potential
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Direct-summation gravitational potential of a particle set.
//!
//!   U_j = - sum_{k != j} m_k / |r_j - r_k|      (G = 1)
//!
//! Each unordered pair is visited once and contributes to both ends.
//! Masked-out particles neither feel nor source the field and get U = 0.
//! Multiply by G for physical units.

use ndarray::{Array1, ArrayView1};
use psci_types::error::{PsciError, PsciResult};

/// Potential at every particle from all other active particles.
pub fn pairwise_potential(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    z: ArrayView1<'_, f64>,
    m: ArrayView1<'_, f64>,
    mask: Option<&[bool]>,
) -> PsciResult<Array1<f64>> {
    let n = x.len();
    if y.len() != n || z.len() != n || m.len() != n {
        return Err(PsciError::InvalidArgument(format!(
            "coordinate/mass length mismatch: x={}, y={}, z={}, m={}",
            n,
            y.len(),
            z.len(),
            m.len()
        )));
    }
    if let Some(mask) = mask {
        if mask.len() != n {
            return Err(PsciError::InvalidArgument(format!(
                "mask length {} does not match {} particles",
                mask.len(),
                n
            )));
        }
    }
    let active = |i: usize| mask.map_or(true, |mk| mk[i]);

    let mut u = Array1::zeros(n);
    let mut pairs = 0usize;
    for j in 0..n {
        if !active(j) {
            continue;
        }
        for k in 0..j {
            if !active(k) {
                continue;
            }
            let dx = x[j] - x[k];
            let dy = y[j] - y[k];
            let dz = z[j] - z[k];
            let dr = (dx * dx + dy * dy + dz * dz).sqrt();
            if dr == 0.0 {
                return Err(PsciError::InvalidArgument(format!(
                    "particles {k} and {j} coincide"
                )));
            }
            u[j] -= m[k] / dr;
            u[k] -= m[j] / dr;
            pairs += 1;
        }
    }
    log::trace!("pairwise potential: {n} particles, {pairs} active pairs");
    Ok(u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_two_bodies() {
        let x = arr1(&[0.0, 3.0]);
        let y = arr1(&[0.0, 4.0]);
        let z = arr1(&[0.0, 0.0]);
        let m = arr1(&[2.0, 5.0]);
        let u = pairwise_potential(x.view(), y.view(), z.view(), m.view(), None).unwrap();
        assert!((u[0] + 1.0).abs() < 1e-15); // -5/5
        assert!((u[1] + 0.4).abs() < 1e-15); // -2/5
    }

    #[test]
    fn test_mask_excludes_particle() {
        let x = arr1(&[0.0, 1.0, 2.0]);
        let zeros = arr1(&[0.0, 0.0, 0.0]);
        let m = arr1(&[1.0, 1.0, 1.0]);
        let u = pairwise_potential(
            x.view(),
            zeros.view(),
            zeros.view(),
            m.view(),
            Some(&[true, false, true]),
        )
        .unwrap();
        assert!((u[0] + 0.5).abs() < 1e-15);
        assert_eq!(u[1], 0.0);
        assert!((u[2] + 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let a = arr1(&[0.0, 1.0]);
        let b = arr1(&[0.0]);
        assert!(pairwise_potential(a.view(), b.view(), a.view(), a.view(), None).is_err());
        assert!(
            pairwise_potential(a.view(), a.view(), a.view(), a.view(), Some(&[true])).is_err()
        );
    }

    #[test]
    fn test_coincident_particles_rejected() {
        let p = arr1(&[1.0, 1.0]);
        let m = arr1(&[1.0, 1.0]);
        assert!(matches!(
            pairwise_potential(p.view(), p.view(), p.view(), m.view(), None),
            Err(PsciError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_single_particle_zero() {
        let p = arr1(&[0.3]);
        let u = pairwise_potential(p.view(), p.view(), p.view(), p.view(), None).unwrap();
        assert_eq!(u[0], 0.0);
    }
}
