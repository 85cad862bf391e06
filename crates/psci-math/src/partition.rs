// ─────────────────────────────────────────────────────────────────────
// PSCI Helpers — Equivalence-Class Partitioning
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Partition a finite set into equivalence classes (connected components).
//!
//! Eardley's non-recursive method (Numerical Recipes 3rd ed., §8.6): every
//! pair is visited once and linked to a common ancestor when the proximity
//! test passes. The result is the partition induced by the transitive
//! closure of `prox`, built in O(N²) predicate calls with one label array
//! and no tree or adjacency matrix.
//!
//! `prox` must be symmetric. This is not checked; an asymmetric predicate
//! gives an arbitrary (but memory-safe) labelling.

use ndarray::ArrayViewD;
use psci_types::error::{PsciError, PsciResult};
use std::collections::HashMap;

/// Label every element with its equivalence class.
///
/// Two entries of the returned vector are equal iff the corresponding
/// elements are connected through a chain of `prox`-related pairs. Labels
/// are element indices, not renumbered to `0..K`.
pub fn partition<T, F>(elements: &[T], mut prox: F) -> PsciResult<Vec<usize>>
where
    F: FnMut(&T, &T) -> bool,
{
    let n = elements.len();
    if n == 0 {
        return Err(PsciError::InvalidArgument(
            "cannot partition an empty set".to_string(),
        ));
    }

    let mut labels = vec![0usize; n];
    for j in 1..n {
        labels[j] = j;
        for k in 0..j {
            // Two-level sweep of k before the test.
            let swept = labels[labels[k]];
            labels[k] = swept;
            if prox(&elements[j], &elements[k]) {
                // Three levels of ancestry are required here; two mis-partitions.
                let ancestor = labels[labels[k]];
                labels[ancestor] = j;
            }
        }
    }
    for j in 0..n {
        let swept = labels[labels[j]];
        labels[j] = swept;
    }

    log::debug!(
        "partitioned {} elements into {} classes",
        n,
        class_count(&labels)
    );
    Ok(labels)
}

/// Partition the items of an array: scalars of a 1-D array or rows of a
/// 2-D array. `prox` receives each item as a dynamic-dimension view
/// (0-D for scalars, 1-D for rows).
pub fn partition_rows<F>(data: ArrayViewD<'_, f64>, mut prox: F) -> PsciResult<Vec<usize>>
where
    F: FnMut(ArrayViewD<'_, f64>, ArrayViewD<'_, f64>) -> bool,
{
    match data.ndim() {
        1 | 2 => {}
        d => {
            return Err(PsciError::InvalidArgument(format!(
                "partition_rows expects a 1-D or 2-D array, got {d}-D"
            )))
        }
    }
    let items: Vec<ArrayViewD<'_, f64>> = data.outer_iter().collect();
    partition(&items, |a, b| prox(a.view(), b.view()))
}

/// Number of distinct classes in a label array.
pub fn class_count(labels: &[usize]) -> usize {
    let mut seen = labels.to_vec();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

/// Member indices of each class, classes ordered by their first member.
pub fn group_classes(labels: &[usize]) -> Vec<Vec<usize>> {
    let mut slot: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (idx, &label) in labels.iter().enumerate() {
        let g = *slot.entry(label).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[g].push(idx);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2, Array3};

    #[test]
    fn test_single_element() {
        let labels = partition(&[42.0_f64], |_, _| true).unwrap();
        assert_eq!(labels, vec![0]);
    }

    #[test]
    fn test_empty_rejected() {
        let empty: [i32; 0] = [];
        match partition(&empty, |_, _| true) {
            Err(PsciError::InvalidArgument(msg)) => assert!(msg.contains("empty")),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_chain_adjacency_merges_everything() {
        // 0-1, 1-2, 2-3 are neighbours; 0 and 3 only via the chain.
        let data = [0i64, 1, 2, 3];
        let labels = partition(&data, |a, b| (a - b).abs() <= 1).unwrap();
        assert_eq!(labels, vec![3, 3, 3, 3]);
        assert_eq!(class_count(&labels), 1);
    }

    #[test]
    fn test_no_relations_gives_identity_labels() {
        let data = [10, 20, 30, 40, 50];
        let labels = partition(&data, |_, _| false).unwrap();
        assert_eq!(labels, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_two_clusters() {
        let data = [0.0, 0.1, 5.0, 0.2, 5.1, 5.3];
        let labels = partition(&data, |a: &f64, b: &f64| (a - b).abs() < 0.5).unwrap();
        assert_eq!(class_count(&labels), 2);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[0], labels[3]);
        assert_eq!(labels[2], labels[4]);
        assert_eq!(labels[2], labels[5]);
        assert_ne!(labels[0], labels[2]);
        assert_eq!(group_classes(&labels), vec![vec![0, 1, 3], vec![2, 4, 5]]);
    }

    #[test]
    fn test_labels_are_element_indices() {
        let data = [1, 9, 2, 8, 3];
        let labels = partition(&data, |a: &i32, b: &i32| (a - b).abs() <= 1).unwrap();
        for &label in &labels {
            assert!(label < data.len());
        }
    }

    #[test]
    fn test_non_transitive_predicate_is_closed() {
        // Points on a line, each within reach of its neighbour only.
        let data: Vec<f64> = (0..20).map(|i| i as f64 * 0.9).collect();
        let labels = partition(&data, |a, b| (a - b).abs() < 1.0).unwrap();
        assert!(labels.iter().all(|&l| l == labels[0]));
    }

    #[test]
    fn test_partition_rows_2d() {
        let points = arr2(&[[0.0, 0.0], [10.0, 10.0], [0.5, 0.0], [10.0, 10.4]]);
        let labels = partition_rows(points.view().into_dyn(), |a, b| {
            let d2: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum();
            d2 < 1.0
        })
        .unwrap();
        assert_eq!(group_classes(&labels), vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn test_partition_rows_1d_scalars() {
        let values = arr1(&[1.0, 1.2, 7.0]);
        let labels = partition_rows(values.view().into_dyn(), |a, b| {
            let (x, y) = (a.sum(), b.sum());
            (x - y).abs() < 0.5
        })
        .unwrap();
        assert_eq!(labels[0], labels[1]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn test_partition_rows_rejects_3d() {
        let cube = Array3::<f64>::zeros((2, 2, 2));
        let result = partition_rows(cube.view().into_dyn(), |_, _| true);
        assert!(matches!(result, Err(PsciError::InvalidArgument(_))));
    }

    #[test]
    fn test_partition_rows_rejects_empty() {
        let empty = ndarray::Array2::<f64>::zeros((0, 3));
        let result = partition_rows(empty.view().into_dyn(), |_, _| true);
        assert!(matches!(result, Err(PsciError::InvalidArgument(_))));
    }
}
