/*!
 * Tensor contraction.
 *
 * Contracting a pair of axes of equal length sums over every value whose indexes on those two
 * axes are equal, leaving a tensor with two fewer axes. Contracting both axes of a square
 * matrix is its trace, the sum of the diagonal.
 *
 * The sum is performed with whatever addition the caller supplies, so this works over any
 * scalar structure.
 *
 * ```
 * use algebra_spaces::tensors::contraction::contract;
 * let addition = |a: &i32, b: &i32| a + b;
 * let (shape, data) = contract(addition, (0, 1), &[2, 2], &[1, 2, 3, 4]).unwrap();
 * assert!(shape.is_empty());
 * assert_eq!(data, vec![5]);
 * ```
 */

use crate::errors::SpaceError;
use crate::tensors::dimensions::{elements, without_axes};
use crate::tensors::indexing::{to_flat_index, to_multi_index};

/**
 * Contracts the pair of axes of a tensor with this shape and flat data, returning the reduced
 * shape and its flat data.
 *
 * Fails with `IncompatibleAxes` if the two axes are the same, either is not an axis of the
 * shape, or they have different lengths. Fails with `ShapeMismatch` if the data does not hold
 * exactly as many values as the shape.
 */
pub fn contract<V, F>(
    addition: F,
    axes: (usize, usize),
    shape: &[usize],
    data: &[V],
) -> Result<(Vec<usize>, Vec<V>), SpaceError>
where
    V: Clone,
    F: Fn(&V, &V) -> V,
{
    let (first, second) = axes;
    let rank = shape.len();
    if first == second || first >= rank || second >= rank || shape[first] != shape[second] {
        return Err(SpaceError::IncompatibleAxes {
            axes,
            shape: shape.to_vec(),
        });
    }
    if data.len() != elements(shape) {
        return Err(SpaceError::ShapeMismatch {
            shape: shape.to_vec(),
            expected: elements(shape),
            actual: data.len(),
        });
    }

    let length = shape[first];
    let reduced_shape = without_axes(shape, axes);
    let mut reduced = Vec::with_capacity(elements(&reduced_shape));
    let mut full_index = vec![0; rank];
    for offset in 0..elements(&reduced_shape) {
        let free_index = to_multi_index(offset, &reduced_shape);
        // spread the free indexes over every axis other than the contracted pair
        let mut free = free_index.into_iter();
        for (d, index) in full_index.iter_mut().enumerate() {
            if d != first && d != second {
                *index = free.next().unwrap_or(0);
            }
        }
        let mut sum: Option<V> = None;
        for k in 0..length {
            full_index[first] = k;
            full_index[second] = k;
            let value = &data[to_flat_index(&full_index, shape)];
            sum = Some(match sum {
                None => value.clone(),
                Some(total) => addition(&total, value),
            });
        }
        // shapes are validated to have no zero length axes so every sum has a term
        if let Some(total) = sum {
            reduced.push(total);
        }
    }
    Ok((reduced_shape, reduced))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(a: &i64, b: &i64) -> i64 {
        a + b
    }

    #[test]
    fn trace_of_matrix() {
        let (shape, data) = contract(add, (0, 1), &[3, 3], &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert!(shape.is_empty());
        assert_eq!(data, vec![15]);
    }

    #[test]
    fn contract_rank_3() {
        // T[i][j][k] = 100i + 10j + k on a 2x3x2 shape, contract the first and last axes
        let shape = [2, 3, 2];
        let data: Vec<i64> = (0..12)
            .map(|offset| {
                let index = to_multi_index(offset, &shape);
                (100 * index[0] + 10 * index[1] + index[2]) as i64
            })
            .collect();
        let (reduced_shape, reduced) = contract(add, (0, 2), &shape, &data).unwrap();
        assert_eq!(reduced_shape, vec![3]);
        // sum over i of T[i][j][i] = (0 + 10j + 0) + (100 + 10j + 1)
        assert_eq!(reduced, vec![101, 121, 141]);
    }

    #[test]
    fn contraction_order_of_axes_does_not_matter() {
        let shape = [2, 2, 3];
        let data: Vec<i64> = (0..12).collect();
        let forwards = contract(add, (0, 1), &shape, &data).unwrap();
        let backwards = contract(add, (1, 0), &shape, &data).unwrap();
        assert_eq!(forwards, backwards);
    }

    #[test]
    fn incompatible_axes() {
        let data: Vec<i64> = (0..6).collect();
        assert_eq!(
            contract(add, (0, 1), &[2, 3], &data),
            Err(SpaceError::IncompatibleAxes {
                axes: (0, 1),
                shape: vec![2, 3]
            })
        );
        assert!(contract(add, (1, 1), &[2, 3], &data).is_err());
        assert!(contract(add, (0, 2), &[2, 3], &data).is_err());
    }

    #[test]
    fn data_must_fill_the_shape() {
        let data: Vec<i64> = (0..3).collect();
        assert_eq!(
            contract(add, (0, 1), &[2, 2], &data),
            Err(SpaceError::ShapeMismatch {
                shape: vec![2, 2],
                expected: 4,
                actual: 3
            })
        );
        assert!(contract(add, (0, 1), &[2, 2], &[1, 2, 3, 4, 5]).is_err());
    }
}
