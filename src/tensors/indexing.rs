/*!
 * # Indexing
 *
 * Every element in this crate stores its values in a single flat list, in row major order.
 * For a tensor of shape `[a, b, c]` the value at multi index `[i, j, k]` is stored at
 * `i * (b * c) + j * c + k`, so the last axis varies fastest while walking through the data.
 *
 * These functions are the only place the crate converts between multi indexes and flat
 * offsets, transpose and contraction both go through them so they always agree on the
 * order of the axes.
 *
 * ```
 * use algebra_spaces::tensors::indexing::{to_flat_index, to_multi_index};
 * let shape = [2, 3, 4];
 * assert_eq!(to_flat_index(&[1, 2, 3], &shape), 23);
 * assert_eq!(to_multi_index(23, &shape), vec![1, 2, 3]);
 * ```
 */

/**
 * Computes the strides of a shape, the distance in the flat data between two values which
 * differ by 1 in the index of each axis.
 */
pub fn strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    for d in 0..shape.len() {
        strides[d] = shape.iter().skip(d + 1).product();
    }
    strides
}

/**
 * Converts a multi index, one index per axis, into an offset into the flat data of a
 * tensor with this shape.
 */
#[inline]
pub fn to_flat_index(indexes: &[usize], shape: &[usize]) -> usize {
    debug_assert_eq!(indexes.len(), shape.len());
    // Horner's scheme over the axes avoids computing the strides
    indexes
        .iter()
        .zip(shape.iter())
        .fold(0, |offset, (index, length)| offset * length + index)
}

/**
 * Converts an offset into the flat data of a tensor with this shape back into a multi
 * index.
 */
pub fn to_multi_index(offset: usize, shape: &[usize]) -> Vec<usize> {
    let mut indexes = vec![0; shape.len()];
    let mut remaining = offset;
    for d in (0..shape.len()).rev() {
        indexes[d] = remaining % shape[d];
        remaining /= shape[d];
    }
    indexes
}

/**
 * The two dimensional case of [`to_flat_index`], for a matrix with this many columns.
 */
#[inline]
pub fn matrix_to_array_index(row: usize, column: usize, columns: usize) -> usize {
    row * columns + column
}

#[test]
fn test_strides() {
    assert_eq!(strides(&[2, 3, 4]), vec![12, 4, 1]);
    assert_eq!(strides(&[5]), vec![1]);
    assert!(strides(&[]).is_empty());
}

#[test]
fn flat_index_agrees_with_strides() {
    let shape = [3, 2, 4];
    let strides = strides(&shape);
    for offset in 0..24 {
        let indexes = to_multi_index(offset, &shape);
        let from_strides: usize = indexes.iter().zip(strides.iter()).map(|(i, s)| i * s).sum();
        assert_eq!(from_strides, offset);
        assert_eq!(to_flat_index(&indexes, &shape), offset);
    }
}

#[test]
fn matrix_indexing_is_row_major() {
    // 2 x 3 matrix
    assert_eq!(matrix_to_array_index(0, 2, 3), 2);
    assert_eq!(matrix_to_array_index(1, 0, 3), 3);
    assert_eq!(matrix_to_array_index(1, 2, 3), to_flat_index(&[1, 2], &[2, 3]));
}

#[test]
fn rank_zero_indexing() {
    assert_eq!(to_flat_index(&[], &[]), 0);
    assert!(to_multi_index(0, &[]).is_empty());
}
