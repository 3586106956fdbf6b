/*!
 * Utilities to manipulate shapes.
 *
 * # Terminology
 *
 * Tensors have a **shape** of type `[usize]`, listing the length of each axis in order. The
 * number of axes is the **rank** of the tensor. A tensor with some shape holds data ranging
 * from 0 to the length - 1 along each axis, and we index into it by providing one index per
 * axis, a multi index with the same length as the shape.
 */

use crate::errors::SpaceError;

/**
 * Returns the product of the provided axis lengths
 *
 * This is equal to the number of values that will be stored for this shape.
 * A rank 0 tensor stores exactly 1 value, a rank 1 tensor stores N values,
 * a rank 2 tensor stores NxM values and so on.
 */
pub fn elements(shape: &[usize]) -> usize {
    shape.iter().product()
}

/**
 * Returns true if the axes are all the same length. For 0 or 1 axes trivially returns
 * true. For 2 axes, this corresponds to a square matrix, and for 3 axes, a cube shaped
 * tensor, and so on.
 */
pub fn is_square(shape: &[usize]) -> bool {
    match shape.first() {
        Some(first) => shape.iter().all(|length| length == first),
        None => true,
    }
}

/**
 * Returns the shape left after removing the two axes of a contraction, keeping the
 * remaining axes in their original order.
 */
pub fn without_axes(shape: &[usize], axes: (usize, usize)) -> Vec<usize> {
    shape
        .iter()
        .enumerate()
        .filter(|(d, _)| *d != axes.0 && *d != axes.1)
        .map(|(_, length)| *length)
        .collect()
}

pub(crate) fn validate_shape(shape: &[usize]) -> Result<(), SpaceError> {
    if shape.contains(&0) {
        return Err(SpaceError::InvalidShape(shape.to_vec()));
    }
    Ok(())
}

#[test]
fn test_is_square() {
    assert_eq!(true, is_square(&[]));
    assert_eq!(true, is_square(&[1]));
    assert_eq!(true, is_square(&[1, 1]));
    assert_eq!(true, is_square(&[4, 4]));
    assert_eq!(false, is_square(&[4, 3]));
    assert_eq!(true, is_square(&[3, 3, 3]));
    assert_eq!(false, is_square(&[3, 4, 3]));
}

#[test]
fn test_elements() {
    assert_eq!(1, elements(&[]));
    assert_eq!(6, elements(&[2, 3]));
    assert_eq!(24, elements(&[2, 3, 4]));
}

#[test]
fn test_without_axes() {
    assert_eq!(without_axes(&[2, 3, 2, 5], (0, 2)), vec![3, 5]);
    assert!(without_axes(&[4, 4], (0, 1)).is_empty());
}

#[test]
fn zero_length_axes_are_invalid() {
    assert!(validate_shape(&[2, 3]).is_ok());
    assert!(validate_shape(&[]).is_ok());
    assert_eq!(validate_shape(&[2, 0]), Err(SpaceError::InvalidShape(vec![2, 0])));
}
