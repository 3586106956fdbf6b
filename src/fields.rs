/*!
 * Concrete scalar structures.
 *
 * These cover the common cases of building spaces over real numbers, complex numbers and
 * booleans. Any other field or ring can be used by implementing
 * [`ScalarStructure`](crate::scalars::ScalarStructure) directly.
 */

use crate::scalars::ScalarStructure;

/**
 * The real numbers, represented as `f64`.
 *
 * Only finite values are contained in the structure, so elements cannot be built from NaN
 * or infinities. Equality is exact.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Real;

impl ScalarStructure for Real {
    type Value = f64;

    #[inline]
    fn zero(&self) -> f64 {
        0.0
    }

    #[inline]
    fn one(&self) -> f64 {
        1.0
    }

    fn contains(&self, value: &f64) -> bool {
        value.is_finite()
    }

    #[inline]
    fn addition(&self, left: &f64, right: &f64) -> f64 {
        left + right
    }

    #[inline]
    fn multiplication(&self, left: &f64, right: &f64) -> f64 {
        left * right
    }

    #[inline]
    fn negation(&self, value: &f64) -> f64 {
        -value
    }

    fn inverse(&self, value: &f64) -> Option<f64> {
        if *value == 0.0 { None } else { Some(1.0 / value) }
    }

    #[inline]
    fn equality(&self, left: &f64, right: &f64) -> bool {
        left == right
    }
}

/**
 * The complex numbers, represented as `[real, imaginary]` pairs of `f64`.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Complex;

impl ScalarStructure for Complex {
    type Value = [f64; 2];

    fn zero(&self) -> [f64; 2] {
        [0.0, 0.0]
    }

    fn one(&self) -> [f64; 2] {
        [1.0, 0.0]
    }

    fn contains(&self, value: &[f64; 2]) -> bool {
        value.iter().all(|part| part.is_finite())
    }

    fn addition(&self, left: &[f64; 2], right: &[f64; 2]) -> [f64; 2] {
        [left[0] + right[0], left[1] + right[1]]
    }

    fn multiplication(&self, left: &[f64; 2], right: &[f64; 2]) -> [f64; 2] {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        [
            left[0] * right[0] - left[1] * right[1],
            left[0] * right[1] + left[1] * right[0],
        ]
    }

    fn negation(&self, value: &[f64; 2]) -> [f64; 2] {
        [-value[0], -value[1]]
    }

    fn inverse(&self, value: &[f64; 2]) -> Option<[f64; 2]> {
        let norm_squared = value[0] * value[0] + value[1] * value[1];
        if norm_squared == 0.0 {
            return None;
        }
        // conjugate divided by |z|^2
        Some([value[0] / norm_squared, -value[1] / norm_squared])
    }

    fn equality(&self, left: &[f64; 2], right: &[f64; 2]) -> bool {
        left == right
    }
}

/**
 * Booleans, with exclusive or as addition and logical and as multiplication.
 *
 * Negation is logical not, so `negation(true)` is `false`. Only `true` is invertible.
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BooleanField;

impl ScalarStructure for BooleanField {
    type Value = bool;

    fn zero(&self) -> bool {
        false
    }

    fn one(&self) -> bool {
        true
    }

    fn contains(&self, _value: &bool) -> bool {
        true
    }

    fn addition(&self, left: &bool, right: &bool) -> bool {
        left ^ right
    }

    fn multiplication(&self, left: &bool, right: &bool) -> bool {
        *left && *right
    }

    fn negation(&self, value: &bool) -> bool {
        !value
    }

    fn inverse(&self, value: &bool) -> Option<bool> {
        if *value { Some(true) } else { None }
    }

    fn equality(&self, left: &bool, right: &bool) -> bool {
        left == right
    }
}

#[test]
fn complex_inverse_multiplies_to_one() {
    let z = [3.0, 4.0];
    let inverse = Complex.inverse(&z).unwrap();
    assert_eq!(inverse, [0.12, -0.16]);
    let product = Complex.multiplication(&z, &inverse);
    assert!((product[0] - 1.0).abs() < 1e-12);
    assert!(product[1].abs() < 1e-12);
    assert_eq!(Complex.inverse(&[0.0, 0.0]), None);
}

#[test]
fn boolean_operations() {
    assert!(BooleanField.addition(&true, &false));
    assert!(!BooleanField.addition(&true, &true));
    assert!(!BooleanField.negation(&true));
    assert!(!BooleanField.multiplication(&true, &false));
    assert_eq!(BooleanField.inverse(&false), None);
}

#[test]
fn real_membership() {
    assert!(Real.contains(&1.5));
    assert!(!Real.contains(&f64::INFINITY));
    assert!(!Real.contains(&f64::NAN));
}
