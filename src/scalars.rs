/*!
 * Scalar structure definitions
 *
 * Every space in this crate is generic over a [`ScalarStructure`]: a field or ring which
 * supplies its own addition, multiplication, negation, inverse, equality and membership
 * test. The spaces never interpret values numerically, they only ever call these
 * operations, so the same matrix and tensor code works for real numbers, complex numbers,
 * booleans or any user defined structure.
 */

use std::fmt;

use crate::errors::SpaceError;

/**
 * A field or ring over some type of values.
 *
 * Implementations are expected to be cheap to clone, most structures are zero sized types
 * such as [`Real`](crate::fields::Real) and all of their state is in the values themselves.
 *
 * Only the operations are required. [`subtraction`](ScalarStructure::subtraction) and
 * [`division`](ScalarStructure::division) are provided in terms of negation and inverse.
 *
 * ```
 * use algebra_spaces::scalars::ScalarStructure;
 *
 * // Integers modulo 5
 * #[derive(Clone, Debug)]
 * struct Modulo5;
 *
 * impl ScalarStructure for Modulo5 {
 *     type Value = u8;
 *     fn zero(&self) -> u8 { 0 }
 *     fn one(&self) -> u8 { 1 }
 *     fn contains(&self, value: &u8) -> bool { *value < 5 }
 *     fn addition(&self, left: &u8, right: &u8) -> u8 { (left + right) % 5 }
 *     fn multiplication(&self, left: &u8, right: &u8) -> u8 { (left * right) % 5 }
 *     fn negation(&self, value: &u8) -> u8 { (5 - value) % 5 }
 *     fn inverse(&self, value: &u8) -> Option<u8> {
 *         (1..5).find(|candidate| (candidate * value) % 5 == 1)
 *     }
 *     fn equality(&self, left: &u8, right: &u8) -> bool { left == right }
 * }
 *
 * assert_eq!(Modulo5.subtraction(&1, &3), 3);
 * assert_eq!(Modulo5.division(&1, &2), Some(3));
 * ```
 */
pub trait ScalarStructure: Clone + fmt::Debug {
    type Value: Clone + fmt::Debug;

    /// The additive identity.
    fn zero(&self) -> Self::Value;

    /// The multiplicative identity.
    fn one(&self) -> Self::Value;

    /// Membership test, every value stored in an element must pass it.
    fn contains(&self, value: &Self::Value) -> bool;

    fn addition(&self, left: &Self::Value, right: &Self::Value) -> Self::Value;

    fn multiplication(&self, left: &Self::Value, right: &Self::Value) -> Self::Value;

    fn negation(&self, value: &Self::Value) -> Self::Value;

    /**
     * The multiplicative inverse, if the value has one. For a field this is every value
     * other than zero, for a ring it may be very few values.
     */
    fn inverse(&self, value: &Self::Value) -> Option<Self::Value>;

    fn equality(&self, left: &Self::Value, right: &Self::Value) -> bool;

    fn subtraction(&self, left: &Self::Value, right: &Self::Value) -> Self::Value {
        self.addition(left, &self.negation(right))
    }

    fn division(&self, left: &Self::Value, right: &Self::Value) -> Option<Self::Value> {
        Some(self.multiplication(left, &self.inverse(right)?))
    }
}

/**
 * A single value of a scalar structure.
 *
 * This is the rank 0 counterpart of the vector, matrix and tensor element types, and is
 * what trace, determinant and scalar product return. Like every element it is immutable,
 * all operations return a new Scalar, or `NotInStructure` if the result of the
 * structure's operation is not a member of it.
 */
#[derive(Clone, Debug)]
pub struct Scalar<S: ScalarStructure> {
    structure: S,
    value: S::Value,
}

impl<S: ScalarStructure> Scalar<S> {
    /**
     * Wraps a value, failing if the structure does not contain it.
     */
    pub fn new(structure: S, value: S::Value) -> Result<Scalar<S>, SpaceError> {
        if !structure.contains(&value) {
            return Err(SpaceError::NotInStructure { position: 0 });
        }
        Ok(Scalar { structure, value })
    }

    // Structures need not be closed under their own operations, so computed values are
    // checked the same way constructed ones are
    pub(crate) fn computed(structure: S, value: S::Value) -> Result<Scalar<S>, SpaceError> {
        Scalar::new(structure, value)
    }

    pub fn value(&self) -> &S::Value {
        &self.value
    }

    pub fn into_value(self) -> S::Value {
        self.value
    }

    pub fn structure(&self) -> &S {
        &self.structure
    }

    fn with(&self, value: S::Value) -> Result<Scalar<S>, SpaceError> {
        Scalar::computed(self.structure.clone(), value)
    }

    /**
     * Adds a value to this scalar. Fails with `NotInStructure` if the sum is not a member of
     * the structure, such as when real addition overflows to infinity.
     */
    pub fn addition(&self, other: &S::Value) -> Result<Scalar<S>, SpaceError> {
        self.with(self.structure.addition(&self.value, other))
    }

    pub fn subtraction(&self, other: &S::Value) -> Result<Scalar<S>, SpaceError> {
        self.with(self.structure.subtraction(&self.value, other))
    }

    pub fn multiplication(&self, other: &S::Value) -> Result<Scalar<S>, SpaceError> {
        self.with(self.structure.multiplication(&self.value, other))
    }

    pub fn division(&self, other: &S::Value) -> Result<Scalar<S>, SpaceError> {
        let quotient = self
            .structure
            .division(&self.value, other)
            .ok_or(SpaceError::NotInvertible)?;
        self.with(quotient)
    }

    pub fn negation(&self) -> Result<Scalar<S>, SpaceError> {
        self.with(self.structure.negation(&self.value))
    }

    pub fn inversion(&self) -> Result<Scalar<S>, SpaceError> {
        let inverse = self
            .structure
            .inverse(&self.value)
            .ok_or(SpaceError::NotInvertible)?;
        self.with(inverse)
    }

    pub fn equality(&self, other: &S::Value) -> bool {
        self.structure.equality(&self.value, other)
    }

    pub fn disequality(&self, other: &S::Value) -> bool {
        !self.equality(other)
    }
}

/**
 * Scalars are equal when their structure says their values are equal.
 */
impl<S: ScalarStructure> PartialEq for Scalar<S> {
    fn eq(&self, other: &Self) -> bool {
        self.equality(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{BooleanField, Real};

    #[test]
    fn real_scalar_arithmetic() {
        let two = Scalar::new(Real, 2.0).unwrap();
        let product = two.multiplication(&-2.0).unwrap();
        assert_eq!(product.value(), &-4.0);
        let chained = product
            .addition(&6.0)
            .and_then(|x| x.multiplication(&2.0))
            .and_then(|x| x.inversion())
            .unwrap();
        assert_eq!(chained.value(), &0.25);
        // the original is untouched
        assert_eq!(two.value(), &2.0);
    }

    #[test]
    fn zero_has_no_inverse() {
        let zero = Scalar::new(Real, 0.0).unwrap();
        assert_eq!(zero.inversion(), Err(SpaceError::NotInvertible));
        let one = Scalar::new(Real, 1.0).unwrap();
        assert_eq!(one.division(&0.0), Err(SpaceError::NotInvertible));
    }

    #[test]
    fn membership_is_checked() {
        assert_eq!(
            Scalar::new(Real, f64::NAN),
            Err(SpaceError::NotInStructure { position: 0 })
        );
    }

    #[test]
    fn overflow_leaves_the_structure() {
        let large = Scalar::new(Real, f64::MAX).unwrap();
        assert_eq!(
            large.addition(&f64::MAX),
            Err(SpaceError::NotInStructure { position: 0 })
        );
        assert_eq!(
            large.multiplication(&2.0),
            Err(SpaceError::NotInStructure { position: 0 })
        );
        assert_eq!(large.subtraction(&f64::MAX).unwrap().value(), &0.0);
    }

    #[test]
    fn boolean_scalar() {
        let t = Scalar::new(BooleanField, true).unwrap();
        assert_eq!(t.negation().unwrap().value(), &false);
        assert_eq!(t.addition(&false).unwrap().value(), &true);
        assert!(t.disequality(&false));
    }
}
