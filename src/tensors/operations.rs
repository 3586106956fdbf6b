/*!
 * Element wise operators shared by every space.
 *
 * Tensor spaces implement the group operators on flat data here, and vector and matrix spaces
 * are given the same operators through the `lifted_group_operators` macro, which rewraps the
 * results as vectors or matrices.
 */

use crate::errors::{SpaceError, mismatch};
use crate::operands::{Operand, coerce};
use crate::scalars::ScalarStructure;
use crate::tensors::TensorSpace;

impl<S: ScalarStructure> TensorSpace<S> {
    /**
     * Reads an operand as data of this space, checking raw data for membership of the
     * structure. This is applied to every operand at the boundary of every operation.
     */
    pub(crate) fn coerce<'a, O>(
        &self,
        operation: &'static str,
        operand: &'a O,
    ) -> Result<&'a [S::Value], SpaceError>
    where
        O: Operand<S::Value> + ?Sized,
    {
        let data = coerce(operation, &self.shape, operand)?;
        // elements were checked when they were constructed, raw data has not been
        if operand.shape().is_none() {
            self.members(data)?;
        }
        Ok(data)
    }

    /**
     * Accepts data computed by the structure's operations as data of this space, failing
     * with `NotInStructure` if any value fell outside the structure.
     */
    pub(crate) fn checked(&self, data: Vec<S::Value>) -> Result<Vec<S::Value>, SpaceError> {
        self.members(&data)?;
        Ok(data)
    }

    #[inline]
    fn zip_with<L, R, F>(
        &self,
        operation: &'static str,
        left: &L,
        right: &R,
        f: F,
    ) -> Result<Vec<S::Value>, SpaceError>
    where
        L: Operand<S::Value> + ?Sized,
        R: Operand<S::Value> + ?Sized,
        F: Fn(&S, &S::Value, &S::Value) -> S::Value,
    {
        let left = self.coerce(operation, left)?;
        let right = self.coerce(operation, right)?;
        self.checked(
            left.iter()
                .zip(right.iter())
                .map(|(x, y)| f(&self.structure, x, y))
                .collect(),
        )
    }

    pub(crate) fn equal_data<L, R>(&self, left: &L, right: &R) -> bool
    where
        L: Operand<S::Value> + ?Sized,
        R: Operand<S::Value> + ?Sized,
    {
        match (self.coerce("equality", left), self.coerce("equality", right)) {
            (Ok(left), Ok(right)) => left
                .iter()
                .zip(right.iter())
                .all(|(x, y)| self.structure.equality(x, y)),
            _ => false,
        }
    }

    pub(crate) fn addition_data<L, R>(&self, left: &L, right: &R) -> Result<Vec<S::Value>, SpaceError>
    where
        L: Operand<S::Value> + ?Sized,
        R: Operand<S::Value> + ?Sized,
    {
        self.zip_with("addition", left, right, S::addition)
    }

    pub(crate) fn subtraction_data<L, R>(
        &self,
        left: &L,
        right: &R,
    ) -> Result<Vec<S::Value>, SpaceError>
    where
        L: Operand<S::Value> + ?Sized,
        R: Operand<S::Value> + ?Sized,
    {
        self.zip_with("subtraction", left, right, S::subtraction)
    }

    pub(crate) fn negation_data<O>(&self, operand: &O) -> Result<Vec<S::Value>, SpaceError>
    where
        O: Operand<S::Value> + ?Sized,
    {
        let data = self.coerce("negation", operand)?;
        self.checked(data.iter().map(|x| self.structure.negation(x)).collect())
    }

    pub(crate) fn scalar_multiplication_data<O>(
        &self,
        scalar: &S::Value,
        operand: &O,
    ) -> Result<Vec<S::Value>, SpaceError>
    where
        O: Operand<S::Value> + ?Sized,
    {
        if !self.structure.contains(scalar) {
            return Err(mismatch(
                "scalar multiplication",
                "a member of the scalar structure",
                format!("{:?}", scalar),
            ));
        }
        let data = self.coerce("scalar multiplication", operand)?;
        self.checked(
            data.iter()
                .map(|x| self.structure.multiplication(scalar, x))
                .collect(),
        )
    }
}

/**
 * Gives a vector or matrix space and its element type the element wise group operators of
 * the tensor space they are built on, in both static and instance form.
 *
 * The space must have a `tensors: TensorSpace<S>` field and an `adopt` method wrapping data
 * known to fit it, and the element must have `space` and `data` fields.
 */
macro_rules! lifted_group_operators {
    ($Space:ident, $Element:ident) => {
        impl<S: $crate::scalars::ScalarStructure> $Space<S> {
            /**
             * Constructs an element of this space, taking ownership of the data.
             *
             * Fails with `ShapeMismatch` if the data is the wrong length, and with
             * `NotInStructure` if any value is not a member of the scalar structure.
             */
            pub fn element(&self, data: Vec<S::Value>) -> Result<$Element<S>, $crate::errors::SpaceError> {
                self.tensors.validate(&data)?;
                Ok(self.adopt(data))
            }

            /// The element with every value set to the structure's zero.
            pub fn zero(&self) -> $Element<S> {
                self.adopt(self.tensors.zero().into_data())
            }

            pub fn structure(&self) -> &S {
                self.tensors.structure()
            }

            pub fn shape(&self) -> &[usize] {
                self.tensors.shape()
            }

            /// The tensor space this space specializes.
            pub fn tensor_space(&self) -> &$crate::tensors::TensorSpace<S> {
                &self.tensors
            }

            pub fn equality(
                &self,
                left: impl $crate::operands::Operand<S::Value>,
                right: impl $crate::operands::Operand<S::Value>,
            ) -> bool {
                self.tensors.equal_data(&left, &right)
            }

            pub fn disequality(
                &self,
                left: impl $crate::operands::Operand<S::Value>,
                right: impl $crate::operands::Operand<S::Value>,
            ) -> bool {
                !self.tensors.equal_data(&left, &right)
            }

            pub fn addition(
                &self,
                left: impl $crate::operands::Operand<S::Value>,
                right: impl $crate::operands::Operand<S::Value>,
            ) -> Result<$Element<S>, $crate::errors::SpaceError> {
                Ok(self.adopt(self.tensors.addition_data(&left, &right)?))
            }

            pub fn subtraction(
                &self,
                left: impl $crate::operands::Operand<S::Value>,
                right: impl $crate::operands::Operand<S::Value>,
            ) -> Result<$Element<S>, $crate::errors::SpaceError> {
                Ok(self.adopt(self.tensors.subtraction_data(&left, &right)?))
            }

            pub fn negation(
                &self,
                operand: impl $crate::operands::Operand<S::Value>,
            ) -> Result<$Element<S>, $crate::errors::SpaceError> {
                Ok(self.adopt(self.tensors.negation_data(&operand)?))
            }

            pub fn scalar_multiplication(
                &self,
                scalar: &S::Value,
                operand: impl $crate::operands::Operand<S::Value>,
            ) -> Result<$Element<S>, $crate::errors::SpaceError> {
                Ok(self.adopt(self.tensors.scalar_multiplication_data(scalar, &operand)?))
            }
        }

        impl<S: $crate::scalars::ScalarStructure> $Element<S> {
            pub fn space(&self) -> &$Space<S> {
                &self.space
            }

            pub fn data(&self) -> &[S::Value] {
                &self.data
            }

            pub fn into_data(self) -> Vec<S::Value> {
                self.data
            }

            /// Copies the values into an element of the underlying tensor space.
            pub fn to_tensor(&self) -> $crate::tensors::Tensor<S> {
                self.space.tensors.adopt(self.data.clone())
            }

            pub fn equality(&self, other: impl $crate::operands::Operand<S::Value>) -> bool {
                self.space.equality(self, other)
            }

            pub fn disequality(&self, other: impl $crate::operands::Operand<S::Value>) -> bool {
                self.space.disequality(self, other)
            }

            pub fn addition(
                &self,
                other: impl $crate::operands::Operand<S::Value>,
            ) -> Result<$Element<S>, $crate::errors::SpaceError> {
                self.space.addition(self, other)
            }

            pub fn subtraction(
                &self,
                other: impl $crate::operands::Operand<S::Value>,
            ) -> Result<$Element<S>, $crate::errors::SpaceError> {
                self.space.subtraction(self, other)
            }

            pub fn negation(&self) -> Result<$Element<S>, $crate::errors::SpaceError> {
                self.space.negation(self)
            }

            pub fn scalar_multiplication(
                &self,
                scalar: &S::Value,
            ) -> Result<$Element<S>, $crate::errors::SpaceError> {
                self.space.scalar_multiplication(scalar, self)
            }
        }

        impl<S: $crate::scalars::ScalarStructure> $crate::operands::Operand<S::Value> for $Element<S> {
            fn to_data(&self) -> &[S::Value] {
                &self.data
            }

            fn shape(&self) -> Option<&[usize]> {
                Some(self.space.shape())
            }
        }

        impl<S: $crate::scalars::ScalarStructure> PartialEq for $Element<S> {
            fn eq(&self, other: &Self) -> bool {
                self.equality(other)
            }
        }
    };
}

pub(crate) use lifted_group_operators;
