/*!
 * Vector spaces, the rank 1 tensor spaces.
 *
 * ```
 * use algebra_spaces::fields::Real;
 * use algebra_spaces::vectors::VectorSpace;
 *
 * let r3 = VectorSpace::new(Real, 3).unwrap();
 * let product = r3.cross_product([3.0, -3.0, 1.0], [4.0, 9.0, 2.0]).unwrap();
 * assert_eq!(product.data(), &[-15.0, -2.0, 39.0]);
 *
 * let vector1 = r3.element(vec![3.0, -3.0, 1.0]).unwrap();
 * let vector2 = r3.element(vec![4.0, 9.0, 2.0]).unwrap();
 * assert_eq!(vector1.cross_product(&vector2).unwrap(), product);
 * ```
 */

use crate::errors::{SpaceError, mismatch};
use crate::linear_algebra;
use crate::matrices::{Matrix, MatrixSpace};
use crate::operands::Operand;
use crate::scalars::{Scalar, ScalarStructure};
use crate::tensors::TensorSpace;
use crate::tensors::operations::lifted_group_operators;

/**
 * The space of vectors with a fixed dimension over some scalar structure.
 */
#[derive(Clone, Debug)]
pub struct VectorSpace<S: ScalarStructure> {
    tensors: TensorSpace<S>,
    dimension: usize,
}

/**
 * An element of a [`VectorSpace`]. Vectors are immutable, every operation returns a new
 * vector.
 */
#[derive(Clone, Debug)]
pub struct Vector<S: ScalarStructure> {
    space: VectorSpace<S>,
    data: Vec<S::Value>,
}

impl<S: ScalarStructure> VectorSpace<S> {
    /**
     * Creates the space of vectors with this many values, which must be at least 1.
     */
    pub fn new(structure: S, dimension: usize) -> Result<VectorSpace<S>, SpaceError> {
        Ok(VectorSpace {
            tensors: TensorSpace::new(structure, [dimension])?,
            dimension,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub(crate) fn adopt(&self, data: Vec<S::Value>) -> Vector<S> {
        debug_assert_eq!(data.len(), self.dimension);
        Vector {
            space: self.clone(),
            data,
        }
    }

    /**
     * Computes the cross product of two vectors. This is only defined for 3 dimensional
     * vectors, in any other space it fails with `UnsupportedOperation`.
     */
    pub fn cross_product(
        &self,
        left: impl Operand<S::Value>,
        right: impl Operand<S::Value>,
    ) -> Result<Vector<S>, SpaceError> {
        if self.dimension != 3 {
            return Err(SpaceError::UnsupportedOperation {
                operation: "cross product",
                reason: format!("in {} dimensions, only in 3", self.dimension),
            });
        }
        let left = as_triple(self.tensors.coerce("cross product", &left)?)?;
        let right = as_triple(self.tensors.coerce("cross product", &right)?)?;
        let product = linear_algebra::cross_product(self.structure(), left, right);
        Ok(self.adopt(self.tensors.checked(product.to_vec())?))
    }

    /**
     * Computes the scalar (dot) product of two vectors, the sum of the products of each pair
     * of values.
     */
    pub fn scalar_product(
        &self,
        left: impl Operand<S::Value>,
        right: impl Operand<S::Value>,
    ) -> Result<Scalar<S>, SpaceError> {
        let left = self.tensors.coerce("scalar product", &left)?;
        let right = self.tensors.coerce("scalar product", &right)?;
        let product = linear_algebra::scalar_product(self.structure(), left, right);
        Scalar::computed(self.structure().clone(), product)
    }
}

fn as_triple<V>(data: &[V]) -> Result<&[V; 3], SpaceError> {
    data.try_into()
        .map_err(|_| mismatch("cross product", "3 values", format!("{} values", data.len())))
}

lifted_group_operators!(VectorSpace, Vector);

impl<S: ScalarStructure> Vector<S> {
    pub fn dimension(&self) -> usize {
        self.space.dimension
    }

    /**
     * Gets a reference to the value at this index, if it is within the dimension.
     */
    pub fn get(&self, index: usize) -> Option<&S::Value> {
        self.data.get(index)
    }

    pub fn cross_product(&self, other: impl Operand<S::Value>) -> Result<Vector<S>, SpaceError> {
        self.space.cross_product(self, other)
    }

    pub fn scalar_product(&self, other: impl Operand<S::Value>) -> Result<Scalar<S>, SpaceError> {
        self.space.scalar_product(self, other)
    }

    /**
     * Transposes this vector, treated as a column, into the 1 x N row matrix with the same
     * values. This undoes transposing a 1 x N matrix, which produces a vector.
     */
    pub fn transposed(&self) -> Result<Matrix<S>, SpaceError> {
        let rows = MatrixSpace::new(self.space.structure().clone(), 1, self.dimension())?;
        Ok(rows.adopt(self.data.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Real;

    #[test]
    fn cross_product_only_in_3_dimensions() {
        let r2 = VectorSpace::new(Real, 2).unwrap();
        assert_eq!(
            r2.cross_product([1.0, 0.0], [0.0, 1.0]).unwrap_err(),
            SpaceError::UnsupportedOperation {
                operation: "cross product",
                reason: "in 2 dimensions, only in 3".to_string(),
            }
        );
    }

    #[test]
    fn cross_product_of_basis_vectors() {
        let r3 = VectorSpace::new(Real, 3).unwrap();
        let z = r3.cross_product([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]).unwrap();
        assert_eq!(z.data(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn zero_dimensions_is_invalid() {
        assert_eq!(
            VectorSpace::new(Real, 0).unwrap_err(),
            SpaceError::InvalidShape(vec![0])
        );
    }

    #[test]
    fn transposed_is_a_row() {
        let r3 = VectorSpace::new(Real, 3).unwrap();
        let row = r3.element(vec![1.0, 2.0, 3.0]).unwrap().transposed().unwrap();
        assert_eq!(row.rows(), 1);
        assert_eq!(row.columns(), 3);
        assert_eq!(row.data(), &[1.0, 2.0, 3.0]);
    }
}
