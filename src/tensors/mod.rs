/*!
 * Tensor spaces of any rank.
 *
 * A [`TensorSpace`] is bound to one shape and one scalar structure and constructs
 * [`Tensor`] elements of that shape. The space also carries the static form of every
 * operator, taking raw data or elements as operands, while each tensor carries the instance
 * form of the same operators with itself as the first operand.
 *
 * ```
 * use algebra_spaces::fields::Real;
 * use algebra_spaces::tensors::TensorSpace;
 *
 * let t2x2x2 = TensorSpace::new(Real, [2, 2, 2]).unwrap();
 * let tensor1 = t2x2x2.element(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap();
 * let tensor2 = t2x2x2.element(vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
 *
 * assert!(t2x2x2.equality(&tensor1, &tensor1));
 * assert!(!t2x2x2.equality(&tensor1, &tensor2));
 * assert!(tensor2.equality(&tensor2));
 * ```
 */

use crate::errors::SpaceError;
use crate::operands::Operand;
use crate::scalars::ScalarStructure;

pub mod contraction;
mod dimensions;
pub mod indexing;
pub(crate) mod operations;

pub use dimensions::*;

/**
 * The space of tensors with a fixed shape over some scalar structure.
 *
 * Spaces are cheap values: a copy of the structure and the shape. They own no elements and
 * never change after construction.
 */
#[derive(Clone, Debug)]
pub struct TensorSpace<S: ScalarStructure> {
    structure: S,
    shape: Vec<usize>,
}

/**
 * An element of a [`TensorSpace`], holding one value per position of the space's shape in
 * row major order. Tensors are immutable, every operation returns a new tensor.
 */
#[derive(Clone, Debug)]
pub struct Tensor<S: ScalarStructure> {
    space: TensorSpace<S>,
    data: Vec<S::Value>,
}

impl<S: ScalarStructure> TensorSpace<S> {
    /**
     * Creates the space of tensors with this shape. Every axis must have a length of at
     * least 1, an empty shape creates the rank 0 space holding a single value.
     */
    pub fn new(structure: S, shape: impl Into<Vec<usize>>) -> Result<TensorSpace<S>, SpaceError> {
        let shape = shape.into();
        validate_shape(&shape)?;
        tracing::debug!(shape = ?shape, structure = ?structure, "created tensor space");
        Ok(TensorSpace { structure, shape })
    }

    pub fn structure(&self) -> &S {
        &self.structure
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /**
     * The number of values every element of this space holds.
     */
    pub fn elements(&self) -> usize {
        elements(&self.shape)
    }

    /**
     * Constructs an element of this space, taking ownership of the data.
     *
     * Fails with `ShapeMismatch` if the length of the data is not the product of the shape,
     * and with `NotInStructure` if any value is not a member of the scalar structure.
     */
    pub fn element(&self, data: Vec<S::Value>) -> Result<Tensor<S>, SpaceError> {
        self.validate(&data)?;
        Ok(self.adopt(data))
    }

    /**
     * The element with every value set to the structure's zero.
     */
    pub fn zero(&self) -> Tensor<S> {
        self.adopt(vec![self.structure.zero(); self.elements()])
    }

    // Wraps data already known to fit this space
    pub(crate) fn adopt(&self, data: Vec<S::Value>) -> Tensor<S> {
        debug_assert_eq!(data.len(), self.elements());
        Tensor {
            space: self.clone(),
            data,
        }
    }

    pub(crate) fn validate(&self, data: &[S::Value]) -> Result<(), SpaceError> {
        if data.len() != self.elements() {
            return Err(SpaceError::ShapeMismatch {
                shape: self.shape.clone(),
                expected: self.elements(),
                actual: data.len(),
            });
        }
        self.members(data)
    }

    pub(crate) fn members(&self, data: &[S::Value]) -> Result<(), SpaceError> {
        match data.iter().position(|value| !self.structure.contains(value)) {
            Some(position) => Err(SpaceError::NotInStructure { position }),
            None => Ok(()),
        }
    }

    /**
     * Returns true if both operands have this space's shape and the structure considers
     * every pair of values at the same position equal.
     */
    pub fn equality(&self, left: impl Operand<S::Value>, right: impl Operand<S::Value>) -> bool {
        self.equal_data(&left, &right)
    }

    pub fn disequality(
        &self,
        left: impl Operand<S::Value>,
        right: impl Operand<S::Value>,
    ) -> bool {
        !self.equality(left, right)
    }

    /**
     * Element wise addition of two operands of this space.
     */
    pub fn addition(
        &self,
        left: impl Operand<S::Value>,
        right: impl Operand<S::Value>,
    ) -> Result<Tensor<S>, SpaceError> {
        Ok(self.adopt(self.addition_data(&left, &right)?))
    }

    /**
     * Element wise subtraction of two operands of this space.
     */
    pub fn subtraction(
        &self,
        left: impl Operand<S::Value>,
        right: impl Operand<S::Value>,
    ) -> Result<Tensor<S>, SpaceError> {
        Ok(self.adopt(self.subtraction_data(&left, &right)?))
    }

    /**
     * Element wise negation of an operand of this space.
     */
    pub fn negation(&self, operand: impl Operand<S::Value>) -> Result<Tensor<S>, SpaceError> {
        Ok(self.adopt(self.negation_data(&operand)?))
    }

    /**
     * Multiplies every value of the operand by a scalar value, on the left.
     *
     * Like every operator producing new values, this fails with `NotInStructure` if a result
     * is not a member of the scalar structure.
     */
    pub fn scalar_multiplication(
        &self,
        scalar: &S::Value,
        operand: impl Operand<S::Value>,
    ) -> Result<Tensor<S>, SpaceError> {
        Ok(self.adopt(self.scalar_multiplication_data(scalar, &operand)?))
    }

    /**
     * Contracts a pair of axes of equal length, summing over the values where the indexes
     * on both axes are equal. The result is an element of the space of the remaining axes.
     *
     * ```
     * use algebra_spaces::fields::Real;
     * use algebra_spaces::tensors::TensorSpace;
     * let space = TensorSpace::new(Real, [2, 2, 3]).unwrap();
     * let data = (0..12).map(|x| x as f64).collect();
     * let contracted = space.contraction((0, 1), &space.element(data).unwrap()).unwrap();
     * assert_eq!(contracted.shape(), &[3]);
     * // T[0][0][k] + T[1][1][k]
     * assert_eq!(contracted.data(), &[9.0, 11.0, 13.0]);
     * ```
     */
    pub fn contraction(
        &self,
        axes: (usize, usize),
        operand: impl Operand<S::Value>,
    ) -> Result<Tensor<S>, SpaceError> {
        let data = self.coerce("contraction", &operand)?;
        let structure = &self.structure;
        let (shape, contracted) = contraction::contract(
            |a, b| structure.addition(a, b),
            axes,
            &self.shape,
            data,
        )?;
        let space = self.derive(shape)?;
        let contracted = space.checked(contracted)?;
        Ok(space.adopt(contracted))
    }

    /**
     * Returns a space over the same structure for the shape, reusing this one if the shape
     * is the same.
     */
    pub(crate) fn derive(&self, shape: Vec<usize>) -> Result<TensorSpace<S>, SpaceError> {
        if shape == self.shape {
            return Ok(self.clone());
        }
        tracing::trace!(from = ?self.shape, to = ?shape, "derived tensor space");
        TensorSpace::new(self.structure.clone(), shape)
    }
}

impl<S: ScalarStructure> Tensor<S> {
    pub fn space(&self) -> &TensorSpace<S> {
        &self.space
    }

    pub fn shape(&self) -> &[usize] {
        &self.space.shape
    }

    pub fn data(&self) -> &[S::Value] {
        &self.data
    }

    pub fn into_data(self) -> Vec<S::Value> {
        self.data
    }

    /**
     * Gets a reference to the value at a multi index, if the index is within the shape.
     */
    pub fn get(&self, indexes: &[usize]) -> Option<&S::Value> {
        let shape = self.shape();
        if indexes.len() != shape.len() || indexes.iter().zip(shape).any(|(i, l)| i >= l) {
            return None;
        }
        self.data.get(indexing::to_flat_index(indexes, shape))
    }

    pub fn equality(&self, other: impl Operand<S::Value>) -> bool {
        self.space.equality(self, other)
    }

    pub fn disequality(&self, other: impl Operand<S::Value>) -> bool {
        self.space.disequality(self, other)
    }

    pub fn addition(&self, other: impl Operand<S::Value>) -> Result<Tensor<S>, SpaceError> {
        self.space.addition(self, other)
    }

    pub fn subtraction(&self, other: impl Operand<S::Value>) -> Result<Tensor<S>, SpaceError> {
        self.space.subtraction(self, other)
    }

    pub fn negation(&self) -> Result<Tensor<S>, SpaceError> {
        self.space.negation(self)
    }

    pub fn scalar_multiplication(&self, scalar: &S::Value) -> Result<Tensor<S>, SpaceError> {
        self.space.scalar_multiplication(scalar, self)
    }

    pub fn contraction(&self, axes: (usize, usize)) -> Result<Tensor<S>, SpaceError> {
        self.space.contraction(axes, self)
    }
}

impl<S: ScalarStructure> Operand<S::Value> for Tensor<S> {
    fn to_data(&self) -> &[S::Value] {
        &self.data
    }

    fn shape(&self) -> Option<&[usize]> {
        Some(&self.space.shape)
    }
}

/**
 * Tensors are equal when they have the same shape and the structure considers every value
 * equal.
 */
impl<S: ScalarStructure> PartialEq for Tensor<S> {
    fn eq(&self, other: &Self) -> bool {
        self.equality(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Real;

    #[test]
    fn wrong_size() {
        let space = TensorSpace::new(Real, [2, 3]).unwrap();
        assert_eq!(
            space.element(vec![1.0, 2.0, 3.0, 4.0]).unwrap_err(),
            SpaceError::ShapeMismatch {
                shape: vec![2, 3],
                expected: 6,
                actual: 4
            }
        );
    }

    #[test]
    fn values_outside_structure() {
        let space = TensorSpace::new(Real, [3]).unwrap();
        assert_eq!(
            space.element(vec![1.0, f64::NAN, 3.0]).unwrap_err(),
            SpaceError::NotInStructure { position: 1 }
        );
    }

    #[test]
    fn indexing_test() {
        let space = TensorSpace::new(Real, [2, 3]).unwrap();
        let tensor = space.element(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(tensor.get(&[0, 0]), Some(&1.0));
        assert_eq!(tensor.get(&[0, 2]), Some(&3.0));
        assert_eq!(tensor.get(&[1, 0]), Some(&4.0));
        assert_eq!(tensor.get(&[2, 0]), None);
        assert_eq!(tensor.get(&[0]), None);
    }

    #[test]
    fn rank_zero_space() {
        let space = TensorSpace::new(Real, Vec::<usize>::new()).unwrap();
        assert_eq!(space.elements(), 1);
        let scalar = space.element(vec![3.0]).unwrap();
        assert_eq!(scalar.get(&[]), Some(&3.0));
    }

    #[test]
    fn equality_requires_same_shape() {
        let square = TensorSpace::new(Real, [2, 2]).unwrap();
        let flat = TensorSpace::new(Real, [4]).unwrap();
        let x = square.element(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let y = flat.element(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(!square.equality(&x, &y));
        // raw data has no shape of its own
        assert!(square.equality(&x, [1.0, 2.0, 3.0, 4.0]));
        assert!(flat.equality(&y, [1.0, 2.0, 3.0, 4.0]));
        assert!(!square.equality(&x, [1.0, 2.0, 3.0]));
    }
}
