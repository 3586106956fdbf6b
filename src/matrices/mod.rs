/*!
 * Matrix spaces, the rank 2 tensor spaces.
 *
 * A [`MatrixSpace`] of `rows x columns` matrices is built on the tensor space of shape
 * `[rows, columns]`, so matrices have all the element wise operators of tensors, and adds
 * row by column multiplication, transposition, and for square matrices trace, determinant
 * and identity.
 *
 * ```
 * use algebra_spaces::fields::Real;
 * use algebra_spaces::matrices::MatrixSpace;
 *
 * let r2x2 = MatrixSpace::square(Real, 2).unwrap();
 * let matrix = r2x2.element(vec![
 *     1.0, 2.0,
 *     3.0, 4.0]).unwrap();
 * assert_eq!(matrix.trace().unwrap().value(), &5.0);
 * assert_eq!(matrix.determinant().unwrap().value(), &-2.0);
 *
 * let identity = r2x2.identity().unwrap();
 * assert_eq!(matrix.multiplication(&identity).unwrap(), matrix);
 * ```
 *
 * Square only operations on a matrix which is not square fail with `NotSquare` rather than
 * being absent.
 */

use std::sync::OnceLock;

use crate::errors::{SpaceError, mismatch};
use crate::linear_algebra;
use crate::operands::Operand;
use crate::scalars::{Scalar, ScalarStructure};
use crate::tensors::TensorSpace;
use crate::tensors::contraction::contract;
use crate::tensors::indexing::matrix_to_array_index;
use crate::tensors::operations::lifted_group_operators;
use crate::vectors::{Vector, VectorSpace};

/// The maximum row and column lengths are usize, due to the internal storage being a flat Vec
pub type Row = usize;
pub type Column = usize;

/**
 * The space of `rows x columns` matrices over some scalar structure.
 */
#[derive(Clone, Debug)]
pub struct MatrixSpace<S: ScalarStructure> {
    tensors: TensorSpace<S>,
    rows: Row,
    columns: Column,
}

/**
 * An element of a [`MatrixSpace`], holding its values in row major order.
 *
 * Matrices are immutable, every operation returns a new matrix. The determinant of a square
 * matrix is computed the first time it is asked for and then kept.
 */
#[derive(Clone, Debug)]
pub struct Matrix<S: ScalarStructure> {
    space: MatrixSpace<S>,
    data: Vec<S::Value>,
    determinant: OnceLock<S::Value>,
}

/**
 * The result of transposing a matrix.
 *
 * Transposing a 1 x N row matrix produces an N dimensional vector rather than an N x 1
 * matrix, every other matrix transposes to a matrix.
 */
#[derive(Clone, Debug)]
pub enum Transposed<S: ScalarStructure> {
    Vector(Vector<S>),
    Matrix(Matrix<S>),
}

impl<S: ScalarStructure> MatrixSpace<S> {
    /**
     * Creates the space of `rows x columns` matrices. Both must be at least 1.
     */
    pub fn new(structure: S, rows: Row, columns: Column) -> Result<MatrixSpace<S>, SpaceError> {
        Ok(MatrixSpace {
            tensors: TensorSpace::new(structure, [rows, columns])?,
            rows,
            columns,
        })
    }

    /**
     * Creates the space of `size x size` square matrices.
     */
    pub fn square(structure: S, size: usize) -> Result<MatrixSpace<S>, SpaceError> {
        MatrixSpace::new(structure, size, size)
    }

    pub fn rows(&self) -> Row {
        self.rows
    }

    pub fn columns(&self) -> Column {
        self.columns
    }

    /**
     * Returns the dimensionality of matrices in this space in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        (self.rows, self.columns)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    pub(crate) fn adopt(&self, data: Vec<S::Value>) -> Matrix<S> {
        debug_assert_eq!(data.len(), self.rows * self.columns);
        Matrix {
            space: self.clone(),
            data,
            determinant: OnceLock::new(),
        }
    }

    /**
     * Returns the space of matrices of this size over the same structure, which is this
     * space itself when the size matches.
     */
    pub fn derive(&self, rows: Row, columns: Column) -> Result<MatrixSpace<S>, SpaceError> {
        if (rows, columns) == self.size() {
            return Ok(self.clone());
        }
        tracing::trace!(rows, columns, "derived matrix space");
        MatrixSpace::new(self.structure().clone(), rows, columns)
    }

    fn require_square(&self, operation: &'static str) -> Result<(), SpaceError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(SpaceError::NotSquare {
                operation,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    // Works out how many columns the right operand of a multiplication has, it must have
    // as many rows as this space has columns.
    fn right_columns<O>(&self, right: &O) -> Result<Column, SpaceError>
    where
        O: Operand<S::Value> + ?Sized,
    {
        let expected = format!("{} rows", self.columns);
        match right.shape() {
            Some(&[rows, columns]) if rows == self.columns => Ok(columns),
            Some(&[length]) if length == self.columns => Ok(1),
            Some(shape) => Err(mismatch("multiplication", expected, format!("shape {:?}", shape))),
            None => {
                let length = right.to_data().len();
                if length > 0 && length % self.columns == 0 {
                    self.tensors.members(right.to_data())?;
                    Ok(length / self.columns)
                } else {
                    Err(mismatch("multiplication", expected, format!("{} values", length)))
                }
            }
        }
    }

    /**
     * Multiplies a matrix of this space by a matrix with as many rows as this space has
     * columns, row by column.
     *
     * The right operand may be a matrix, a vector (treated as a column) or raw data whose
     * length is a multiple of this space's columns. The product of a `L x M` and a `M x N`
     * matrix is a `L x N` matrix, in a space derived for that size.
     *
     * ```
     * use algebra_spaces::fields::Real;
     * use algebra_spaces::matrices::MatrixSpace;
     * let r2x3 = MatrixSpace::new(Real, 2, 3).unwrap();
     * let product = r2x3.multiplication(
     *     [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
     *     [1.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
     * assert_eq!(product.size(), (2, 2));
     * assert_eq!(product.data(), &[4.0, 5.0, 10.0, 11.0]);
     * ```
     */
    pub fn multiplication(
        &self,
        left: impl Operand<S::Value>,
        right: impl Operand<S::Value>,
    ) -> Result<Matrix<S>, SpaceError> {
        let left = self.tensors.coerce("multiplication", &left)?;
        let right_columns = self.right_columns(&right)?;
        let product = linear_algebra::row_by_column_multiplication(
            self.structure(),
            left,
            self.rows,
            right.to_data(),
            right_columns,
        );
        let space = self.derive(self.rows, right_columns)?;
        let product = space.tensors.checked(product)?;
        Ok(space.adopt(product))
    }

    /**
     * Computes the transpose of a matrix of this space.
     *
     * Transposing a `1 x N` row matrix gives an `N` dimensional vector, any other matrix
     * gives the `columns x rows` matrix.
     */
    pub fn transpose(&self, matrix: impl Operand<S::Value>) -> Result<Transposed<S>, SpaceError> {
        let data = self.tensors.coerce("transpose", &matrix)?;
        let mut transposed = Vec::with_capacity(data.len());
        for j in 0..self.columns {
            for i in 0..self.rows {
                transposed.push(data[matrix_to_array_index(i, j, self.columns)].clone());
            }
        }
        if self.rows == 1 {
            let vectors = VectorSpace::new(self.structure().clone(), self.columns)?;
            Ok(Transposed::Vector(vectors.adopt(transposed)))
        } else {
            let space = self.derive(self.columns, self.rows)?;
            Ok(Transposed::Matrix(space.adopt(transposed)))
        }
    }

    /**
     * Calculates the trace of a square matrix, the sum of its diagonal, as the contraction
     * of its two axes.
     *
     * [https://en.wikipedia.org/wiki/Trace_(linear_algebra)](https://en.wikipedia.org/wiki/Trace_(linear_algebra))
     */
    pub fn trace(&self, matrix: impl Operand<S::Value>) -> Result<Scalar<S>, SpaceError> {
        self.require_square("trace")?;
        let data = self.tensors.coerce("trace", &matrix)?;
        let structure = self.structure();
        let (_, mut diagonal_sum) =
            contract(|a, b| structure.addition(a, b), (0, 1), self.shape(), data)?;
        match diagonal_sum.pop() {
            Some(trace) => Scalar::computed(structure.clone(), trace),
            None => Err(mismatch("trace", "1 value", "none")),
        }
    }

    /**
     * Computes the determinant of a square matrix by Laplace expansion.
     *
     * See [linear_algebra::determinant] for details.
     */
    pub fn determinant(&self, matrix: impl Operand<S::Value>) -> Result<Scalar<S>, SpaceError> {
        self.require_square("determinant")?;
        let data = self.tensors.coerce("determinant", &matrix)?;
        let determinant = linear_algebra::determinant(self.structure(), data, self.rows);
        Scalar::computed(self.structure().clone(), determinant)
    }

    /**
     * The identity matrix of a square space, with the structure's one along the diagonal
     * and its zero everywhere else.
     */
    pub fn identity(&self) -> Result<Matrix<S>, SpaceError> {
        self.require_square("identity")?;
        let structure = self.structure();
        let data = (0..self.rows * self.columns)
            .map(|index| {
                if index / self.columns == index % self.columns {
                    structure.one()
                } else {
                    structure.zero()
                }
            })
            .collect();
        Ok(self.adopt(data))
    }
}

lifted_group_operators!(MatrixSpace, Matrix);

impl<S: ScalarStructure> Matrix<S> {
    pub fn rows(&self) -> Row {
        self.space.rows
    }

    pub fn columns(&self) -> Column {
        self.space.columns
    }

    /**
     * Returns the dimensionality of this matrix in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        self.space.size()
    }

    pub fn is_square(&self) -> bool {
        self.space.is_square()
    }

    /**
     * Gets a reference to the value at this row and column, if it is within the matrix.
     * Rows and Columns are 0 indexed.
     */
    pub fn get(&self, row: Row, column: Column) -> Option<&S::Value> {
        if row >= self.rows() || column >= self.columns() {
            return None;
        }
        self.data.get(matrix_to_array_index(row, column, self.columns()))
    }

    /**
     * Multiplies this matrix by another on the right, row by column.
     */
    pub fn multiplication(&self, right: impl Operand<S::Value>) -> Result<Matrix<S>, SpaceError> {
        self.space.multiplication(self, right)
    }

    pub fn transposed(&self) -> Result<Transposed<S>, SpaceError> {
        self.space.transpose(self)
    }

    pub fn trace(&self) -> Result<Scalar<S>, SpaceError> {
        self.space.trace(self)
    }

    /**
     * The determinant of this matrix, computed on first use.
     */
    pub fn determinant(&self) -> Result<Scalar<S>, SpaceError> {
        self.space.require_square("determinant")?;
        let structure = self.space.structure();
        let determinant = self
            .determinant
            .get_or_init(|| linear_algebra::determinant(structure, &self.data, self.rows()));
        Scalar::computed(structure.clone(), determinant.clone())
    }
}

impl<S: ScalarStructure> Transposed<S> {
    pub fn data(&self) -> &[S::Value] {
        match self {
            Transposed::Vector(vector) => vector.data(),
            Transposed::Matrix(matrix) => matrix.data(),
        }
    }

    /**
     * Transposes the result again, giving back a result equal to the matrix originally
     * transposed. For an `N x 1` column this is an `N` dimensional vector, which compares
     * equal to the column it came from.
     */
    pub fn transposed(&self) -> Result<Transposed<S>, SpaceError> {
        match self {
            Transposed::Vector(vector) => Ok(Transposed::Matrix(vector.transposed()?)),
            Transposed::Matrix(matrix) => matrix.transposed(),
        }
    }

    /**
     * Returns the matrix if the result is one, or None for the vector from a row matrix.
     */
    pub fn into_matrix(self) -> Option<Matrix<S>> {
        match self {
            Transposed::Matrix(matrix) => Some(matrix),
            Transposed::Vector(_) => None,
        }
    }

    /**
     * Returns the vector if the result is one, or None if it is a matrix.
     */
    pub fn into_vector(self) -> Option<Vector<S>> {
        match self {
            Transposed::Vector(vector) => Some(vector),
            Transposed::Matrix(_) => None,
        }
    }
}

/**
 * Results are equal when they hold equal values in the same shape, treating a vector as the
 * column matrix it multiplies as, so an `N` dimensional vector equals an `N x 1` matrix.
 */
impl<S: ScalarStructure> PartialEq for Transposed<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Transposed::Vector(x), Transposed::Vector(y)) => x == y,
            (Transposed::Matrix(x), Transposed::Matrix(y)) => x == y,
            (Transposed::Vector(vector), Transposed::Matrix(column))
            | (Transposed::Matrix(column), Transposed::Vector(vector)) => {
                column.size() == (vector.dimension(), 1)
                    && column.space().tensor_space().equal_data(column.data(), vector.data())
            }
        }
    }
}
