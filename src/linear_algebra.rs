/*!
 * Linear algebra algorithms on flat, row major data.
 *
 * Note that these functions are also exposed as corresponding methods on the
 * [VectorSpace](crate::vectors::VectorSpace) and [MatrixSpace](crate::matrices::MatrixSpace)
 * types, which check the dimensions of their operands, but in depth documentation is only
 * presented here.
 *
 * Every algorithm works purely through the operations of the
 * [ScalarStructure](crate::scalars::ScalarStructure) it is given. None of them pivot or
 * otherwise try to improve numerical stability, the results are exactly what the structure's
 * operations produce.
 */

use crate::scalars::ScalarStructure;
use crate::tensors::indexing::matrix_to_array_index;

/**
 * Multiplies a `left_rows x N` matrix by an `N x right_columns` matrix, row by column.
 *
 * `N` is taken from the length of the left data, so the caller must ensure both sets of
 * data have consistent lengths. Each value of the `left_rows x right_columns` result at
 * `(i, k)` is the sum over `j` of `left[i, j] * right[j, k]`.
 *
 * # Panics
 *
 * Panics if the left data is empty or not a whole number of rows of `left_rows`, or if the
 * right data does not hold `N x right_columns` values. The [MatrixSpace](crate::matrices::MatrixSpace) methods only
 * call this with data they have already checked.
 *
 * ```
 * use algebra_spaces::fields::Real;
 * use algebra_spaces::linear_algebra::row_by_column_multiplication;
 * let identity = [1.0, 0.0, 0.0, 1.0];
 * let data = row_by_column_multiplication(&Real, &identity, 2, &identity, 2);
 * assert_eq!(data, vec![1.0, 0.0, 0.0, 1.0]);
 * ```
 */
pub fn row_by_column_multiplication<S: ScalarStructure>(
    structure: &S,
    left: &[S::Value],
    left_rows: usize,
    right: &[S::Value],
    right_columns: usize,
) -> Vec<S::Value> {
    // LxM * MxN -> LxN
    assert!(left_rows > 0, "Left matrix must have at least one row");
    let inner = left.len() / left_rows;
    assert!(inner > 0, "Left matrix must have at least one column");
    assert_eq!(left.len(), left_rows * inner, "Left data must fill its rows");
    assert_eq!(right.len(), inner * right_columns, "Right data must have {} rows", inner);
    let mut result = Vec::with_capacity(left_rows * right_columns);
    for i in 0..left_rows {
        for k in 0..right_columns {
            // compute dot product for each element in the new matrix
            let product = |j| {
                structure.multiplication(
                    &left[matrix_to_array_index(i, j, inner)],
                    &right[matrix_to_array_index(j, k, right_columns)],
                )
            };
            let mut sum = product(0);
            for j in 1..inner {
                sum = structure.addition(&sum, &product(j));
            }
            result.push(sum);
        }
    }
    result
}

/**
 * Computes the determinant of a square matrix of this size by Laplace expansion along the
 * first row. For a 2 x 2 matrix this is given by `ad - bc` for:
 * ```ignore
 * [
 *   a, b
 *   c, d
 * ]
 * ```
 *
 * Note that the determinant of a 1 x 1 matrix is just the element in the matrix. For larger
 * matrices each entry of the first row is multiplied by its minor, the determinant of the
 * matrix left after deleting that entry's row and column, with alternating signs applied by
 * the structure's negation.
 *
 * The expansion is recursive and takes factorial time in the size of the matrix. It is
 * intended for correctness over any structure rather than for large matrices.
 *
 * # Panics
 *
 * Panics if `size` is 0 or the data does not hold `size x size` values.
 *
 * [https://en.wikipedia.org/wiki/Laplace_expansion](https://en.wikipedia.org/wiki/Laplace_expansion)
 */
pub fn determinant<S: ScalarStructure>(structure: &S, data: &[S::Value], size: usize) -> S::Value {
    assert!(size > 0, "The determinant of an empty matrix is undefined");
    assert_eq!(data.len(), size * size, "Data must hold a {0} x {0} matrix", size);
    if size == 1 {
        return data[0].clone();
    }

    let mut sum: Option<S::Value> = None;
    for column in 0..size {
        let entry = &data[matrix_to_array_index(0, column, size)];
        let cofactor = structure.multiplication(entry, &minor(structure, data, size, 0, column));
        // -1 ^ (row + column) with row fixed at 0
        let term = if column % 2 == 0 {
            cofactor
        } else {
            structure.negation(&cofactor)
        };
        sum = Some(match sum {
            None => term,
            Some(total) => structure.addition(&total, &term),
        });
    }
    // size is at least 2 here so the loop always ran
    sum.unwrap_or_else(|| structure.zero())
}

/*
 * Computes the (i,j) minor of a square matrix by copying it. This is the
 * determinant of the matrix after deleting the ith row and the jth column.
 */
fn minor<S: ScalarStructure>(
    structure: &S,
    data: &[S::Value],
    size: usize,
    i: usize,
    j: usize,
) -> S::Value {
    let remaining = remove_row_and_column(data, size, i, j);
    determinant(structure, &remaining, size - 1)
}

fn remove_row_and_column<V: Clone>(data: &[V], size: usize, i: usize, j: usize) -> Vec<V> {
    let mut remaining = Vec::with_capacity((size - 1) * (size - 1));
    for row in (0..size).filter(|row| *row != i) {
        for column in (0..size).filter(|column| *column != j) {
            remaining.push(data[matrix_to_array_index(row, column, size)].clone());
        }
    }
    remaining
}

/**
 * Computes the cross product of two 3 dimensional vectors, the formal determinant
 * ```ignore
 * | e0 e1 e2 |
 * | a0 a1 a2 |
 * | b0 b1 b2 |
 * ```
 * which is `(a1 b2 - a2 b1, a2 b0 - a0 b2, a0 b1 - a1 b0)`.
 *
 * ```
 * use algebra_spaces::fields::Real;
 * use algebra_spaces::linear_algebra::cross_product;
 * let product = cross_product(&Real, &[3.0, -3.0, 1.0], &[4.0, 9.0, 2.0]);
 * assert_eq!(product, [-15.0, -2.0, 39.0]);
 * ```
 */
pub fn cross_product<S: ScalarStructure>(
    structure: &S,
    a: &[S::Value; 3],
    b: &[S::Value; 3],
) -> [S::Value; 3] {
    let term = |x: usize, y: usize| {
        structure.addition(
            &structure.multiplication(&a[x], &b[y]),
            &structure.negation(&structure.multiplication(&a[y], &b[x])),
        )
    };
    [term(1, 2), term(2, 0), term(0, 1)]
}

/**
 * Computes the scalar (dot) product of two vectors of the same length, the sum of
 * the products of each pair of values.
 *
 * # Panics
 *
 * Panics if the two vectors have different lengths. Empty vectors give the structure's zero.
 */
pub fn scalar_product<S: ScalarStructure>(structure: &S, a: &[S::Value], b: &[S::Value]) -> S::Value {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| structure.multiplication(x, y))
        .reduce(|sum, product| structure.addition(&sum, &product))
        .unwrap_or_else(|| structure.zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Real;

    #[test]
    fn check_determinant_2_by_2() {
        let data = [1.0, 2.0, 3.0, 4.0];
        // ad - bc
        assert_eq!(determinant(&Real, &data, 2), 1.0 * 4.0 - 2.0 * 3.0);
    }

    #[test]
    fn check_determinant_3_by_3() {
        // use the example from wikipedia
        // https://en.wikipedia.org/wiki/Determinant#n_%C3%97_n_matrices
        let m = [-1.0, 2.0, 3.0, 3.0, 4.0, -5.0, 5.0, -2.0, 3.0];
        let get = |i: usize, j: usize| m[i * 3 + j];
        let expected = 0.0
            + (get(0, 0) * get(1, 1) * get(2, 2))
            - (get(0, 0) * get(1, 2) * get(2, 1))
            - (get(0, 1) * get(1, 0) * get(2, 2))
            + (get(0, 1) * get(1, 2) * get(2, 0))
            + (get(0, 2) * get(1, 0) * get(2, 1))
            - (get(0, 2) * get(1, 1) * get(2, 0));
        assert_eq!(expected, determinant(&Real, &m, 3));
    }

    #[test]
    fn determinant_1_by_1() {
        assert_eq!(determinant(&Real, &[7.0], 1), 7.0);
    }

    #[test]
    fn determinant_4_by_4_upper_triangular() {
        // product of the diagonal
        let data = [
            2.0, 1.0, 5.0, 3.0,
            0.0, 3.0, 7.0, 1.0,
            0.0, 0.0, 1.0, 4.0,
            0.0, 0.0, 0.0, 5.0,
        ];
        assert_eq!(determinant(&Real, &data, 4), 30.0);
    }

    #[test]
    fn removing_rows_and_columns() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(remove_row_and_column(&data, 3, 0, 0), vec![5, 6, 8, 9]);
        assert_eq!(remove_row_and_column(&data, 3, 1, 2), vec![1, 2, 7, 8]);
    }

    #[test]
    fn non_square_multiplication() {
        // 2x3 * 3x1
        let left = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let right = [1.0, 0.0, -1.0];
        assert_eq!(row_by_column_multiplication(&Real, &left, 2, &right, 1), vec![-2.0, -2.0]);
    }

    #[test]
    #[should_panic]
    fn determinant_of_nothing() {
        determinant::<Real>(&Real, &[], 0);
    }

    #[test]
    #[should_panic]
    fn determinant_of_the_wrong_size() {
        determinant(&Real, &[1.0, 2.0, 3.0], 2);
    }

    #[test]
    #[should_panic]
    fn multiplication_with_no_rows() {
        row_by_column_multiplication(&Real, &[], 0, &[1.0], 1);
    }

    #[test]
    #[should_panic]
    fn multiplication_with_mismatched_inner_lengths() {
        // 1x2 * 3x1
        row_by_column_multiplication(&Real, &[1.0, 2.0], 1, &[1.0, 2.0, 3.0], 1);
    }

    #[test]
    fn dot_product() {
        assert_eq!(scalar_product(&Real, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }
}
