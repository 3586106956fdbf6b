/*!
 * Error types for constructing spaces, elements and operator tables.
 */

use thiserror::Error;

/**
 * An error from constructing an element or applying an operator to some operands.
 *
 * No operation ever mutates an existing element, so an error never leaves anything in a
 * partially modified state. The failing call simply returns no result.
 */
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SpaceError {
    #[error("Data of length {actual} does not fit shape {shape:?} which holds {expected} values")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid shape {0:?}, every axis must have a length of at least 1")]
    InvalidShape(Vec<usize>),

    #[error("Value at position {position} does not belong to the scalar structure")]
    NotInStructure { position: usize },

    #[error("Axes {axes:?} cannot be contracted on shape {shape:?}")]
    IncompatibleAxes {
        axes: (usize, usize),
        shape: Vec<usize>,
    },

    #[error("Mismatched operands for {operation}, expected {expected} but got {actual}")]
    DimensionMismatch {
        operation: &'static str,
        expected: String,
        actual: String,
    },

    #[error("{operation} is not supported {reason}")]
    UnsupportedOperation {
        operation: &'static str,
        reason: String,
    },

    #[error("{operation} is only defined for square matrices, this matrix is {rows}x{columns}")]
    NotSquare {
        operation: &'static str,
        rows: usize,
        columns: usize,
    },

    #[error("Value has no multiplicative inverse")]
    NotInvertible,

    #[error("Unknown operator {0}")]
    UnknownOperator(String),

    #[error("{operator} takes {expected} operands but was given {actual}")]
    Arity {
        operator: &'static str,
        expected: &'static str,
        actual: usize,
    },
}

/**
 * An error indicating the operator alias configuration could not be turned into a lookup
 * table.
 */
#[derive(Error, Debug)]
pub enum OperatorTableError {
    #[error("Operator table is not valid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Operator table names unknown operator {0}")]
    UnknownOperator(String),

    #[error("Alias {alias} is claimed by both {first} and {second}")]
    DuplicateAlias {
        alias: String,
        first: &'static str,
        second: &'static str,
    },
}

pub(crate) fn mismatch(
    operation: &'static str,
    expected: impl ToString,
    actual: impl ToString,
) -> SpaceError {
    SpaceError::DimensionMismatch {
        operation,
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

#[test]
fn error_messages_name_the_problem() {
    let error = SpaceError::ShapeMismatch {
        shape: vec![2, 3],
        expected: 6,
        actual: 5,
    };
    assert_eq!(
        "Data of length 5 does not fit shape [2, 3] which holds 6 values",
        error.to_string()
    );
    let error = SpaceError::NotSquare {
        operation: "trace",
        rows: 2,
        columns: 3,
    };
    assert_eq!(
        "trace is only defined for square matrices, this matrix is 2x3",
        error.to_string()
    );
}
