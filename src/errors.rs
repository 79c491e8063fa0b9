//! Errors reported by the fallible operations: matrix inversion and text parsing.

/// Everything that can go wrong in this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// (NotInvertible) The determinant of the matrix is exactly zero
    #[error("(NotInvertible) {operation}: determinant is {determinant}")]
    NotInvertible {
        operation: &'static str,
        determinant: f64,
    },
    /// (Parse) The text did not contain the expected number of decimals
    #[error("(Parse) {type_name}: expected {expected} numbers, {message}")]
    Parse {
        type_name: &'static str,
        expected: usize,
        message: String,
    },
}

impl MathError {
    pub(crate) const fn not_invertible(operation: &'static str, determinant: f64) -> Self {
        Self::NotInvertible {
            operation,
            determinant,
        }
    }

    pub(crate) fn parse(type_name: &'static str, expected: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            type_name,
            expected,
            message: message.into(),
        }
    }
}

pub type MathResult<T> = Result<T, MathError>;
