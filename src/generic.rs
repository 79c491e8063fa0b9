//! Shape-agnostic read access shared by every vector and matrix type.
//!
//! [`Generic`] is how the `from_generic` constructors accept "any vector or
//! matrix" and convert by shape. Vectors report one column.

use crate::float_types::Scalar;

/// Read-only view of a vector or matrix as a `rows x cols` grid.
pub trait Generic<T: Scalar> {
    /// Number of rows; the component count for vectors.
    fn rows(&self) -> usize;

    /// Number of columns; `1` for vectors.
    fn cols(&self) -> usize;

    /// Total element count.
    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Element at `(col, row)`. Panics when out of range.
    fn get(&self, col: usize, row: usize) -> T;

    /// All elements in column-major order.
    fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size());
        for col in 0..self.cols() {
            for row in 0..self.rows() {
                out.push(self.get(col, row));
            }
        }
        out
    }

    /// True if every element is exactly zero.
    fn is_zero(&self) -> bool {
        self.to_vec().iter().all(|v| *v == T::zero())
    }
}

/// `(cols, rows)` of a value seen through [`Generic`].
pub(crate) fn shape<T: Scalar>(g: &dyn Generic<T>) -> (usize, usize) {
    (g.cols(), g.rows())
}
