//! Dense matrix storage for rating, feature and similarity data.

use serde::{Deserialize, Serialize};

/// Dense row-major matrix.
///
/// Rows are entities (users, movies), columns are features (movie ratings,
/// vocabulary terms) or, for similarity matrices, the same entities again.
///
/// # Examples
///
/// ```
/// use movierec::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Wrap row-major `data` as a `rows` × `cols` matrix.
    ///
    /// # Errors
    ///
    /// Fails when `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, &'static str> {
        if data.len() != rows * cols {
            return Err("Data length must equal rows * cols");
        }
        Ok(Self { data, rows, cols })
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row count.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Value at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Overwrite the value at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a row as a mutable slice.
    pub fn row_mut(&mut self, row_idx: usize) -> &mut [T] {
        let start = row_idx * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterates rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Row-major backing storage.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// All-zero `rows` × `cols` matrix.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Euclidean norm of every row.
    #[must_use]
    pub fn row_norms(&self) -> Vec<f64> {
        (0..self.rows)
            .map(|i| self.row(i).iter().map(|x| x * x).sum::<f64>().sqrt())
            .collect()
    }

    /// Scales every row with a non-zero norm to unit length.
    ///
    /// Zero rows are left untouched.
    pub fn normalize_rows_l2(&mut self) {
        let norms = self.row_norms();
        for (i, norm) in norms.into_iter().enumerate() {
            if norm > 0.0 {
                for x in self.row_mut(i) {
                    *x /= norm;
                }
            }
        }
    }

    /// Whether the matrix is square and equal to its transpose within `tol`.
    #[must_use]
    pub fn is_symmetric(&self, tol: f64) -> bool {
        if self.rows != self.cols {
            return false;
        }
        (0..self.rows).all(|i| {
            (i + 1..self.cols).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol)
        })
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
