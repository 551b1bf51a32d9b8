//! Divided-Difference Table
//!
//! Builds the triangular table of
//! [divided differences](https://en.wikipedia.org/wiki/Divided_differences)
//! for an ordered sample set.
//!
//! Cell `(i, j)` holds the `j`-th order divided difference starting at
//! sample `i`, defined for `i + j < n`:
//!
//! ```text
//! f[i, 0] = y[i]
//! f[i, j] = (f[i+1, j-1] - f[i, j-1]) / (x[i+j] - x[i])
//! ```
//!
//! The top row `f[0, 0..n]` is the Newton coefficient vector.


use log::debug;

use crate::interpolation::config::{validate_nodes, validate_shape, non_finite_idx, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;


/// Immutable triangular table of divided differences.
///
/// Cells are packed column by column, so column `j` occupies `n - j`
/// contiguous slots and nothing outside `i + j < n` is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferenceTable {
    nodes: Vec<f64>,
    cells: Vec<f64>,
}

#[inline]
fn column_offset(n: usize, j: usize) -> usize {
    // sum of (n - k) for k in 0..j
    j * n - j * j.saturating_sub(1) / 2
}

impl DividedDifferenceTable {
    /// Builds the table, rejecting only exactly coinciding nodes.
    ///
    /// # Errors
    /// - [`InterpolationError::ShapeMismatch`] if `x.len() != y.len()`
    /// - [`InterpolationError::InsufficientData`] if there are no samples
    /// - [`InterpolationError::NonFiniteVec`] if any `x` or `y` is NaN or infinite
    /// - [`InterpolationError::DuplicateNode`] if two nodes coincide
    pub fn build(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        Self::build_with_tol(x, y, DEFAULT_X_TOL)
    }

    /// Same as [`DividedDifferenceTable::build`], treating nodes closer
    /// than or equal to `x_tol` as duplicates.
    pub fn build_with_tol(x: &[f64], y: &[f64], x_tol: f64) -> Result<Self, InterpolationError> {
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(InterpolationError::InvalidXTol { got: x_tol });
        }
        validate_samples(x, y, x_tol)?;
        Ok(Self::build_unchecked(x, y))
    }

    /// Fills the table order by order; order `j` reads only order `j - 1`.
    pub(crate) fn build_unchecked(x: &[f64], y: &[f64]) -> Self {
        let n = x.len();
        let mut cells = Vec::with_capacity(n * (n + 1) / 2);
        cells.extend_from_slice(y);

        for j in 1..n {
            let prev = column_offset(n, j - 1);
            for i in 0..n - j {
                let d = (cells[prev + i + 1] - cells[prev + i]) / (x[i + j] - x[i]);
                cells.push(d);
            }
        }

        debug!("built divided-difference table: n={}, cells={}", n, cells.len());

        Self { nodes: x.to_vec(), cells }
    }

    /// Number of samples `n`.
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Always `false` for a built table.
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Degree of the interpolating polynomial, `n - 1`.
    pub fn degree(&self) -> usize { self.len() - 1 }

    /// Interpolation nodes in sample order.
    pub fn nodes(&self) -> &[f64] { &self.nodes }

    /// Column 0, the sample values.
    pub fn values(&self) -> &[f64] { &self.cells[..self.len()] }

    /// All differences of order `j`, indexed by starting sample.
    pub fn column(&self, j: usize) -> Option<&[f64]> {
        let n = self.len();
        if j >= n {
            return None;
        }
        let start = column_offset(n, j);
        Some(&self.cells[start..start + (n - j)])
    }

    /// Cell `(i, j)`; `None` outside the triangle `i + j < n`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.column(j).and_then(|col| col.get(i).copied())
    }

    /// Top row of the table: the Newton-form coefficients.
    pub fn coefficients(&self) -> Vec<f64> {
        let n = self.len();
        (0..n).map(|j| self.cells[column_offset(n, j)]).collect()
    }
}


/// Computes Newton divided-difference coefficients without keeping the table.
///
/// Returns a coefficient vector `c` s.t. 
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`,
/// identical to [`DividedDifferenceTable::coefficients`].
///
/// # Errors
/// Same as [`DividedDifferenceTable::build`].
pub fn divided_differences(x: &[f64], y: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    validate_samples(x, y, DEFAULT_X_TOL)?;
    Ok(divided_differences_unchecked(x, y))
}

/// Backward sweep per order; after order `j`, `c[i]` holds `f[i - j, j]`.
#[inline]
pub(crate) fn divided_differences_unchecked(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut c = y.to_vec();

    for j in 1..n {
        for i in (j..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - j]);
        }
    }

    debug!("computed {} divided-difference coefficients in place", n);

    c
}


fn validate_samples(x: &[f64], y: &[f64], x_tol: f64) -> Result<(), InterpolationError> {
    validate_shape(x.len(), y.len())?;
    validate_nodes(x, x_tol)?;
    if let Some(idx) = non_finite_idx(y) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    Ok(())
}
