//! Defines the struct returned by batch interpolation.
//!
//! The report summarizes the strategy used, the number of data and
//! evaluation points, the Newton coefficients and the evaluated values.

use crate::interpolation::algorithms::Algorithm;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : coefficient strategy (e.g. `"newton_table"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `coefficients`   : Newton coefficients, top row of the divided-difference table
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub coefficients: Vec<f64>,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            coefficients: Vec::new(),
            evaluated: Vec::new(),
        }
    }
}
