//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation in
//! [Newton form](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients come from [`crate::interpolation::table`] and are evaluated
//! by nested multiplication: the running product `(xq - x0)...(xq - x_{k-1})`
//! gains one factor per term instead of being recomputed.
//!
//! Three ways in:
//! - [`evaluate`] : one query against caller-held nodes and coefficients
//! - [`NewtonPolynomial`] : owned nodes + coefficients, reused across queries
//! - [`interpolate`] : batch run driven by a [`NewtonCfg`]


use log::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, node_range, non_finite_idx, validate_shape, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::table::{divided_differences, divided_differences_unchecked, DividedDifferenceTable};
use crate::interpolation::traits::Interpolator;


/// Newton interpolation configuration 
/// 
/// # Fields 
/// - `common`    : [`CommonCfg`] 
/// - `algorithm` : coefficient construction strategy
///
/// # Construction 
/// - Use [`NewtonCfg::new`] then optional setters. 
///
/// # Defaults 
/// - Nodes must differ exactly;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default. 
/// - Extrapolation outside the node range is allowed.
/// - [`Algorithm::NewtonTable`].
#[derive(Debug, Clone, Copy)] 
pub struct NewtonCfg<'a> { 
    common: CommonCfg<'a>, 
    algorithm: Algorithm,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), algorithm: Algorithm::default() }
    }

    pub fn set_algorithm(mut self, v: Algorithm) -> Self {
        self.algorithm = v;
        self
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }
}
impl<'a> Default for NewtonCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(NewtonCfg<'a>);


/// `c[0] + c[1](xq - x0) + c[2](xq - x0)(xq - x1) + ...`
///
/// `x` and `coeffs` must be non-empty and of equal length.
#[inline]
pub(crate) fn nested_product(x: &[f64], coeffs: &[f64], xq: f64) -> f64 {
    let mut result  = coeffs[0];
    let mut product = 1.0;
    for k in 1..coeffs.len() {
        product *= xq - x[k - 1];
        result  += coeffs[k] * product;
    }
    result
}


/// Evaluates the Newton-form polynomial with nodes `x` and coefficients
/// `coeffs` at `query`.
///
/// `coeffs` is trusted to come from the same `x` in the same order; nothing
/// checks that. Queries outside the node range extrapolate.
///
/// # Errors
/// - [`InterpolationError::ShapeMismatch`] if `x.len() != coeffs.len()`
///   (`y_len` reports the coefficient count)
/// - [`InterpolationError::InsufficientData`] if both are empty
/// - [`InterpolationError::NonFiniteVec`] if a node or coefficient is NaN or infinite
/// - [`InterpolationError::NonFiniteQuery`] if `query` is NaN or infinite
pub fn evaluate(x: &[f64], coeffs: &[f64], query: f64) -> Result<f64, InterpolationError> {
    validate_form(x, coeffs)?;
    check_query(query)?;
    Ok(nested_product(x, coeffs, query))
}


/// Shape and finiteness of a caller-supplied Newton form.
fn validate_form(x: &[f64], coeffs: &[f64]) -> Result<(), InterpolationError> {
    validate_shape(x.len(), coeffs.len())?;
    if x.is_empty() {
        return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
    }
    if let Some(idx) = non_finite_idx(x).or_else(|| non_finite_idx(coeffs)) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    Ok(())
}

#[inline]
fn check_query(xq: f64) -> Result<(), InterpolationError> {
    if !xq.is_finite() {
        return Err(InterpolationError::NonFiniteQuery { got: xq });
    }
    Ok(())
}


/// Interpolating polynomial in Newton form.
///
/// Holds its own copy of the nodes; build a new one when the samples change.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial {
    nodes : Vec<f64>,
    coeffs: Vec<f64>,
}

impl NewtonPolynomial {
    /// Interpolates the samples `(x[i], y[i])`.
    ///
    /// # Errors
    /// Same as [`DividedDifferenceTable::build`].
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        let coeffs = divided_differences(x, y)?;
        Ok(Self { nodes: x.to_vec(), coeffs })
    }

    /// Takes the top row of an already built table.
    pub fn from_table(table: &DividedDifferenceTable) -> Self {
        Self { nodes: table.nodes().to_vec(), coeffs: table.coefficients() }
    }

    /// Wraps caller-supplied coefficients.
    ///
    /// Shapes and finiteness are checked; whether `coeffs` were derived
    /// from `x` is not.
    pub fn from_coefficients(x: &[f64], coeffs: &[f64]) -> Result<Self, InterpolationError> {
        validate_form(x, coeffs)?;
        Ok(Self { nodes: x.to_vec(), coeffs: coeffs.to_vec() })
    }

    pub fn nodes(&self) -> &[f64] { &self.nodes }
    pub fn coefficients(&self) -> &[f64] { &self.coeffs }
    pub fn degree(&self) -> usize { self.coeffs.len() - 1 }

    /// `(min x, max x)` over the nodes.
    pub fn x_range(&self) -> (f64, f64) { node_range(&self.nodes) }

    /// Value at `xq` with no checks; a non-finite `xq` gives a non-finite value.
    #[inline]
    pub fn value(&self, xq: f64) -> f64 {
        nested_product(&self.nodes, &self.coeffs, xq)
    }
}

impl Interpolator for NewtonPolynomial {
    #[inline]
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        check_query(x)?;
        Ok(self.value(x))
    }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Builds the coefficients once with `cfg.algorithm()`.
/// - For each evaluation point `xq` in `cfg.common.x_eval()`,
///   evaluates the polynomial by nested multiplication:
///
/// ```text
/// P(xq) = c[0] + c[1](xq - x[0]) + c[2](xq - x[0])(xq - x[1]) + ...
/// ```
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton_table"` or `"newton_in_place"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `coefficients`   : Newton coefficients
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::InsufficientData`] / [`InterpolationError::ShapeMismatch`]
///   if `x` or `y` was never set or they disagree.
/// - [`InterpolationError::OutOfBounds`] if extrapolation is disabled and an
///   evaluation point lies outside the node range.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> { 
    cfg.common.validate()?;

    let x     = cfg.common.x(); 
    let y     = cfg.common.y(); 
    let evals = cfg.common.x_eval(); 

    let n_provided  = x.len(); 
    let n_evaluated = evals.len(); 

    // setters already rejected duplicate and non-finite nodes
    let coeffs = match cfg.algorithm {
        Algorithm::NewtonTable   => DividedDifferenceTable::build_unchecked(x, y).coefficients(),
        Algorithm::NewtonInPlace => divided_differences_unchecked(x, y),
    };

    let mut report = InterpolationReport::new( 
        cfg.algorithm, 
        n_provided, 
        n_evaluated, 
    ); 
    report.evaluated.reserve(n_evaluated); 

    let (x_min, x_max) = node_range(x);

    for &xq in evals { 
        if !cfg.common.extrapolate() && (xq < x_min || xq > x_max) { 
            return Err(InterpolationError::OutOfBounds { 
                got: xq, 
                x_min,
                x_max 
            }); 
        }
        report.evaluated.push(nested_product(x, &coeffs, xq)); 
    }

    debug!("{}: {} nodes, {} queries", cfg.algorithm, n_provided, n_evaluated);

    report.coefficients = coeffs;
    Ok(report)
}
