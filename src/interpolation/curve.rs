//! Dense curve sampling for plotting.
//!
//! A plotting surface draws the interpolant by evaluating it at many evenly
//! spaced points across the node range. The coefficients are built once and
//! reused for every sample.


use log::trace;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::newton::NewtonPolynomial;
use crate::interpolation::traits::Interpolator;


/// Sampled curve; `x` is increasing and `y[i]` is the value at `x[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    pub fn len(&self) -> usize { self.x.len() }
    /// Always `false`: every curve holds at least two samples.
    pub fn is_empty(&self) -> bool { self.x.is_empty() }
}


/// `n` evenly spaced points from `start` to `end`, both included.
///
/// # Errors
/// - [`InterpolationError::InvalidSampleCount`] if `n < 2`
/// - [`InterpolationError::NonFiniteVec`] if an end point is not finite
///   (`idx` 0 for `start`, 1 for `end`)
pub fn linspace(start: f64, end: f64, n: usize) -> Result<Vec<f64>, InterpolationError> {
    if n < 2 {
        return Err(InterpolationError::InvalidSampleCount { got: n });
    }
    if let Some(idx) = [start, end].iter().position(|v| !v.is_finite()) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }

    // blend the end points so `end - start` is never formed; it can overflow
    let last = (n - 1) as f64;
    let mut xs: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64 / last;
            start * (1.0 - t) + end * t
        })
        .collect();
    // pin the end point against accumulated rounding
    xs[n - 1] = end;
    Ok(xs)
}


/// Evaluates `interp` at `n` evenly spaced points over `[start, end]`.
pub fn sample<I: Interpolator + ?Sized>(
    interp: &I,
    start: f64,
    end: f64,
    n: usize,
) -> Result<Curve, InterpolationError> {
    let x = linspace(start, end, n)?;
    let y = interp.eval_many(&x)?;
    trace!("sampled {} points over [{}, {}]", n, start, end);
    Ok(Curve { x, y })
}


/// Samples `poly` across the span of its own nodes.
///
/// # Errors
/// - [`InterpolationError::InsufficientData`] if the polynomial has fewer
///   than 2 nodes, since the span would be a single point
/// - [`InterpolationError::InvalidSampleCount`] if `n < 2`
pub fn sample_curve(poly: &NewtonPolynomial, n: usize) -> Result<Curve, InterpolationError> {
    let got = poly.nodes().len();
    if got < 2 {
        return Err(InterpolationError::InsufficientData { got, need: 2 });
    }
    let (x_min, x_max) = poly.x_range();
    sample(poly, x_min, x_max, n)
}
