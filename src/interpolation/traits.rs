use crate::interpolation::errors::InterpolationError;

/// Anything that can be evaluated pointwise once its coefficients exist.
///
/// [`crate::interpolation::NewtonPolynomial`] implements it over cached
/// Newton coefficients, and [`crate::interpolation::curve::sample`] accepts
/// any implementor to draw a curve without rebuilding the table.
pub trait Interpolator {
    /// evaluates single point, rejecting a non-finite `x`
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// evaluates many points against the same coefficients
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// evaluates many points on the rayon pool, same output as `eval_many`
    #[cfg(feature = "parallel")]
    fn par_eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError>
    where
        Self: Sync,
    {
        use rayon::prelude::*;
        xs.par_iter().map(|&xq| self.eval(xq)).collect()
    }
}
