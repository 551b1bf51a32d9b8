//! Shared configuration and input validation.
//!
//! Provides [`CommonCfg`] with the default node-separation tolerance
//! [`DEFAULT_X_TOL`], and the node/shape checks used by every entry point
//! that accepts samples.
//!
//! [`CommonCfg`] — universal fields
//! - `x`             : interpolation nodes, any order, pairwise distinct
//! - `y`             : sample values at the nodes
//! - `x_eval`        : query points
//! - `x_min_spacing` : two nodes closer than or equal to this are duplicates
//! - `extrapolate`   : whether queries outside the node range are allowed
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.


use std::cmp::Ordering;
use crate::interpolation::errors::InterpolationError;

/// Exact equality: only coinciding nodes are rejected.
pub const DEFAULT_X_TOL: f64 = 0.0;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
    pub(crate) extrapolate  : bool,
}

impl<'a> Default for CommonCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
            extrapolate  : true,
        }
    }

    /// Final check before a run; setters already validated each field alone.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::InsufficientData { got: x.len().min(y.len()), need: 1 });
        }
        validate_shape(x.len(), y.len())
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }
    pub fn extrapolate(&self) -> bool { self.extrapolate }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
    pub(crate) fn with_extrapolate(&mut self, v: bool) { self.extrapolate = v; }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

pub(crate) fn validate_shape(x_len: usize, y_len: usize) -> Result<(), InterpolationError> {
    if x_len != y_len {
        return Err(InterpolationError::ShapeMismatch { x_len, y_len });
    }
    Ok(())
}

/// Finds two nodes whose gap is `<= tol`.
///
/// Nodes are visited in sorted order so only neighbours need comparing;
/// the returned indices refer to the caller's order with `first < second`.
pub(crate) fn duplicate_node(x: &[f64], tol: f64) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&a, &b| match x[a].total_cmp(&x[b]) {
        Ordering::Equal => a.cmp(&b),
        ord => ord,
    });

    order.windows(2).find_map(|w| {
        let (a, b) = (w[0], w[1]);
        if (x[b] - x[a]).abs() <= tol {
            Some((a.min(b), a.max(b)))
        } else {
            None
        }
    })
}

/// Checks a node sequence: non-empty, finite, pairwise distinct under `tol`.
pub(crate) fn validate_nodes(x: &[f64], tol: f64) -> Result<(), InterpolationError> {
    if x.is_empty() {
        return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
    }
    if let Some(idx) = non_finite_idx(x) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if let Some((first, second)) = duplicate_node(x, tol) {
        return Err(InterpolationError::DuplicateNode { first, second, x: x[first] });
    }
    Ok(())
}

/// Smallest and largest node. `x` must be non-empty.
pub(crate) fn node_range(x: &[f64]) -> (f64, f64) {
    x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::config::validate_nodes(v, self.common.x_min_spacing)?;

                // length agreement check 
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 {
                    $crate::interpolation::config::validate_shape(v.len(), y_len)?;
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                if x_len != 0 {
                    $crate::interpolation::config::validate_shape(x_len, v.len())?;
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            /// Nodes already set are re-checked against the new tolerance.
            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v < 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }
                if !self.common.x.is_empty() {
                    $crate::interpolation::config::validate_nodes(self.common.x, v)?;
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }

            pub fn set_extrapolate(mut self, v: bool) -> Self {
                self.common.with_extrapolate(v);
                self
            }
        }
    };
}
pub(crate) use impl_common_cfg;
