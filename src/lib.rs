//! Newton divided-difference polynomial interpolation.
//!
//! See [`interpolation`] for the table builder, the evaluator and the
//! curve-sampling helpers.

pub mod interpolation;
