use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("shape mismatch: x has {x_len} elements, y has {y_len}")]
    ShapeMismatch { x_len: usize, y_len: usize },

    #[error("duplicate node: x[{first}] and x[{second}] both equal {x}")]
    DuplicateNode { first: usize, second: usize, x: f64 },

    #[error("insufficient data: got {got} point(s), need at least {need}")]
    InsufficientData { got: usize, need: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("non-finite query point {got}")]
    NonFiniteQuery { got: f64 },

    #[error("invalid x_tol {got} must be finite and >= 0")]
    InvalidXTol { got: f64 },

    #[error("evaluation point {got} out of bounds in ({x_min}, {x_max})")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("invalid sample count {got}, need at least 2")]
    InvalidSampleCount { got: usize },
}
