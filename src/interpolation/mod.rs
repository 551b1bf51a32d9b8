pub mod algorithms; 
pub mod config; 
pub mod errors; 
pub mod report; 
pub mod traits;
pub use traits::Interpolator;

pub mod table; 
pub mod newton; 
pub mod curve;

pub use newton::{evaluate, NewtonPolynomial};
pub use table::{divided_differences, DividedDifferenceTable};
