//! Defines the coefficient-construction strategies.
//!
//! Provides the [`Algorithm`] enum. Both strategies produce the same
//! Newton coefficient vector; they differ only in what they keep around.

/// Divided-difference construction variants.
/// - [`Algorithm::NewtonTable`]   materializes the full triangular table
/// - [`Algorithm::NewtonInPlace`] keeps a single row, O(n) space
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    NewtonTable,
    NewtonInPlace,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::NewtonTable   => "newton_table",
            Algorithm::NewtonInPlace => "newton_in_place",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
