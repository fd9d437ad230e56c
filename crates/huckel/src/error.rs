use thiserror::Error;

/// Failure modes of the Hückel pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Atom count violates the topology's size precondition.
    #[error("{topology} topology requires {requirement}, got n = {n}")]
    InvalidSize {
        topology: &'static str,
        n: usize,
        requirement: &'static str,
    },

    /// The eigen-solver produced non-finite values instead of a spectrum.
    #[error("eigen-decomposition failed to converge")]
    Numerical,
}
