use thiserror::Error;

use crate::{model::LinearProgram, solution::LpSolution};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("problem is infeasible")]
    Infeasible,
    #[error("problem is unbounded")]
    Unbounded,
    /// The backend could not be set up or invoked at all.
    #[error("solver unavailable: {0}")]
    Unavailable(String),
    /// The backend terminated without a usable optimum.
    #[error("solver failed: {0}")]
    Failed(String),
}

/// Builds a backend instance for one program.
pub trait SolverTryNew<T> {
    fn try_new(problem: &LinearProgram) -> Result<T, Error>;
}

pub trait Solver {
    fn solve(&mut self) -> Result<LpSolution, Error>;
}
