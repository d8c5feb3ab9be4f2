use log::{debug, info};
use thiserror::Error;

use crate::{
    consistency,
    helpers::round3,
    model::{BwmModel, ModelBounds, Variable},
    problem::{ComparisonInput, InputError},
    solution::SolutionResult,
    solver::{self, Solver, SolverTryNew},
    solvers::MinilpSolver,
};

#[derive(Clone, Debug, PartialEq, Error)]
pub enum BwmError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error(transparent)]
    Solver(#[from] solver::Error),
}

impl BwmError {
    /// Stable code for programmatic handling.
    pub fn kind(&self) -> &'static str {
        match self {
            BwmError::InvalidInput(_) => "invalid_input",
            BwmError::Solver(solver::Error::Infeasible | solver::Error::Unbounded) => "infeasible",
            BwmError::Solver(solver::Error::Unavailable(_)) => "solver_unavailable",
            BwmError::Solver(solver::Error::Failed(_)) => "solver_failure",
        }
    }
}

/// Solves with the default weight bounds and the `minilp` backend.
pub fn solve(input: &ComparisonInput) -> Result<SolutionResult, BwmError> {
    solve_with::<MinilpSolver>(input, &ModelBounds::default())
}

/// Builds the BWM model, optimises it with backend `S` and scores the optimum.
pub fn solve_with<S>(
    input: &ComparisonInput,
    bounds: &ModelBounds,
) -> Result<SolutionResult, BwmError>
where
    S: Solver + SolverTryNew<S>,
{
    let model = BwmModel::build(input, bounds)?;

    let mut solver = S::try_new(&model.program)?;
    let lp_solution = solver.solve()?;
    debug!(
        "optimum found: objective: {}, solve time: {:?}",
        lp_solution.objective_value(),
        lp_solution.solve_time()
    );

    let value_of = |var: Variable| {
        lp_solution.var_value(var).ok_or_else(|| {
            solver::Error::Failed(format!("no value reported for variable {}", var.idx()))
        })
    };
    let weights = model
        .weights
        .iter()
        .map(|&w| value_of(w))
        .collect::<Result<Vec<f64>, _>>()?;
    // Solver noise can leave xi a hair below zero.
    let optimal_xi = value_of(model.xi)?.max(0.0);
    let consistency_ratio = consistency::evaluate(input.best_to_others(), optimal_xi);

    info!(
        "aB: {:?}, aW: {:?}, best: {}, worst: {} -> weights: {:?}, xi: {:.3}, ratio: {:.3}",
        input.best_to_others(),
        input.others_to_worst(),
        input.best_index(),
        input.worst_index(),
        round3(&weights),
        optimal_xi,
        consistency_ratio,
    );

    Ok(SolutionResult {
        weights,
        optimal_xi,
        consistency_ratio,
    })
}
