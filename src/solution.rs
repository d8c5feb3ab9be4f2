use std::time::Duration;

use serde::Serialize;

use crate::model::Variable;

/// Optimal point returned by a [`crate::solver::Solver`].
#[derive(Debug, Clone)]
pub struct LpSolution {
    objective_val: f64,
    optimal_vars: Vec<f64>,
    solve_time: Duration,
}

impl LpSolution {
    pub fn new(objective_val: f64, optimal_vars: Vec<f64>, solve_time: Duration) -> Self {
        LpSolution {
            objective_val,
            optimal_vars,
            solve_time,
        }
    }

    pub fn objective_value(&self) -> f64 {
        self.objective_val
    }

    pub fn num_vars(&self) -> usize {
        self.optimal_vars.len()
    }

    /// Value of `var` at the optimum, `None` if the solver did not report it.
    pub fn var_value(&self, var: Variable) -> Option<f64> {
        self.optimal_vars.get(var.0).copied()
    }

    pub fn values(&self) -> &[f64] {
        &self.optimal_vars
    }

    pub fn solve_time(&self) -> Duration {
        self.solve_time
    }
}

/// Criteria weights and their consistency for one set of judgments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionResult {
    pub weights: Vec<f64>,
    pub optimal_xi: f64,
    pub consistency_ratio: f64,
}
