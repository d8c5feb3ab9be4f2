//! Backend on top of the `minilp` sparse dual simplex.

use log::debug;
use stopwatch::Stopwatch;

use crate::{
    model::{ComparisonOp, LinearProgram},
    solution::LpSolution,
    solver::{Error, Solver, SolverTryNew},
};

pub struct MinilpSolver {
    problem: minilp::Problem,
    vars: Vec<minilp::Variable>,
    num_constraints: usize,
}

impl std::fmt::Debug for MinilpSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinilpSolver")
            .field("num_vars", &self.vars.len())
            .field("num_constraints", &self.num_constraints)
            .finish()
    }
}

impl SolverTryNew<MinilpSolver> for MinilpSolver {
    fn try_new(program: &LinearProgram) -> Result<MinilpSolver, Error> {
        let num_vars = program.num_vars();
        if program.var_mins.len() != num_vars || program.var_maxs.len() != num_vars {
            return Err(Error::Failed(format!(
                "{} objective coefficients but {} lower and {} upper bounds",
                num_vars,
                program.var_mins.len(),
                program.var_maxs.len()
            )));
        }

        let mut problem = minilp::Problem::new(minilp::OptimizationDirection::Minimize);
        let mut vars = Vec::with_capacity(num_vars);
        for v_idx in 0..num_vars {
            let (min, max) = (program.var_mins[v_idx], program.var_maxs[v_idx]);
            if min > max {
                return Err(Error::Infeasible);
            }
            vars.push(problem.add_var(program.obj_coeffs[v_idx], (min, max)));
        }

        for (c_idx, constraint) in program.constraints.iter().enumerate() {
            if constraint.coeffs.dim() > num_vars {
                return Err(Error::Failed(format!(
                    "constraint {} spans {} variables, program has {}",
                    c_idx,
                    constraint.coeffs.dim(),
                    num_vars
                )));
            }
            let expr: Vec<(minilp::Variable, f64)> = constraint
                .coeffs
                .iter()
                .map(|(idx, &coeff)| (vars[idx], coeff))
                .collect();
            let op = match constraint.op {
                ComparisonOp::Eq => minilp::ComparisonOp::Eq,
                ComparisonOp::Le => minilp::ComparisonOp::Le,
                ComparisonOp::Ge => minilp::ComparisonOp::Ge,
            };
            problem.add_constraint(expr, op, constraint.rhs);
        }

        Ok(MinilpSolver {
            problem,
            vars,
            num_constraints: program.constraints.len(),
        })
    }
}

impl Solver for MinilpSolver {
    fn solve(&mut self) -> Result<LpSolution, Error> {
        let sw = Stopwatch::start_new();
        let result = self.problem.solve();
        let elapsed = sw.elapsed();

        debug!(
            "minilp finished: vars: {}, constraints: {}, elapsed: {}ms, thread: {}, ok: {}",
            self.vars.len(),
            self.num_constraints,
            sw.elapsed_ms(),
            thread_id::get(),
            result.is_ok(),
        );

        let solution = result.map_err(|e| match e {
            minilp::Error::Infeasible => Error::Infeasible,
            minilp::Error::Unbounded => Error::Unbounded,
        })?;

        let objective = solution.objective();
        let values: Vec<f64> = self.vars.iter().map(|&v| solution[v]).collect();
        // minilp reports some unbounded programs as an "optimum" at -inf.
        if objective == f64::NEG_INFINITY || values.iter().any(|v| v.is_infinite()) {
            return Err(Error::Unbounded);
        }
        if !objective.is_finite() || values.iter().any(|v| !v.is_finite()) {
            return Err(Error::Failed("solution contains non-finite values".to_string()));
        }

        Ok(LpSolution::new(objective, values, elapsed))
    }
}
