use log::debug;

use crate::{
    consts::{WEIGHT_MAX, WEIGHT_MIN},
    datatype::CsVec,
    problem::{ComparisonInput, InputError},
};

/// A reference to a variable of a [`LinearProgram`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(pub(crate) usize);

impl Variable {
    /// Position of the variable in the addition sequence.
    pub fn idx(&self) -> usize {
        self.0
    }
}

/// Relation between the left-hand and right-hand side of a constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparisonOp {
    /// The == operator (equal to)
    Eq,
    /// The <= operator (less than or equal to)
    Le,
    /// The >= operator (greater than or equal to)
    Ge,
}

impl ComparisonOp {
    pub fn evaluate(&self, lhs: f64, rhs: f64, tolerance: f64) -> bool {
        match self {
            ComparisonOp::Eq => (lhs - rhs).abs() <= tolerance,
            ComparisonOp::Le => lhs <= rhs + tolerance,
            ComparisonOp::Ge => lhs + tolerance >= rhs,
        }
    }
}

/// A single `coeffs · x (op) rhs` row.
#[derive(Clone, Debug)]
pub struct Constraint {
    pub coeffs: CsVec,
    pub op: ComparisonOp,
    pub rhs: f64,
}

impl Constraint {
    /// Left-hand side evaluated at `values`.
    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.coeffs.iter().map(|(idx, coeff)| coeff * values[idx]).sum()
    }
}

/// A minimisation problem over bounded continuous variables.
///
/// This is the solver-neutral form handed to any [`crate::solver::Solver`].
#[derive(Clone, Default)]
pub struct LinearProgram {
    pub obj_coeffs: Vec<f64>,
    pub var_mins: Vec<f64>,
    pub var_maxs: Vec<f64>,
    pub constraints: Vec<Constraint>,
}

impl std::fmt::Debug for LinearProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearProgram")
            .field("num_vars", &self.num_vars())
            .field("num_constraints", &self.constraints.len())
            .field("nnz", &self.nnz())
            .finish()
    }
}

impl LinearProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable with objective coefficient `obj_coeff` and inclusive
    /// bounds. Use `f64::INFINITY` for a missing upper bound.
    pub fn add_var(&mut self, obj_coeff: f64, (min, max): (f64, f64)) -> Variable {
        let var = Variable(self.obj_coeffs.len());
        self.obj_coeffs.push(obj_coeff);
        self.var_mins.push(min);
        self.var_maxs.push(max);
        var
    }

    /// Adds a linear constraint. Repeated variables in `terms` are summed.
    pub fn add_constraint(
        &mut self,
        terms: impl IntoIterator<Item = (Variable, f64)>,
        op: ComparisonOp,
        rhs: f64,
    ) {
        let mut terms: Vec<(usize, f64)> = terms.into_iter().map(|(v, c)| (v.0, c)).collect();
        terms.sort_by_key(|&(idx, _)| idx);

        let mut indices: Vec<usize> = Vec::with_capacity(terms.len());
        let mut data: Vec<f64> = Vec::with_capacity(terms.len());
        for (idx, coeff) in terms {
            if indices.last() == Some(&idx) {
                if let Some(last) = data.last_mut() {
                    *last += coeff;
                }
            } else {
                indices.push(idx);
                data.push(coeff);
            }
        }

        self.constraints.push(Constraint {
            coeffs: CsVec::new(self.num_vars(), indices, data),
            op,
            rhs,
        });
    }

    pub fn num_vars(&self) -> usize {
        self.obj_coeffs.len()
    }

    pub fn nnz(&self) -> usize {
        self.constraints.iter().map(|c| c.coeffs.nnz()).sum()
    }

    /// Whether `values` satisfies every bound and constraint within `tolerance`.
    pub fn is_feasible(&self, values: &[f64], tolerance: f64) -> bool {
        values.len() == self.num_vars()
            && values
                .iter()
                .zip(self.var_mins.iter().zip(&self.var_maxs))
                .all(|(&v, (&min, &max))| v + tolerance >= min && v <= max + tolerance)
            && self
                .constraints
                .iter()
                .all(|c| c.op.evaluate(c.lhs(values), c.rhs, tolerance))
    }
}

/// Inclusive bounds applied to every criterion weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelBounds {
    pub weight_min: f64,
    pub weight_max: f64,
}

impl Default for ModelBounds {
    fn default() -> Self {
        ModelBounds {
            weight_min: WEIGHT_MIN,
            weight_max: WEIGHT_MAX,
        }
    }
}

impl ModelBounds {
    /// Rejects bounds under which `len` weights summing to 1 cannot exist.
    pub fn check(&self, len: usize) -> Result<(), InputError> {
        let ModelBounds {
            weight_min: min,
            weight_max: max,
        } = *self;
        if !(min.is_finite() && max.is_finite() && 0.0 <= min && min < max && max <= 1.0) {
            return Err(InputError::InvalidBounds { min, max });
        }
        if min * len as f64 > 1.0 {
            return Err(InputError::TooManyCriteria {
                len,
                weight_min: min,
            });
        }
        Ok(())
    }
}

/// The linear BWM program for one set of judgments.
///
/// Variables are `w[0..n]` followed by `xi`; the objective is `min xi`.
#[derive(Clone, Debug)]
pub struct BwmModel {
    pub program: LinearProgram,
    pub weights: Vec<Variable>,
    pub xi: Variable,
}

impl BwmModel {
    pub fn build(input: &ComparisonInput, bounds: &ModelBounds) -> Result<Self, InputError> {
        let n = input.len();
        bounds.check(n)?;

        let mut program = LinearProgram::new();
        let weights: Vec<Variable> = (0..n)
            .map(|_| program.add_var(0.0, (bounds.weight_min, bounds.weight_max)))
            .collect();
        let xi = program.add_var(1.0, (0.0, f64::INFINITY));

        program.add_constraint(weights.iter().map(|&w| (w, 1.0)), ComparisonOp::Eq, 1.0);

        // |w[best] - aB[j] * w[j]| <= xi
        let best = weights[input.best_index()];
        for (j, &a_bj) in input.best_to_others().iter().enumerate() {
            if j == input.best_index() {
                continue;
            }
            add_abs_deviation(&mut program, xi, best, weights[j], a_bj);
        }

        // |w[i] - aW[i] * w[worst]| <= xi
        let worst = weights[input.worst_index()];
        for (i, &a_iw) in input.others_to_worst().iter().enumerate() {
            if i == input.worst_index() {
                continue;
            }
            add_abs_deviation(&mut program, xi, weights[i], worst, a_iw);
        }

        debug!(
            "built BWM model: criteria: {}, best: {}, worst: {}, vars: {}, rows: {}, nnz: {}",
            n,
            input.best_index(),
            input.worst_index(),
            program.num_vars(),
            program.constraints.len(),
            program.nnz(),
        );

        Ok(BwmModel {
            program,
            weights,
            xi,
        })
    }
}

/// Linearises `|lhs - ratio * rhs| <= xi` into two `<= 0` rows.
fn add_abs_deviation(
    program: &mut LinearProgram,
    xi: Variable,
    lhs: Variable,
    rhs: Variable,
    ratio: f64,
) {
    program.add_constraint([(lhs, 1.0), (rhs, -ratio), (xi, -1.0)], ComparisonOp::Le, 0.0);
    program.add_constraint([(lhs, -1.0), (rhs, ratio), (xi, -1.0)], ComparisonOp::Le, 0.0);
}
