//! Criteria weights from Best-Worst Method judgments.
//!
//! The judgments are turned into a linear program ([`model`]), solved by a
//! pluggable backend ([`solver`], [`solvers`]) and the optimum is scored
//! against the consistency index table ([`consistency`]).
//!
//! ```
//! use bwm_solver::{bwm, problem::ComparisonInput};
//!
//! let input = ComparisonInput::try_new(vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0], 0, 2).unwrap();
//! let result = bwm::solve(&input).unwrap();
//! assert!((result.weights.iter().sum::<f64>() - 1.0).abs() < 1e-6);
//! ```

pub mod bwm;
pub mod consistency;
pub mod consts;
pub mod model;
pub mod problem;
pub mod solution;
pub mod solver;
pub mod solvers;
pub mod wire;

pub(crate) mod helpers;

pub(crate) mod datatype {
    pub type CsVec = sprs::CsVec<f64>;
}
