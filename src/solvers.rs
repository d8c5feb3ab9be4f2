pub mod minilp_backend;

pub use minilp_backend::MinilpSolver;
