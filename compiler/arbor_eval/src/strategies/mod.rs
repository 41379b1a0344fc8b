//! Concrete strategies.

mod census;
mod evaluator;
mod printer;

pub use census::Census;
pub use evaluator::{evaluate, DivisionPolicy, EvalConfig, Evaluator, NegateMode};
pub use printer::Printer;
