//! Arbor Eval - strategy dispatch over expression trees.
//!
//! # Architecture
//!
//! - `Strategy`: one processing purpose, expressed as a `HandlerTable` keyed by
//!   `VariantTag` plus a default handler for variants it does not cover
//! - `Dispatcher`: walks a tree, resolving children before their parent and
//!   routing each node to its strategy's handler
//! - `Evaluator`, `Printer`, `Census`: the strategies shipped with the crate
//!
//! Adding a new operation means writing a new strategy; `Node` is untouched.
//!
//! ```text
//! let tree = add(num(1), mul(num(2), num(3)));
//! let value = dispatch(&tree, &mut Evaluator::new())?;      // 7.0
//! let text = dispatch(&tree, &mut Printer::new())?;         // "1 + 2 * 3"
//! ```

mod batch;
mod dispatch;
mod errors;
mod strategies;
mod strategy;
mod tracing_setup;

pub use dispatch::{dispatch, DispatchConfig, Dispatcher, DispatcherBuilder};
pub use errors::{
    arithmetic_failure, division_by_zero, float_overflow, malformed_tree, missing_scalar,
    non_scalar_operand, recursion_limit_exceeded, unhandled_variant, EvalError, EvalErrorKind,
    EvalResult,
};
pub use strategies::{evaluate, Census, DivisionPolicy, EvalConfig, Evaluator, NegateMode, Printer};
pub use strategy::{BinaryFn, Handler, HandlerTable, LeafFn, Strategy, UnaryFn};
pub use tracing_setup::init_tracing;

pub use arbor_ir::{Node, VariantTag, Visitable};
