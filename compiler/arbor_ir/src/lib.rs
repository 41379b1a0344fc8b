//! Arbor IR - expression tree types.
//!
//! This crate contains the data side of the Arbor engine:
//! - `VariantTag`: the closed set of node shapes, known at compile time
//! - `Node`: an owned, immutable arithmetic expression tree
//! - `Visitable`: the capability the dispatcher relies on
//! - `Visitor`: read-only structural traversal
//! - `TreeBuilder` and helper constructors for assembling trees
//!
//! # Design Philosophy
//!
//! - **No behavior on nodes**: nodes describe shape only. Evaluation,
//!   printing and any other processing live in strategies (`arbor_eval`).
//! - **Closed variant set**: handler lookup is keyed by `VariantTag`, never by
//!   runtime type names.
//! - **Exclusive ownership**: every operator owns its subtrees through `Box`;
//!   there is no sharing between siblings.

pub mod builder;
mod error;
mod node;
mod tag;
pub mod visitor;

pub use builder::TreeBuilder;
pub use error::TreeError;
pub use node::{Node, Visitable};
pub use tag::{BinaryOp, VariantTag};
pub use visitor::{walk_node, Visitor};
