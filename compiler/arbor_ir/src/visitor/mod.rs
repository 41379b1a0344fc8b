//! Structural tree visitor.
//!
//! A read-only pre-order traversal over `Node`. The visitor may mutate its
//! own state; the tree is only ever borrowed immutably.
//!
//! Default `visit_*` implementations call the matching `walk_*` function,
//! which recurses into children. Override a `visit_*` method to observe a
//! node, and call the `walk_*` function from it to keep descending.
//!
//! This is for structural queries (counting, collecting, searching). Value
//! producing strategies with a handler per variant go through the dispatcher
//! in `arbor_eval` instead.
//!
//! # Example
//!
//! ```text
//! struct CollectNumbers {
//!     seen: Vec<f64>,
//! }
//!
//! impl<'ast> Visitor<'ast> for CollectNumbers {
//!     fn visit_number(&mut self, value: f64) {
//!         self.seen.push(value);
//!     }
//! }
//! ```

use arbor_stack::ensure_sufficient_stack;

use crate::{BinaryOp, Node};

/// Tree visitor trait.
pub trait Visitor<'ast> {
    /// Visit any node. Called on entry, before its children.
    fn visit_node(&mut self, node: &'ast Node) {
        walk_node(self, node);
    }

    /// Visit a terminal value.
    fn visit_number(&mut self, value: f64) {
        let _ = value;
    }

    /// Visit a negation.
    fn visit_negate(&mut self, operand: &'ast Node) {
        self.visit_node(operand);
    }

    /// Visit a binary operator.
    fn visit_binary(&mut self, op: BinaryOp, left: &'ast Node, right: &'ast Node) {
        walk_binary(self, op, left, right);
    }
}

// Walk Functions
//
// Children are traversed depth-first, left to right: the whole left subtree
// is visited before the right one is entered.

/// Route `node` to the `visit_*` method for its variant.
pub fn walk_node<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast Node) {
    ensure_sufficient_stack(|| match node {
        Node::Number(value) => visitor.visit_number(*value),
        Node::Negate(operand) => visitor.visit_negate(operand),
        Node::Binary { op, left, right } => visitor.visit_binary(*op, left, right),
    });
}

/// Walk both operands of a binary operator.
pub fn walk_binary<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    op: BinaryOp,
    left: &'ast Node,
    right: &'ast Node,
) {
    let _ = op;
    visitor.visit_node(left);
    visitor.visit_node(right);
}

#[cfg(test)]
mod tests;
