//! Infix rendering strategy.
//!
//! Produces conventional infix text with the fewest parentheses that keep
//! the tree's shape: `Add(1, Div(Mul(2, Sub(3, 4)), 5))` prints as
//! `1 + 2 * (3 - 4) / 5`.
//!
//! A child is parenthesized when its operator binds less tightly than its
//! parent's, or when it is the right operand of an operator of equal
//! precedence (`1 - (2 - 3)`).
//!
//! Negation renders as a prefix `-`, wraps binary operands (`-(1 + 2)`) and
//! is separated by a space from a nested negation (`- -3`). Negative
//! literals are always parenthesized (`(-3)`, `1 - (-3)`), so a literal
//! never reads as a negation. Non-finite literals print as `NaN`, `inf` and
//! `(-inf)`.

use arbor_ir::{BinaryOp, Node};

use crate::errors::{malformed_tree, EvalResult};
use crate::strategy::{HandlerTable, Strategy};

#[derive(Copy, Clone, Eq, PartialEq)]
enum Side {
    Left,
    Right,
}

/// Renders a tree as infix text.
pub struct Printer {
    handlers: HandlerTable<Self, Node, String>,
}

impl Printer {
    pub fn new() -> Self {
        let mut handlers = HandlerTable::new()
            .on_number(Self::number)
            .on_negate(Self::negate);
        for op in BinaryOp::ALL {
            handlers = handlers.on_binary(op, Self::binary);
        }
        Self { handlers }
    }

    fn number(&mut self, _node: &Node, value: f64) -> EvalResult<String> {
        if value.is_sign_negative() && !value.is_nan() {
            Ok(format!("({value})"))
        } else {
            Ok(value.to_string())
        }
    }

    fn negate(&mut self, node: &Node, operand: String) -> EvalResult<String> {
        let Node::Negate(inner) = node else {
            return Err(malformed_tree(node.tag(), node.children().len()));
        };
        match inner.as_ref() {
            Node::Binary { .. } => Ok(format!("-({operand})")),
            Node::Negate(_) => Ok(format!("- {operand}")),
            Node::Number(_) => Ok(format!("-{operand}")),
        }
    }

    fn binary(&mut self, node: &Node, left: String, right: String) -> EvalResult<String> {
        let Node::Binary {
            op,
            left: lhs,
            right: rhs,
        } = node
        else {
            return Err(malformed_tree(node.tag(), node.children().len()));
        };
        let left = parenthesize(*op, lhs, left, Side::Left);
        let right = parenthesize(*op, rhs, right, Side::Right);
        Ok(format!("{left} {op} {right}"))
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Printer {
    type Output = String;

    fn name(&self) -> &'static str {
        "Printer"
    }

    fn handlers(&self) -> &HandlerTable<Self, Node, String> {
        &self.handlers
    }
}

/// Wrap `text` (the rendering of `child`) if `parent` would otherwise
/// regroup it.
fn parenthesize(parent: BinaryOp, child: &Node, text: String, side: Side) -> String {
    let Node::Binary { op: inner, .. } = child else {
        return text;
    };
    let (outer, inner) = (parent.precedence(), inner.precedence());
    if inner > outer || (inner == outer && side == Side::Right) {
        format!("({text})")
    } else {
        text
    }
}
