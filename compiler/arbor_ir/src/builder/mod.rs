//! Tree assembly.
//!
//! Trees are built bottom-up: terminals first, then operators composed from
//! already-built children. Two ways are provided:
//!
//! - the free functions [`num`], [`neg`], [`add`], [`sub`], [`mul`], [`div`]
//!   for fixtures written out by hand, where arity is fixed by the signature;
//! - [`TreeBuilder`], an operand stack for callers that produce nodes in
//!   post-order at runtime, where arity is checked on every `apply`.

use crate::{BinaryOp, Node, TreeError, VariantTag};

pub fn num(value: impl Into<f64>) -> Node {
    Node::number(value)
}

pub fn neg(operand: Node) -> Node {
    Node::negate(operand)
}

pub fn add(left: Node, right: Node) -> Node {
    Node::add(left, right)
}

pub fn sub(left: Node, right: Node) -> Node {
    Node::sub(left, right)
}

pub fn mul(left: Node, right: Node) -> Node {
    Node::mul(left, right)
}

pub fn div(left: Node, right: Node) -> Node {
    Node::div(left, right)
}

/// Operand-stack tree builder.
///
/// ```text
/// // 1 + 2 * 3
/// let mut b = TreeBuilder::new();
/// b.push_number(1.0).push_number(2.0).push_number(3.0);
/// b.apply(VariantTag::Mul)?.apply(VariantTag::Add)?;
/// let tree = b.finish()?;
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    stack: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a terminal.
    pub fn push_number(&mut self, value: impl Into<f64>) -> &mut Self {
        self.stack.push(Node::number(value));
        self
    }

    /// Push an already-built subtree.
    pub fn push(&mut self, node: Node) -> &mut Self {
        self.stack.push(node);
        self
    }

    /// Pop `tag.arity()` subtrees and push the operator built from them.
    ///
    /// The earliest pushed subtree becomes the leftmost child. On error the
    /// stack is left untouched.
    pub fn apply(&mut self, tag: VariantTag) -> Result<&mut Self, TreeError> {
        let expected = tag.arity();
        let found = self.stack.len();
        if tag.is_terminal() {
            return Err(TreeError::MissingValue { tag });
        }
        if found < expected {
            return Err(TreeError::MalformedTree {
                tag,
                expected,
                found,
            });
        }
        let children = self.stack.split_off(found - expected);
        let node = Node::from_parts(tag, None, children)?;
        self.stack.push(node);
        Ok(self)
    }

    /// Shorthand for `apply(op.tag())`.
    pub fn apply_binary(&mut self, op: BinaryOp) -> Result<&mut Self, TreeError> {
        self.apply(op.tag())
    }

    /// Number of subtrees not yet attached to a parent.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    /// Return the single assembled root.
    pub fn finish(mut self) -> Result<Node, TreeError> {
        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(root), true) => Ok(root),
            (None, _) => Err(TreeError::UnbalancedAssembly { roots: 0 }),
            (Some(_), false) => Err(TreeError::UnbalancedAssembly {
                roots: self.stack.len() + 1,
            }),
        }
    }
}
