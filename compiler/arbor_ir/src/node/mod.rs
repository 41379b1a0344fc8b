//! Expression tree nodes.
//!
//! # Ownership
//!
//! Operators own their children through `Box`, so a tree has exactly one
//! root and dropping a subtree never touches its siblings. `Drop` is
//! implemented iteratively: a left-leaning chain of additions can be far
//! deeper than the thread stack would allow for recursive drop glue.
//! `Clone`, `PartialEq` and `Debug` recurse under `ensure_sufficient_stack`
//! for the same reason.

use std::fmt;
use std::mem;

use arbor_stack::ensure_sufficient_stack;
use smallvec::{smallvec, SmallVec};

use crate::visitor::{walk_node, Visitor};
use crate::{BinaryOp, TreeError, VariantTag};

/// An arithmetic expression tree.
///
/// Nodes carry no behavior: inspect them with [`Node::tag`],
/// [`Node::children`] and [`Node::scalar`], and process them with a
/// strategy through the dispatcher.
pub enum Node {
    /// Terminal real value.
    Number(f64),
    /// Unary negation of a subtree.
    Negate(Box<Node>),
    /// Two-child arithmetic operator.
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Capability the dispatcher needs from a tree element.
///
/// `Node` implements it, and so can any external node type that wants to be
/// processed by existing strategies: the dispatcher resolves handlers from
/// `variant_tag()` alone and walks `children()` in order.
pub trait Visitable {
    /// The variant this element belongs to.
    fn variant_tag(&self) -> VariantTag;

    /// Child elements, left to right.
    fn children(&self) -> SmallVec<[&Self; 2]>;

    /// The stored scalar of a terminal element.
    fn scalar(&self) -> Option<f64>;
}

impl Node {
    /// Create a terminal. Integer inputs are widened to `f64`.
    pub fn number(value: impl Into<f64>) -> Self {
        Node::Number(value.into())
    }

    pub fn negate(operand: Node) -> Self {
        Node::Negate(Box::new(operand))
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn add(left: Node, right: Node) -> Self {
        Self::binary(BinaryOp::Add, left, right)
    }

    pub fn sub(left: Node, right: Node) -> Self {
        Self::binary(BinaryOp::Sub, left, right)
    }

    pub fn mul(left: Node, right: Node) -> Self {
        Self::binary(BinaryOp::Mul, left, right)
    }

    pub fn div(left: Node, right: Node) -> Self {
        Self::binary(BinaryOp::Div, left, right)
    }

    /// Build a node from a tag, an optional scalar, and its children.
    ///
    /// This is the checked entry point for callers that only know the shape
    /// at runtime. `Number` needs a value and no children; operators need no
    /// value and exactly `tag.arity()` children.
    pub fn from_parts(
        tag: VariantTag,
        value: Option<f64>,
        children: Vec<Node>,
    ) -> Result<Self, TreeError> {
        let expected = tag.arity();
        let found = children.len();
        if found != expected {
            return Err(TreeError::MalformedTree {
                tag,
                expected,
                found,
            });
        }

        match (tag, value) {
            (VariantTag::Number, Some(v)) => Ok(Node::Number(v)),
            (VariantTag::Number, None) => Err(TreeError::MissingValue { tag }),
            (_, Some(_)) => Err(TreeError::UnexpectedValue { tag }),
            (_, None) => match tag.binary_op() {
                Some(op) => {
                    let [left, right] = into_array(tag, children)?;
                    Ok(Self::binary(op, left, right))
                }
                None => {
                    let [operand] = into_array(tag, children)?;
                    Ok(Self::negate(operand))
                }
            },
        }
    }

    /// The variant tag of this node.
    pub fn tag(&self) -> VariantTag {
        match self {
            Node::Number(_) => VariantTag::Number,
            Node::Negate(_) => VariantTag::Negate,
            Node::Binary { op, .. } => op.tag(),
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> SmallVec<[&Node; 2]> {
        match self {
            Node::Number(_) => SmallVec::new(),
            Node::Negate(operand) => smallvec![&**operand],
            Node::Binary { left, right, .. } => smallvec![&**left, &**right],
        }
    }

    /// The stored value of a `Number`.
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Node::Number(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    /// Total number of nodes in this subtree.
    pub fn size(&self) -> usize {
        let mut counter = SizeCounter::default();
        counter.visit_node(self);
        counter.count
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut meter = DepthMeter::default();
        meter.visit_node(self);
        meter.deepest
    }

    /// Move this node's non-leaf subtrees into `out`, leaving placeholders.
    fn detach_subtrees(&mut self, out: &mut Vec<Box<Node>>) {
        let slots: SmallVec<[&mut Box<Node>; 2]> = match self {
            Node::Number(_) => return,
            Node::Negate(operand) => smallvec![operand],
            Node::Binary { left, right, .. } => smallvec![left, right],
        };
        for slot in slots {
            if !slot.is_leaf() {
                out.push(mem::replace(slot, Box::new(Node::Number(0.0))));
            }
        }
    }
}

fn into_array<const N: usize>(
    tag: VariantTag,
    children: Vec<Node>,
) -> Result<[Node; N], TreeError> {
    let found = children.len();
    <[Node; N]>::try_from(children).map_err(|_| TreeError::MalformedTree {
        tag,
        expected: N,
        found,
    })
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_subtrees(&mut pending);
        while let Some(mut subtree) = pending.pop() {
            subtree.detach_subtrees(&mut pending);
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Node::Number(v) => Node::Number(*v),
            Node::Negate(operand) => Node::Negate(operand.clone()),
            Node::Binary { op, left, right } => Node::Binary {
                op: *op,
                left: left.clone(),
                right: right.clone(),
            },
        })
    }
}

/// Structural equality. Scalars compare as `f64`, so a tree holding `NaN` is
/// not equal to itself.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Node::Number(a), Node::Number(b)) => a == b,
            (Node::Negate(a), Node::Negate(b)) => a == b,
            (
                Node::Binary {
                    op: op_a,
                    left: left_a,
                    right: right_a,
                },
                Node::Binary {
                    op: op_b,
                    left: left_b,
                    right: right_b,
                },
            ) => op_a == op_b && left_a == left_b && right_a == right_b,
            _ => false,
        })
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Node::Number(v) => f.debug_tuple("Number").field(v).finish(),
            Node::Negate(operand) => f.debug_tuple("Negate").field(operand).finish(),
            Node::Binary { op, left, right } => f
                .debug_struct("Binary")
                .field("op", op)
                .field("left", left)
                .field("right", right)
                .finish(),
        })
    }
}

impl Visitable for Node {
    #[inline]
    fn variant_tag(&self) -> VariantTag {
        self.tag()
    }

    #[inline]
    fn children(&self) -> SmallVec<[&Self; 2]> {
        Node::children(self)
    }

    #[inline]
    fn scalar(&self) -> Option<f64> {
        Node::scalar(self)
    }
}

/// S-expression rendering: `(Add 1 (Negate 2))`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Node::Number(v) => write!(f, "{v}"),
            Node::Negate(operand) => write!(f, "(Negate {operand})"),
            Node::Binary { op, left, right } => write!(f, "({} {left} {right})", op.tag()),
        })
    }
}

#[derive(Default)]
struct SizeCounter {
    count: usize,
}

impl<'ast> Visitor<'ast> for SizeCounter {
    fn visit_node(&mut self, node: &'ast Node) {
        self.count += 1;
        walk_node(self, node);
    }
}

#[derive(Default)]
struct DepthMeter {
    current: usize,
    deepest: usize,
}

impl<'ast> Visitor<'ast> for DepthMeter {
    fn visit_node(&mut self, node: &'ast Node) {
        self.current += 1;
        self.deepest = self.deepest.max(self.current);
        walk_node(self, node);
        self.current -= 1;
    }
}
