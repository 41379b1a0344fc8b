//! Strategies and their handler tables.
//!
//! A strategy is one processing purpose (evaluate, print, count...) expressed
//! as a table of handlers keyed by `VariantTag`, plus a default handler for
//! variants the table leaves empty.
//!
//! # Handler shapes
//!
//! Handlers never walk the tree themselves. The dispatcher resolves children
//! first and passes their results in, so a handler's signature is fixed by
//! its variant's arity:
//!
//! - `Number`: `fn(&mut S, &N, f64)`
//! - `Negate`: `fn(&mut S, &N, O)`
//! - binary operators: `fn(&mut S, &N, O, O)`
//!
//! The table only offers registration methods with the matching shape, so a
//! handler of the wrong arity cannot be registered.

use std::fmt;

use arbor_ir::{BinaryOp, Node, VariantTag, Visitable};

use crate::errors::{unhandled_variant, EvalResult};

/// Handler for a terminal: receives the node's scalar.
pub type LeafFn<S, N, O> = fn(&mut S, &N, f64) -> EvalResult<O>;

/// Handler for a single-child variant: receives the resolved operand.
pub type UnaryFn<S, N, O> = fn(&mut S, &N, O) -> EvalResult<O>;

/// Handler for a two-child variant: receives the resolved left and right.
pub type BinaryFn<S, N, O> = fn(&mut S, &N, O, O) -> EvalResult<O>;

/// One registered handler.
pub enum Handler<S, N, O> {
    Leaf(LeafFn<S, N, O>),
    Unary(UnaryFn<S, N, O>),
    Binary(BinaryFn<S, N, O>),
}

// Function pointers are `Copy` whatever `S`, `N` and `O` are, so these are
// implemented by hand instead of derived (derive would add bounds on them).
impl<S, N, O> Clone for Handler<S, N, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, N, O> Copy for Handler<S, N, O> {}

impl<S, N, O> Handler<S, N, O> {
    /// Number of resolved child results this handler consumes.
    pub const fn arity(&self) -> usize {
        match self {
            Handler::Leaf(_) => 0,
            Handler::Unary(_) => 1,
            Handler::Binary(_) => 2,
        }
    }
}

impl<S, N, O> fmt::Debug for Handler<S, N, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = match self {
            Handler::Leaf(_) => "Leaf",
            Handler::Unary(_) => "Unary",
            Handler::Binary(_) => "Binary",
        };
        write!(f, "Handler::{shape}")
    }
}

/// Handlers of one strategy, one slot per variant.
pub struct HandlerTable<S, N, O> {
    slots: [Option<Handler<S, N, O>>; VariantTag::COUNT],
}

impl<S, N, O> HandlerTable<S, N, O> {
    /// An empty table: every variant goes to the default handler.
    pub fn new() -> Self {
        Self {
            slots: [None; VariantTag::COUNT],
        }
    }

    #[must_use]
    pub fn on_number(mut self, handler: LeafFn<S, N, O>) -> Self {
        self.slots[VariantTag::Number.index()] = Some(Handler::Leaf(handler));
        self
    }

    #[must_use]
    pub fn on_negate(mut self, handler: UnaryFn<S, N, O>) -> Self {
        self.slots[VariantTag::Negate.index()] = Some(Handler::Unary(handler));
        self
    }

    /// Register `handler` for the variant of `op`.
    #[must_use]
    pub fn on_binary(mut self, op: BinaryOp, handler: BinaryFn<S, N, O>) -> Self {
        self.slots[op.tag().index()] = Some(Handler::Binary(handler));
        self
    }

    #[must_use]
    pub fn on_add(self, handler: BinaryFn<S, N, O>) -> Self {
        self.on_binary(BinaryOp::Add, handler)
    }

    #[must_use]
    pub fn on_sub(self, handler: BinaryFn<S, N, O>) -> Self {
        self.on_binary(BinaryOp::Sub, handler)
    }

    #[must_use]
    pub fn on_mul(self, handler: BinaryFn<S, N, O>) -> Self {
        self.on_binary(BinaryOp::Mul, handler)
    }

    #[must_use]
    pub fn on_div(self, handler: BinaryFn<S, N, O>) -> Self {
        self.on_binary(BinaryOp::Div, handler)
    }

    /// The handler registered for `tag`, copied out of the table.
    #[inline]
    pub fn get(&self, tag: VariantTag) -> Option<Handler<S, N, O>> {
        self.slots[tag.index()]
    }

    #[inline]
    pub fn handles(&self, tag: VariantTag) -> bool {
        self.slots[tag.index()].is_some()
    }

    /// Tags with a registered handler, in `VariantTag::ALL` order.
    pub fn covered(&self) -> impl Iterator<Item = VariantTag> + '_ {
        VariantTag::ALL
            .into_iter()
            .filter(|tag| self.handles(*tag))
    }

    /// Whether every variant has a handler.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl<S, N, O> Default for HandlerTable<S, N, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, N, O> fmt::Debug for HandlerTable<S, N, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.covered()).finish()
    }
}

/// A processing strategy over trees of `N`.
///
/// Implementors expose a handler table and may override the default handler.
/// Strategy state lives in `self` and belongs to one traversal: the
/// dispatcher calls `begin_traversal` before each root, and implementors
/// that accumulate state reset it there.
pub trait Strategy<N: Visitable = Node>: Sized {
    /// Value produced for each subtree.
    type Output;

    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// The handler table consulted for every node.
    fn handlers(&self) -> &HandlerTable<Self, N, Self::Output>;

    /// Called once per `dispatch`, before the root is visited.
    fn begin_traversal(&mut self) {}

    /// Called for a node whose variant has no handler.
    ///
    /// The node's children have not been visited. The baseline fails with
    /// `UnhandledVariant` naming the variant; override to log, substitute a
    /// value, or fail differently.
    fn default_handler(&mut self, node: &N) -> EvalResult<Self::Output> {
        Err(unhandled_variant(node.variant_tag(), self.name()))
    }
}
