//! The dispatcher: routes each node of a tree to its strategy's handler.
//!
//! # Resolution
//!
//! For every node the variant tag is looked up in the strategy's handler
//! table:
//!
//! - **Registered**: children are dispatched first, left subtree completely
//!   before the right one, and their results are passed to the handler.
//! - **Not registered**: `Strategy::default_handler` is called with the node
//!   and its children are not visited.
//!
//! `Strategy::begin_traversal` runs once before the root is visited.
//! Handler errors are returned as-is, ending the traversal. Handler
//! invocation order is therefore post-order: for `Add(1, Mul(2, 3))` the
//! calls are `Number(1), Number(2), Number(3), Mul, Add`.
//!
//! Each level runs under `ensure_sufficient_stack`, so depth is bounded only
//! by memory unless `DispatcherBuilder::max_depth` sets a limit.

use arbor_ir::Visitable;
use arbor_stack::ensure_sufficient_stack;

use crate::errors::{malformed_tree, missing_scalar, recursion_limit_exceeded, EvalResult};
use crate::strategy::{Handler, Strategy};

/// Dispatcher configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Deepest node level that may be dispatched (root is level 1).
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
}

/// Routes trees to strategies.
///
/// Holds configuration only, so one dispatcher can serve any number of
/// traversals, including concurrent ones.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
}

/// Builder for [`Dispatcher`].
#[derive(Clone, Debug, Default)]
pub struct DispatcherBuilder {
    config: DispatchConfig,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with `RecursionLimit` below `limit` levels.
    #[must_use]
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.config.max_depth = Some(limit);
        self
    }

    #[must_use]
    pub fn unlimited_depth(mut self) -> Self {
        self.config.max_depth = None;
        self
    }

    pub fn build(self) -> Dispatcher {
        Dispatcher {
            config: self.config,
        }
    }
}

impl Dispatcher {
    /// A dispatcher with default configuration (no depth limit).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Run `strategy` over the tree rooted at `root`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(strategy = strategy.name(), root = %root.variant_tag())
    )]
    pub fn dispatch<N, S>(&self, root: &N, strategy: &mut S) -> EvalResult<S::Output>
    where
        N: Visitable,
        S: Strategy<N>,
    {
        strategy.begin_traversal();
        self.dispatch_at(root, strategy, 1)
    }

    fn dispatch_at<N, S>(&self, node: &N, strategy: &mut S, depth: usize) -> EvalResult<S::Output>
    where
        N: Visitable,
        S: Strategy<N>,
    {
        ensure_sufficient_stack(|| {
            if let Some(limit) = self.config.max_depth {
                if depth > limit {
                    return Err(recursion_limit_exceeded(limit));
                }
            }

            let tag = node.variant_tag();
            tracing::trace!(%tag, depth, "visit");

            // Copy the handler out so the table borrow ends before the
            // handler takes `strategy` mutably.
            let Some(handler) = strategy.handlers().get(tag) else {
                tracing::debug!(strategy = strategy.name(), %tag, "no handler, using default");
                return strategy.default_handler(node);
            };

            let children = node.children();
            if children.len() != handler.arity() {
                return Err(malformed_tree(tag, children.len()));
            }

            match (handler, children.as_slice()) {
                (Handler::Leaf(leaf), []) => {
                    let value = node.scalar().ok_or_else(|| missing_scalar(tag))?;
                    leaf(strategy, node, value)
                }
                (Handler::Unary(unary), [operand]) => {
                    let operand = self.dispatch_at(*operand, strategy, depth + 1)?;
                    unary(strategy, node, operand)
                }
                (Handler::Binary(binary), [left, right]) => {
                    let left = self.dispatch_at(*left, strategy, depth + 1)?;
                    let right = self.dispatch_at(*right, strategy, depth + 1)?;
                    binary(strategy, node, left, right)
                }
                _ => Err(malformed_tree(tag, children.len())),
            }
        })
    }
}

/// Run `strategy` over `root` with a default [`Dispatcher`].
pub fn dispatch<N, S>(root: &N, strategy: &mut S) -> EvalResult<S::Output>
where
    N: Visitable,
    S: Strategy<N>,
{
    Dispatcher::new().dispatch(root, strategy)
}
