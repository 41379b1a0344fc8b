//! Variant census: counts how many nodes of each variant a tree holds.
//!
//! Generic over the node type, so it works for any `Visitable`. The output
//! for each subtree is its node count. Per-variant counts cover the most
//! recent traversal only and are cleared when the next one begins.

use rustc_hash::FxHashMap;

use arbor_ir::{BinaryOp, Node, VariantTag, Visitable};

use crate::errors::EvalResult;
use crate::strategy::{HandlerTable, Strategy};

/// Counts visits per variant.
pub struct Census<N = Node> {
    counts: FxHashMap<VariantTag, usize>,
    handlers: HandlerTable<Self, N, usize>,
}

impl<N: Visitable> Census<N> {
    pub fn new() -> Self {
        let mut handlers = HandlerTable::new()
            .on_number(Self::leaf)
            .on_negate(Self::unary);
        for op in BinaryOp::ALL {
            handlers = handlers.on_binary(op, Self::binary);
        }
        Self {
            counts: FxHashMap::default(),
            handlers,
        }
    }

    /// Nodes of variant `tag` in the last traversal.
    pub fn count(&self, tag: VariantTag) -> usize {
        self.counts.get(&tag).copied().unwrap_or(0)
    }

    /// Total nodes in the last traversal.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Move the counts out, leaving the census empty.
    pub fn take_counts(&mut self) -> FxHashMap<VariantTag, usize> {
        std::mem::take(&mut self.counts)
    }

    fn record(&mut self, node: &N) {
        *self.counts.entry(node.variant_tag()).or_insert(0) += 1;
    }

    fn leaf(&mut self, node: &N, _value: f64) -> EvalResult<usize> {
        self.record(node);
        Ok(1)
    }

    fn unary(&mut self, node: &N, operand: usize) -> EvalResult<usize> {
        self.record(node);
        Ok(operand + 1)
    }

    fn binary(&mut self, node: &N, left: usize, right: usize) -> EvalResult<usize> {
        self.record(node);
        Ok(left + right + 1)
    }
}

impl<N: Visitable> Default for Census<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Visitable> Strategy<N> for Census<N> {
    type Output = usize;

    fn name(&self) -> &'static str {
        "Census"
    }

    fn begin_traversal(&mut self) {
        self.counts.clear();
    }

    fn handlers(&self) -> &HandlerTable<Self, N, usize> {
        &self.handlers
    }
}

#[cfg(test)]
mod tests;
