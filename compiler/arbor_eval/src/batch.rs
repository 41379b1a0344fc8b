//! Parallel dispatch over many trees.
//!
//! Trees are immutable and strategies are per-traversal, so independent trees
//! can be processed on the rayon pool with one fresh strategy each.

use rayon::prelude::*;

use arbor_ir::Visitable;

use crate::dispatch::Dispatcher;
use crate::errors::EvalResult;
use crate::strategy::Strategy;

impl Dispatcher {
    /// Dispatch every tree in `trees` in parallel.
    ///
    /// `make_strategy` builds the strategy for each tree. Results are returned
    /// in input order; one tree failing does not stop the others.
    pub fn dispatch_batch<N, S, F>(
        &self,
        trees: &[N],
        make_strategy: F,
    ) -> Vec<EvalResult<S::Output>>
    where
        N: Visitable + Sync,
        S: Strategy<N>,
        S::Output: Send,
        F: Fn() -> S + Sync,
    {
        tracing::debug!(trees = trees.len(), "batch dispatch");
        trees
            .par_iter()
            .map(|tree| self.dispatch(tree, &mut make_strategy()))
            .collect()
    }
}
