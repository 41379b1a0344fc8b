//! Tree construction errors.

use crate::VariantTag;

/// A tree element whose shape disagrees with its tag.
///
/// Raised while assembling a `Node`. The dispatcher also reports these for
/// foreign `Visitable` types whose children or scalar do not match the tag.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A node was given the wrong number of children.
    #[error("malformed tree: `{tag}` takes {expected} child node(s), found {found}")]
    MalformedTree {
        tag: VariantTag,
        expected: usize,
        found: usize,
    },
    /// A terminal was built without its scalar value.
    #[error("malformed tree: `{tag}` requires a scalar value")]
    MissingValue { tag: VariantTag },
    /// An operator was given a scalar value.
    #[error("malformed tree: `{tag}` does not carry a scalar value")]
    UnexpectedValue { tag: VariantTag },
    /// Assembly ended with zero or several unconnected subtrees.
    #[error("unbalanced assembly: expected exactly one root, found {roots}")]
    UnbalancedAssembly { roots: usize },
}
