//! Evaluation errors.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` is the typed category callers match on. `EvalError`
//! pairs it with the rendered message. Factory functions (e.g.
//! `unhandled_variant()`) are the construction API; they keep `kind` and
//! `message` in sync.
//!
//! Handler errors travel through the dispatcher untouched: whatever a
//! handler returns is what the `dispatch` caller sees.

use arbor_ir::{TreeError, VariantTag};

/// Result of dispatching a strategy over a tree.
pub type EvalResult<T> = Result<T, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// The strategy has no handler for a variant it was asked to process.
    #[error("no handler for `{tag}` in strategy `{strategy}`")]
    UnhandledVariant {
        tag: VariantTag,
        strategy: &'static str,
    },

    /// A tree element did not have the shape its tag promises.
    #[error(transparent)]
    MalformedTree(#[from] TreeError),

    /// Checked arithmetic refused a result.
    #[error("arithmetic failure in {operation}: {detail}")]
    ArithmeticFailure {
        operation: &'static str,
        detail: String,
    },

    /// Literal negation found something other than a number literal.
    #[error("`Negate` operand must be a number literal, found `{found}`")]
    NonScalarOperand { found: VariantTag },

    /// The tree is deeper than the dispatcher allows.
    #[error("maximum dispatch depth exceeded (limit: {limit})")]
    RecursionLimit { limit: usize },

    /// Free-form failure raised by a user strategy.
    #[error("{message}")]
    Custom { message: String },
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured category for programmatic matching.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory errors.
    pub message: String,
}

impl EvalError {
    /// Create a free-form error with `Custom` kind.
    ///
    /// Prefer the factory functions when a structured kind exists.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    #[inline]
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    /// The missing variant, if this is an `UnhandledVariant` error.
    pub fn unhandled_tag(&self) -> Option<VariantTag> {
        match self.kind {
            EvalErrorKind::UnhandledVariant { tag, .. } => Some(tag),
            _ => None,
        }
    }
}

impl From<TreeError> for EvalError {
    fn from(err: TreeError) -> Self {
        Self::from_kind(EvalErrorKind::MalformedTree(err))
    }
}

// Factory functions

/// Baseline default-handler failure, named by variant.
#[cold]
pub fn unhandled_variant(tag: VariantTag, strategy: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnhandledVariant { tag, strategy })
}

#[cold]
pub fn arithmetic_failure(operation: &'static str, detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArithmeticFailure {
        operation,
        detail: detail.into(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    arithmetic_failure("division", "division by zero")
}

/// A finite pair of operands produced an infinite or NaN result.
#[cold]
pub fn float_overflow(operation: &'static str) -> EvalError {
    arithmetic_failure(operation, "result is not finite")
}

#[cold]
pub fn non_scalar_operand(found: VariantTag) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonScalarOperand { found })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

/// An element's child count disagrees with its tag's arity.
#[cold]
pub fn malformed_tree(tag: VariantTag, found: usize) -> EvalError {
    TreeError::MalformedTree {
        tag,
        expected: tag.arity(),
        found,
    }
    .into()
}

/// A terminal element reported no scalar.
#[cold]
pub fn missing_scalar(tag: VariantTag) -> EvalError {
    TreeError::MissingValue { tag }.into()
}
