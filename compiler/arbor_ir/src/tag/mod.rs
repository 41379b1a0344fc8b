//! Variant tags and binary operators.
//!
//! `VariantTag` is the key of every strategy handler table. It is a plain
//! `Copy` enum so a table can be a fixed array indexed by `VariantTag::index`.

use std::fmt;

/// Binary arithmetic operators.
///
/// Each operator corresponds to exactly one `VariantTag`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// All binary operators in tag order.
    pub const ALL: [BinaryOp; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the infix symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    /// - 3: `*` `/`
    /// - 4: `+` `-`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 4,
        }
    }

    /// The variant tag a `Binary` node with this operator carries.
    pub const fn tag(self) -> VariantTag {
        match self {
            Self::Add => VariantTag::Add,
            Self::Sub => VariantTag::Sub,
            Self::Mul => VariantTag::Mul,
            Self::Div => VariantTag::Div,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Closed enumeration of node variants.
///
/// Declaration order defines `index()`, and `ALL` lists the tags in that
/// order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum VariantTag {
    Number,
    Negate,
    Add,
    Sub,
    Mul,
    Div,
}

impl VariantTag {
    /// Every tag, in declaration order.
    pub const ALL: [VariantTag; 6] = [
        Self::Number,
        Self::Negate,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
    ];

    /// Number of variants.
    pub const COUNT: usize = Self::ALL.len();

    /// Variant name as used in diagnostics (`"Negate"`, `"Add"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Negate => "Negate",
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
        }
    }

    /// Number of child nodes a node of this variant owns.
    pub const fn arity(self) -> usize {
        match self {
            Self::Number => 0,
            Self::Negate => 1,
            Self::Add | Self::Sub | Self::Mul | Self::Div => 2,
        }
    }

    /// Dense index in `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The binary operator for two-child variants.
    pub const fn binary_op(self) -> Option<BinaryOp> {
        match self {
            Self::Add => Some(BinaryOp::Add),
            Self::Sub => Some(BinaryOp::Sub),
            Self::Mul => Some(BinaryOp::Mul),
            Self::Div => Some(BinaryOp::Div),
            Self::Number | Self::Negate => None,
        }
    }

    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Number)
    }
}

impl From<BinaryOp> for VariantTag {
    fn from(op: BinaryOp) -> Self {
        op.tag()
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
