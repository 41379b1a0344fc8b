//! Arithmetic evaluation strategy.
//!
//! Reduces a tree to a single `f64`. Every variant has a handler, so the
//! default handler is never reached for `Node` trees.
//!
//! Floating-point behavior follows IEEE-754 unless `EvalConfig` asks for
//! checks: `1 / 0` is `inf`, `0 / 0` is `NaN`.

use arbor_ir::{BinaryOp, Node};

use crate::dispatch::Dispatcher;
use crate::errors::{division_by_zero, float_overflow, non_scalar_operand, EvalResult};
use crate::strategy::{HandlerTable, Strategy};

/// How `Div` treats a zero divisor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DivisionPolicy {
    /// Plain float division: `inf`, `-inf` or `NaN`.
    #[default]
    Ieee754,
    /// Fail with `ArithmeticFailure`.
    Checked,
}

/// How `Negate` obtains its operand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NegateMode {
    /// Negate the evaluated operand, whatever its shape.
    #[default]
    Recursive,
    /// The operand must be a `Number` literal; its stored value is negated.
    Literal,
}

/// Evaluator configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    pub division: DivisionPolicy,
    pub negate: NegateMode,
    /// Fail when finite operands produce a non-finite result.
    pub overflow_check: bool,
}

impl EvalConfig {
    /// All checks on: checked division and overflow detection.
    pub fn strict() -> Self {
        Self {
            division: DivisionPolicy::Checked,
            negate: NegateMode::Recursive,
            overflow_check: true,
        }
    }
}

/// The arithmetic strategy.
pub struct Evaluator {
    config: EvalConfig,
    handlers: HandlerTable<Self, Node, f64>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        let handlers = HandlerTable::new()
            .on_number(Self::number)
            .on_negate(Self::negate)
            .on_add(Self::add)
            .on_sub(Self::sub)
            .on_mul(Self::mul)
            .on_div(Self::div);
        Self { config, handlers }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate `root` with a default dispatcher.
    pub fn evaluate(&mut self, root: &Node) -> EvalResult<f64> {
        Dispatcher::new().dispatch(root, self)
    }

    fn number(&mut self, _node: &Node, value: f64) -> EvalResult<f64> {
        Ok(value)
    }

    fn negate(&mut self, node: &Node, operand: f64) -> EvalResult<f64> {
        match self.config.negate {
            NegateMode::Recursive => Ok(-operand),
            NegateMode::Literal => {
                let Node::Negate(inner) = node else {
                    return Err(non_scalar_operand(node.tag()));
                };
                match inner.as_ref() {
                    Node::Number(value) => Ok(-value),
                    other => Err(non_scalar_operand(other.tag())),
                }
            }
        }
    }

    fn add(&mut self, _node: &Node, left: f64, right: f64) -> EvalResult<f64> {
        self.checked(BinaryOp::Add, left, right, left + right)
    }

    fn sub(&mut self, _node: &Node, left: f64, right: f64) -> EvalResult<f64> {
        self.checked(BinaryOp::Sub, left, right, left - right)
    }

    fn mul(&mut self, _node: &Node, left: f64, right: f64) -> EvalResult<f64> {
        self.checked(BinaryOp::Mul, left, right, left * right)
    }

    fn div(&mut self, _node: &Node, left: f64, right: f64) -> EvalResult<f64> {
        if right == 0.0 {
            return match self.config.division {
                DivisionPolicy::Checked => Err(division_by_zero()),
                DivisionPolicy::Ieee754 => Ok(left / right),
            };
        }
        self.checked(BinaryOp::Div, left, right, left / right)
    }

    /// Apply the overflow check to `result`, if enabled.
    #[inline]
    fn checked(&self, op: BinaryOp, left: f64, right: f64, result: f64) -> EvalResult<f64> {
        if self.config.overflow_check && left.is_finite() && right.is_finite() && !result.is_finite()
        {
            tracing::debug!(%op, left, right, "non-finite result");
            return Err(float_overflow(operation_name(op)));
        }
        Ok(result)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Evaluator {
    type Output = f64;

    fn name(&self) -> &'static str {
        "Evaluator"
    }

    fn handlers(&self) -> &HandlerTable<Self, Node, f64> {
        &self.handlers
    }
}

fn operation_name(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "addition",
        BinaryOp::Sub => "subtraction",
        BinaryOp::Mul => "multiplication",
        BinaryOp::Div => "division",
    }
}

/// Evaluate `root` with the default configuration.
pub fn evaluate(root: &Node) -> EvalResult<f64> {
    Evaluator::new().evaluate(root)
}
