//! End-to-end behavior of the dispatch engine through its public API.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use arbor_eval::{
    dispatch, init_tracing, Census, DivisionPolicy, EvalConfig, EvalError, EvalErrorKind,
    EvalResult, Evaluator, HandlerTable, Node, Printer, Strategy, VariantTag,
};
use arbor_ir::builder::{add, div, mul, neg, num, sub};
use arbor_ir::{BinaryOp, TreeBuilder};

/// `1 + 2 * (3 - 4) / 5`
fn reference_tree() -> Node {
    add(num(1), div(mul(num(2), sub(num(3), num(4))), num(5)))
}

/// Collects leaf values, declining `Negate`.
struct Leaves {
    seen: Vec<f64>,
    handlers: HandlerTable<Self, Node, ()>,
}

impl Leaves {
    fn new() -> Self {
        let mut handlers = HandlerTable::new().on_number(|s: &mut Leaves, _, v| {
            s.seen.push(v);
            Ok(())
        });
        for op in BinaryOp::ALL {
            handlers = handlers.on_binary(op, |_, _, (), ()| Ok(()));
        }
        Self {
            seen: Vec::new(),
            handlers,
        }
    }
}

impl Strategy for Leaves {
    type Output = ();

    fn name(&self) -> &'static str {
        "Leaves"
    }

    fn handlers(&self) -> &HandlerTable<Self, Node, ()> {
        &self.handlers
    }
}

#[test]
fn evaluates_reference_tree() {
    init_tracing();
    let value = dispatch(&reference_tree(), &mut Evaluator::new()).unwrap();
    assert!((value - 0.6).abs() < 1e-12, "got {value}");
}

#[test]
fn repeated_dispatch_is_deterministic() {
    let tree = reference_tree();
    let mut evaluator = Evaluator::new();
    let first = dispatch(&tree, &mut evaluator).unwrap();
    for _ in 0..10 {
        assert_eq!(
            dispatch(&tree, &mut evaluator).unwrap().to_bits(),
            first.to_bits()
        );
    }
}

#[test]
fn one_tree_many_strategies() {
    let tree = reference_tree();
    let before = tree.clone();

    let value = dispatch(&tree, &mut Evaluator::new()).unwrap();
    let text = dispatch(&tree, &mut Printer::new()).unwrap();
    let size = dispatch(&tree, &mut Census::new()).unwrap();

    assert!((value - 0.6).abs() < 1e-12);
    assert_eq!(text, "1 + 2 * (3 - 4) / 5");
    assert_eq!(size, 9);
    assert_eq!(tree, before);
}

#[test]
fn new_strategy_needs_no_node_changes() {
    let tree = reference_tree();
    let mut leaves = Leaves::new();
    dispatch(&tree, &mut leaves).unwrap();
    assert_eq!(leaves.seen, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn missing_handler_is_reported_by_variant() {
    // The Negate is the left operand, so the right subtree must never run.
    let tree = add(neg(num(9)), add(num(1), num(2)));
    let mut leaves = Leaves::new();
    let err = dispatch(&tree, &mut leaves).unwrap_err();

    assert_eq!(err.unhandled_tag(), Some(VariantTag::Negate));
    assert_eq!(err.to_string(), "no handler for `Negate` in strategy `Leaves`");
    assert!(leaves.seen.is_empty());
}

#[test]
fn division_by_zero_policies() {
    let tree = div(num(1), num(0));
    assert_eq!(
        dispatch(&tree, &mut Evaluator::new()).unwrap(),
        f64::INFINITY
    );

    let mut checked = Evaluator::with_config(EvalConfig {
        division: DivisionPolicy::Checked,
        ..EvalConfig::default()
    });
    let err = dispatch(&tree, &mut checked).unwrap_err();
    assert!(matches!(
        err.kind(),
        EvalErrorKind::ArithmeticFailure {
            operation: "division",
            ..
        }
    ));
}

#[test]
fn builder_assembled_tree_dispatches() {
    let mut builder = TreeBuilder::new();
    builder.push_number(3.0);
    builder.push_number(4.0);
    builder.apply(VariantTag::Sub).unwrap();
    builder.apply(VariantTag::Negate).unwrap();
    let tree = builder.finish().unwrap();

    assert_eq!(dispatch(&tree, &mut Evaluator::new()).unwrap(), 1.0);
    assert_eq!(dispatch(&tree, &mut Printer::new()).unwrap(), "-(3 - 4)");
}

#[test]
fn concurrent_traversals_share_one_tree() {
    let tree = reference_tree();
    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| dispatch(&tree, &mut Printer::new()).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.iter().all(|text| text == "1 + 2 * (3 - 4) / 5"));
}

#[test]
fn batch_dispatch_keeps_order_and_isolates_failures() {
    let trees = vec![
        add(num(1), num(2)),
        div(num(1), num(0)),
        neg(num(4)),
        reference_tree(),
    ];
    let dispatcher = arbor_eval::Dispatcher::new();
    let checked = EvalConfig {
        division: DivisionPolicy::Checked,
        ..EvalConfig::default()
    };
    let results: Vec<EvalResult<f64>> =
        dispatcher.dispatch_batch(&trees, || Evaluator::with_config(checked));

    assert_eq!(results.len(), 4);
    assert_eq!(results[0], Ok(3.0));
    assert_eq!(results[1], Err(arbor_eval::division_by_zero()));
    assert_eq!(results[2], Ok(-4.0));
    assert!((results[3].clone().unwrap() - 0.6).abs() < 1e-12);
}

#[test]
fn substituting_default_handler() {
    /// Counts leaves; anything else counts as a single opaque unit.
    struct Coarse {
        handlers: HandlerTable<Self, Node, u32>,
    }

    impl Strategy for Coarse {
        type Output = u32;

        fn name(&self) -> &'static str {
            "Coarse"
        }

        fn handlers(&self) -> &HandlerTable<Self, Node, u32> {
            &self.handlers
        }

        fn default_handler(&mut self, node: &Node) -> EvalResult<u32> {
            if node.tag() == VariantTag::Div {
                return Err(EvalError::new("refusing to look inside a division"));
            }
            tracing::warn!(tag = %node.tag(), "no handler, counting as one");
            Ok(1)
        }
    }

    let mut coarse = Coarse {
        handlers: HandlerTable::new()
            .on_number(|_, _, _| Ok(1))
            .on_add(|_, _, l, r| Ok(l + r)),
    };

    let tree = add(num(1), add(neg(sub(num(2), num(3))), num(4)));
    assert_eq!(dispatch(&tree, &mut coarse).unwrap(), 3);

    let err = dispatch(&reference_tree(), &mut coarse).unwrap_err();
    assert_eq!(err.to_string(), "refusing to look inside a division");
}
