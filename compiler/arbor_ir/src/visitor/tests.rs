use pretty_assertions::assert_eq;

use super::*;
use crate::builder::{add, mul, neg, num, sub};
use crate::VariantTag;

/// Records the tag of every node on entry.
#[derive(Default)]
struct EntryOrder {
    tags: Vec<VariantTag>,
}

impl<'ast> Visitor<'ast> for EntryOrder {
    fn visit_node(&mut self, node: &'ast Node) {
        self.tags.push(node.tag());
        walk_node(self, node);
    }
}

#[derive(Default)]
struct CollectNumbers {
    seen: Vec<f64>,
}

impl Visitor<'_> for CollectNumbers {
    fn visit_number(&mut self, value: f64) {
        self.seen.push(value);
    }
}

/// Counts binary operators but does not descend below a `Negate`.
#[derive(Default)]
struct OperatorsOutsideNegation {
    count: usize,
}

impl<'ast> Visitor<'ast> for OperatorsOutsideNegation {
    fn visit_negate(&mut self, _operand: &'ast Node) {}

    fn visit_binary(&mut self, op: BinaryOp, left: &'ast Node, right: &'ast Node) {
        self.count += 1;
        walk_binary(self, op, left, right);
    }
}

#[test]
fn test_pre_order_entry() {
    let tree = add(num(1), mul(num(2), num(3)));
    let mut order = EntryOrder::default();
    order.visit_node(&tree);
    assert_eq!(
        order.tags,
        vec![
            VariantTag::Add,
            VariantTag::Number,
            VariantTag::Mul,
            VariantTag::Number,
            VariantTag::Number,
        ]
    );
}

#[test]
fn test_numbers_left_to_right() {
    let tree = sub(mul(num(1), num(2)), neg(num(3)));
    let mut numbers = CollectNumbers::default();
    numbers.visit_node(&tree);
    assert_eq!(numbers.seen, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_override_can_prune_subtree() {
    let tree = add(neg(mul(num(1), num(2))), sub(num(3), num(4)));
    let mut counter = OperatorsOutsideNegation::default();
    counter.visit_node(&tree);
    assert_eq!(counter.count, 2);
}

#[test]
fn test_visiting_does_not_change_tree() {
    let tree = add(num(1), mul(num(2), num(3)));
    let before = tree.clone();
    let mut order = EntryOrder::default();
    order.visit_node(&tree);
    order.visit_node(&tree);
    assert_eq!(tree, before);
    assert_eq!(order.tags.len(), 10);
}
