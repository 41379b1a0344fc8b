#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;
use crate::dispatch::dispatch;
use arbor_ir::builder::{add, div, mul, neg, num, sub};

#[test]
fn test_counts_reference_tree() {
    let tree = add(num(1), div(mul(num(2), sub(num(3), num(4))), num(5)));
    let mut census = Census::new();
    let size = dispatch(&tree, &mut census).unwrap();

    assert_eq!(size, tree.size());
    assert_eq!(census.count(VariantTag::Number), 5);
    assert_eq!(census.count(VariantTag::Negate), 0);
    for tag in [VariantTag::Add, VariantTag::Sub, VariantTag::Mul, VariantTag::Div] {
        assert_eq!(census.count(tag), 1, "{tag}");
    }
    assert_eq!(census.total(), 9);
}

#[test]
fn test_counts_reset_per_traversal() {
    let mut census = Census::default();
    dispatch(&add(num(1), num(2)), &mut census).unwrap();
    dispatch(&neg(neg(num(2))), &mut census).unwrap();
    assert_eq!(census.count(VariantTag::Negate), 2);
    assert_eq!(census.count(VariantTag::Add), 0);

    let counts = census.take_counts();
    assert_eq!(counts.get(&VariantTag::Number), Some(&1));
    assert_eq!(counts.len(), 2);
    assert_eq!(census.total(), 0);
}

#[test]
fn test_census_is_complete() {
    let census: Census = Census::new();
    assert!(census.handlers().is_complete());
}
