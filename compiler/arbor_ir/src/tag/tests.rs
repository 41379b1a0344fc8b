use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_index_matches_all_order() {
    for (i, tag) in VariantTag::ALL.iter().enumerate() {
        assert_eq!(tag.index(), i);
    }
    assert_eq!(VariantTag::COUNT, 6);
}

#[test]
fn test_arity() {
    assert_eq!(VariantTag::Number.arity(), 0);
    assert_eq!(VariantTag::Negate.arity(), 1);
    for op in BinaryOp::ALL {
        assert_eq!(op.tag().arity(), 2);
    }
}

#[test]
fn test_binary_op_round_trip() {
    for op in BinaryOp::ALL {
        assert_eq!(VariantTag::from(op).binary_op(), Some(op));
    }
    assert_eq!(VariantTag::Number.binary_op(), None);
    assert_eq!(VariantTag::Negate.binary_op(), None);
}

#[test]
fn test_display_uses_variant_name() {
    assert_eq!(VariantTag::Negate.to_string(), "Negate");
    assert_eq!(BinaryOp::Div.to_string(), "/");
}

#[test]
fn test_precedence() {
    assert!(BinaryOp::Mul.precedence() < BinaryOp::Add.precedence());
    assert_eq!(BinaryOp::Mul.precedence(), BinaryOp::Div.precedence());
}
