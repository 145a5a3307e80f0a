//! End-to-end behavior of the literalizer: bindings, layout, configuration
//! and failures.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use golit::{
    literalize, literalize_to_string, Expr, LiteralizeConfig, LiteralizeError, Literalizer,
    RenderConfig, Value,
};
use golit_value::{Field, StructType, Type};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn int_pointers(targets: &[i64]) -> Value {
    Value::slice(
        Type::pointer(Type::INT),
        targets.iter().map(|&n| Value::pointer_to(Value::Int(n))).collect(),
    )
}

// -- Bindings --

#[test]
fn equal_targets_share_one_binding() {
    let text = literalize_to_string(&int_pointers(&[10, 10])).unwrap();
    assert_eq!(text, "(func(x0 int) []*int { return []*int{&x0, &x0} })(10)");
}

#[test]
fn distinct_targets_get_distinct_bindings() {
    let text = literalize_to_string(&int_pointers(&[1, 2, 1])).unwrap();
    assert_eq!(
        text,
        "(func(x0 int, x1 int) []*int { return []*int{&x0, &x1, &x0} })(1, 2)"
    );
}

#[test]
fn bound_values_are_call_expressions() {
    let expr = literalize(&Value::pointer_to(Value::string("s"))).unwrap();
    let Expr::Call { args, .. } = &expr else {
        panic!("expected a wrapped call, got {expr:?}");
    };
    assert_eq!(args, &vec![Expr::string_lit("\"s\"")]);
}

#[test]
fn no_pointers_means_no_wrapper() {
    let expr = literalize(&Value::slice(Type::INT, vec![Value::Int(1)])).unwrap();
    assert!(expr.is_composite());
}

#[test]
fn every_call_starts_fresh() {
    let literalizer = Literalizer::default();
    let first = literalizer.literalize_to_string(&int_pointers(&[7])).unwrap();
    let second = literalizer.literalize_to_string(&int_pointers(&[8])).unwrap();
    assert_eq!(first, "(func(x0 int) []*int { return []*int{&x0} })(7)");
    assert_eq!(second, "(func(x0 int) []*int { return []*int{&x0} })(8)");
}

#[test]
fn pointer_to_pointer_to_struct_is_bound() {
    let t = StructType::named("T", vec![Field::new("A", Type::INT)]);
    let inner = Value::pointer_to(Value::structure(t, vec![Value::Int(1)]));
    let text = literalize_to_string(&Value::pointer_to(inner)).unwrap();
    assert_eq!(text, "(func(x0 *T) **T { return &x0 })(&T{A: 1})");
}

#[test]
fn pointer_to_pointer_to_scalar_is_rejected() {
    let inner = Value::pointer_to(Value::Int(1));
    let err = literalize(&Value::pointer_to(inner)).unwrap_err();
    assert!(matches!(err, LiteralizeError::UnsupportedType { .. }));
}

// -- Values --

#[test]
fn pointer_keys_with_equal_targets_sort_by_value() {
    let t = StructType::named("T", vec![Field::new("A", Type::INT)]);
    let first = Value::pointer_to(Value::structure(t.clone(), vec![Value::Int(1)]));
    let second = Value::pointer_to(Value::structure(t.clone(), vec![Value::Int(1)]));
    let key_ty = Type::pointer(Type::Struct(t));

    let forward = Value::map(
        key_ty.clone(),
        Type::INT,
        vec![(first.clone(), Value::Int(1)), (second.clone(), Value::Int(2))],
    );
    let backward = Value::map(
        key_ty,
        Type::INT,
        vec![(second, Value::Int(2)), (first, Value::Int(1))],
    );
    let expected = "map[*T]int{&T{A: 1}: 1, &T{A: 1}: 2}";
    assert_eq!(literalize_to_string(&forward).unwrap(), expected);
    assert_eq!(literalize_to_string(&backward).unwrap(), expected);
}

#[test]
fn zero_fields_collapse_to_empty_literal() {
    let st = StructType::named(
        "Config",
        vec![
            Field::new("Name", Type::STRING),
            Field::new("Port", Type::INT),
            Field::new("Tags", Type::slice(Type::STRING)),
        ],
    );
    let text = literalize_to_string(&Value::structure(st, vec![])).unwrap();
    assert_eq!(text, "Config{}");
}

#[test]
fn sized_integers_convert() {
    assert_eq!(literalize_to_string(&Value::Int16(-1)).unwrap(), "int16(-1)");
}

// -- Configuration --

#[test]
fn binding_prefix_is_configurable() {
    let config = LiteralizeConfig::default().with_binding_prefix("v");
    let text = Literalizer::new(config)
        .literalize_to_string(&int_pointers(&[3]))
        .unwrap();
    assert_eq!(text, "(func(v0 int) []*int { return []*int{&v0} })(3)");
}

#[test]
fn narrow_width_breaks_elements() {
    let config = LiteralizeConfig::default().with_render(RenderConfig::with_max_width(20));
    let ints = [1000, 2000, 3000, 4000].map(Value::Int).to_vec();
    let text = Literalizer::new(config)
        .literalize_to_string(&Value::slice(Type::INT, ints))
        .unwrap();
    assert_eq!(text, "[]int{\n\t1000,\n\t2000,\n\t3000,\n\t4000,\n}");
}

#[test]
fn single_line_never_breaks() {
    let config = LiteralizeConfig::default().with_render(RenderConfig::single_line());
    let words = (0..40).map(|i| Value::string(format!("word{i}"))).collect();
    let text = Literalizer::new(config)
        .literalize_to_string(&Value::slice(Type::STRING, words))
        .unwrap();
    assert!(!text.contains('\n'));
    assert!(text.len() > 100);
}

// -- Failures --

#[test]
fn functions_and_channels_are_rejected() {
    let err = literalize(&Value::func("func(int) string")).unwrap_err();
    assert_eq!(err.to_string(), "unsupported type: func(int) string");

    let err = literalize(&Value::chan(Type::INT)).unwrap_err();
    assert_eq!(err.to_string(), "unsupported type: chan int");
}

#[test]
fn nesting_past_the_limit_fails() {
    let mut value = Value::Int(0);
    let mut ty = Type::INT;
    for _ in 0..5 {
        value = Value::slice(ty.clone(), vec![value]);
        ty = Type::slice(ty);
    }
    let literalizer = Literalizer::new(LiteralizeConfig::default().with_max_depth(4));
    let err = literalizer.literalize(&value).unwrap_err();
    assert_eq!(err, LiteralizeError::DepthExceeded { limit: 4 });
    assert_eq!(err.to_string(), "value nesting exceeds the depth limit of 4");
}

#[test]
fn nesting_far_past_the_default_limit_fails_cleanly() {
    let mut value = Value::Int(0);
    let mut ty = Type::INT;
    for _ in 0..600 {
        value = Value::slice(ty.clone(), vec![value]);
        ty = Type::slice(ty);
    }
    let err = literalize(&value).unwrap_err();
    assert_eq!(err, LiteralizeError::DepthExceeded { limit: 512 });
}

#[test]
fn two_node_cycle_fails() {
    let placeholder = StructType::named("Node", vec![]);
    let node = StructType::named(
        "Node",
        vec![Field::new("Next", Type::pointer(Type::Struct(placeholder)))],
    );
    let a = Value::pointer(Type::Struct(node.clone()), Value::Nil);
    let b = Value::pointer_to(Value::structure(node.clone(), vec![a.clone()]));
    let Value::Pointer(cell) = &a else {
        panic!("expected a pointer");
    };
    assert!(cell.store(Value::structure(node, vec![b])));

    let err = literalize(&a).unwrap_err();
    assert!(matches!(err, LiteralizeError::CyclicValue { .. }));
    assert_eq!(err.to_string(), "cyclic value through pointer of type *Node");
}

// -- Properties --

proptest! {
    #[test]
    fn map_output_ignores_insertion_order(
        entries in prop::collection::btree_map(any::<i64>(), "[a-z]{0,5}", 0..12)
    ) {
        let forward: Vec<_> = entries
            .iter()
            .map(|(k, v)| (Value::Int(*k), Value::string(v.as_str())))
            .collect();
        let mut backward = forward.clone();
        backward.reverse();

        let a = literalize_to_string(&Value::map(Type::INT, Type::STRING, forward)).unwrap();
        let b = literalize_to_string(&Value::map(Type::INT, Type::STRING, backward)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn ints_render_as_decimal(n in any::<i64>()) {
        prop_assert_eq!(literalize_to_string(&Value::Int(n)).unwrap(), n.to_string());
    }

    #[test]
    fn strings_stay_on_one_line(s in any::<String>()) {
        let text = literalize_to_string(&Value::string(s.as_str())).unwrap();
        prop_assert!(!text.contains('\n'));
        if let Some(raw) = text.strip_prefix('`') {
            prop_assert_eq!(raw.strip_suffix('`'), Some(s.as_str()));
        } else {
            prop_assert!(text.starts_with('"') && text.ends_with('"'));
        }
    }

    #[test]
    fn literalizing_twice_is_identical(targets in prop::collection::vec(-5i64..5, 0..8)) {
        let value = int_pointers(&targets);
        prop_assert_eq!(
            literalize_to_string(&value).unwrap(),
            literalize_to_string(&value).unwrap()
        );
    }
}
