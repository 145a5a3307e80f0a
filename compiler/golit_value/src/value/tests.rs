use super::*;
use crate::Field;
use pretty_assertions::assert_eq;

fn point_type() -> StructType {
    StructType::named(
        "Point",
        vec![
            Field::new("X", Type::INT),
            Field::new("Y", Type::INT),
            Field::new("Label", Type::STRING),
        ],
    )
}

#[test]
fn test_scalar_types() {
    assert_eq!(Value::Int(1).ty(), Type::INT);
    assert_eq!(Value::Int8(-1).ty(), Type::Basic(BasicKind::Int8));
    assert_eq!(Value::Complex64(1.0, -2.0).ty(), Type::Basic(BasicKind::Complex64));
    assert_eq!(Value::string("a").ty(), Type::STRING);
    assert_eq!(Value::Nil.ty(), Type::any());
}

#[test]
fn test_composite_types() {
    let arr = Value::array(Type::INT, vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(arr.ty(), Type::array(2, Type::INT));

    let empty = Value::nil_slice(Type::STRING);
    assert_eq!(empty.ty(), Type::slice(Type::STRING));
    assert!(empty.items().is_empty());

    let p = Value::pointer_to(Value::Int(10));
    assert_eq!(p.ty(), Type::pointer(Type::INT));
}

#[test]
fn test_named_wraps_underlying() {
    let id = Value::named("UserID", Value::Int(7));
    assert_eq!(id.ty(), Type::named("UserID", Type::INT));
    assert_eq!(id.underlying(), &Value::Int(7));
}

#[test]
fn test_map_later_key_wins() {
    let m = Value::map(
        Type::STRING,
        Type::INT,
        vec![
            (Value::from("a"), Value::Int(1)),
            (Value::from("b"), Value::Int(2)),
            (Value::from("a"), Value::Int(3)),
        ],
    );
    let Value::Map(m) = m else {
        panic!("expected map");
    };
    assert_eq!(m.len(), 2);
    assert_eq!(m.get(&Value::from("a")), Some(&Value::Int(3)));
}

#[test]
fn test_record_fills_zero_fields() {
    let v = Value::record(point_type(), [("Y", Value::Int(4))]);
    let Value::Struct(s) = v else {
        panic!("expected struct");
    };
    assert_eq!(s.field("X"), Some(&Value::Int(0)));
    assert_eq!(s.field("Y"), Some(&Value::Int(4)));
    assert_eq!(s.field("Label"), Some(&Value::string("")));
}

#[test]
fn test_structure_pads_and_truncates() {
    let padded = Value::structure(point_type(), vec![Value::Int(1)]);
    assert!(!padded.is_zero());
    let Value::Struct(s) = padded else {
        panic!("expected struct");
    };
    assert_eq!(s.fields().count(), 3);

    let truncated = Value::structure(
        point_type(),
        vec![Value::Int(0), Value::Int(0), Value::string(""), Value::Int(9)],
    );
    assert!(truncated.is_zero());
}

#[test]
fn test_zero_values() {
    assert!(Value::Nil.is_zero());
    assert!(Value::Bool(false).is_zero());
    assert!(Value::Float64(0.0).is_zero());
    assert!(!Value::Float64(-0.0).is_zero());
    assert!(Value::string("").is_zero());
    assert!(Value::slice(Type::INT, vec![]).is_zero());
    assert!(Value::nil_map(Type::INT, Type::INT).is_zero());
    assert!(Value::nil_pointer(Type::INT).is_zero());
    assert!(Value::nil_interface(InterfaceType::empty()).is_zero());
    assert!(Value::array(Type::INT, vec![Value::Int(0), Value::Int(0)]).is_zero());
    assert!(!Value::array(Type::INT, vec![Value::Int(0), Value::Int(1)]).is_zero());
    assert!(!Value::pointer_to(Value::Int(0)).is_zero());
    assert!(!Value::interface(Value::Int(0)).is_zero());
}

#[test]
fn test_zero_of_type_is_zero() {
    let types = [
        Type::INT,
        Type::Basic(BasicKind::Complex128),
        Type::named("Celsius", Type::FLOAT64),
        Type::array(3, Type::STRING),
        Type::map(Type::STRING, Type::any()),
        Type::Struct(point_type()),
        Type::pointer(Type::INT),
        Type::Func("func()".to_string()),
        Type::Chan(Box::new(Type::INT)),
        Type::UnsafePointer,
    ];
    for ty in &types {
        let zero = Value::zero(ty);
        assert!(zero.is_zero(), "zero value of {ty} should be zero");
        assert_eq!(&zero.ty(), ty);
    }
}

#[test]
fn test_pointer_aliasing() {
    let p = Value::pointer_to(Value::Int(1));
    let Value::Pointer(p) = p else {
        panic!("expected pointer");
    };
    let alias = p.clone();
    assert!(alias.store(Value::Int(2)));
    assert_eq!(p.load(), Some(Value::Int(2)));
    assert_eq!(p, alias);
    assert_eq!(p.addr(), alias.addr());
}

#[test]
fn test_pointer_equality_is_identity() {
    let a = Value::pointer_to(Value::Int(1));
    let b = Value::pointer_to(Value::Int(1));
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

#[test]
fn test_nil_pointer_store_is_rejected() {
    let Value::Pointer(p) = Value::nil_pointer(Type::INT) else {
        panic!("expected pointer");
    };
    assert!(!p.store(Value::Int(1)));
    assert_eq!(p.load(), None);
    assert_eq!(p.addr(), None);
}

#[test]
fn test_cyclic_debug_terminates() {
    let node = StructType::named(
        "Node",
        vec![Field::new("Next", Type::pointer(Type::named("Node", Type::INT)))],
    );
    let ptr = Value::pointer(Type::Struct(node.clone()), Value::Nil);
    let Value::Pointer(cell) = &ptr else {
        panic!("expected pointer");
    };
    cell.store(Value::structure(node, vec![ptr.clone()]));
    let printed = format!("{cell:?}");
    assert!(printed.starts_with("(*Node)(0x"));
}
