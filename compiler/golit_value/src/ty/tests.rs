use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_uses_go_syntax() {
    assert_eq!(Type::INT.to_string(), "int");
    assert_eq!(Type::array(3, Type::STRING).to_string(), "[3]string");
    assert_eq!(
        Type::map(Type::STRING, Type::slice(Type::any())).to_string(),
        "map[string][]interface{}"
    );
    assert_eq!(Type::pointer(Type::Basic(BasicKind::Int8)).to_string(), "*int8");
    assert_eq!(Type::Chan(Box::new(Type::INT)).to_string(), "chan int");
    assert_eq!(Type::Func("func(int) string".into()).to_string(), "func(int) string");
}

#[test]
fn display_anonymous_struct() {
    let st = StructType::anonymous(vec![Field::new("a", Type::INT), Field::new("b", Type::STRING)]);
    assert_eq!(Type::Struct(st).to_string(), "struct{a int; b string}");
}

#[test]
fn display_named_types_use_their_name() {
    assert_eq!(Type::named("UserID", Type::INT).to_string(), "UserID");
    assert_eq!(Type::Struct(StructType::named("Point", vec![])).to_string(), "Point");
    assert_eq!(Type::Interface(InterfaceType::named("error")).to_string(), "error");
}

#[test]
fn underlying_strips_every_name() {
    let inner = Type::named("Inner", Type::STRING);
    let outer = Type::named("Outer", inner);
    assert_eq!(outer.underlying(), &Type::STRING);
    assert_eq!(Type::INT.underlying(), &Type::INT);
}

#[test]
fn field_lookup() {
    let st = StructType::named(
        "T",
        vec![Field::new("x", Type::INT), Field::new("y", Type::INT).with_tag(r#"json:"y""#)],
    );
    assert_eq!(st.field_index("y"), Some(1));
    assert_eq!(st.field_index("z"), None);
    assert_eq!(st.fields[1].tag.as_deref(), Some(r#"json:"y""#));
}
