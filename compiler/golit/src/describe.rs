//! Type Describer
//!
//! Maps runtime type descriptors to the type syntax used in composite
//! literals, conversions and function literal signatures.

use golit_ir::{FieldGroup, TypeExpr};
use golit_value::{Field, InterfaceType, StructType, Type, Value};

use crate::stack::ensure_sufficient_stack;
use crate::LiteralizeError;

/// Describe `ty` as a Go type expression.
///
/// Declared names win over structure: a named struct, interface or
/// declared type describes as its name. Functions, channels and unsafe
/// pointers fail with `UnsupportedType`.
pub fn describe(ty: &Type) -> Result<TypeExpr, LiteralizeError> {
    ensure_sufficient_stack(|| describe_type(ty))
}

/// Describe the runtime type of `value` without materializing its [`Type`].
///
/// Composite values hold their element types, so only those are walked.
pub(crate) fn describe_value(value: &Value) -> Result<TypeExpr, LiteralizeError> {
    match value {
        Value::Named { ty, .. } => describe(ty),
        Value::Array { elem, items } => Ok(TypeExpr::array(items.len(), describe(elem)?)),
        Value::Slice { elem, .. } => Ok(TypeExpr::slice(describe(elem)?)),
        Value::Map(map) => Ok(TypeExpr::map(
            describe(map.key_type())?,
            describe(map.value_type())?,
        )),
        Value::Struct(record) => describe_struct(record.struct_type()),
        Value::Pointer(ptr) => Ok(TypeExpr::pointer(describe(ptr.elem())?)),
        Value::Interface { ty, .. } => Ok(describe_interface(ty)),
        other => describe(&other.ty()),
    }
}

fn describe_type(ty: &Type) -> Result<TypeExpr, LiteralizeError> {
    match ty {
        Type::Basic(kind) => Ok(TypeExpr::named(kind.name())),
        Type::Named { name, .. } => Ok(TypeExpr::named(name.as_str())),
        Type::Array { len, elem } => Ok(TypeExpr::array(*len, describe(elem)?)),
        Type::Slice(elem) => Ok(TypeExpr::slice(describe(elem)?)),
        Type::Map { key, value } => Ok(TypeExpr::map(describe(key)?, describe(value)?)),
        Type::Pointer(elem) => Ok(TypeExpr::pointer(describe(elem)?)),
        Type::Struct(st) => describe_struct(st),
        Type::Interface(it) => Ok(describe_interface(it)),
        Type::Func(_) | Type::Chan(_) | Type::UnsafePointer => Err(LiteralizeError::unsupported(ty)),
    }
}

fn describe_struct(st: &StructType) -> Result<TypeExpr, LiteralizeError> {
    match &st.name {
        Some(name) => Ok(TypeExpr::named(name.as_str())),
        None => describe_anonymous_struct(st),
    }
}

fn describe_interface(it: &InterfaceType) -> TypeExpr {
    it.name.as_deref().map_or(TypeExpr::Interface, TypeExpr::named)
}

/// Consecutive fields with the same type and tag share a group:
/// `struct{foo, bar int; baz string}`.
fn describe_anonymous_struct(st: &StructType) -> Result<TypeExpr, LiteralizeError> {
    let mut groups: Vec<FieldGroup> = Vec::with_capacity(st.fields.len());
    for Field { name, ty, tag } in &st.fields {
        let ty = describe(ty)?;
        match groups.last_mut() {
            Some(last) if last.ty == ty && last.tag == *tag => last.names.push(name.clone()),
            _ => groups.push(FieldGroup {
                names: vec![name.clone()],
                ty,
                tag: tag.clone(),
            }),
        }
    }
    Ok(TypeExpr::Struct(groups))
}
