//! Type Rendering
//!
//! Type expressions never break; anonymous structs separate field groups
//! with `; ` on one line.

use golit_ir::{FieldGroup, TypeExpr};

use crate::literals::tag_literal;

/// Append the Go syntax for `ty` to `out`.
pub fn write_type(out: &mut String, ty: &TypeExpr) {
    match ty {
        TypeExpr::Named(name) => out.push_str(name),
        TypeExpr::Array { len, elem } => {
            out.push('[');
            out.push_str(&len.to_string());
            out.push(']');
            write_type(out, elem);
        }
        TypeExpr::Slice(elem) => {
            out.push_str("[]");
            write_type(out, elem);
        }
        TypeExpr::Map { key, value } => {
            out.push_str("map[");
            write_type(out, key);
            out.push(']');
            write_type(out, value);
        }
        TypeExpr::Pointer(elem) => {
            out.push('*');
            write_type(out, elem);
        }
        TypeExpr::Struct(groups) => {
            out.push_str("struct{");
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                write_field_group(out, group);
            }
            out.push('}');
        }
        TypeExpr::Interface => out.push_str("interface{}"),
    }
}

fn write_field_group(out: &mut String, group: &FieldGroup) {
    out.push_str(&group.names.join(", "));
    out.push(' ');
    write_type(out, &group.ty);
    if let Some(tag) = &group.tag {
        out.push(' ');
        out.push_str(&tag_literal(tag));
    }
}
