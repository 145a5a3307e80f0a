//! JSON documents as runtime values.
//!
//! Mirrors what Go's `encoding/json` produces when decoding into an
//! `interface{}`, except that integral numbers in `i64` range become `int`
//! rather than `float64`:
//!
//! | JSON | Value |
//! |------|-------|
//! | `null` | `nil` |
//! | `true` / `false` | `bool` |
//! | number | `int` when integral and in range, else `float64` |
//! | string | `string` |
//! | array | `[]interface{}` |
//! | object | `map[string]interface{}` |
//!
//! Every array element and object value is boxed in `interface{}`.

use golit_value::{InterfaceType, Type, Value};
use serde_json::Value as Json;

/// Convert a JSON document into a value.
pub fn from_json(json: &Json) -> Value {
    match json {
        Json::Null => Value::Nil,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Value::Int(i),
            (None, Some(f)) => Value::Float64(f),
            // Arbitrary-precision numbers outside f64 range.
            (None, None) => Value::string(n.to_string()),
        },
        Json::String(s) => Value::string(s.as_str()),
        Json::Array(items) => Value::slice(Type::any(), items.iter().map(boxed).collect()),
        Json::Object(fields) => Value::map(
            Type::STRING,
            Type::any(),
            fields
                .iter()
                .map(|(k, v)| (Value::string(k.as_str()), boxed(v)))
                .collect(),
        ),
    }
}

fn boxed(json: &Json) -> Value {
    match json {
        Json::Null => Value::nil_interface(InterfaceType::empty()),
        other => Value::interface(from_json(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literalize_to_string;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(json: &Json) -> String {
        match literalize_to_string(&from_json(json)) {
            Ok(text) => text,
            Err(err) => panic!("literalize failed: {err}"),
        }
    }

    #[test]
    fn scalars() {
        assert_eq!(render(&json!(null)), "nil");
        assert_eq!(render(&json!(true)), "true");
        assert_eq!(render(&json!(42)), "42");
        assert_eq!(render(&json!(1.5)), "1.5");
        assert_eq!(render(&json!("hi")), "\"hi\"");
    }

    #[test]
    fn large_unsigned_numbers_become_floats() {
        assert_eq!(render(&json!(u64::MAX)), "18446744073709552000.0");
    }

    #[test]
    fn arrays_box_their_elements() {
        assert_eq!(
            render(&json!([1, "a", null])),
            "[]interface{}{interface{}(1), interface{}(\"a\"), interface{}(nil)}"
        );
    }

    #[test]
    fn objects_sort_their_keys() {
        assert_eq!(
            render(&json!({"b": 2, "a": [true]})),
            "map[string]interface{}{\"a\": interface{}([]interface{}{interface{}(true)}), \"b\": interface{}(2)}"
        );
    }
}
