//! Value classification.
//!
//! Maps a runtime value onto the closed set of categories the literal
//! builder dispatches on. Values of declared types classify as their
//! underlying value.

use crate::Value;

/// Family of a numeric kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NumericFamily {
    Signed,
    Unsigned,
    Float,
    Complex,
}

/// Width and family of a numeric value.
///
/// `bits` is `None` for the platform-sized `int`, `uint` and `uintptr`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NumericKind {
    pub family: NumericFamily,
    pub bits: Option<u8>,
}

impl NumericKind {
    const fn new(family: NumericFamily, bits: Option<u8>) -> Self {
        NumericKind { family, bits }
    }

    /// The kinds an untyped constant defaults to: `int` and `float64`.
    ///
    /// Only these render as bare literals.
    pub fn is_default(self) -> bool {
        matches!(
            (self.family, self.bits),
            (NumericFamily::Signed, None) | (NumericFamily::Float, Some(64))
        )
    }
}

/// Semantic category of a value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    Nil,
    Bool,
    Numeric(NumericKind),
    Text,
    Sequence,
    Map,
    Record,
    Reference,
    Dynamic,
    Unsupported,
}

/// Classify a value.
pub fn classify(value: &Value) -> Category {
    use NumericFamily::{Complex, Float, Signed, Unsigned};

    let numeric = |family, bits| Category::Numeric(NumericKind::new(family, bits));

    match value.underlying() {
        Value::Nil => Category::Nil,
        Value::Bool(_) => Category::Bool,
        Value::Int(_) => numeric(Signed, None),
        Value::Int8(_) => numeric(Signed, Some(8)),
        Value::Int16(_) => numeric(Signed, Some(16)),
        Value::Int32(_) => numeric(Signed, Some(32)),
        Value::Int64(_) => numeric(Signed, Some(64)),
        Value::Uint(_) | Value::Uintptr(_) => numeric(Unsigned, None),
        Value::Uint8(_) => numeric(Unsigned, Some(8)),
        Value::Uint16(_) => numeric(Unsigned, Some(16)),
        Value::Uint32(_) => numeric(Unsigned, Some(32)),
        Value::Uint64(_) => numeric(Unsigned, Some(64)),
        Value::Float32(_) => numeric(Float, Some(32)),
        Value::Float64(_) => numeric(Float, Some(64)),
        Value::Complex64(..) => numeric(Complex, Some(64)),
        Value::Complex128(..) => numeric(Complex, Some(128)),
        Value::Str(_) => Category::Text,
        Value::Array { .. } | Value::Slice { .. } => Category::Sequence,
        Value::Map(_) => Category::Map,
        Value::Struct(_) => Category::Record,
        Value::Pointer(_) => Category::Reference,
        Value::Interface { .. } => Category::Dynamic,
        // `underlying` never stops on a declared-type wrapper.
        Value::Named { .. } | Value::Func { .. } | Value::Chan { .. } | Value::UnsafePointer(_) => {
            Category::Unsupported
        }
    }
}
