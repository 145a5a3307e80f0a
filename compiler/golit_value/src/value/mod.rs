//! Runtime values for the literalizer.
//!
//! # Arc Enforcement Architecture
//!
//! All shared payloads go through factory methods on `Value`. The `Heap<T>`
//! wrapper has a private constructor, so external code cannot create heap
//! values directly.
//!
//! ```text
//! let s = Value::string("hello");                       // OK
//! let xs = Value::slice(Type::INT, vec![Value::Int(1)]); // OK
//! let p = Value::pointer_to(Value::Int(10));            // OK
//! ```
//!
//! # Types
//!
//! Every value reports its runtime type through [`Value::ty`]. Composite
//! values carry their element types explicitly so that empty and nil
//! collections still describe themselves.

mod composite;
mod heap;

use std::collections::HashMap;

pub use composite::{MapValue, PointerValue, StructValue};
pub use heap::Heap;

use crate::{BasicKind, InterfaceType, StructType, Type};

/// Runtime value with its type.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    /// Untyped nil: what an empty `interface{}` argument reflects as.
    Nil,

    // Scalars
    Bool(bool),
    Int(i64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(u64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Uintptr(u64),
    Float32(f32),
    Float64(f64),
    /// Complex value as (real, imaginary).
    Complex64(f32, f32),
    Complex128(f64, f64),
    Str(Heap<String>),

    /// Value of a declared non-struct type, wrapping a value of its
    /// underlying type. `ty` is always a `Type::Named`.
    Named { ty: Heap<Type>, inner: Heap<Value> },

    // Sequences
    Array {
        elem: Heap<Type>,
        items: Heap<Vec<Value>>,
    },
    /// `items` is `None` for a nil slice.
    Slice {
        elem: Heap<Type>,
        items: Option<Heap<Vec<Value>>>,
    },

    Map(MapValue),
    Struct(StructValue),
    Pointer(PointerValue),

    /// A value stored in an interface. `inner` is `None` for a nil interface.
    Interface {
        ty: Heap<InterfaceType>,
        inner: Option<Heap<Value>>,
    },

    // Recognised so they can be rejected.
    Func { sig: Heap<String>, is_nil: bool },
    Chan { elem: Heap<Type>, is_nil: bool },
    UnsafePointer(usize),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Wrap `inner` in the declared type `name`, whose underlying type is
    /// the type of `inner`.
    pub fn named(name: impl Into<String>, inner: Value) -> Self {
        Value::Named {
            ty: Heap::new(Type::named(name, inner.ty())),
            inner: Heap::new(inner),
        }
    }

    /// A fixed-length array; the length is `items.len()`.
    pub fn array(elem: Type, items: Vec<Value>) -> Self {
        Value::Array {
            elem: Heap::new(elem),
            items: Heap::new(items),
        }
    }

    pub fn slice(elem: Type, items: Vec<Value>) -> Self {
        Value::Slice {
            elem: Heap::new(elem),
            items: Some(Heap::new(items)),
        }
    }

    pub fn nil_slice(elem: Type) -> Self {
        Value::Slice {
            elem: Heap::new(elem),
            items: None,
        }
    }

    /// A map. A later entry with a key equal to an earlier one replaces the
    /// earlier value, as assignment into a Go map would.
    pub fn map(key: Type, value: Type, entries: Vec<(Value, Value)>) -> Self {
        let mut unique: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (k, v) in entries {
            match unique.iter_mut().find(|(existing, _)| *existing == k) {
                Some(slot) => slot.1 = v,
                None => unique.push((k, v)),
            }
        }
        Value::Map(MapValue {
            key: Heap::new(key),
            value: Heap::new(value),
            entries: Some(Heap::new(unique)),
        })
    }

    pub fn nil_map(key: Type, value: Type) -> Self {
        Value::Map(MapValue {
            key: Heap::new(key),
            value: Heap::new(value),
            entries: None,
        })
    }

    /// A struct from positional field values.
    ///
    /// Missing trailing fields take their zero value; surplus values are
    /// dropped.
    pub fn structure(ty: StructType, fields: Vec<Value>) -> Self {
        let mut fields = fields;
        fields.truncate(ty.fields.len());
        for field in &ty.fields[fields.len()..] {
            fields.push(Value::zero(&field.ty));
        }
        Value::Struct(StructValue {
            ty: Heap::new(ty),
            fields: Heap::new(fields),
        })
    }

    /// A struct from named field values; every other field is zero.
    ///
    /// Names that are not fields of `ty` are ignored.
    pub fn record<'a>(ty: StructType, values: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        let mut by_name: HashMap<&str, Value> = values.into_iter().collect();
        let fields = ty
            .fields
            .iter()
            .map(|f| {
                by_name
                    .remove(f.name.as_str())
                    .unwrap_or_else(|| Value::zero(&f.ty))
            })
            .collect();
        Value::Struct(StructValue {
            ty: Heap::new(ty),
            fields: Heap::new(fields),
        })
    }

    /// A pointer to a fresh cell holding `target`, typed by the target.
    pub fn pointer_to(target: Value) -> Self {
        Value::Pointer(PointerValue::new(target.ty(), target))
    }

    /// A pointer with an explicit element type.
    pub fn pointer(elem: Type, target: Value) -> Self {
        Value::Pointer(PointerValue::new(elem, target))
    }

    pub fn nil_pointer(elem: Type) -> Self {
        Value::Pointer(PointerValue::nil(elem))
    }

    /// `inner` stored in an `interface{}`.
    pub fn interface(inner: Value) -> Self {
        Value::boxed(InterfaceType::empty(), inner)
    }

    /// `inner` stored in the given interface type.
    pub fn boxed(ty: InterfaceType, inner: Value) -> Self {
        Value::Interface {
            ty: Heap::new(ty),
            inner: Some(Heap::new(inner)),
        }
    }

    pub fn nil_interface(ty: InterfaceType) -> Self {
        Value::Interface {
            ty: Heap::new(ty),
            inner: None,
        }
    }

    /// A non-nil function value with the given signature text.
    pub fn func(sig: impl Into<String>) -> Self {
        Value::Func {
            sig: Heap::new(sig.into()),
            is_nil: false,
        }
    }

    /// A non-nil channel value.
    pub fn chan(elem: Type) -> Self {
        Value::Chan {
            elem: Heap::new(elem),
            is_nil: false,
        }
    }

    /// The zero value of `ty`.
    pub fn zero(ty: &Type) -> Self {
        match ty {
            Type::Basic(kind) => match kind {
                BasicKind::Bool => Value::Bool(false),
                BasicKind::Int => Value::Int(0),
                BasicKind::Int8 => Value::Int8(0),
                BasicKind::Int16 => Value::Int16(0),
                BasicKind::Int32 => Value::Int32(0),
                BasicKind::Int64 => Value::Int64(0),
                BasicKind::Uint => Value::Uint(0),
                BasicKind::Uint8 => Value::Uint8(0),
                BasicKind::Uint16 => Value::Uint16(0),
                BasicKind::Uint32 => Value::Uint32(0),
                BasicKind::Uint64 => Value::Uint64(0),
                BasicKind::Uintptr => Value::Uintptr(0),
                BasicKind::Float32 => Value::Float32(0.0),
                BasicKind::Float64 => Value::Float64(0.0),
                BasicKind::Complex64 => Value::Complex64(0.0, 0.0),
                BasicKind::Complex128 => Value::Complex128(0.0, 0.0),
                BasicKind::String => Value::string(""),
            },
            Type::Named { underlying, .. } => Value::Named {
                ty: Heap::new(ty.clone()),
                inner: Heap::new(Value::zero(underlying)),
            },
            Type::Array { len, elem } => {
                let items = (0..*len).map(|_| Value::zero(elem)).collect();
                Value::array((**elem).clone(), items)
            }
            Type::Slice(elem) => Value::nil_slice((**elem).clone()),
            Type::Map { key, value } => Value::nil_map((**key).clone(), (**value).clone()),
            Type::Struct(st) => Value::structure(st.clone(), Vec::new()),
            Type::Pointer(elem) => Value::nil_pointer((**elem).clone()),
            Type::Interface(it) => Value::nil_interface(it.clone()),
            Type::Func(sig) => Value::Func {
                sig: Heap::new(sig.clone()),
                is_nil: true,
            },
            Type::Chan(elem) => Value::Chan {
                elem: Heap::new((**elem).clone()),
                is_nil: true,
            },
            Type::UnsafePointer => Value::UnsafePointer(0),
        }
    }
}

// Value Methods

impl Value {
    /// The runtime type of this value.
    ///
    /// Untyped nil reports `interface{}`, the static type of the slot it
    /// was passed through.
    pub fn ty(&self) -> Type {
        match self {
            Value::Nil => Type::any(),
            Value::Bool(_) => Type::BOOL,
            Value::Int(_) => Type::INT,
            Value::Int8(_) => Type::Basic(BasicKind::Int8),
            Value::Int16(_) => Type::Basic(BasicKind::Int16),
            Value::Int32(_) => Type::Basic(BasicKind::Int32),
            Value::Int64(_) => Type::Basic(BasicKind::Int64),
            Value::Uint(_) => Type::Basic(BasicKind::Uint),
            Value::Uint8(_) => Type::Basic(BasicKind::Uint8),
            Value::Uint16(_) => Type::Basic(BasicKind::Uint16),
            Value::Uint32(_) => Type::Basic(BasicKind::Uint32),
            Value::Uint64(_) => Type::Basic(BasicKind::Uint64),
            Value::Uintptr(_) => Type::Basic(BasicKind::Uintptr),
            Value::Float32(_) => Type::Basic(BasicKind::Float32),
            Value::Float64(_) => Type::FLOAT64,
            Value::Complex64(..) => Type::Basic(BasicKind::Complex64),
            Value::Complex128(..) => Type::Basic(BasicKind::Complex128),
            Value::Str(_) => Type::STRING,
            Value::Named { ty, .. } => (**ty).clone(),
            Value::Array { elem, items } => Type::array(items.len(), (**elem).clone()),
            Value::Slice { elem, .. } => Type::slice((**elem).clone()),
            Value::Map(m) => Type::map(m.key_type().clone(), m.value_type().clone()),
            Value::Struct(s) => Type::Struct(s.struct_type().clone()),
            Value::Pointer(p) => Type::pointer(p.elem().clone()),
            Value::Interface { ty, .. } => Type::Interface((**ty).clone()),
            Value::Func { sig, .. } => Type::Func((**sig).clone()),
            Value::Chan { elem, .. } => Type::Chan(Box::new((**elem).clone())),
            Value::UnsafePointer(_) => Type::UnsafePointer,
        }
    }

    /// Strip declared-type wrappers down to the underlying value.
    pub fn underlying(&self) -> &Value {
        let mut value = self;
        while let Value::Named { inner, .. } = value {
            value = inner;
        }
        value
    }

    /// Elements of an array or slice; empty for anything else.
    pub fn items(&self) -> &[Value] {
        match self.underlying() {
            Value::Array { items, .. } | Value::Slice { items: Some(items), .. } => items,
            _ => &[],
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.underlying() {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Check whether this value equals the zero value of its type.
    ///
    /// Floats compare by bit pattern, so negative zero is not zero. Empty
    /// slices and maps count as zero whether or not they are nil.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Nil => true,
            Value::Bool(b) => !b,
            Value::Int(n) | Value::Int64(n) => *n == 0,
            Value::Int8(n) => *n == 0,
            Value::Int16(n) => *n == 0,
            Value::Int32(n) => *n == 0,
            Value::Uint(n) | Value::Uint64(n) | Value::Uintptr(n) => *n == 0,
            Value::Uint8(n) => *n == 0,
            Value::Uint16(n) => *n == 0,
            Value::Uint32(n) => *n == 0,
            Value::Float32(f) => f.to_bits() == 0,
            Value::Float64(f) => f.to_bits() == 0,
            Value::Complex64(re, im) => re.to_bits() == 0 && im.to_bits() == 0,
            Value::Complex128(re, im) => re.to_bits() == 0 && im.to_bits() == 0,
            Value::Str(s) => s.is_empty(),
            Value::Named { inner, .. } => inner.is_zero(),
            Value::Array { items, .. } => items.iter().all(Value::is_zero),
            Value::Slice { items, .. } => items.as_ref().map_or(true, |items| items.is_empty()),
            Value::Map(m) => m.is_empty(),
            Value::Struct(s) => s.fields().all(|(_, v)| v.is_zero()),
            Value::Pointer(p) => p.is_nil(),
            Value::Interface { inner, .. } => inner.is_none(),
            Value::Func { is_nil, .. } | Value::Chan { is_nil, .. } => *is_nil,
            Value::UnsafePointer(addr) => *addr == 0,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float64(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests;
