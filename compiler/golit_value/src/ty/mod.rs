//! Runtime type descriptors.
//!
//! `Type` mirrors the shape of Go's runtime types closely enough to describe
//! any literalizable value, plus the kinds that are recognised only so they
//! can be rejected (functions, channels, unsafe pointers).

use std::fmt;

/// Predeclared scalar kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
}

impl BasicKind {
    /// The predeclared Go name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            BasicKind::Bool => "bool",
            BasicKind::Int => "int",
            BasicKind::Int8 => "int8",
            BasicKind::Int16 => "int16",
            BasicKind::Int32 => "int32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint => "uint",
            BasicKind::Uint8 => "uint8",
            BasicKind::Uint16 => "uint16",
            BasicKind::Uint32 => "uint32",
            BasicKind::Uint64 => "uint64",
            BasicKind::Uintptr => "uintptr",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
            BasicKind::Complex64 => "complex64",
            BasicKind::Complex128 => "complex128",
            BasicKind::String => "string",
        }
    }
}

/// A struct field declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    pub name: String,
    pub ty: Type,
    /// Raw tag text, without the surrounding back-ticks.
    pub tag: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Field {
            name: name.into(),
            ty,
            tag: None,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// A struct type, named (`type Point struct{...}`) or anonymous.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructType {
    pub name: Option<String>,
    pub fields: Vec<Field>,
}

impl StructType {
    pub fn named(name: impl Into<String>, fields: Vec<Field>) -> Self {
        StructType {
            name: Some(name.into()),
            fields,
        }
    }

    pub fn anonymous(fields: Vec<Field>) -> Self {
        StructType { name: None, fields }
    }

    /// Index of the field with the given name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// An interface type. Unnamed interfaces are `interface{}`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct InterfaceType {
    pub name: Option<String>,
}

impl InterfaceType {
    /// The empty interface, `interface{}`.
    pub fn empty() -> Self {
        InterfaceType { name: None }
    }

    /// A declared interface such as `error` or `fmt.Stringer`.
    pub fn named(name: impl Into<String>) -> Self {
        InterfaceType {
            name: Some(name.into()),
        }
    }
}

/// A runtime type descriptor.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// A predeclared scalar type.
    Basic(BasicKind),
    /// A declared non-struct type: `type UserID int`, `type IDs []int`.
    Named { name: String, underlying: Box<Type> },
    Array { len: usize, elem: Box<Type> },
    Slice(Box<Type>),
    Map { key: Box<Type>, value: Box<Type> },
    Pointer(Box<Type>),
    Struct(StructType),
    Interface(InterfaceType),
    /// A function type, carried as its signature text: `func(int) string`.
    Func(String),
    Chan(Box<Type>),
    UnsafePointer,
}

impl Type {
    pub const BOOL: Type = Type::Basic(BasicKind::Bool);
    pub const INT: Type = Type::Basic(BasicKind::Int);
    pub const FLOAT64: Type = Type::Basic(BasicKind::Float64);
    pub const STRING: Type = Type::Basic(BasicKind::String);

    pub fn named(name: impl Into<String>, underlying: Type) -> Self {
        Type::Named {
            name: name.into(),
            underlying: Box::new(underlying),
        }
    }

    pub fn array(len: usize, elem: Type) -> Self {
        Type::Array {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: Type) -> Self {
        Type::Slice(Box::new(elem))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn pointer(elem: Type) -> Self {
        Type::Pointer(Box::new(elem))
    }

    /// `interface{}`
    pub fn any() -> Self {
        Type::Interface(InterfaceType::empty())
    }

    /// Strip declared names down to the underlying type.
    pub fn underlying(&self) -> &Type {
        let mut ty = self;
        while let Type::Named { underlying, .. } = ty {
            ty = underlying;
        }
        ty
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(kind) => f.write_str(kind.name()),
            Type::Named { name, .. } => f.write_str(name),
            Type::Array { len, elem } => write!(f, "[{len}]{elem}"),
            Type::Slice(elem) => write!(f, "[]{elem}"),
            Type::Map { key, value } => write!(f, "map[{key}]{value}"),
            Type::Pointer(elem) => write!(f, "*{elem}"),
            Type::Struct(st) => {
                if let Some(name) = &st.name {
                    return f.write_str(name);
                }
                f.write_str("struct{")?;
                for (i, field) in st.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{} {}", field.name, field.ty)?;
                }
                f.write_str("}")
            }
            Type::Interface(it) => match &it.name {
                Some(name) => f.write_str(name),
                None => f.write_str("interface{}"),
            },
            Type::Func(sig) => f.write_str(sig),
            Type::Chan(elem) => write!(f, "chan {elem}"),
            Type::UnsafePointer => f.write_str("unsafe.Pointer"),
        }
    }
}

#[cfg(test)]
mod tests;
