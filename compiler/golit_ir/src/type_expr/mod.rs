//! Type expression representation.
//!
//! `TypeExpr` captures the Go type syntax that appears in literal output:
//! - Composite literal types: `[]int{...}`, `map[string]T{...}`, `T{...}`
//! - Conversion callees: `int8(-5)`, `interface{}(1)`
//! - Function literal parameters and results: `func(x0 int) *T`

/// A Go type expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExpr {
    /// A named type: `int`, `string`, `Point`, `error`.
    Named(String),

    /// A fixed-length array type: `[N]T`
    Array { len: usize, elem: Box<TypeExpr> },

    /// A slice type: `[]T`
    Slice(Box<TypeExpr>),

    /// A map type: `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },

    /// A pointer type: `*T`
    Pointer(Box<TypeExpr>),

    /// An anonymous struct type: `struct{a, b int; c string}`
    Struct(Vec<FieldGroup>),

    /// The empty interface: `interface{}`
    Interface,
}

/// A group of struct fields sharing one type and tag: `a, b int`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldGroup {
    pub names: Vec<String>,
    pub ty: TypeExpr,
    /// Raw tag text without back-ticks.
    pub tag: Option<String>,
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn array(len: usize, elem: TypeExpr) -> Self {
        TypeExpr::Array {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::Slice(Box::new(elem))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn pointer(elem: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(elem))
    }

    /// Check whether this type must be parenthesized when used as a callee.
    ///
    /// `*T(x)` parses as `*(T(x))`, so pointer conversions need `(*T)(x)`.
    #[inline]
    pub fn needs_parens_as_callee(&self) -> bool {
        matches!(self, TypeExpr::Pointer(_))
    }
}
