//! Expression Nodes
//!
//! Every node is independently renderable as a Go expression.

use crate::TypeExpr;

/// Kind of a basic literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LitKind {
    /// Integer literal: `42`, `-128`.
    Int,
    /// Floating-point or complex literal: `3.0`, `1e+21`, `(1-2i)`.
    Float,
    /// Interpreted or raw string literal, quotes included.
    String,
}

/// The callee of a call expression.
///
/// Go conversions call a type (`int8(-5)`, `interface{}(1)`), so a callee
/// is either an expression or a type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Callee {
    Expr(Box<Expr>),
    Type(TypeExpr),
}

/// A function literal parameter: `x0 int`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: String,
    pub ty: TypeExpr,
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// Identifier: `nil`, `true`, `x0`.
    Ident(String),

    /// Basic literal with its source text.
    BasicLit { kind: LitKind, text: String },

    /// Composite literal: `T{a, b}` or `T{k: v}`.
    Composite { ty: TypeExpr, elements: Vec<Expr> },

    /// Keyed element inside a composite literal: `key: value`.
    KeyValue { key: Box<Expr>, value: Box<Expr> },

    /// Address-of: `&x`.
    AddrOf(Box<Expr>),

    /// Call or conversion: `f(a, b)`, `T(x)`.
    Call { callee: Callee, args: Vec<Expr> },

    /// Function literal whose body is a single `return body`.
    FuncLit {
        params: Vec<Param>,
        result: TypeExpr,
        body: Box<Expr>,
    },
}

impl Expr {
    /// Create an identifier.
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    /// Create an integer literal.
    pub fn int_lit(text: impl Into<String>) -> Self {
        Expr::BasicLit {
            kind: LitKind::Int,
            text: text.into(),
        }
    }

    /// Create a float (or complex) literal.
    pub fn float_lit(text: impl Into<String>) -> Self {
        Expr::BasicLit {
            kind: LitKind::Float,
            text: text.into(),
        }
    }

    /// Create a string literal from already-quoted text.
    pub fn string_lit(quoted: impl Into<String>) -> Self {
        Expr::BasicLit {
            kind: LitKind::String,
            text: quoted.into(),
        }
    }

    pub fn key_value(key: Expr, value: Expr) -> Self {
        Expr::KeyValue {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn addr_of(operand: Expr) -> Self {
        Expr::AddrOf(Box::new(operand))
    }

    /// Create a conversion `ty(arg)`.
    pub fn convert(ty: TypeExpr, arg: Expr) -> Self {
        Expr::Call {
            callee: Callee::Type(ty),
            args: vec![arg],
        }
    }

    /// Create a call of a named function.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Callee::Expr(Box::new(Expr::ident(name))),
            args,
        }
    }

    /// Returns `true` for composite literals.
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self, Expr::Composite { .. })
    }

    /// Returns `true` if this tree takes the address of nothing but
    /// composite literals.
    ///
    /// Only such expressions can be hoisted into a binding argument: an
    /// argument is evaluated outside the function literal, where the other
    /// bindings are not in scope. `&T{...}` is fine there; `&x0` is not.
    pub fn is_self_contained(&self) -> bool {
        match self {
            Expr::Ident(_) | Expr::BasicLit { .. } => true,
            Expr::AddrOf(operand) => operand.is_composite() && operand.is_self_contained(),
            Expr::FuncLit { .. } => false,
            Expr::Composite { elements, .. } => elements.iter().all(Expr::is_self_contained),
            Expr::KeyValue { key, value } => key.is_self_contained() && value.is_self_contained(),
            Expr::Call { callee, args } => {
                let callee_ok = match callee {
                    Callee::Expr(e) => e.is_self_contained(),
                    Callee::Type(_) => true,
                };
                callee_ok && args.iter().all(Expr::is_self_contained)
            }
        }
    }
}
