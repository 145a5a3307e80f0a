//! Width Calculation for Expression Nodes
//!
//! Bottom-up traversal calculating the inline width of each node.
//! Widths are cached by node address for the lifetime of one render.
//!
//! # Width Formulas
//!
//! | Construct | Width Formula |
//! |-----------|---------------|
//! | Identifier | `name` |
//! | Basic literal | `text` |
//! | Composite | `type + 1 + elements + separators + 1` (`{` + `}`) |
//! | Key-value | `key + 2 + value` (`: `) |
//! | Address-of | `1 + operand` |
//! | Call | `callee + 1 + args + separators + 1` |
//! | Function literal | `5 + params + 2 + result + 10 + body + 2` |
//!
//! All widths count characters, not bytes.


use golit_ir::{Callee, Expr, FieldGroup, Param, TypeExpr};
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::literals::tag_literal;

/// Width of `, ` between list elements.
const COMMA_SEPARATOR_WIDTH: usize = 2;

/// Width of `func(`.
const FUNC_OPEN_WIDTH: usize = 5;

/// Width of ` { return `.
const RETURN_OPEN_WIDTH: usize = 10;

/// Calculator for inline widths of expression nodes.
///
/// Computes how wide each expression would be if rendered on a single
/// line. Results are cached so the top-down render pass stays linear.
#[derive(Default)]
pub struct WidthCalculator {
    cache: FxHashMap<*const Expr, usize>,
}

impl WidthCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated cache capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Calculate the inline width of an expression.
    ///
    /// The cache is keyed by address, so the tree must not be mutated
    /// between calls on the same calculator.
    pub fn width(&mut self, expr: &Expr) -> usize {
        let key = std::ptr::from_ref(expr);
        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }

        let width = self.calculate_width(expr);
        self.cache.insert(key, width);
        width
    }

    /// Get the number of cached widths.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    fn calculate_width(&mut self, expr: &Expr) -> usize {
        match expr {
            Expr::Ident(name) => text_width(name),
            Expr::BasicLit { text, .. } => text_width(text),
            Expr::Composite { ty, elements } => {
                type_width(ty) + 1 + self.list_width(elements) + 1
            }
            Expr::KeyValue { key, value } => self.width(key) + 2 + self.width(value),
            Expr::AddrOf(operand) => 1 + self.width(operand),
            Expr::Call { callee, args } => self.callee_width(callee) + 1 + self.list_width(args) + 1,
            Expr::FuncLit {
                params,
                result,
                body,
            } => {
                FUNC_OPEN_WIDTH
                    + params_width(params)
                    + 2
                    + type_width(result)
                    + RETURN_OPEN_WIDTH
                    + self.width(body)
                    + 2
            }
        }
    }

    fn callee_width(&mut self, callee: &Callee) -> usize {
        match callee {
            Callee::Type(ty) if ty.needs_parens_as_callee() => type_width(ty) + 2,
            Callee::Type(ty) => type_width(ty),
            Callee::Expr(e) if matches!(**e, Expr::FuncLit { .. }) => self.width(e) + 2,
            Callee::Expr(e) => self.width(e),
        }
    }

    /// Width of `items` joined by `, `.
    pub fn list_width(&mut self, items: &[Expr]) -> usize {
        let total: usize = items.iter().map(|item| self.width(item)).sum();
        total + separators_width(items.len())
    }
}

/// Inline width of a type expression.
pub fn type_width(ty: &TypeExpr) -> usize {
    match ty {
        TypeExpr::Named(name) => text_width(name),
        TypeExpr::Array { len, elem } => 2 + digit_count(*len) + type_width(elem),
        TypeExpr::Slice(elem) => 2 + type_width(elem),
        TypeExpr::Map { key, value } => 5 + type_width(key) + type_width(value),
        TypeExpr::Pointer(elem) => 1 + type_width(elem),
        TypeExpr::Struct(groups) if groups.is_empty() => 8, // "struct{}"
        TypeExpr::Struct(groups) => {
            let fields: usize = groups.iter().map(field_group_width).sum();
            // "struct{" + fields joined by "; " + "}"
            7 + fields + COMMA_SEPARATOR_WIDTH * (groups.len() - 1) + 1
        }
        TypeExpr::Interface => 11, // "interface{}"
    }
}

fn field_group_width(group: &FieldGroup) -> usize {
    let names: usize = group.names.iter().map(|n| text_width(n)).sum();
    let tag = group
        .tag
        .as_deref()
        .map_or(0, |tag| 1 + text_width(&tag_literal(tag)));
    names + separators_width(group.names.len()) + 1 + type_width(&group.ty) + tag
}

fn params_width(params: &[Param]) -> usize {
    let total: usize = params
        .iter()
        .map(|p| text_width(&p.name) + 1 + type_width(&p.ty))
        .sum();
    total + separators_width(params.len())
}

#[inline]
fn separators_width(count: usize) -> usize {
    COMMA_SEPARATOR_WIDTH * count.saturating_sub(1)
}

#[inline]
fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
