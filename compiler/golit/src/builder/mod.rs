//! Literal Builder
//!
//! Recursive classify-and-build over a runtime value. Each node is
//! classified, described where it needs a type, and built into an
//! expression. Pointers to scalars are routed through the [`BuildScope`].
//!
//! # Recursion limits
//!
//! - Nesting deeper than `max_depth` fails with `DepthExceeded`.
//! - A pointer whose target cell is already on the current path fails with
//!   `CyclicValue`. Shared but acyclic targets are built at every site.
//! - Every step runs under `ensure_sufficient_stack`.

mod numeric;

use golit_fmt::{backquote, needs_escape, quote};
use golit_ir::Expr;
use golit_value::{classify, Category, PointerValue, Value};
use rustc_hash::FxHashSet;

use crate::describe::{describe, describe_value};
use crate::order::order;
use crate::scope::BuildScope;
use crate::stack::ensure_sufficient_stack;
use crate::{LiteralizeConfig, LiteralizeError};

/// Builds expression trees for one literalization call.
pub struct Builder {
    max_depth: usize,
    depth: usize,
    /// Pointer cells on the path from the root to the current node.
    on_path: FxHashSet<usize>,
}

impl Builder {
    pub fn new(config: &LiteralizeConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            depth: 0,
            on_path: FxHashSet::default(),
        }
    }

    /// Build the expression for `value`, binding pointer targets in `scope`.
    pub fn build(&mut self, value: &Value, scope: &mut BuildScope) -> Result<Expr, LiteralizeError> {
        if self.depth >= self.max_depth {
            return Err(LiteralizeError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.build_value(value, scope));
        self.depth -= 1;
        result
    }

    fn build_value(&mut self, value: &Value, scope: &mut BuildScope) -> Result<Expr, LiteralizeError> {
        match classify(value) {
            Category::Nil => Ok(Expr::ident("nil")),
            Category::Bool => Ok(build_bool(value)),
            Category::Numeric(kind) => numeric::build_numeric(value, kind),
            Category::Text => Ok(build_text(value.as_str().unwrap_or_default())),
            Category::Sequence => self.build_sequence(value, scope),
            Category::Map => self.build_map(value, scope),
            Category::Record => self.build_record(value, scope),
            Category::Reference => match value.underlying() {
                Value::Pointer(ptr) => self.build_reference(value, ptr, scope),
                _ => Err(LiteralizeError::unsupported(&value.ty())),
            },
            Category::Dynamic => self.build_dynamic(value, scope),
            Category::Unsupported => Err(LiteralizeError::unsupported(&value.ty())),
        }
    }

    fn build_sequence(&mut self, value: &Value, scope: &mut BuildScope) -> Result<Expr, LiteralizeError> {
        let elements = value
            .items()
            .iter()
            .map(|item| self.build(item, scope))
            .collect::<Result<Vec<_>, _>>()?;
        let ty = describe_value(value)?;
        Ok(Expr::Composite { ty, elements })
    }

    fn build_map(&mut self, value: &Value, scope: &mut BuildScope) -> Result<Expr, LiteralizeError> {
        let Value::Map(map) = value.underlying() else {
            return Err(LiteralizeError::unsupported(&value.ty()));
        };
        let mut entries = Vec::with_capacity(map.len());
        for (k, v) in map.entries() {
            let key = self.build(k, scope)?;
            let elem = self.build(v, scope)?;
            entries.push(Expr::key_value(key, elem));
        }
        let ty = describe_value(value)?;
        Ok(Expr::Composite {
            ty,
            elements: order(entries),
        })
    }

    /// Zero-valued fields are elided; the rest are keyed by field name.
    fn build_record(&mut self, value: &Value, scope: &mut BuildScope) -> Result<Expr, LiteralizeError> {
        let Value::Struct(record) = value.underlying() else {
            return Err(LiteralizeError::unsupported(&value.ty()));
        };
        let mut elements = Vec::new();
        for (field, field_value) in record.fields() {
            if field_value.is_zero() {
                continue;
            }
            let built = self.build(field_value, scope)?;
            elements.push(Expr::key_value(Expr::ident(field.name.as_str()), built));
        }
        let ty = describe_value(value)?;
        Ok(Expr::Composite { ty, elements })
    }

    /// Composite targets take their address directly (`&T{...}`). Other
    /// targets are bound to a variable in the scope and read as `&x0`.
    fn build_reference(
        &mut self,
        value: &Value,
        ptr: &PointerValue,
        scope: &mut BuildScope,
    ) -> Result<Expr, LiteralizeError> {
        let (Some(addr), Some(target)) = (ptr.addr(), ptr.load()) else {
            return Ok(Expr::ident("nil"));
        };
        if !self.on_path.insert(addr) {
            return Err(LiteralizeError::CyclicValue { ty: value.ty() });
        }
        let built = self.build(&target, scope);
        self.on_path.remove(&addr);
        let built = built?;

        if built.is_composite() {
            return Ok(Expr::addr_of(built));
        }
        // Arguments are evaluated outside the function literal, where the
        // other bindings are not in scope.
        if !built.is_self_contained() {
            return Err(LiteralizeError::unsupported(&value.ty()));
        }
        let name = scope.bind(describe(ptr.elem())?, built);
        Ok(Expr::addr_of(Expr::ident(name)))
    }

    /// `iface(inner)`, with `nil` for an empty interface.
    fn build_dynamic(&mut self, value: &Value, scope: &mut BuildScope) -> Result<Expr, LiteralizeError> {
        let inner = match value.underlying() {
            Value::Interface {
                inner: Some(inner), ..
            } => self.build(inner, scope)?,
            _ => Expr::ident("nil"),
        };
        Ok(Expr::convert(describe_value(value)?, inner))
    }
}

fn build_bool(value: &Value) -> Expr {
    let truth = matches!(value.underlying(), Value::Bool(true));
    Expr::ident(if truth { "true" } else { "false" })
}

/// Quoted by default. Text with a double quote and nothing else needing an
/// escape reads better raw: `` `say "hi"` ``.
fn build_text(text: &str) -> Expr {
    let prefers_raw = text.contains('"')
        && !text.contains('`')
        && text.chars().filter(|&c| c != '"').all(|c| !needs_escape(c));
    if prefers_raw {
        Expr::string_lit(backquote(text))
    } else {
        Expr::string_lit(quote(text))
    }
}
