//! Scope Manager
//!
//! Go cannot take the address of a basic literal (`&5` is illegal), so a
//! pointer to a scalar needs a named variable to point at. The scope
//! collects those variables during one build and finally wraps the root
//! expression in an immediately-invoked function literal that declares them
//! as parameters:
//!
//! ```text
//! (func(x0 int) *int { return &x0 })(5)
//! ```

use golit_ir::{Callee, Expr, Param, TypeExpr};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// A synthesized variable: parameter name, parameter type and argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub ty: TypeExpr,
    pub value: Expr,
}

/// The bindings created by one literalization call, in creation order.
///
/// Names are `<prefix><index>`, so they depend only on position. Bindings
/// with structurally equal type and value share one name.
pub struct BuildScope {
    prefix: String,
    bindings: Vec<Binding>,
    index: FxHashMap<(TypeExpr, Expr), usize>,
}

impl BuildScope {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            bindings: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Get a binding name for `value` of type `ty`, reusing an equal one.
    pub fn bind(&mut self, ty: TypeExpr, value: Expr) -> String {
        let key = (ty, value);
        if let Some(binding) = self.index.get(&key).and_then(|&i| self.bindings.get(i)) {
            trace!(name = %binding.name, "reusing binding");
            return binding.name.clone();
        }

        let position = self.bindings.len();
        let name = format!("{}{position}", self.prefix);
        trace!(name = %name, "creating binding");
        let (ty, value) = key.clone();
        self.index.insert(key, position);
        self.bindings.push(Binding {
            name: name.clone(),
            ty,
            value,
        });
        name
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Consume the scope, parameterizing `root` over its bindings.
    ///
    /// An empty scope returns `root` unchanged.
    pub fn wrap(self, root: Expr, root_ty: TypeExpr) -> Expr {
        if self.bindings.is_empty() {
            return root;
        }
        debug!(bindings = self.bindings.len(), "wrapping literal in function scope");

        let (params, args): (Vec<Param>, Vec<Expr>) = self
            .bindings
            .into_iter()
            .map(|b| (Param { name: b.name, ty: b.ty }, b.value))
            .unzip();
        let func = Expr::FuncLit {
            params,
            result: root_ty,
            body: Box::new(root),
        };
        Expr::Call {
            callee: Callee::Expr(Box::new(func)),
            args,
        }
    }
}
