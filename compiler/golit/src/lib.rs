//! Golit - runtime values to Go literal expressions.
//!
//! Turns a [`Value`] into an expression tree that, rendered as Go source,
//! reconstructs a structurally equal value. Useful for writing test
//! fixtures and snapshots from live data.
//!
//! # Pipeline
//!
//! 1. **Classify**: each node maps to a [`Category`](golit_value::Category)
//! 2. **Describe**: runtime types become [`TypeExpr`] syntax ([`describe`])
//! 3. **Build**: categories become [`Expr`] nodes ([`Builder`])
//! 4. **Order**: map entries are sorted by key text ([`order`])
//! 5. **Wrap**: pointers to scalars become parameters of a function
//!    literal invoked in place ([`BuildScope`])
//!
//! ```text
//! []*int{&x0, &x0}  →  (func(x0 int) []*int { return []*int{&x0, &x0} })(10)
//! ```

mod builder;
mod config;
mod describe;
mod error;
pub mod json;
mod order;
mod scope;
mod stack;

pub use builder::Builder;
pub use config::{LiteralizeConfig, DEFAULT_BINDING_PREFIX, DEFAULT_MAX_DEPTH};
pub use describe::describe;
pub use error::LiteralizeError;
pub use order::order;
pub use scope::{Binding, BuildScope};

pub use golit_fmt::{render_expr, RenderConfig, Renderer};
pub use golit_ir::{Expr, TypeExpr};
pub use golit_value::Value;

/// Turns values into literal expressions under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Literalizer {
    config: LiteralizeConfig,
}

impl Literalizer {
    pub fn new(config: LiteralizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LiteralizeConfig {
        &self.config
    }

    /// Build the literal expression for `value`.
    ///
    /// Each call gets its own scope; nothing persists between calls.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn literalize(&self, value: &Value) -> Result<Expr, LiteralizeError> {
        let mut scope = BuildScope::new(self.config.binding_prefix.as_str());
        let root = Builder::new(&self.config).build(value, &mut scope)?;
        if scope.is_empty() {
            return Ok(root);
        }
        let root_ty = describe::describe_value(value)?;
        Ok(scope.wrap(root, root_ty))
    }

    /// Build and render the literal for `value` with the configured layout.
    pub fn literalize_to_string(&self, value: &Value) -> Result<String, LiteralizeError> {
        let expr = self.literalize(value)?;
        Ok(Renderer::new(self.config.render).render(&expr))
    }
}

/// Build the literal expression for `value` with the default configuration.
pub fn literalize(value: &Value) -> Result<Expr, LiteralizeError> {
    Literalizer::default().literalize(value)
}

/// Build and render the literal for `value` with default settings.
pub fn literalize_to_string(value: &Value) -> Result<String, LiteralizeError> {
    Literalizer::default().literalize_to_string(value)
}
