//! Renderer Core
//!
//! Top-down rendering engine that decides inline vs broken format for each node.
//! Uses width calculations to make rendering decisions.
//!
//! # Algorithm
//!
//! 1. For each node, check if inline width + current column <= max width
//! 2. If it fits, render inline
//! 3. Otherwise, render broken
//!
//! Nested literals break independently based on their own width.
//!
//! # Modules
//!
//! - [`inline`]: Single-line expression rendering
//! - [`broken`]: Multi-line expression rendering
//! - [`types`]: Type expression rendering (always single-line)

mod broken;
mod inline;
mod types;

use golit_ir::{Expr, TypeExpr};

use crate::context::{RenderConfig, RenderContext};
use crate::emitter::StringEmitter;
use crate::width::{type_width, WidthCalculator};

pub use types::write_type;

/// Renderer for Go literal expressions.
///
/// Wraps a width calculator and render context to produce source text.
/// One renderer renders one tree; it is consumed by [`Renderer::render`].
pub struct Renderer {
    width_calc: WidthCalculator,
    ctx: RenderContext<StringEmitter>,
}

impl Renderer {
    /// Create a new renderer with the given config.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            width_calc: WidthCalculator::new(),
            ctx: RenderContext::with_config(config),
        }
    }

    /// Render an expression and return the source text.
    pub fn render(mut self, expr: &Expr) -> String {
        self.format(expr);
        self.ctx.finish().output()
    }

    /// Render an expression to the current context.
    fn format(&mut self, expr: &Expr) {
        let width = self.width_calc.width(expr);
        if self.ctx.fits(width) {
            self.emit_inline(expr);
        } else {
            self.emit_broken(expr);
        }
    }

    fn emit_type(&mut self, ty: &TypeExpr) {
        let mut text = String::with_capacity(type_width(ty));
        write_type(&mut text, ty);
        self.ctx.emit(&text);
    }
}

/// Render an expression with the default configuration.
pub fn render_expr(expr: &Expr) -> String {
    Renderer::new(RenderConfig::default()).render(expr)
}

/// Render an expression on a single line, regardless of width.
///
/// This is the canonical text form used for ordering map keys.
pub fn render_inline(expr: &Expr) -> String {
    Renderer::new(RenderConfig::single_line()).render(expr)
}

/// Render a type expression.
pub fn render_type(ty: &TypeExpr) -> String {
    let mut text = String::with_capacity(type_width(ty));
    write_type(&mut text, ty);
    text
}
