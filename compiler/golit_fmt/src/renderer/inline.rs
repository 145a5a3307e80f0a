//! Inline Rendering
//!
//! Methods for emitting expressions on a single line.
//! Used when expressions fit within the line width.

use golit_ir::{Callee, Expr, Param, TypeExpr};

use super::Renderer;

impl Renderer {
    /// Emit an expression inline (single line).
    pub(super) fn emit_inline(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(name) => self.ctx.emit(name),
            Expr::BasicLit { text, .. } => self.ctx.emit(text),
            Expr::Composite { ty, elements } => {
                self.emit_type(ty);
                self.ctx.emit("{");
                self.emit_inline_list(elements);
                self.ctx.emit("}");
            }
            Expr::KeyValue { key, value } => {
                self.emit_inline(key);
                self.ctx.emit(": ");
                self.emit_inline(value);
            }
            Expr::AddrOf(operand) => {
                self.ctx.emit("&");
                self.emit_inline(operand);
            }
            Expr::Call { callee, args } => {
                self.emit_callee(callee, Self::emit_inline);
                self.ctx.emit("(");
                self.emit_inline_list(args);
                self.ctx.emit(")");
            }
            Expr::FuncLit {
                params,
                result,
                body,
            } => {
                self.emit_signature(params, result);
                self.ctx.emit(" { return ");
                self.emit_inline(body);
                self.ctx.emit(" }");
            }
        }
    }

    pub(super) fn emit_inline_list(&mut self, items: &[Expr]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.ctx.emit(", ");
            }
            self.emit_inline(item);
        }
    }

    /// Emit a callee, parenthesizing pointer types and function literals.
    ///
    /// `emit_func` renders a function-literal callee, so the broken path can
    /// let the literal make its own layout decision.
    pub(super) fn emit_callee(&mut self, callee: &Callee, emit_func: fn(&mut Self, &Expr)) {
        match callee {
            Callee::Type(ty) if ty.needs_parens_as_callee() => {
                self.ctx.emit("(");
                self.emit_type(ty);
                self.ctx.emit(")");
            }
            Callee::Type(ty) => self.emit_type(ty),
            Callee::Expr(func) if matches!(**func, Expr::FuncLit { .. }) => {
                self.ctx.emit("(");
                emit_func(self, func);
                self.ctx.emit(")");
            }
            Callee::Expr(func) => self.emit_inline(func),
        }
    }

    /// Emit `func(x0 T, x1 U) R`.
    pub(super) fn emit_signature(&mut self, params: &[Param], result: &TypeExpr) {
        self.ctx.emit("func(");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.ctx.emit(", ");
            }
            self.ctx.emit(&param.name);
            self.ctx.emit(" ");
            self.emit_type(&param.ty);
        }
        self.ctx.emit(") ");
        self.emit_type(result);
    }
}
