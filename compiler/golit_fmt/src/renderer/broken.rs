//! Broken Rendering
//!
//! Methods for emitting expressions in broken (multi-line) format.
//! Used when expressions don't fit on a single line.

use golit_ir::Expr;

use super::Renderer;

impl Renderer {
    /// Emit an expression in broken (multi-line) format.
    pub(super) fn emit_broken(&mut self, expr: &Expr) {
        match expr {
            // Leaves cannot break
            Expr::Ident(_) | Expr::BasicLit { .. } => self.emit_inline(expr),

            // Composites - one element per line
            Expr::Composite { ty, elements } => {
                self.emit_type(ty);
                self.ctx.emit("{");
                self.emit_broken_list(elements);
                self.ctx.emit("}");
            }

            Expr::KeyValue { key, value } => {
                self.format(key);
                self.ctx.emit(": ");
                self.format(value);
            }
            Expr::AddrOf(operand) => {
                self.ctx.emit("&");
                self.format(operand);
            }

            // Calls - arguments stay inline when they fit after the callee,
            // a lone argument stays on the line, several stack
            Expr::Call { callee, args } => {
                self.emit_callee(callee, Self::format);
                self.ctx.emit("(");
                let args_width = self.width_calc.list_width(args);
                if self.ctx.fits(args_width + 1) {
                    self.emit_inline_list(args);
                } else if let [arg] = args.as_slice() {
                    self.format(arg);
                } else {
                    self.emit_broken_list(args);
                }
                self.ctx.emit(")");
            }

            // Function literals - body on its own line
            Expr::FuncLit {
                params,
                result,
                body,
            } => {
                self.emit_signature(params, result);
                self.ctx.emit(" {");
                self.ctx.indent();
                self.ctx.emit_newline_indent();
                self.ctx.emit("return ");
                self.format(body);
                self.ctx.dedent();
                self.ctx.emit_newline_indent();
                self.ctx.emit("}");
            }
        }
    }

    /// Emit items one per line, each followed by a comma.
    fn emit_broken_list(&mut self, items: &[Expr]) {
        if items.is_empty() {
            return;
        }
        self.ctx.indent();
        for item in items {
            self.ctx.emit_newline_indent();
            self.format(item);
            self.ctx.emit(",");
        }
        self.ctx.dedent();
        self.ctx.emit_newline_indent();
    }
}
