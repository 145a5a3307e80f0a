//! Numeric literals.
//!
//! Floats print with shortest round-trip digits, switching to Go's exponent
//! form when the decimal exponent is below -4 or at least 21 (`1e+21`,
//! `1.5e-05`). Integral floats get a `.0` so the literal stays a float
//! constant. Non-finite floats and negative zero have no literal (Go
//! constants have no `-0`) and become calls into `math`.

use std::fmt;

use golit_ir::Expr;
use golit_value::{NumericFamily, NumericKind, Value};

use crate::describe::describe_value;
use crate::LiteralizeError;

/// Build a numeric value, converting to its type unless the bare literal
/// already has it.
///
/// Untyped constants of the default kinds (`int`, `float64`) need no
/// conversion, even for declared types. `math.NaN()` is a typed `float64`,
/// so a declared type still converts it.
pub(super) fn build_numeric(value: &Value, kind: NumericKind) -> Result<Expr, LiteralizeError> {
    let literal = bare_literal(value)?;
    let untyped = matches!(literal, Expr::BasicLit { .. });
    let declared = matches!(value, Value::Named { .. });
    if kind.family != NumericFamily::Complex && kind.is_default() && (untyped || !declared) {
        return Ok(literal);
    }
    Ok(Expr::convert(describe_value(value)?, literal))
}

fn bare_literal(value: &Value) -> Result<Expr, LiteralizeError> {
    let literal = match *value.underlying() {
        Value::Int(n) | Value::Int64(n) => Expr::int_lit(n.to_string()),
        Value::Int8(n) => Expr::int_lit(n.to_string()),
        Value::Int16(n) => Expr::int_lit(n.to_string()),
        Value::Int32(n) => Expr::int_lit(n.to_string()),
        Value::Uint(n) | Value::Uint64(n) | Value::Uintptr(n) => Expr::int_lit(n.to_string()),
        Value::Uint8(n) => Expr::int_lit(n.to_string()),
        Value::Uint16(n) => Expr::int_lit(n.to_string()),
        Value::Uint32(n) => Expr::int_lit(n.to_string()),
        Value::Float32(f) => float_literal(f, true),
        Value::Float64(f) => float_literal(f, true),
        Value::Complex64(re, im) => complex_literal(re, im),
        Value::Complex128(re, im) => complex_literal(re, im),
        _ => return Err(LiteralizeError::unsupported(&value.ty())),
    };
    Ok(literal)
}

/// Float widths share one formatting path.
trait GoFloat: Copy + fmt::Display + fmt::LowerExp {
    fn widen(self) -> f64;
}

impl GoFloat for f32 {
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl GoFloat for f64 {
    fn widen(self) -> f64 {
        self
    }
}

fn float_literal<F: GoFloat>(f: F, integral_marker: bool) -> Expr {
    let wide = f.widen();
    if wide.is_nan() {
        Expr::call("math.NaN", vec![])
    } else if wide.is_infinite() {
        let sign = if wide.is_sign_positive() { "1" } else { "-1" };
        Expr::call("math.Inf", vec![Expr::int_lit(sign)])
    } else if is_negative_zero(wide) {
        Expr::call("math.Copysign", vec![Expr::int_lit("0"), Expr::int_lit("-1")])
    } else {
        Expr::float_lit(float_text(f, integral_marker))
    }
}

fn is_negative_zero(f: f64) -> bool {
    f.to_bits() == (-0.0_f64).to_bits()
}

/// Whether `f` can be written as a float constant.
fn has_literal(f: f64) -> bool {
    f.is_finite() && !is_negative_zero(f)
}

/// `(re±imi)`, or `complex(re, im)` when a part has no literal.
fn complex_literal<F: GoFloat>(re: F, im: F) -> Expr {
    if has_literal(re.widen()) && has_literal(im.widen()) {
        let real = float_text(re, false);
        let imag = float_text(im, false);
        let sign = if imag.starts_with('-') { "" } else { "+" };
        Expr::float_lit(format!("({real}{sign}{imag}i)"))
    } else {
        Expr::call(
            "complex",
            vec![float_literal(re, false), float_literal(im, false)],
        )
    }
}

fn float_text<F: GoFloat>(f: F, integral_marker: bool) -> String {
    let scientific = format!("{f:e}");
    let exponent = scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));
    if let Some((mantissa, exp)) = exponent.filter(|(_, exp)| !(-4..21).contains(exp)) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
    }

    let plain = f.to_string();
    if integral_marker && !plain.contains('.') {
        plain + ".0"
    } else {
        plain
    }
}
