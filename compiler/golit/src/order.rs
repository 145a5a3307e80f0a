//! Map Key Orderer
//!
//! Go map iteration order is unspecified, so map entries are sorted by the
//! canonical single-line text of their keys. Distinct keys can render
//! identically (NaN floats, pointers to equal structs); those entries are
//! ordered by their value text, so the output never depends on insertion
//! order.

use golit_fmt::render_inline;
use golit_ir::Expr;

/// Sort map entries by rendered key text, then by rendered value text.
///
/// Entries are `KeyValue` nodes; any other node sorts by its own text.
pub fn order(mut entries: Vec<Expr>) -> Vec<Expr> {
    entries.sort_by_cached_key(|entry| match entry {
        Expr::KeyValue { key, value } => (render_inline(key), render_inline(value)),
        other => (render_inline(other), String::new()),
    });
    entries
}
