//! Golit IR - Literal Expression Trees
//!
//! This crate contains the data structures produced by the literalizer and
//! consumed by the renderer:
//! - [`Expr`]: Go expression nodes (identifiers, basic literals, composite
//!   literals, conversions, address-of, function literals)
//! - [`TypeExpr`]: Go type syntax (named, array, slice, map, pointer,
//!   anonymous struct, empty interface)
//!
//! # Design Philosophy
//!
//! - **Owned trees**: literal trees are built once per call and rendered once,
//!   so nodes own their children directly instead of living in an arena.
//! - **Structural equality**: every type derives `Eq` and `Hash`, which is the
//!   equality the scope uses to deduplicate bindings.
//! - **Text, not numbers**: basic literals carry their source text, so floats
//!   never need to be hashed or compared as floats.

mod expr;
mod type_expr;

pub use expr::{Callee, Expr, LitKind, Param};
pub use type_expr::{FieldGroup, TypeExpr};
