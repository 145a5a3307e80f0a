//! Golit Value - Reflective runtime values.
//!
//! This crate provides:
//! - Runtime type descriptors (`Type`, `BasicKind`, `StructType`, ...)
//! - Runtime values that carry their type (`Value`, `Heap`, `PointerValue`, ...)
//! - The value classifier (`classify`, `Category`)
//!
//! # Value Types
//!
//! The value module provides runtime values with enforced Arc usage:
//! - All heap allocations go through `Value::` factory methods
//! - `Heap<T>` wrapper enforces this invariant
//! - Pointer targets are shared, lockable cells, so aliasing and cycles
//!   can be expressed and pointer identity is observable
//!
//! Every value can report its runtime type through [`Value::ty`], the way a
//! reflection facade would.

mod classify;
mod ty;
mod value;

pub use classify::{classify, Category, NumericFamily, NumericKind};
pub use ty::{BasicKind, Field, InterfaceType, StructType, Type};
pub use value::{Heap, MapValue, PointerValue, StructValue, Value};
