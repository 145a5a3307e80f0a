//! Composite value payloads: maps, structs, and pointers.

use std::fmt;

use parking_lot::RwLock;

use super::{Heap, Value};
use crate::{Field, StructType, Type};

// MapValue

/// An unordered key→value association.
///
/// Entries keep the order they were inserted in, which carries no meaning:
/// Go leaves map iteration order unspecified, and so does this model.
#[derive(Clone, PartialEq, Debug)]
pub struct MapValue {
    pub(super) key: Heap<Type>,
    pub(super) value: Heap<Type>,
    /// `None` for a nil map.
    pub(super) entries: Option<Heap<Vec<(Value, Value)>>>,
}

impl MapValue {
    pub fn key_type(&self) -> &Type {
        &self.key
    }

    pub fn value_type(&self) -> &Type {
        &self.value
    }

    pub fn entries(&self) -> &[(Value, Value)] {
        match &self.entries {
            Some(entries) => entries.as_slice(),
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn is_nil(&self) -> bool {
        self.entries.is_none()
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries()
            .iter()
            .find_map(|(k, v)| if k == key { Some(v) } else { None })
    }
}

// StructValue

/// A struct instance: its type plus one value per declared field.
#[derive(Clone, PartialEq, Debug)]
pub struct StructValue {
    pub(super) ty: Heap<StructType>,
    pub(super) fields: Heap<Vec<Value>>,
}

impl StructValue {
    pub fn struct_type(&self) -> &StructType {
        &self.ty
    }

    /// Fields in declaration order, paired with their declarations.
    pub fn fields(&self) -> impl Iterator<Item = (&Field, &Value)> + '_ {
        self.ty.fields.iter().zip(self.fields.iter())
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.ty.field_index(name).and_then(|i| self.fields.get(i))
    }
}

// PointerValue

/// A pointer: either nil or a handle to a shared, mutable cell.
///
/// Cloning a pointer aliases the same cell, and [`PointerValue::store`]
/// through one handle is visible through all of them. That is what allows a
/// value graph to contain cycles. Equality is pointer identity, as in Go.
#[derive(Clone)]
pub struct PointerValue {
    elem: Heap<Type>,
    cell: Option<Heap<RwLock<Value>>>,
}

impl PointerValue {
    pub(super) fn new(elem: Type, target: Value) -> Self {
        PointerValue {
            elem: Heap::new(elem),
            cell: Some(Heap::new(RwLock::new(target))),
        }
    }

    pub(super) fn nil(elem: Type) -> Self {
        PointerValue {
            elem: Heap::new(elem),
            cell: None,
        }
    }

    /// The pointed-to type.
    pub fn elem(&self) -> &Type {
        &self.elem
    }

    pub fn is_nil(&self) -> bool {
        self.cell.is_none()
    }

    /// Snapshot of the current target, `None` for a nil pointer.
    pub fn load(&self) -> Option<Value> {
        self.cell.as_ref().map(|cell| cell.read().clone())
    }

    /// Replace the target. Returns `false` (and does nothing) on a nil pointer.
    pub fn store(&self, value: Value) -> bool {
        match &self.cell {
            Some(cell) => {
                *cell.write() = value;
                true
            }
            None => false,
        }
    }

    /// Identity of the target cell, `None` for a nil pointer.
    pub fn addr(&self) -> Option<usize> {
        self.cell.as_ref().map(Heap::addr)
    }
}

impl PartialEq for PointerValue {
    fn eq(&self, other: &Self) -> bool {
        *self.elem == *other.elem
            && match (&self.cell, &other.cell) {
                (Some(a), Some(b)) => a.ptr_eq(b),
                (None, None) => true,
                _ => false,
            }
    }
}

// Targets are not printed: a pointer may point back at its own owner.
impl fmt::Debug for PointerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.addr() {
            Some(addr) => write!(f, "(*{})({addr:#x})", &*self.elem),
            None => write!(f, "(*{})(nil)", &*self.elem),
        }
    }
}
