//! Literalization errors.

use golit_value::Type;
use thiserror::Error;

/// Reasons a value cannot be turned into a literal.
///
/// The first error aborts the build; no partial tree is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LiteralizeError {
    /// Functions, channels and raw memory handles have no literal form.
    /// Also raised for a pointer target that cannot be hoisted into a
    /// binding, such as a pointer to a pointer to a scalar.
    #[error("unsupported type: {ty}")]
    UnsupportedType { ty: Type },

    /// Value nesting is deeper than the configured ceiling.
    #[error("value nesting exceeds the depth limit of {limit}")]
    DepthExceeded { limit: usize },

    /// A pointer refers back to one of its own ancestors.
    #[error("cyclic value through pointer of type {ty}")]
    CyclicValue { ty: Type },
}

impl LiteralizeError {
    pub(crate) fn unsupported(ty: &Type) -> Self {
        LiteralizeError::UnsupportedType { ty: ty.clone() }
    }
}
