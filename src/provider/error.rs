//! Error type for the in-memory provider.

/// Errors raised by [`InMemoryInventory`](super::InMemoryInventory).
///
/// Embedders backing the trait with a real datastore define their own error
/// type; handlers only ever render provider errors through `Display`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Referenced entity does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A supplied reference (parent, category, location, part) does not
    /// resolve
    #[error("{message}")]
    InvalidReference { message: String },

    /// A structural rule blocks the operation
    #[error("{message}")]
    Constraint { message: String },

    /// A supplied value is out of range or malformed
    #[error("{message}")]
    InvalidData { message: String },
}

impl ProviderError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn invalid_reference(message: impl Into<String>) -> Self {
        Self::InvalidReference {
            message: message.into(),
        }
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint {
            message: message.into(),
        }
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }
}
