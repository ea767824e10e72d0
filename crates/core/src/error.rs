//! Repository error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failure raised by a keyed repository.
///
/// Every variant is non-fatal: the repository reports it and performs no
/// partial mutation. The caller decides whether to log-and-continue or abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// An insert used an identity that is already stored.
    #[error("an item with id {id} already exists")]
    DuplicateIdentity { id: ItemId },

    /// A lookup, removal or update referenced an absent identity.
    #[error("item {id} not found")]
    NotFound { id: ItemId },

    /// A quantity outside `0..=i64::MAX` was supplied or would result.
    ///
    /// `quantity` is the exact requested value, so an overflowing stock
    /// adjustment reports the sum it could not store.
    #[error("quantity {quantity} is outside the valid range 0..={}", i64::MAX)]
    InvalidQuantity { quantity: i128 },
}

/// Discriminant of [`RepositoryError`], for callers that branch on the kind
/// without caring about the payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    DuplicateIdentity,
    NotFound,
    InvalidQuantity,
}

impl RepositoryError {
    pub fn duplicate(id: ItemId) -> Self {
        Self::DuplicateIdentity { id }
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound { id }
    }

    pub fn invalid_quantity(quantity: impl Into<i128>) -> Self {
        Self::InvalidQuantity {
            quantity: quantity.into(),
        }
    }

    pub fn kind(&self) -> RepositoryErrorKind {
        match self {
            Self::DuplicateIdentity { .. } => RepositoryErrorKind::DuplicateIdentity,
            Self::NotFound { .. } => RepositoryErrorKind::NotFound,
            Self::InvalidQuantity { .. } => RepositoryErrorKind::InvalidQuantity,
        }
    }
}
