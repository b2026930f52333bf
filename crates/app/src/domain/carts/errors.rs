//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Cart service error variants.
///
/// The display strings are shown to end users verbatim.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("Ticket not found")]
    TicketNotFound,

    /// The line does not exist or belongs to another user.
    #[error("Cart item not found")]
    CartItemNotFound,

    #[error("Not enough tickets available")]
    InsufficientStock { requested: u32, available: u32 },

    /// Raised by checkout, naming the first ticket that failed validation.
    #[error("Not enough tickets available for {name}")]
    InsufficientStockFor {
        name: String,
        requested: u32,
        available: u32,
    },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("quantity must be a positive integer")]
    InvalidQuantity,

    #[error("cart amount overflowed")]
    AmountOverflow,

    #[error("storage error")]
    Sql(#[source] Error),
}

/// Coarse classification used when mapping errors onto a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartsErrorKind {
    NotFound,
    InsufficientStock,
    EmptyCart,
    InvalidData,
    Storage,
}

impl CartsServiceError {
    #[must_use]
    pub const fn kind(&self) -> CartsErrorKind {
        match self {
            Self::TicketNotFound | Self::CartItemNotFound => CartsErrorKind::NotFound,
            Self::InsufficientStock { .. } | Self::InsufficientStockFor { .. } => {
                CartsErrorKind::InsufficientStock
            }
            Self::EmptyCart => CartsErrorKind::EmptyCart,
            Self::InvalidQuantity | Self::AmountOverflow => CartsErrorKind::InvalidData,
            Self::Sql(_) => CartsErrorKind::Storage,
        }
    }
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::TicketNotFound,
            _ => Self::Sql(error),
        }
    }
}
