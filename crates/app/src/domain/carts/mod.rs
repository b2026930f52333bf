//! Carts

pub mod data;
pub mod errors;
pub mod records;
pub mod repositories;
pub mod service;

pub use errors::{CartsErrorKind, CartsServiceError};
pub use service::*;
