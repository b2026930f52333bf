//! Tickets

pub mod data;
pub mod errors;
pub mod lookup;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::TicketsServiceError;
pub use lookup::TicketLookup;
pub use service::*;
