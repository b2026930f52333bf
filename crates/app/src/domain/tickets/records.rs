//! Ticket Records

use jiff::Timestamp;
use serde::Serialize;

use crate::uuids::TypedUuid;

/// Ticket UUID
pub type TicketUuid = TypedUuid<TicketRecord>;

/// Ticket Record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketRecord {
    /// Unique ticket identifier.
    pub uuid: TicketUuid,

    /// Display name, used in checkout error messages.
    pub name: String,

    /// Unit price in the smallest currency unit.
    pub price: u64,

    /// Tickets currently available for sale.
    pub stock: u32,

    /// Ticket creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,

    /// Soft-delete timestamp when deleted.
    pub deleted_at: Option<Timestamp>,
}
