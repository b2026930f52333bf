//! Ticket Data

use crate::domain::tickets::records::TicketUuid;

/// New Ticket Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub uuid: TicketUuid,
    pub name: String,
    pub price: u64,
    pub stock: u32,
}

/// Ticket Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct TicketUpdate {
    pub name: String,
    pub price: u64,
    pub stock: u32,
}
