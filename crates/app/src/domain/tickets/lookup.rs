//! Ticket Lookup

use async_trait::async_trait;
use mockall::automock;

use crate::domain::tickets::records::{TicketRecord, TicketUuid};

/// Read access to live ticket price and stock.
#[automock]
#[async_trait]
pub trait TicketLookup: Send + Sync {
    /// Returns the ticket as currently stored, or `None` when it does not exist
    /// or has been deleted.
    async fn find_ticket(&self, ticket: TicketUuid) -> Result<Option<TicketRecord>, sqlx::Error>;
}
