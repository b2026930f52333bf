//! Tickets service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::tickets::{
        data::{NewTicket, TicketUpdate},
        errors::TicketsServiceError,
        records::{TicketRecord, TicketUuid},
        repository::PgTicketsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgTicketsService {
    repository: PgTicketsRepository,
}

impl PgTicketsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            repository: PgTicketsRepository::new(db),
        }
    }
}

#[async_trait]
impl TicketsService for PgTicketsService {
    async fn list_tickets(&self) -> Result<Vec<TicketRecord>, TicketsServiceError> {
        self.repository.list_tickets().await.map_err(Into::into)
    }

    async fn get_ticket(&self, ticket: TicketUuid) -> Result<TicketRecord, TicketsServiceError> {
        self.repository.get_ticket(ticket).await.map_err(Into::into)
    }

    #[tracing::instrument(
        name = "tickets.service.create_ticket",
        skip(self, ticket),
        fields(ticket_uuid = %ticket.uuid, price = ticket.price, stock = ticket.stock),
        err
    )]
    async fn create_ticket(&self, ticket: NewTicket) -> Result<TicketRecord, TicketsServiceError> {
        let price = i64::try_from(ticket.price)?;
        let stock = i32::try_from(ticket.stock)?;

        let created = self
            .repository
            .create_ticket(ticket.uuid, &ticket.name, price, stock)
            .await?;

        info!(ticket_uuid = %created.uuid, "created ticket");

        Ok(created)
    }

    #[tracing::instrument(
        name = "tickets.service.update_ticket",
        skip(self, update),
        fields(ticket_uuid = %ticket, price = update.price, stock = update.stock),
        err
    )]
    async fn update_ticket(
        &self,
        ticket: TicketUuid,
        update: TicketUpdate,
    ) -> Result<TicketRecord, TicketsServiceError> {
        let price = i64::try_from(update.price)?;
        let stock = i32::try_from(update.stock)?;

        let updated = self
            .repository
            .update_ticket(ticket, &update.name, price, stock)
            .await?;

        info!(ticket_uuid = %updated.uuid, "updated ticket");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "tickets.service.delete_ticket",
        skip(self),
        fields(ticket_uuid = %ticket),
        err
    )]
    async fn delete_ticket(&self, ticket: TicketUuid) -> Result<(), TicketsServiceError> {
        let rows_affected = self.repository.delete_ticket(ticket).await?;

        if rows_affected == 0 {
            return Err(TicketsServiceError::NotFound);
        }

        info!(ticket_uuid = %ticket, "deleted ticket");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait TicketsService: Send + Sync {
    /// Retrieves all tickets that have not been deleted.
    async fn list_tickets(&self) -> Result<Vec<TicketRecord>, TicketsServiceError>;

    /// Retrieve a single ticket.
    async fn get_ticket(&self, ticket: TicketUuid) -> Result<TicketRecord, TicketsServiceError>;

    /// Creates a new ticket with the given name, price and stock.
    async fn create_ticket(&self, ticket: NewTicket) -> Result<TicketRecord, TicketsServiceError>;

    /// Replaces a ticket's name, price and stock.
    async fn update_ticket(
        &self,
        ticket: TicketUuid,
        update: TicketUpdate,
    ) -> Result<TicketRecord, TicketsServiceError>;

    /// Soft-deletes a ticket.
    async fn delete_ticket(&self, ticket: TicketUuid) -> Result<(), TicketsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_ticket(name: &str, price: u64, stock: u32) -> NewTicket {
        NewTicket {
            uuid: TicketUuid::new(),
            name: name.to_string(),
            price,
            stock,
        }
    }

    #[tokio::test]
    async fn create_ticket_rejects_stock_beyond_column_range() {
        let ctx = TestContext::offline();

        let result = ctx
            .tickets
            .create_ticket(new_ticket("Floor", 100, u32::MAX))
            .await;

        assert!(
            matches!(result, Err(TicketsServiceError::InvalidAmount(_))),
            "expected InvalidAmount, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn create_ticket_returns_stored_values() -> TestResult {
        let ctx = TestContext::new().await;
        let ticket = new_ticket("VIP", 500_000, 100);

        let created = ctx.tickets.create_ticket(ticket.clone()).await?;

        assert_eq!(created.uuid, ticket.uuid);
        assert_eq!(created.name, "VIP");
        assert_eq!(created.price, 500_000);
        assert_eq!(created.stock, 100);
        assert!(created.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn create_ticket_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let ticket = new_ticket("VIP", 500_000, 100);

        ctx.tickets.create_ticket(ticket.clone()).await?;

        let result = ctx.tickets.create_ticket(ticket).await;

        assert!(
            matches!(result, Err(TicketsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn update_ticket_replaces_price_and_stock() -> TestResult {
        let ctx = TestContext::new().await;
        let ticket = ctx
            .tickets
            .create_ticket(new_ticket("Balcony", 200_000, 50))
            .await?;

        let updated = ctx
            .tickets
            .update_ticket(
                ticket.uuid,
                TicketUpdate {
                    name: "Balcony".to_string(),
                    price: 250_000,
                    stock: 10,
                },
            )
            .await?;

        assert_eq!(updated.price, 250_000);
        assert_eq!(updated.stock, 10);
        assert!(updated.updated_at >= ticket.updated_at);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn delete_ticket_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let ticket = ctx
            .tickets
            .create_ticket(new_ticket("Standing", 50_000, 500))
            .await?;

        ctx.tickets.delete_ticket(ticket.uuid).await?;

        let result = ctx.tickets.get_ticket(ticket.uuid).await;

        assert!(
            matches!(result, Err(TicketsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        let listed = ctx.tickets.list_tickets().await?;

        assert!(listed.iter().all(|t| t.uuid != ticket.uuid));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for testcontainers"]
    async fn delete_ticket_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.tickets.delete_ticket(TicketUuid::new()).await;

        assert!(
            matches!(result, Err(TicketsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
