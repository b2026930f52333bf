//! Tickets Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as};
use tracing::debug;

use crate::{
    database::Db,
    domain::tickets::{
        lookup::TicketLookup,
        records::{TicketRecord, TicketUuid},
    },
};

const GET_TICKET_SQL: &str = include_str!("sql/get_ticket.sql");
const LIST_TICKETS_SQL: &str = include_str!("sql/list_tickets.sql");
const CREATE_TICKET_SQL: &str = include_str!("sql/create_ticket.sql");
const UPDATE_TICKET_SQL: &str = include_str!("sql/update_ticket.sql");
const DELETE_TICKET_SQL: &str = include_str!("sql/delete_ticket.sql");

/// PostgreSQL-backed tickets repository.
#[derive(Debug, Clone)]
pub struct PgTicketsRepository {
    db: Db,
}

impl PgTicketsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub(crate) async fn get_ticket(&self, ticket: TicketUuid) -> Result<TicketRecord, sqlx::Error> {
        query_as::<Postgres, TicketRecord>(GET_TICKET_SQL)
            .bind(ticket.into_uuid())
            .fetch_one(self.db.pool())
            .await
    }

    pub(crate) async fn list_tickets(&self) -> Result<Vec<TicketRecord>, sqlx::Error> {
        query_as::<Postgres, TicketRecord>(LIST_TICKETS_SQL)
            .fetch_all(self.db.pool())
            .await
    }

    pub(crate) async fn create_ticket(
        &self,
        ticket: TicketUuid,
        name: &str,
        price: i64,
        stock: i32,
    ) -> Result<TicketRecord, sqlx::Error> {
        query_as::<Postgres, TicketRecord>(CREATE_TICKET_SQL)
            .bind(ticket.into_uuid())
            .bind(name)
            .bind(price)
            .bind(stock)
            .fetch_one(self.db.pool())
            .await
    }

    pub(crate) async fn update_ticket(
        &self,
        ticket: TicketUuid,
        name: &str,
        price: i64,
        stock: i32,
    ) -> Result<TicketRecord, sqlx::Error> {
        query_as::<Postgres, TicketRecord>(UPDATE_TICKET_SQL)
            .bind(ticket.into_uuid())
            .bind(name)
            .bind(price)
            .bind(stock)
            .fetch_one(self.db.pool())
            .await
    }

    pub(crate) async fn delete_ticket(&self, ticket: TicketUuid) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_TICKET_SQL)
            .bind(ticket.into_uuid())
            .execute(self.db.pool())
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

#[async_trait]
impl TicketLookup for PgTicketsRepository {
    #[tracing::instrument(
        name = "tickets.repository.find_ticket",
        skip(self),
        fields(ticket_uuid = %ticket),
        err
    )]
    async fn find_ticket(&self, ticket: TicketUuid) -> Result<Option<TicketRecord>, sqlx::Error> {
        let found = query_as::<Postgres, TicketRecord>(GET_TICKET_SQL)
            .bind(ticket.into_uuid())
            .fetch_optional(self.db.pool())
            .await?;

        debug!(
            found = found.is_some(),
            stock = found.as_ref().map(|t| t.stock),
            "looked up ticket"
        );

        Ok(found)
    }
}

impl<'r> FromRow<'r, PgRow> for TicketRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: TicketUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            stock: try_get_count(row, "stock")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}

/// Reads a non-negative `BIGINT` money column.
pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Reads a non-negative `INTEGER` count column (stock, quantity).
pub(crate) fn try_get_count(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let count_i32: i32 = row.try_get(col)?;

    u32::try_from(count_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
