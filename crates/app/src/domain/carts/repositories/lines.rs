//! Cart Lines Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as};
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::Quantity,
            records::{CartLineRecord, CartLineUuid, CartTicket},
        },
        tickets::{
            records::TicketUuid,
            repository::{try_get_amount, try_get_count},
        },
        users::UserUuid,
    },
};

use super::CartLinesRepository;

const FIND_BY_USER_SQL: &str = include_str!("../sql/find_cart_lines_by_user.sql");
const FIND_BY_USER_AND_TICKET_SQL: &str =
    include_str!("../sql/find_cart_line_by_user_and_ticket.sql");
const FIND_BY_ID_AND_USER_SQL: &str = include_str!("../sql/find_cart_line_by_id_and_user.sql");
const CREATE_CART_LINE_SQL: &str = include_str!("../sql/create_cart_line.sql");
const UPDATE_QUANTITY_SQL: &str = include_str!("../sql/update_cart_line_quantity.sql");
const DELETE_CART_LINE_SQL: &str = include_str!("../sql/delete_cart_line.sql");

/// PostgreSQL-backed cart lines repository.
#[derive(Debug, Clone)]
pub struct PgCartLinesRepository {
    db: Db,
}

impl PgCartLinesRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartLinesRepository for PgCartLinesRepository {
    async fn find_by_user_and_ticket(
        &self,
        user: UserUuid,
        ticket: TicketUuid,
    ) -> Result<Option<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(FIND_BY_USER_AND_TICKET_SQL)
            .bind(user.into_uuid())
            .bind(ticket.into_uuid())
            .fetch_optional(self.db.pool())
            .await
    }

    #[tracing::instrument(
        name = "carts.repository.create",
        skip(self),
        fields(user_uuid = %user, ticket_uuid = %ticket, quantity = %quantity),
        err
    )]
    async fn create(
        &self,
        user: UserUuid,
        ticket: TicketUuid,
        quantity: Quantity,
    ) -> Result<CartLineRecord, sqlx::Error> {
        let line = CartLineUuid::new();

        let created = query_as::<Postgres, CartLineRecord>(CREATE_CART_LINE_SQL)
            .bind(line.into_uuid())
            .bind(user.into_uuid())
            .bind(ticket.into_uuid())
            .bind(quantity_column(quantity)?)
            .fetch_one(self.db.pool())
            .await?;

        debug!(cart_line_uuid = %created.uuid, "inserted cart line");

        Ok(created)
    }

    async fn find_by_user(&self, user: UserUuid) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(FIND_BY_USER_SQL)
            .bind(user.into_uuid())
            .fetch_all(self.db.pool())
            .await
    }

    async fn find_by_id_and_user(
        &self,
        line: CartLineUuid,
        user: UserUuid,
    ) -> Result<Option<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(FIND_BY_ID_AND_USER_SQL)
            .bind(line.into_uuid())
            .bind(user.into_uuid())
            .fetch_optional(self.db.pool())
            .await
    }

    #[tracing::instrument(
        name = "carts.repository.update_quantity",
        skip(self),
        fields(cart_line_uuid = %line, user_uuid = %user, quantity = %quantity),
        err
    )]
    async fn update_quantity(
        &self,
        line: CartLineUuid,
        user: UserUuid,
        quantity: Quantity,
    ) -> Result<Option<CartLineRecord>, sqlx::Error> {
        let updated = query_as::<Postgres, CartLineRecord>(UPDATE_QUANTITY_SQL)
            .bind(line.into_uuid())
            .bind(user.into_uuid())
            .bind(quantity_column(quantity)?)
            .fetch_optional(self.db.pool())
            .await?;

        debug!(updated = updated.is_some(), "updated cart line quantity");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "carts.repository.delete",
        skip(self),
        fields(cart_line_uuid = %line, user_uuid = %user),
        err
    )]
    async fn delete(
        &self,
        line: CartLineUuid,
        user: UserUuid,
    ) -> Result<Option<CartLineRecord>, sqlx::Error> {
        let deleted = query_as::<Postgres, CartLineRecord>(DELETE_CART_LINE_SQL)
            .bind(line.into_uuid())
            .bind(user.into_uuid())
            .fetch_optional(self.db.pool())
            .await?;

        debug!(deleted = deleted.is_some(), "deleted cart line");

        Ok(deleted)
    }
}

fn quantity_column(quantity: Quantity) -> Result<i32, sqlx::Error> {
    i32::try_from(quantity.get()).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

impl<'r> FromRow<'r, PgRow> for CartLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity = Quantity::try_from(try_get_count(row, "quantity")?).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "quantity".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            uuid: CartLineUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            ticket: CartTicket {
                uuid: TicketUuid::from_uuid(row.try_get("ticket_uuid")?),
                name: row.try_get("ticket_name")?,
                price: try_get_amount(row, "ticket_price")?,
                stock: try_get_count(row, "ticket_stock")?,
            },
            quantity,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
