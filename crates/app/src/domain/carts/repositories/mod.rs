//! Cart Repositories

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    carts::{
        data::Quantity,
        records::{CartLineRecord, CartLineUuid},
    },
    tickets::records::TicketUuid,
    users::UserUuid,
};

mod lines;

pub use lines::PgCartLinesRepository;

/// Storage for cart lines. Every returned line carries its ticket snapshot.
///
/// Lookups by line id always include the owning user, so a line belonging to
/// someone else is indistinguishable from one that does not exist.
#[automock]
#[async_trait]
pub trait CartLinesRepository: Send + Sync {
    async fn find_by_user_and_ticket(
        &self,
        user: UserUuid,
        ticket: TicketUuid,
    ) -> Result<Option<CartLineRecord>, sqlx::Error>;

    async fn create(
        &self,
        user: UserUuid,
        ticket: TicketUuid,
        quantity: Quantity,
    ) -> Result<CartLineRecord, sqlx::Error>;

    /// All of the user's lines, in no particular order.
    async fn find_by_user(&self, user: UserUuid) -> Result<Vec<CartLineRecord>, sqlx::Error>;

    async fn find_by_id_and_user(
        &self,
        line: CartLineUuid,
        user: UserUuid,
    ) -> Result<Option<CartLineRecord>, sqlx::Error>;

    /// Replaces the line's quantity. `None` when no such line is owned by `user`.
    async fn update_quantity(
        &self,
        line: CartLineUuid,
        user: UserUuid,
        quantity: Quantity,
    ) -> Result<Option<CartLineRecord>, sqlx::Error>;

    /// Deletes the line and returns it as it was. `None` when no such line is owned by `user`.
    async fn delete(
        &self,
        line: CartLineUuid,
        user: UserUuid,
    ) -> Result<Option<CartLineRecord>, sqlx::Error>;
}
