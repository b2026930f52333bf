//! Carts service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            data::Quantity,
            errors::CartsServiceError,
            records::{Cart, CartLineRecord, CartLineUuid, CheckoutOrder},
            repositories::{CartLinesRepository, PgCartLinesRepository},
        },
        tickets::{
            lookup::TicketLookup,
            records::{TicketRecord, TicketUuid},
            repository::PgTicketsRepository,
        },
        users::UserUuid,
    },
};

/// Cart rules on top of a ticket lookup and a cart line store.
///
/// Holds no state between calls. Nothing here serialises concurrent requests
/// for the same user or ticket; stock is only ever read.
#[derive(Clone)]
pub struct CartsEngine {
    tickets: Arc<dyn TicketLookup>,
    lines: Arc<dyn CartLinesRepository>,
}

impl CartsEngine {
    #[must_use]
    pub fn new(tickets: Arc<dyn TicketLookup>, lines: Arc<dyn CartLinesRepository>) -> Self {
        Self { tickets, lines }
    }

    /// Engine backed by the `PostgreSQL` repositories.
    #[must_use]
    pub fn postgres(db: Db) -> Self {
        Self::new(
            Arc::new(PgTicketsRepository::new(db.clone())),
            Arc::new(PgCartLinesRepository::new(db)),
        )
    }

    async fn ticket(&self, ticket: TicketUuid) -> Result<TicketRecord, CartsServiceError> {
        self.tickets
            .find_ticket(ticket)
            .await?
            .ok_or(CartsServiceError::TicketNotFound)
    }

    async fn owned_line(
        &self,
        user: UserUuid,
        line: CartLineUuid,
    ) -> Result<CartLineRecord, CartsServiceError> {
        self.lines
            .find_by_id_and_user(line, user)
            .await?
            .ok_or(CartsServiceError::CartItemNotFound)
    }

    async fn load_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError> {
        let lines = self.lines.find_by_user(user).await?;

        Cart::from_lines(user, lines)
    }
}

impl Debug for CartsEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartsEngine").finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for CartsEngine {
    #[tracing::instrument(
        name = "carts.service.add_to_cart",
        skip(self),
        fields(
            user_uuid = %user,
            ticket_uuid = %ticket,
            quantity = %quantity,
            cart_line_uuid = tracing::field::Empty,
            merged = tracing::field::Empty
        ),
        err
    )]
    async fn add_to_cart(
        &self,
        user: UserUuid,
        ticket: TicketUuid,
        quantity: Quantity,
    ) -> Result<CartLineRecord, CartsServiceError> {
        let ticket = self.ticket(ticket).await?;

        if !quantity.fits_within(ticket.stock) {
            return Err(CartsServiceError::InsufficientStock {
                requested: quantity.get(),
                available: ticket.stock,
            });
        }

        let span = Span::current();

        let line = match self.lines.find_by_user_and_ticket(user, ticket.uuid).await? {
            None => {
                let created = self.lines.create(user, ticket.uuid, quantity).await?;

                span.record("merged", false);

                info!(cart_line_uuid = %created.uuid, "created cart line");

                created
            }
            Some(existing) => {
                let candidate = existing
                    .quantity
                    .checked_add(quantity)
                    .filter(|candidate| candidate.fits_within(ticket.stock))
                    .ok_or(CartsServiceError::InsufficientStock {
                        requested: existing.quantity.get().saturating_add(quantity.get()),
                        available: ticket.stock,
                    })?;

                let merged = self
                    .lines
                    .update_quantity(existing.uuid, user, candidate)
                    .await?
                    .ok_or(CartsServiceError::CartItemNotFound)?;

                span.record("merged", true);

                info!(
                    cart_line_uuid = %merged.uuid,
                    quantity = %merged.quantity,
                    "merged into existing cart line"
                );

                merged
            }
        };

        span.record("cart_line_uuid", tracing::field::display(line.uuid));

        Ok(line)
    }

    #[tracing::instrument(
        name = "carts.service.get_cart",
        skip(self),
        fields(user_uuid = %user, total_items = tracing::field::Empty),
        err
    )]
    async fn get_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError> {
        let cart = self.load_cart(user).await?;

        Span::current().record("total_items", cart.total_items);

        Ok(cart)
    }

    #[tracing::instrument(
        name = "carts.service.update_cart_quantity",
        skip(self),
        fields(user_uuid = %user, cart_line_uuid = %line, quantity = %quantity),
        err
    )]
    async fn update_cart_quantity(
        &self,
        user: UserUuid,
        line: CartLineUuid,
        quantity: Quantity,
    ) -> Result<CartLineRecord, CartsServiceError> {
        let existing = self.owned_line(user, line).await?;
        let ticket = self.ticket(existing.ticket.uuid).await?;

        // Only increases are held to current stock.
        if quantity > existing.quantity && !quantity.fits_within(ticket.stock) {
            return Err(CartsServiceError::InsufficientStock {
                requested: quantity.get(),
                available: ticket.stock,
            });
        }

        let updated = self
            .lines
            .update_quantity(existing.uuid, user, quantity)
            .await?
            .ok_or(CartsServiceError::CartItemNotFound)?;

        info!(
            cart_line_uuid = %updated.uuid,
            previous = %existing.quantity,
            quantity = %updated.quantity,
            "updated cart line quantity"
        );

        Ok(updated)
    }

    #[tracing::instrument(
        name = "carts.service.remove_from_cart",
        skip(self),
        fields(user_uuid = %user, cart_line_uuid = %line),
        err
    )]
    async fn remove_from_cart(
        &self,
        user: UserUuid,
        line: CartLineUuid,
    ) -> Result<CartLineRecord, CartsServiceError> {
        let existing = self.owned_line(user, line).await?;

        let removed = self
            .lines
            .delete(existing.uuid, user)
            .await?
            .ok_or(CartsServiceError::CartItemNotFound)?;

        info!(ticket_uuid = %removed.ticket.uuid, "removed cart line");

        Ok(removed)
    }

    #[tracing::instrument(
        name = "carts.service.checkout",
        skip(self),
        fields(user_uuid = %user, total_items = tracing::field::Empty),
        err
    )]
    async fn checkout(&self, user: UserUuid) -> Result<CheckoutOrder, CartsServiceError> {
        let cart = self.load_cart(user).await?;

        if cart.is_empty() {
            return Err(CartsServiceError::EmptyCart);
        }

        Span::current().record("total_items", cart.total_items);

        // Stock is re-read per line; prices stay as captured with the cart.
        for line in &cart.lines {
            let ticket = self.ticket(line.ticket.uuid).await?;

            if !line.quantity.fits_within(ticket.stock) {
                return Err(CartsServiceError::InsufficientStockFor {
                    name: ticket.name,
                    requested: line.quantity.get(),
                    available: ticket.stock,
                });
            }
        }

        let order = CheckoutOrder::pending(&cart)?;

        info!(total = order.total, status = %order.status, "prepared checkout");

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Adds tickets to the user's cart, merging into an existing line for the
    /// same ticket.
    async fn add_to_cart(
        &self,
        user: UserUuid,
        ticket: TicketUuid,
        quantity: Quantity,
    ) -> Result<CartLineRecord, CartsServiceError>;

    /// Retrieve the user's cart with its totals.
    async fn get_cart(&self, user: UserUuid) -> Result<Cart, CartsServiceError>;

    /// Sets a line's quantity, replacing the previous value.
    async fn update_cart_quantity(
        &self,
        user: UserUuid,
        line: CartLineUuid,
        quantity: Quantity,
    ) -> Result<CartLineRecord, CartsServiceError>;

    /// Deletes a line and returns it as it was.
    async fn remove_from_cart(
        &self,
        user: UserUuid,
        line: CartLineUuid,
    ) -> Result<CartLineRecord, CartsServiceError>;

    /// Validates every line against live stock and returns a pending order
    /// preview. Nothing is written.
    async fn checkout(&self, user: UserUuid) -> Result<CheckoutOrder, CartsServiceError>;
}
