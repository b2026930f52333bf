//! Cart Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    domain::{
        carts::{data::Quantity, errors::CartsServiceError},
        tickets::records::TicketUuid,
        users::UserUuid,
    },
    uuids::TypedUuid,
};

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLineRecord>;

/// Ticket data read alongside a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartTicket {
    pub uuid: TicketUuid,
    pub name: String,
    pub price: u64,
    pub stock: u32,
}

/// Cart Line Record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineRecord {
    pub uuid: CartLineUuid,
    pub user_uuid: UserUuid,
    pub ticket: CartTicket,
    pub quantity: Quantity,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartLineRecord {
    /// `price × quantity`, or `None` on overflow.
    #[must_use]
    pub fn subtotal(&self) -> Option<u64> {
        self.ticket
            .price
            .checked_mul(u64::from(self.quantity.get()))
    }
}

/// A user's cart lines with derived totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    pub user_uuid: UserUuid,
    pub lines: Vec<CartLineRecord>,

    /// Sum of every line's `price × quantity`.
    pub total: u64,

    /// Number of lines, not the number of tickets.
    pub total_items: usize,
}

impl Cart {
    /// Builds a cart and its totals from the user's lines.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::AmountOverflow`] if the total does not fit in a `u64`.
    pub fn from_lines(
        user_uuid: UserUuid,
        lines: Vec<CartLineRecord>,
    ) -> Result<Self, CartsServiceError> {
        let total = lines
            .iter()
            .try_fold(0_u64, |total, line| {
                line.subtotal()
                    .and_then(|subtotal| total.checked_add(subtotal))
            })
            .ok_or(CartsServiceError::AmountOverflow)?;

        Ok(Self {
            user_uuid,
            total_items: lines.len(),
            lines,
            total,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Order status. Checkout only ever produces `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Pending => f.write_str("pending"),
        }
    }
}

/// One priced line of a checkout snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutItem {
    pub ticket_uuid: TicketUuid,
    pub quantity: Quantity,
    pub price: u64,
    pub subtotal: u64,
}

/// Unpersisted order preview returned by checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutOrder {
    pub user_uuid: UserUuid,
    pub items: Vec<CheckoutItem>,
    pub total: u64,
    pub status: OrderStatus,
}

impl CheckoutOrder {
    /// Prices every line of `cart` at the price captured with the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::AmountOverflow`] if a subtotal or the total overflows.
    pub fn pending(cart: &Cart) -> Result<Self, CartsServiceError> {
        let items = cart
            .lines
            .iter()
            .map(|line| {
                Ok(CheckoutItem {
                    ticket_uuid: line.ticket.uuid,
                    quantity: line.quantity,
                    price: line.ticket.price,
                    subtotal: line.subtotal().ok_or(CartsServiceError::AmountOverflow)?,
                })
            })
            .collect::<Result<Vec<_>, CartsServiceError>>()?;

        let total = items
            .iter()
            .try_fold(0_u64, |total, item| total.checked_add(item.subtotal))
            .ok_or(CartsServiceError::AmountOverflow)?;

        Ok(Self {
            user_uuid: cart.user_uuid,
            items,
            total,
            status: OrderStatus::Pending,
        })
    }
}
