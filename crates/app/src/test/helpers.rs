//! Test Helpers

use jiff::Timestamp;

use crate::domain::{
    carts::{
        data::Quantity,
        records::{CartLineRecord, CartLineUuid, CartTicket},
    },
    tickets::records::{TicketRecord, TicketUuid},
    users::UserUuid,
};

pub(crate) fn quantity(value: u32) -> Quantity {
    Quantity::new(value).expect("test quantities must be non-zero")
}

pub(crate) fn ticket(name: &str, price: u64, stock: u32) -> TicketRecord {
    let now = Timestamp::now();

    TicketRecord {
        uuid: TicketUuid::new(),
        name: name.to_string(),
        price,
        stock,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

/// A line for a freshly generated ticket.
pub(crate) fn cart_line(
    user: UserUuid,
    name: &str,
    price: u64,
    stock: u32,
    quantity: Quantity,
) -> CartLineRecord {
    line_for(user, &ticket(name, price, stock), quantity)
}

pub(crate) fn line_for(user: UserUuid, ticket: &TicketRecord, quantity: Quantity) -> CartLineRecord {
    let now = Timestamp::now();

    CartLineRecord {
        uuid: CartLineUuid::new(),
        user_uuid: user,
        ticket: CartTicket {
            uuid: ticket.uuid,
            name: ticket.name.clone(),
            price: ticket.price,
            stock: ticket.stock,
        },
        quantity,
        created_at: now,
        updated_at: now,
    }
}
