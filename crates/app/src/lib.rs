//! Ticket catalog, cart and checkout services for the Box Office backend.

pub mod context;
pub mod database;
pub mod domain;
pub mod uuids;

#[cfg(test)]
mod test;
