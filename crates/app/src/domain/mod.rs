//! Box Office Domain Concerns

pub mod carts;
pub mod tickets;
pub mod users;
