//! Shared test infrastructure.

mod context;
mod db;
mod helpers;
mod logs;

pub(crate) use context::TestContext;
pub(crate) use helpers::{cart_line, line_for, quantity, ticket};
pub(crate) use logs::LogCapture;
pub(crate) use memory::MemoryStore;
