//! Users
//!
//! Accounts live in the authentication service; this crate only refers to them by id.

use crate::uuids::TypedUuid;

/// Marker for identifiers issued by the authentication service.
#[derive(Debug)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;
