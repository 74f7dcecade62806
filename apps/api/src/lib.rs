//! Items API Library
//!
//! Create, read, update and delete named items stored in DynamoDB. The
//! data-access layer lives behind [`domain::repositories::ItemRepository`]
//! with a DynamoDB adapter and an in-memory stand-in; the HTTP layer maps
//! its typed errors to status codes.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
