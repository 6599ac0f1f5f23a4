//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table family each. They are
//! generic over [`sea_orm::ConnectionTrait`] so services can run them either
//! on the pooled connection or inside a transaction.

pub mod admin;
pub mod content;
