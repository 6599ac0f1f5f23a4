//! HTTP controllers: axum handlers with their OpenAPI annotations.
//!
//! Handlers stay thin: construct the services they need from
//! [`crate::model::app::AppState`], translate between HTTP and DTOs, and
//! let [`crate::error::Error`] render failures. Mutating handlers take the
//! [`crate::model::auth::AdminClaims`] extractor, which rejects requests
//! without a valid bearer token.

pub mod about;
pub mod auth;
pub mod block;
pub mod catalog;
pub mod contact;
pub mod market;
pub mod product;
pub mod product_group;
pub mod qm_document;
pub mod solution;
pub mod upload;
