//! Business logic services.
//!
//! Services validate input, coordinate repositories and wrap multi-row
//! mutations in database transactions. Controllers construct them per
//! request from [`crate::model::app::AppState`].

pub mod auth;
pub mod contact;
pub mod content;
pub mod language;
pub mod storage;
pub mod translation;
