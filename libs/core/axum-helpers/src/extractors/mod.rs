//! Custom extractors for Axum handlers.
//!
//! Extractors here reject through [`AppError`](crate::errors::AppError) so
//! every failure carries the same `{ "message": ... }` body.

pub mod json;

pub use json::AppJson;
