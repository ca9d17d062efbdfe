//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the service boundary (stored
//! enum strings and JSON sub-documents are parsed there) and transformed to DTOs at
//! the controller boundary.

pub mod exercise;
pub mod gym;
pub mod join_request;
pub mod member;
pub mod user;
