//! HTTP request handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into service parameters,
//! call one service and convert the result back into a DTO.

pub mod auth;
pub mod gym;
pub mod health;
pub mod join;
pub mod member;
