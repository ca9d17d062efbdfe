//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table each and return entity models; the
//! service layer converts those into domain models. Every repository is generic over
//! `ConnectionTrait` so the same queries run on a pooled connection or inside a
//! transaction.

pub mod gym;
pub mod join_request;
pub mod member;
pub mod user;
