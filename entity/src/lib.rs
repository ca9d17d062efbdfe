//! SeaORM entities for the gym management store.

pub mod prelude;

pub mod gym;
pub mod join_request;
pub mod member;
pub mod user;
