//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce ownership
//! and workflow rules, coordinate multi-table writes inside transactions, and convert
//! entity models into domain models.

pub mod auth;
pub mod gym;
pub mod join_request;
pub mod member;
pub mod token;

#[cfg(test)]
mod test;
