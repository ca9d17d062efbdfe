//! Wire types shared by the HTTP API: request payloads, response bodies and the
//! small value objects embedded in both. Everything here serializes as camelCase JSON.

pub mod api;
pub mod gym;
pub mod join_request;
pub mod member;
pub mod user;
