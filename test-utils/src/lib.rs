//! GymHub Test Utils
//!
//! Shared testing utilities for the gymhub server. Provides a builder for test contexts
//! backed by in-memory SQLite databases plus factories for inserting users, gyms, join
//! requests and member records with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn owner_sees_requests() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, gym) = factory::create_gym_with_owner(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
