//! Factory methods for creating test data.
//!
//! Each entity has its own module with a `Factory` builder for customization and a
//! `create_*` function for quick default creation. Factories insert directly through
//! the entity ActiveModels, so they never enforce workflow rules; tests use them to
//! set up states and then exercise the services.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::user::UserFactory::new(db).email("jane@example.com").build().await?;
//! let (owner, gym) = factory::create_gym_with_owner(db).await?;
//! let request = factory::create_join_request(db, member.id, gym.id).await?;
//! ```

pub mod gym;
pub mod helpers;
pub mod join_request;
pub mod member;
pub mod user;

pub use gym::create_gym;
pub use helpers::{create_approved_request, create_gym_with_owner};
pub use join_request::create_join_request;
pub use member::create_member;
pub use user::{create_owner, create_user};
