//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{gym::GymFactory, join_request::JoinRequestFactory, user::UserFactory};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to generate unique emails and names across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a gym owner and a gym they own, linking the owner's `gym_id`.
///
/// # Returns
/// - `Ok((owner, gym))` - The created owner user and gym
/// - `Err(DbErr)` - Database error during creation
pub async fn create_gym_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::gym::Model), DbErr> {
    let owner = UserFactory::new(db).role("gymOwner").build().await?;
    let gym = GymFactory::new(db, owner.id).build().await?;

    let owner = UserFactory::link_gym(db, owner, gym.id).await?;

    Ok((owner, gym))
}

/// Creates a member user, a gym with owner, and an approved join request between them.
///
/// # Returns
/// - `Ok((member, owner, gym, request))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_approved_request(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::gym::Model,
        entity::join_request::Model,
    ),
    DbErr,
> {
    let (owner, gym) = create_gym_with_owner(db).await?;
    let member = UserFactory::new(db).gym_id(Some(gym.id)).build().await?;
    let request = JoinRequestFactory::new(db, member.id, gym.id)
        .status("approved")
        .decided_by(Some(owner.id))
        .build()
        .await?;

    Ok((member, owner, gym, request))
}
