use super::*;

/// Tests that a gym is only linked when the user has none.
///
/// Verifies the conditional update leaves an existing affiliation untouched.
///
/// Expected: Ok(true) on the first call, Ok(false) on the second, first gym kept
#[tokio::test]
async fn sets_gym_only_when_unset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let first = factory::create_gym(db, owner.id).await?;
    let second = factory::create_gym(db, owner.id).await?;

    let repo = UserRepository::new(db);
    assert!(repo.set_gym_if_unset(owner.id, first.id).await?);
    assert!(!repo.set_gym_if_unset(owner.id, second.id).await?);

    let stored = entity::prelude::User::find_by_id(owner.id).one(db).await?.unwrap();
    assert_eq!(stored.gym_id, Some(first.id));

    Ok(())
}

/// Tests overwriting a gym affiliation.
///
/// Expected: Ok with the user's gym replaced
#[tokio::test]
async fn set_gym_overwrites_affiliation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::create_gym_with_owner(db).await?;
    let (_, second) = factory::create_gym_with_owner(db).await?;
    let member = factory::user::UserFactory::new(db)
        .gym_id(Some(first.id))
        .build()
        .await?;

    UserRepository::new(db).set_gym(member.id, second.id).await?;

    let stored = entity::prelude::User::find_by_id(member.id).one(db).await?.unwrap();
    assert_eq!(stored.gym_id, Some(second.id));

    Ok(())
}

/// Tests promoting a user to member of a gym.
///
/// Verifies role and gym affiliation change together.
///
/// Expected: Ok with role "member" and gym set
#[tokio::test]
async fn promotes_user_to_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym_with_owner(db).await?;
    let user = factory::user::UserFactory::new(db)
        .role("gymOwner")
        .build()
        .await?;

    UserRepository::new(db).promote_to_member(user.id, gym.id).await?;

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.role, "member");
    assert_eq!(stored.gym_id, Some(gym.id));

    Ok(())
}

/// Tests changing a user's role.
///
/// Expected: Ok with role "admin" stored
#[tokio::test]
async fn sets_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    UserRepository::new(db).set_role(user.id, Role::Admin).await?;

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.role, "admin");

    Ok(())
}
