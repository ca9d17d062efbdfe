use super::*;

/// Tests fetching a gym with its owner.
///
/// Expected: Ok(Some) with the owner's name and email embedded
#[tokio::test]
async fn gets_gym_with_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;

    let (found, found_owner) = GymService::new(db).get_with_owner(gym.id).await?.unwrap();

    assert_eq!(found.id, gym.id);
    assert_eq!(found_owner.id, owner.id);
    assert_eq!(found_owner.name, owner.name);

    Ok(())
}

/// Tests fetching a gym that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GymService::new(db).get_with_owner(5).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests listing all gyms and the gyms of one owner.
///
/// Expected: Ok with every gym listed and only the owner's gym for get_by_owner
#[tokio::test]
async fn lists_gyms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;
    factory::create_gym_with_owner(db).await?;

    let service = GymService::new(db);

    assert_eq!(service.list().await?.len(), 2);
    let owned = service.get_by_owner(owner.id).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, gym.id);

    Ok(())
}
