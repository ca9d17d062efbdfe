use super::*;

/// Tests that all gyms are listed by name.
///
/// Expected: Ok with gyms in alphabetical order regardless of insert order
#[tokio::test]
async fn get_all_orders_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    factory::gym::GymFactory::new(db, owner.id).name("Zenith").build().await?;
    factory::gym::GymFactory::new(db, owner.id).name("Apex").build().await?;
    factory::gym::GymFactory::new(db, owner.id).name("Midtown").build().await?;

    let names: Vec<String> = GymRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|g| g.name)
        .collect();

    assert_eq!(names, vec!["Apex", "Midtown", "Zenith"]);

    Ok(())
}

/// Tests filtering gyms by owner.
///
/// Expected: Ok with only the owner's gyms
#[tokio::test]
async fn get_by_owner_filters_other_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, own_gym) = factory::create_gym_with_owner(db).await?;
    let _ = factory::create_gym_with_owner(db).await?;

    let gyms = GymRepository::new(db).get_by_owner(owner.id).await?;

    assert_eq!(gyms.len(), 1);
    assert_eq!(gyms[0].id, own_gym.id);

    Ok(())
}

/// Tests looking up a gym that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GymRepository::new(db).find_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests fetching gyms by a list of ids.
///
/// Expected: Ok with matching gyms; empty input yields an empty list
#[tokio::test]
async fn get_by_ids_returns_matching_gyms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym_with_owner(db).await?;

    let repo = GymRepository::new(db);
    let gyms = repo.get_by_ids(vec![gym.id, 777]).await?;

    assert_eq!(gyms.len(), 1);
    assert!(repo.get_by_ids(Vec::new()).await?.is_empty());

    Ok(())
}
