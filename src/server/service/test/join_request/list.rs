use super::*;

/// Tests the listing scope of each role.
///
/// Verifies members see their own requests, owners the requests of their gyms and
/// admins everything.
///
/// Expected: Ok with 1, 2 and 3 requests respectively
#[tokio::test]
async fn lists_requests_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;
    let (_, other_gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    let other_member = factory::create_user(db).await?;
    let admin = factory::user::UserFactory::new(db).role("admin").build().await?;

    factory::create_join_request(db, member.id, gym.id).await?;
    factory::create_join_request(db, other_member.id, gym.id).await?;
    factory::create_join_request(db, other_member.id, other_gym.id).await?;

    let service = JoinRequestService::new(db);
    let own = service.list(&caller(&member)).await?;
    let owned = service.list(&caller(&owner)).await?;
    let all = service.list(&caller(&admin)).await?;

    assert_eq!(own.len(), 1);
    assert_eq!(own[0].member.id, member.id);
    assert_eq!(owned.len(), 2);
    assert!(owned.iter().all(|v| v.gym.id == gym.id));
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests that listing orders requests newest first.
///
/// Expected: Ok with the latest request at the front
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::create_join_request(db, first.id, gym.id).await?;
    let newest = factory::create_join_request(db, second.id, gym.id).await?;

    let views = JoinRequestService::new(db).list(&caller(&owner)).await?;

    assert_eq!(views[0].request.id, newest.id);

    Ok(())
}
