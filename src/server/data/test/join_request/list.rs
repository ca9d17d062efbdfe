use super::*;

/// Tests finding the open request of a member at a gym.
///
/// Verifies rejected requests are not considered open while approved ones are.
///
/// Expected: Ok(None) for a rejected request, Ok(Some) for an approved one
#[tokio::test]
async fn find_open_ignores_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    factory::join_request::JoinRequestFactory::new(db, member.id, gym.id)
        .status("rejected")
        .build()
        .await?;

    let repo = JoinRequestRepository::new(db);
    assert!(repo.find_open(member.id, gym.id).await?.is_none());

    let approved = factory::join_request::JoinRequestFactory::new(db, member.id, gym.id)
        .status("approved")
        .build()
        .await?;

    assert_eq!(
        repo.find_open(member.id, gym.id).await?.map(|r| r.id),
        Some(approved.id)
    );

    Ok(())
}

/// Tests listing requests of the given gyms only.
///
/// Expected: Ok with requests of the listed gyms, newest first
#[tokio::test]
async fn get_by_gyms_filters_and_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym_with_owner(db).await?;
    let (_, other_gym) = factory::create_gym_with_owner(db).await?;
    let first_member = factory::create_user(db).await?;
    let second_member = factory::create_user(db).await?;

    let older = factory::create_join_request(db, first_member.id, gym.id).await?;
    let newer = factory::create_join_request(db, second_member.id, gym.id).await?;
    factory::create_join_request(db, first_member.id, other_gym.id).await?;

    let repo = JoinRequestRepository::new(db);
    let ids: Vec<i32> = repo
        .get_by_gyms(vec![gym.id])
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(repo.get_by_gyms(Vec::new()).await?.is_empty());

    Ok(())
}

/// Tests listing the requests of one member and of everyone.
///
/// Expected: Ok with the member's own requests, and all requests for get_all
#[tokio::test]
async fn lists_by_member_and_all() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_join_request(db, member.id, gym.id).await?;
    factory::create_join_request(db, other.id, gym.id).await?;

    let repo = JoinRequestRepository::new(db);
    let own = repo.get_by_member(member.id).await?;

    assert_eq!(own.len(), 1);
    assert_eq!(own[0].member_id, member.id);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
