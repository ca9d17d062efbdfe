use super::*;

/// Tests deciding a pending request.
///
/// Verifies the status, decider and timestamp are stored and the pending key cleared.
///
/// Expected: Ok(true) with the request approved
#[tokio::test]
async fn decides_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    let request = factory::create_join_request(db, member.id, gym.id).await?;

    let decided = JoinRequestRepository::new(db)
        .decide(request.id, RequestStatus::Approved, owner.id)
        .await?;

    assert!(decided);
    let stored = entity::prelude::JoinRequest::find_by_id(request.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "approved");
    assert_eq!(stored.decided_by, Some(owner.id));
    assert!(stored.decided_at.is_some());
    assert!(stored.pending_key.is_none());

    Ok(())
}

/// Tests that a decided request cannot be decided again.
///
/// Verifies the conditional update does not match once the request left pending.
///
/// Expected: Ok(false) and the first decision kept
#[tokio::test]
async fn does_not_redecide_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    let request = factory::create_join_request(db, member.id, gym.id).await?;

    let repo = JoinRequestRepository::new(db);
    assert!(repo.decide(request.id, RequestStatus::Rejected, owner.id).await?);
    assert!(!repo.decide(request.id, RequestStatus::Approved, owner.id).await?);

    let stored = entity::prelude::JoinRequest::find_by_id(request.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "rejected");

    Ok(())
}

/// Tests deciding a request that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn decide_missing_request_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let decided = JoinRequestRepository::new(db)
        .decide(404, RequestStatus::Approved, 1)
        .await?;

    assert!(!decided);

    Ok(())
}
