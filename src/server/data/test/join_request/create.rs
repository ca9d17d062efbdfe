use super::*;

/// Tests creating a pending join request.
///
/// Verifies that the request is pending, undecided and carries its pending key.
///
/// Expected: Ok with status "pending" and pending_key "<member>:<gym>"
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;

    let request = JoinRequestRepository::new(db).create(member.id, gym.id).await?;

    assert_eq!(request.status, RequestStatus::Pending.as_str());
    assert_eq!(
        request.pending_key,
        Some(format!("{}:{}", member.id, gym.id))
    );
    assert!(request.decided_at.is_none());
    assert!(request.decided_by.is_none());

    Ok(())
}

/// Tests that a second pending request for the same pair is refused by the store.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn second_pending_request_violates_unique_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;

    let repo = JoinRequestRepository::new(db);
    repo.create(member.id, gym.id).await?;
    let err = repo.create(member.id, gym.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a decided request frees the pair for a new submission.
///
/// Expected: Ok with a second pending request after the first was rejected
#[tokio::test]
async fn allows_new_request_after_decision() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;

    let repo = JoinRequestRepository::new(db);
    let first = repo.create(member.id, gym.id).await?;
    assert!(repo.decide(first.id, RequestStatus::Rejected, owner.id).await?);

    let second = repo.create(member.id, gym.id).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
