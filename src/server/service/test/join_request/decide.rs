use super::*;

/// Tests approving a pending request as the gym's owner.
///
/// Verifies the member's gym affiliation is set and the role left unchanged.
///
/// Expected: Ok with status approved and user.gym_id set
#[tokio::test]
async fn approval_sets_member_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    let request = factory::create_join_request(db, member.id, gym.id).await?;

    let view = JoinRequestService::new(db)
        .decide(&caller(&owner), request.id, "approved")
        .await?;

    assert_eq!(view.request.status, RequestStatus::Approved);
    assert_eq!(view.request.decided_by, Some(owner.id));
    let stored = entity::prelude::User::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.gym_id, Some(gym.id));
    assert_eq!(stored.role, "member");

    Ok(())
}

/// Tests rejecting a pending request.
///
/// Expected: Ok with status rejected and the member's gym untouched
#[tokio::test]
async fn rejection_only_changes_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    let request = factory::create_join_request(db, member.id, gym.id).await?;

    let view = JoinRequestService::new(db)
        .decide(&caller(&owner), request.id, "rejected")
        .await?;

    assert_eq!(view.request.status, RequestStatus::Rejected);
    let stored = entity::prelude::User::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.gym_id.is_none());

    Ok(())
}

/// Tests deciding a request a second time.
///
/// Expected: Err(WorkflowError::AlreadyDecided) with the first decision kept
#[tokio::test]
async fn rejects_second_decision() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    let request = factory::create_join_request(db, member.id, gym.id).await?;

    let service = JoinRequestService::new(db);
    service
        .decide(&caller(&owner), request.id, "rejected")
        .await?;
    let result = service
        .decide(&caller(&owner), request.id, "approved")
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::AlreadyDecided { .. }))
    ));
    let stored = entity::prelude::JoinRequest::find_by_id(request.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "rejected");

    Ok(())
}

/// Tests an unknown decision value.
///
/// Expected: Err(WorkflowError::InvalidDecision)
#[tokio::test]
async fn rejects_invalid_decision() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    let request = factory::create_join_request(db, member.id, gym.id).await?;

    let result = JoinRequestService::new(db)
        .decide(&caller(&owner), request.id, "maybe")
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::InvalidDecision(_)))
    ));

    Ok(())
}

/// Tests deciding a request of a gym owned by someone else.
///
/// Expected: Err(AuthError::AccessDenied) and the request still pending
#[tokio::test]
async fn rejects_decision_by_other_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, gym) = factory::create_gym_with_owner(db).await?;
    let (other_owner, _) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    let request = factory::create_join_request(db, member.id, gym.id).await?;

    let result = JoinRequestService::new(db)
        .decide(&caller(&other_owner), request.id, "approved")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    let stored = entity::prelude::JoinRequest::find_by_id(request.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "pending");

    Ok(())
}

/// Tests deciding a request that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::create_gym_with_owner(db).await?;

    let result = JoinRequestService::new(db)
        .decide(&caller(&owner), 999, "approved")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
