use super::*;
use sea_orm::EntityTrait;

/// Tests activating the membership of an approved request.
///
/// Verifies the end date follows the plan duration and the user is promoted.
///
/// Expected: Ok with created flag, end date 2024-02-15, user role member at the gym
#[tokio::test]
async fn activates_approved_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, owner, gym, request) = factory::create_approved_request(db).await?;

    let (record, created) = MemberService::new(db)
        .activate(&caller(&owner), activation(request.id, Some(date(2024, 1, 15))))
        .await?;

    assert!(created);
    assert_eq!(record.user_id, member.id);
    assert_eq!(record.gym_id, gym.id);
    assert_eq!(record.status, MemberStatus::Active);
    assert_eq!(record.plan.end_date, date(2024, 2, 15));

    let user = entity::prelude::User::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(user.role, "member");
    assert_eq!(user.gym_id, Some(gym.id));

    Ok(())
}

/// Tests activating the same request twice.
///
/// Expected: Ok both times with one record, updated on the second call
#[tokio::test]
async fn activation_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, owner, _, request) = factory::create_approved_request(db).await?;

    let service = MemberService::new(db);
    let (first, _) = service
        .activate(&caller(&owner), activation(request.id, Some(date(2024, 1, 15))))
        .await?;
    let mut params = activation(request.id, Some(date(2024, 3, 1)));
    params.duration = PlanDuration::Quarterly;
    let (second, created) = service.activate(&caller(&owner), params).await?;

    assert!(!created);
    assert_eq!(first.id, second.id);
    assert_eq!(second.plan.end_date, date(2024, 6, 1));
    assert_eq!(entity::prelude::Member::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests activating a request that is still pending.
///
/// Expected: Err(WorkflowError::NotApproved) and no member record
#[tokio::test]
async fn rejects_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;
    let member = factory::create_user(db).await?;
    let request = factory::create_join_request(db, member.id, gym.id).await?;

    let result = MemberService::new(db)
        .activate(&caller(&owner), activation(request.id, None))
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::NotApproved { .. }))
    ));
    assert!(entity::prelude::Member::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests activation by an owner of another gym.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn rejects_other_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, request) = factory::create_approved_request(db).await?;
    let (other_owner, _) = factory::create_gym_with_owner(db).await?;

    let result = MemberService::new(db)
        .activate(&caller(&other_owner), activation(request.id, None))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests activating an unknown join request.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _) = factory::create_gym_with_owner(db).await?;

    let result = MemberService::new(db)
        .activate(&caller(&owner), activation(321, None))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
