use super::*;

/// Tests creating a member record from an approved request.
///
/// Verifies the record starts active with empty history, measurements and diet.
///
/// Expected: Ok with created flag set and plan stored
#[tokio::test]
async fn creates_member_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, gym, request) = factory::create_approved_request(db).await?;

    let (model, created) = MemberRepository::new(db)
        .upsert(UpsertMemberParams {
            user_id: member.id,
            gym_id: gym.id,
            join_request_id: request.id,
            plan: plan("Basic", date(2024, 1, 15), date(2024, 2, 15)),
            health_info: None,
        })
        .await?;

    assert!(created);
    let record = Member::from_entity(model).unwrap();
    assert_eq!(record.status, MemberStatus::Active);
    assert_eq!(record.plan.end_date, date(2024, 2, 15));
    assert!(record.status_history.is_empty());
    assert!(record.measurements.is_empty());
    assert!(record.diet_plan.is_empty());
    assert!(record.exercise_plan.is_none());

    Ok(())
}

/// Tests that upserting the same join request twice keeps a single record.
///
/// Verifies the plan is refreshed, the status is kept and health info survives a
/// refresh that does not supply any.
///
/// Expected: Ok with created flag unset on the second call and one row stored
#[tokio::test]
async fn upsert_updates_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, gym, request) = factory::create_approved_request(db).await?;
    let repo = MemberRepository::new(db);

    let health = HealthInfo {
        medical_conditions: vec!["asthma".to_string()],
        allergies: Vec::new(),
        blood_group: Some("O+".to_string()),
    };
    let (first, _) = repo
        .upsert(UpsertMemberParams {
            user_id: member.id,
            gym_id: gym.id,
            join_request_id: request.id,
            plan: plan("Basic", date(2024, 1, 15), date(2024, 2, 15)),
            health_info: Some(health.clone()),
        })
        .await?;
    repo.update_status(first.id, first.updated_at, MemberStatus::Suspended, &[])
        .await?;

    let (second, created) = repo
        .upsert(UpsertMemberParams {
            user_id: member.id,
            gym_id: gym.id,
            join_request_id: request.id,
            plan: plan("Premium", date(2024, 3, 1), date(2024, 4, 1)),
            health_info: None,
        })
        .await?;

    assert!(!created);
    assert_eq!(second.id, first.id);
    let record = Member::from_entity(second).unwrap();
    assert_eq!(record.plan.name, "Premium");
    assert_eq!(record.status, MemberStatus::Suspended);
    assert_eq!(record.health_info, Some(health));

    let count = entity::prelude::Member::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}

/// Tests finding the latest member record of a user.
///
/// Expected: Ok(Some) with the newest record, Ok(None) for a user without one
#[tokio::test]
async fn finds_latest_record_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, owner, gym, request) = factory::create_approved_request(db).await?;
    let first = factory::create_member(db, &request).await?;
    let (_, other_gym) = factory::create_gym_with_owner(db).await?;
    let second_request = factory::join_request::JoinRequestFactory::new(db, member.id, other_gym.id)
        .status("approved")
        .build()
        .await?;
    let second = factory::create_member(db, &second_request).await?;

    let repo = MemberRepository::new(db);
    let latest = repo.find_latest_by_user(member.id).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(latest.map(|m| m.id), Some(second.id));
    assert!(repo.find_latest_by_user(owner.id).await?.is_none());
    assert_eq!(
        repo.find_by_join_request_id(request.id)
            .await?
            .map(|m| m.gym_id),
        Some(gym.id)
    );

    Ok(())
}
