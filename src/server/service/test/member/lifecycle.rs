use sea_orm::EntityTrait;

use crate::{
    model::{join_request::RequestStatus, user::Role},
    server::{
        model::user::RegisterParams,
        service::{auth::AuthService, join_request::JoinRequestService},
    },
};

use super::*;

/// Tests the path from registration to an active membership.
///
/// A user registers as a member, asks to join a gym, the owner approves and
/// activates a monthly plan starting 2024-01-15, and the member reads their status.
///
/// Expected: Ok with an active membership at the gym ending 2024-02-15
#[tokio::test]
async fn registration_to_active_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, gym) = factory::create_gym_with_owner(db).await?;

    let registration = AuthService::new(db)
        .register(RegisterParams {
            name: "Robin Vale".to_string(),
            email: "robin@example.com".to_string(),
            password: "secret123".to_string(),
            role: Role::Member,
            gym: None,
        })
        .await?;
    let user = entity::prelude::User::find_by_id(registration.user.id)
        .one(db)
        .await?
        .unwrap();

    let requests = JoinRequestService::new(db);
    let submitted = requests.submit(&caller(&user), gym.id).await?;
    assert_eq!(submitted.request.status, RequestStatus::Pending);

    let decided = requests
        .decide(&caller(&owner), submitted.request.id, "approved")
        .await?;
    assert_eq!(decided.request.status, RequestStatus::Approved);

    let (member, created) = MemberService::new(db)
        .activate(
            &caller(&owner),
            activation(submitted.request.id, Some(date(2024, 1, 15))),
        )
        .await?;
    assert!(created);
    assert_eq!(member.user_id, user.id);

    // Activation changes the user's affiliation, so read the identity again
    let user = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(user.role, "member");
    assert_eq!(user.gym_id, Some(gym.id));

    let status = MemberService::new(db).own_status(&caller(&user)).await?;

    assert_eq!(status.member_id, member.id);
    assert_eq!(status.status, MemberStatus::Active);
    assert_eq!(status.membership_plan.duration, PlanDuration::Monthly);
    assert_eq!(status.membership_plan.start_date, date(2024, 1, 15));
    assert_eq!(status.membership_plan.end_date, date(2024, 2, 15));
    assert_eq!(status.gym.id, gym.id);

    Ok(())
}
