use super::*;
use crate::model::gym::{Address, Contact, OperatingHours};

fn details(name: &str) -> GymDetails {
    GymDetails {
        name: name.to_string(),
        address: Address {
            street: "9 Elm St".to_string(),
            city: "Shelbyville".to_string(),
            state: "IL".to_string(),
            zip_code: "62565".to_string(),
        },
        contact: Contact {
            phone: "555-0199".to_string(),
            email: "hi@pump.example".to_string(),
        },
        amenities: Vec::new(),
        operating_hours: OperatingHours {
            open_time: "05:00".to_string(),
            close_time: "23:00".to_string(),
            days_open: Vec::new(),
        },
        membership_plans: Vec::new(),
    }
}

/// Tests creating the first gym of an owner without affiliation.
///
/// Expected: Ok with the owner's gym_id set to the new gym
#[tokio::test]
async fn first_gym_becomes_owner_affiliation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;

    let gym = GymService::new(db)
        .create(CreateGymParams {
            owner_id: owner.id,
            details: details("Pump House"),
        })
        .await?;

    let stored = crate::server::data::user::UserRepository::new(db)
        .find_by_id(owner.id)
        .await?
        .unwrap();
    assert_eq!(gym.name, "Pump House");
    assert_eq!(stored.gym_id, Some(gym.id));

    Ok(())
}

/// Tests creating an additional gym for an owner who already has one.
///
/// Expected: Ok with the owner's affiliation unchanged
#[tokio::test]
async fn additional_gym_keeps_affiliation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, first) = factory::create_gym_with_owner(db).await?;

    GymService::new(db)
        .create(CreateGymParams {
            owner_id: owner.id,
            details: details("Second Site"),
        })
        .await?;

    let stored = crate::server::data::user::UserRepository::new(db)
        .find_by_id(owner.id)
        .await?
        .unwrap();
    assert_eq!(stored.gym_id, Some(first.id));

    Ok(())
}

/// Tests creating a gym for an owner that does not exist.
///
/// Expected: Err and no gym row left behind
#[tokio::test]
async fn failed_create_leaves_no_gym() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GymService::new(db);
    let result = service
        .create(CreateGymParams {
            owner_id: 999,
            details: details("Ghost Gym"),
        })
        .await;

    assert!(result.is_err());
    assert!(service.list().await?.is_empty());

    Ok(())
}
