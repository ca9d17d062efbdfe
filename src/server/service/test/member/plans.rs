use super::*;

fn exercise(name: &str, group: Option<&str>, sets: NumericInput) -> ExerciseInputDto {
    ExerciseInputDto {
        name: name.to_string(),
        muscle_group: group.map(str::to_string),
        sets: Some(sets),
        reps: Some(NumericInput::Number(10.0)),
        weight: None,
        duration: None,
        rest_between_sets: None,
        notes: None,
    }
}

/// Tests storing a valid exercise plan.
///
/// Verifies numeric strings are coerced and defaults applied.
///
/// Expected: Ok with the Monday plan stored and rest defaulting to 60
#[tokio::test]
async fn stores_valid_exercise_plan() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, owner, _, request) = factory::create_approved_request(db).await?;
    let record = factory::create_member(db, &request).await?;

    let mut plan = BTreeMap::new();
    plan.insert(
        Weekday::Monday,
        WorkoutDayInputDto {
            exercises: vec![exercise(
                "Bench Press",
                Some("CHEST"),
                NumericInput::Text("4".to_string()),
            )],
            notes: None,
            duration: None,
        },
    );

    let updated = MemberService::new(db)
        .update_exercise_plan(&caller(&owner), record.id, plan)
        .await?;

    let monday = &updated.exercise_plan.unwrap()[&Weekday::Monday];
    assert_eq!(monday.exercises[0].sets, 4);
    assert_eq!(monday.exercises[0].rest_between_sets, 60.0);
    assert_eq!(monday.exercises[0].weight, 0.0);

    Ok(())
}

/// Tests that an invalid exercise rejects the whole plan.
///
/// Expected: Err(WorkflowError::InvalidExercises) naming the offender, nothing stored
#[tokio::test]
async fn rejects_plan_with_unknown_exercise() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, owner, _, request) = factory::create_approved_request(db).await?;
    let record = factory::create_member(db, &request).await?;

    let mut plan = BTreeMap::new();
    plan.insert(
        Weekday::Tuesday,
        WorkoutDayInputDto {
            exercises: vec![
                exercise("Squats", Some("LEGS"), NumericInput::Number(3.0)),
                exercise("Yoga", Some("CHEST"), NumericInput::Number(3.0)),
            ],
            notes: None,
            duration: None,
        },
    );

    let service = MemberService::new(db);
    let result = service
        .update_exercise_plan(&caller(&owner), record.id, plan)
        .await;

    match result {
        Err(AppError::WorkflowErr(WorkflowError::InvalidExercises(details))) => {
            assert_eq!(details.len(), 1);
            assert_eq!(details[0].name, "Yoga");
            assert_eq!(details[0].index, Some(1));
        }
        other => panic!("expected InvalidExercises, got {:?}", other.map(|m| m.id)),
    }
    let stored = service.get_by_id(&caller(&owner), record.id).await?;
    assert!(stored.exercise_plan.is_none());

    Ok(())
}

/// Tests storing a diet plan with derived totals.
///
/// Expected: Ok with total calories summed over items
#[tokio::test]
async fn stores_diet_plan_with_totals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, owner, _, request) = factory::create_approved_request(db).await?;
    let record = factory::create_member(db, &request).await?;

    let days = vec![DietDayInputDto {
        day: Weekday::Friday,
        meals: vec![Meal {
            meal_type: MealType::Lunch,
            time: Some("12:30".to_string()),
            items: vec![
                MealItem {
                    name: "Rice".to_string(),
                    quantity: Some("200g".to_string()),
                    calories: 260.0,
                    proteins: 5.0,
                    carbs: 56.0,
                    fats: 0.5,
                },
                MealItem {
                    name: "Chicken".to_string(),
                    quantity: Some("150g".to_string()),
                    calories: 240.0,
                    proteins: 45.0,
                    carbs: 0.0,
                    fats: 5.0,
                },
            ],
        }],
        total_calories: None,
        total_proteins: None,
        total_carbs: None,
        total_fats: None,
    }];

    let updated = MemberService::new(db)
        .update_diet_plan(&caller(&owner), record.id, days)
        .await?;

    assert_eq!(updated.diet_plan.len(), 1);
    assert_eq!(updated.diet_plan[0].total_calories, 500.0);
    assert_eq!(updated.diet_plan[0].total_proteins, 50.0);

    Ok(())
}

/// Tests appending measurements to the log.
///
/// Expected: Ok with both snapshots kept in order
#[tokio::test]
async fn appends_measurements() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, owner, _, request) = factory::create_approved_request(db).await?;
    let record = factory::create_member(db, &request).await?;

    let service = MemberService::new(db);
    service
        .append_measurement(
            &caller(&owner),
            record.id,
            MeasurementInputDto {
                weight: Some(82.0),
                ..Default::default()
            },
        )
        .await?;
    let updated = service
        .append_measurement(
            &caller(&owner),
            record.id,
            MeasurementInputDto {
                weight: Some(80.5),
                bmi: Some(24.1),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.measurements.len(), 2);
    assert_eq!(updated.measurements[0].weight, Some(82.0));
    assert_eq!(updated.measurements[1].bmi, Some(24.1));

    Ok(())
}

/// Tests that the member cannot edit their own plans.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn member_cannot_edit_plans() -> Result<(), AppError> {
    let test = TestBuilder::new().with_gym_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, _, request) = factory::create_approved_request(db).await?;
    let record = factory::create_member(db, &request).await?;

    let result = MemberService::new(db)
        .append_measurement(&caller(&member), record.id, MeasurementInputDto::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
