use std::collections::BTreeMap;

use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        gym::{PlanDuration, Weekday},
        member::{
            DietDayInputDto, ExerciseInputDto, Meal, MealItem, MealType, MeasurementInputDto,
            MemberStatus, NumericInput, WorkoutDayInputDto,
        },
    },
    server::{
        error::{auth::AuthError, workflow::WorkflowError, AppError},
        model::member::ActivateMembershipParams,
        service::member::MemberService,
    },
};

use super::caller;

mod activate;
mod lifecycle;
mod plans;

fn activation(join_request_id: i32, start: Option<NaiveDate>) -> ActivateMembershipParams {
    ActivateMembershipParams {
        join_request_id,
        plan_name: "Basic".to_string(),
        duration: PlanDuration::Monthly,
        price: 30.0,
        start_date: start,
        health_info: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
