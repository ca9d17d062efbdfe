use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        gym::PlanDuration,
        member::{HealthInfo, Measurement, MemberPlan, MemberStatus, StatusChange},
    },
    server::{
        data::member::MemberRepository,
        model::member::{Member, UpsertMemberParams},
    },
};

mod upsert;

fn plan(name: &str, start: NaiveDate, end: NaiveDate) -> MemberPlan {
    MemberPlan {
        name: name.to_string(),
        duration: PlanDuration::Monthly,
        start_date: start,
        end_date: end,
        price: 30.0,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
