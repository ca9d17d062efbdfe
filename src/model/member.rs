use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{
    gym::{GymSummaryDto, PlanDuration, Weekday},
    user::UserSummaryDto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
    Suspended,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
            MemberStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(MemberStatus::Active),
            "inactive" => Ok(MemberStatus::Inactive),
            "suspended" => Ok(MemberStatus::Suspended),
            other => Err(format!("Unknown member status '{}'", other)),
        }
    }
}

/// A number that may arrive as a JSON number or as a numeric string such as `"12"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberPlan {
    pub name: String,
    pub duration: PlanDuration,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfo {
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
}

/// One entry of the append-only status audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub from: MemberStatus,
    pub to: MemberStatus,
    pub changed_by: i32,
    pub reason: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub date: DateTime<Utc>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub biceps: Option<f64>,
    pub thighs: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub bmi: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub muscle_group: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub duration: f64,
    pub rest_between_sets: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub exercises: Vec<Exercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

pub type ExercisePlan = BTreeMap<Weekday, WorkoutDay>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealItem {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub proteins: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fats: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub items: Vec<MealItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietDay {
    pub day: Weekday,
    pub meals: Vec<Meal>,
    pub total_calories: f64,
    pub total_proteins: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: i32,
    pub user_id: i32,
    pub gym_id: i32,
    pub join_request_id: i32,
    pub membership_plan: MemberPlan,
    pub status: MemberStatus,
    pub status_history: Vec<StatusChange>,
    pub health_info: Option<HealthInfo>,
    pub measurements: Vec<Measurement>,
    pub exercise_plan: Option<BTreeMap<Weekday, WorkoutDay>>,
    pub diet_plan: Vec<DietDay>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Roster entry for `GET /members/gym-members`; health information is never included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GymMemberDto {
    pub id: i32,
    pub user: UserSummaryDto,
    pub membership_plan: MemberPlan,
    pub status: MemberStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedGymMembersDto {
    pub members: Vec<GymMemberDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// The caller's own membership as returned by `GET /members/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipStatusDto {
    pub member_id: i32,
    pub status: MemberStatus,
    pub membership_plan: MemberPlan,
    pub gym: GymSummaryDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDetailsDto {
    #[validate(length(min = 1, max = 255, message = "Plan name is required"))]
    pub name: String,
    pub duration: PlanDuration,
    #[validate(range(min = 0.0, message = "Plan price cannot be negative"))]
    pub price: f64,
    /// Defaults to today (UTC).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub health_info: Option<HealthInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivateMembershipDto {
    pub join_request_id: i32,
    #[validate(nested)]
    pub membership_details: MembershipDetailsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberStatusDto {
    pub member_id: i32,
    /// Checked against `active`, `inactive` and `suspended` by the service.
    pub status: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatusChangeDto {
    pub member_id: i32,
    pub status: MemberStatus,
    pub history_length: usize,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseInputDto {
    pub name: String,
    #[serde(default)]
    pub muscle_group: Option<String>,
    #[serde(default)]
    pub sets: Option<NumericInput>,
    #[serde(default)]
    pub reps: Option<NumericInput>,
    #[serde(default)]
    pub weight: Option<NumericInput>,
    #[serde(default)]
    pub duration: Option<NumericInput>,
    #[serde(default)]
    pub rest_between_sets: Option<NumericInput>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutDayInputDto {
    #[serde(default)]
    pub exercises: Vec<ExerciseInputDto>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub duration: Option<NumericInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExercisePlanDto {
    pub member_id: i32,
    pub workout_plan: BTreeMap<Weekday, WorkoutDayInputDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DietDayInputDto {
    pub day: Weekday,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub total_calories: Option<f64>,
    #[serde(default)]
    pub total_proteins: Option<f64>,
    #[serde(default)]
    pub total_carbs: Option<f64>,
    #[serde(default)]
    pub total_fats: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDietPlanDto {
    pub member_id: i32,
    pub diet_plan: Vec<DietDayInputDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementInputDto {
    /// Defaults to the time of the request.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub biceps: Option<f64>,
    pub thighs: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub bmi: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppendMeasurementDto {
    pub member_id: i32,
    pub measurements: MeasurementInputDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCategoryDto {
    pub muscle_group: String,
    pub exercises: Vec<String>,
}
