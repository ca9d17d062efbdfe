use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Amenity {
    #[serde(rename = "Cardio Equipment")]
    CardioEquipment,
    #[serde(rename = "Weight Training")]
    WeightTraining,
    #[serde(rename = "Group Classes")]
    GroupClasses,
    #[serde(rename = "Swimming Pool")]
    SwimmingPool,
    Sauna,
    #[serde(rename = "Locker Rooms")]
    LockerRooms,
    #[serde(rename = "Personal Training")]
    PersonalTraining,
}

/// Day of the week. Ordered Monday first so weekday-keyed maps iterate in calendar order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billing period of a membership plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PlanDuration {
    Monthly,
    Quarterly,
    Annual,
}

impl PlanDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanDuration::Monthly => "Monthly",
            PlanDuration::Quarterly => "Quarterly",
            PlanDuration::Annual => "Annual",
        }
    }

    /// Length of the plan in calendar months.
    pub fn months(&self) -> u32 {
        match self {
            PlanDuration::Monthly => 1,
            PlanDuration::Quarterly => 3,
            PlanDuration::Annual => 12,
        }
    }
}

impl FromStr for PlanDuration {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Monthly" => Ok(PlanDuration::Monthly),
            "Quarterly" => Ok(PlanDuration::Quarterly),
            "Annual" => Ok(PlanDuration::Annual),
            other => Err(format!("Unknown plan duration '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "Zip code is required"))]
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Contact {
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(email(message = "Invalid contact email"))]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    #[validate(length(min = 1, message = "Opening time is required"))]
    pub open_time: String,
    #[validate(length(min = 1, message = "Closing time is required"))]
    pub close_time: String,
    #[serde(default)]
    pub days_open: Vec<Weekday>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct MembershipPlan {
    #[validate(length(min = 1, message = "Plan name is required"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Plan price cannot be negative"))]
    pub price: f64,
    pub duration: PlanDuration,
}

/// Gym profile submitted at owner registration or through `POST /gyms`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GymDetailsDto {
    #[validate(length(min = 1, max = 255, message = "Gym name is required"))]
    pub name: String,
    #[validate(nested)]
    pub address: Address,
    #[validate(nested)]
    pub contact: Contact,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[validate(nested)]
    pub operating_hours: OperatingHours,
    #[serde(default)]
    #[validate(nested)]
    pub membership_plans: Vec<MembershipPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GymDto {
    pub id: i32,
    pub name: String,
    pub owner_id: i32,
    /// Present on the detail endpoint only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserSummaryDto>,
    pub address: Address,
    pub contact: Contact,
    pub amenities: Vec<Amenity>,
    pub operating_hours: OperatingHours,
    pub membership_plans: Vec<MembershipPlan>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GymSummaryDto {
    pub id: i32,
    pub name: String,
}
