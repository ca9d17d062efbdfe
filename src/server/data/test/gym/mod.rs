use crate::{
    model::gym::{Address, Amenity, Contact, MembershipPlan, OperatingHours, PlanDuration, Weekday},
    server::{
        data::gym::GymRepository,
        model::gym::{CreateGymParams, GymDetails},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get;

fn details(name: &str) -> GymDetails {
    GymDetails {
        name: name.to_string(),
        address: Address {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62701".to_string(),
        },
        contact: Contact {
            phone: "555-0100".to_string(),
            email: "front@ironworks.example".to_string(),
        },
        amenities: vec![Amenity::Sauna, Amenity::WeightTraining],
        operating_hours: OperatingHours {
            open_time: "06:00".to_string(),
            close_time: "22:00".to_string(),
            days_open: vec![Weekday::Monday, Weekday::Saturday],
        },
        membership_plans: vec![MembershipPlan {
            name: "Basic".to_string(),
            price: 29.5,
            duration: PlanDuration::Monthly,
        }],
    }
}
