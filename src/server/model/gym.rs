//! Gym domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::gym::{
        Address, Amenity, Contact, GymDetailsDto, GymDto, GymSummaryDto, MembershipPlan,
        OperatingHours,
    },
    server::{
        error::AppError,
        model::user::UserSummary,
        util::parse::{normalize_email, parse_document},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Gym {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub address: Address,
    pub contact: Contact,
    pub amenities: Vec<Amenity>,
    pub operating_hours: OperatingHours,
    /// Plan catalog in the order the owner supplied it.
    pub membership_plans: Vec<MembershipPlan>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Gym {
    /// Converts an entity model to a gym domain model, decoding its JSON columns.
    ///
    /// # Returns
    /// - `Ok(Gym)` - The converted gym
    /// - `Err(AppError::InternalErr(CorruptDocument))` - A JSON column has an unexpected shape
    pub fn from_entity(entity: entity::gym::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            address: Address {
                street: entity.street,
                city: entity.city,
                state: entity.state,
                zip_code: entity.zip_code,
            },
            contact: Contact {
                phone: entity.phone,
                email: entity.contact_email,
            },
            amenities: parse_document("gym.amenities", entity.amenities)?,
            operating_hours: OperatingHours {
                open_time: entity.open_time,
                close_time: entity.close_time,
                days_open: parse_document("gym.days_open", entity.days_open)?,
            },
            membership_plans: parse_document("gym.membership_plans", entity.membership_plans)?,
            is_active: entity.is_active,
            created_at: entity.created_at,
        })
    }

    pub fn summary(&self) -> GymSummaryDto {
        GymSummaryDto {
            id: self.id,
            name: self.name.clone(),
        }
    }

    /// Converts to a DTO, embedding the owner reference when supplied.
    pub fn into_dto(self, owner: Option<UserSummary>) -> GymDto {
        GymDto {
            id: self.id,
            name: self.name,
            owner_id: self.owner_id,
            owner: owner.map(UserSummary::into_dto),
            address: self.address,
            contact: self.contact,
            amenities: self.amenities,
            operating_hours: self.operating_hours,
            membership_plans: self.membership_plans,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Validated gym profile independent of its owner.
#[derive(Debug, Clone)]
pub struct GymDetails {
    pub name: String,
    pub address: Address,
    pub contact: Contact,
    pub amenities: Vec<Amenity>,
    pub operating_hours: OperatingHours,
    pub membership_plans: Vec<MembershipPlan>,
}

impl GymDetails {
    pub fn from_dto(dto: GymDetailsDto) -> Self {
        let mut amenities = Vec::with_capacity(dto.amenities.len());
        for amenity in dto.amenities {
            if !amenities.contains(&amenity) {
                amenities.push(amenity);
            }
        }

        let mut operating_hours = dto.operating_hours;
        operating_hours.days_open.sort();
        operating_hours.days_open.dedup();

        Self {
            name: dto.name.trim().to_string(),
            address: dto.address,
            contact: Contact {
                phone: dto.contact.phone,
                email: normalize_email(&dto.contact.email),
            },
            amenities,
            operating_hours,
            membership_plans: dto.membership_plans,
        }
    }
}

/// Parameters for inserting a gym row.
#[derive(Debug, Clone)]
pub struct CreateGymParams {
    pub owner_id: i32,
    pub details: GymDetails,
}
