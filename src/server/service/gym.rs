use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{gym::GymRepository, user::UserRepository},
    error::AppError,
    model::{
        gym::{CreateGymParams, Gym},
        user::UserSummary,
    },
};

pub struct GymService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GymService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every gym ordered by name.
    pub async fn list(&self) -> Result<Vec<Gym>, AppError> {
        let gyms = GymRepository::new(self.db).get_all().await?;

        gyms.into_iter().map(Gym::from_entity).collect()
    }

    /// Gets a gym together with its owner's public identity.
    ///
    /// # Returns
    /// - `Ok(Some((gym, owner)))` - Gym found; owner is a placeholder if the user row is gone
    /// - `Ok(None)` - No gym with this ID
    pub async fn get_with_owner(&self, id: i32) -> Result<Option<(Gym, UserSummary)>, AppError> {
        let Some(model) = GymRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let gym = Gym::from_entity(model)?;
        let owner = UserRepository::new(self.db)
            .find_by_id(gym.owner_id)
            .await?
            .map(|u| UserSummary::from_entity(&u))
            .unwrap_or_else(|| UserSummary::unknown(gym.owner_id));

        Ok(Some((gym, owner)))
    }

    /// Gets the gyms owned by a user, oldest first.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Gym>, AppError> {
        let gyms = GymRepository::new(self.db).get_by_owner(owner_id).await?;

        gyms.into_iter().map(Gym::from_entity).collect()
    }

    /// Creates a gym for an owner.
    ///
    /// The owner's own gym affiliation is set only if they have none yet, so their
    /// first gym stays their primary one. Both writes commit together.
    pub async fn create(&self, params: CreateGymParams) -> Result<Gym, AppError> {
        let owner_id = params.owner_id;
        let txn = self.db.begin().await?;

        let model = GymRepository::new(&txn).create(params).await?;
        UserRepository::new(&txn)
            .set_gym_if_unset(owner_id, model.id)
            .await?;

        txn.commit().await?;

        tracing::info!(gym_id = model.id, owner_id, "Created gym");

        Gym::from_entity(model)
    }
}
