//! Join request workflow: submission, owner decision and listing.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::{gym::GymSummaryDto, join_request::RequestStatus, user::Role},
    server::{
        data::{gym::GymRepository, join_request::JoinRequestRepository, user::UserRepository},
        error::{auth::AuthError, workflow::WorkflowError, AppError},
        model::{
            gym::Gym,
            join_request::{Decision, JoinRequest, JoinRequestView},
            user::{AuthUser, UserSummary},
        },
    },
};

pub struct JoinRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JoinRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a request from the caller to join a gym.
    ///
    /// A rejected request does not block a new one; a pending or approved one does.
    /// The existence check gives a friendly error in the common case, the unique
    /// `pending_key` index settles concurrent submissions.
    ///
    /// # Returns
    /// - `Ok(JoinRequestView)` - The new pending request
    /// - `Err(AuthError::AccessDenied)` - Caller is a gym owner or admin
    /// - `Err(AppError::NotFound)` - Gym does not exist
    /// - `Err(WorkflowError::DuplicateRequest)` - Open request already exists
    pub async fn submit(&self, caller: &AuthUser, gym_id: i32) -> Result<JoinRequestView, AppError> {
        if caller.role != Role::Member {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("submit join request as {}", caller.role),
            )
            .into());
        }

        let gym = GymRepository::new(self.db)
            .find_by_id(gym_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gym not found".to_string()))?;

        let repo = JoinRequestRepository::new(self.db);
        let duplicate = WorkflowError::DuplicateRequest {
            member_id: caller.id,
            gym_id,
        };

        if repo.find_open(caller.id, gym_id).await?.is_some() {
            return Err(duplicate.into());
        }

        let model = match repo.create(caller.id, gym_id).await {
            Ok(model) => model,
            Err(err) if is_unique_violation(&err) => return Err(duplicate.into()),
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            request_id = model.id,
            member_id = caller.id,
            gym_id,
            "Join request submitted"
        );

        Ok(JoinRequestView {
            request: JoinRequest::from_entity(model)?,
            member: UserSummary {
                id: caller.id,
                name: caller.name.clone(),
                email: caller.email.clone(),
            },
            gym: Gym::from_entity(gym)?.summary(),
        })
    }

    /// Approves or rejects a pending request as the owner of its gym.
    ///
    /// Approval also points the member's gym affiliation at the gym; rejection only
    /// changes the status. Both writes share one transaction, and the status change is
    /// conditional on the request still being pending so a request is decided once.
    ///
    /// # Returns
    /// - `Ok(JoinRequestView)` - The decided request
    /// - `Err(AppError::NotFound)` - Request does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller does not own the request's gym
    /// - `Err(WorkflowError::InvalidDecision)` - Decision is not `approved`/`rejected`
    /// - `Err(WorkflowError::AlreadyDecided)` - Request is no longer pending
    pub async fn decide(
        &self,
        caller: &AuthUser,
        request_id: i32,
        decision: &str,
    ) -> Result<JoinRequestView, AppError> {
        let request = JoinRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Join request not found".to_string()))?;
        let request = JoinRequest::from_entity(request)?;

        let gym = GymRepository::new(self.db)
            .find_by_id(request.gym_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gym not found".to_string()))?;
        if gym.owner_id != caller.id {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("decide join request {} of gym {}", request_id, gym.id),
            )
            .into());
        }

        let decision = Decision::parse(decision)
            .ok_or_else(|| WorkflowError::InvalidDecision(decision.to_string()))?;

        if request.status != RequestStatus::Pending {
            return Err(WorkflowError::AlreadyDecided {
                request_id,
                status: request.status.to_string(),
            }
            .into());
        }

        let txn = self.db.begin().await?;

        let repo = JoinRequestRepository::new(&txn);
        if !repo.decide(request_id, decision.status(), caller.id).await? {
            let status = repo
                .find_by_id(request_id)
                .await?
                .map(|r| r.status)
                .unwrap_or_default();
            txn.rollback().await?;

            return Err(WorkflowError::AlreadyDecided { request_id, status }.into());
        }

        if decision == Decision::Approve {
            UserRepository::new(&txn)
                .set_gym(request.member_id, request.gym_id)
                .await?;
        }

        let decided = repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Join request not found".to_string()))?;

        txn.commit().await?;

        tracing::info!(
            request_id,
            decided_by = caller.id,
            status = %decision.status(),
            "Join request decided"
        );

        let member = UserRepository::new(self.db)
            .find_by_id(request.member_id)
            .await?
            .map(|u| UserSummary::from_entity(&u))
            .unwrap_or_else(|| UserSummary::unknown(request.member_id));

        Ok(JoinRequestView {
            request: JoinRequest::from_entity(decided)?,
            member,
            gym: Gym::from_entity(gym)?.summary(),
        })
    }

    /// Lists the requests visible to the caller, newest first.
    ///
    /// Members see their own requests, gym owners the requests addressed to gyms they
    /// own, admins every request.
    pub async fn list(&self, caller: &AuthUser) -> Result<Vec<JoinRequestView>, AppError> {
        let repo = JoinRequestRepository::new(self.db);

        let requests = match caller.role {
            Role::Admin => repo.get_all().await?,
            Role::GymOwner => {
                let gym_ids = GymRepository::new(self.db)
                    .get_by_owner(caller.id)
                    .await?
                    .into_iter()
                    .map(|g| g.id)
                    .collect();
                repo.get_by_gyms(gym_ids).await?
            }
            Role::Member => repo.get_by_member(caller.id).await?,
        };

        self.into_views(requests).await
    }

    /// Resolves member and gym references of a batch of requests.
    async fn into_views(
        &self,
        requests: Vec<entity::join_request::Model>,
    ) -> Result<Vec<JoinRequestView>, AppError> {
        let mut member_ids: Vec<i32> = requests.iter().map(|r| r.member_id).collect();
        member_ids.sort_unstable();
        member_ids.dedup();
        let mut gym_ids: Vec<i32> = requests.iter().map(|r| r.gym_id).collect();
        gym_ids.sort_unstable();
        gym_ids.dedup();

        let members: HashMap<i32, UserSummary> = UserRepository::new(self.db)
            .find_by_ids(member_ids)
            .await?
            .iter()
            .map(|u| (u.id, UserSummary::from_entity(u)))
            .collect();
        let gyms: HashMap<i32, entity::gym::Model> = GymRepository::new(self.db)
            .get_by_ids(gym_ids)
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        requests
            .into_iter()
            .map(|model| {
                let request = JoinRequest::from_entity(model)?;
                let member = members
                    .get(&request.member_id)
                    .cloned()
                    .unwrap_or_else(|| UserSummary::unknown(request.member_id));
                let gym = gyms
                    .get(&request.gym_id)
                    .map(|g| GymSummaryDto {
                        id: g.id,
                        name: g.name.clone(),
                    })
                    .ok_or_else(|| AppError::NotFound("Gym not found".to_string()))?;

                Ok(JoinRequestView {
                    request,
                    member,
                    gym,
                })
            })
            .collect()
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
