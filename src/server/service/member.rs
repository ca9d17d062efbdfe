//! Membership materialization and member record maintenance.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        gym::Weekday,
        join_request::RequestStatus,
        member::{
            DietDay, DietDayInputDto, Measurement, MeasurementInputDto, MemberPlan,
            MemberStatus, MembershipStatusDto, StatusChange, WorkoutDayInputDto,
        },
    },
    server::{
        data::{
            gym::GymRepository, join_request::JoinRequestRepository, member::MemberRepository,
            user::UserRepository,
        },
        error::{auth::AuthError, workflow::WorkflowError, AppError},
        model::{
            exercise::validate_workout_plan,
            gym::Gym,
            join_request::JoinRequest,
            member::{
                plan_end_date, ActivateMembershipParams, Member, PaginatedGymMembers,
                UpsertMemberParams,
            },
            user::{AuthUser, UserSummary},
        },
    },
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or refreshes the member record of an approved join request.
    ///
    /// The plan's end date is derived from its start (today when omitted) and duration.
    /// After the record is written the user is promoted to `member` and affiliated with
    /// the gym; both writes share one transaction, so re-running the call repairs a
    /// partially applied activation.
    ///
    /// # Returns
    /// - `Ok((Member, true))` - Record created
    /// - `Ok((Member, false))` - Existing record updated
    /// - `Err(AppError::NotFound)` - Join request or gym does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller does not own the request's gym
    /// - `Err(WorkflowError::NotApproved)` - Request is not approved
    pub async fn activate(
        &self,
        caller: &AuthUser,
        params: ActivateMembershipParams,
    ) -> Result<(Member, bool), AppError> {
        let request = JoinRequestRepository::new(self.db)
            .find_by_id(params.join_request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Join request not found".to_string()))?;
        let request = JoinRequest::from_entity(request)?;

        self.require_owner(caller, request.gym_id, "activate membership")
            .await?;

        if request.status != RequestStatus::Approved {
            return Err(WorkflowError::NotApproved {
                request_id: request.id,
                status: request.status.to_string(),
            }
            .into());
        }

        let start_date = params
            .start_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let plan = MemberPlan {
            name: params.plan_name,
            duration: params.duration,
            start_date,
            end_date: plan_end_date(start_date, params.duration),
            price: params.price,
        };

        let txn = self.db.begin().await?;

        let (model, created) = MemberRepository::new(&txn)
            .upsert(UpsertMemberParams {
                user_id: request.member_id,
                gym_id: request.gym_id,
                join_request_id: request.id,
                plan,
                health_info: params.health_info,
            })
            .await?;
        UserRepository::new(&txn)
            .promote_to_member(request.member_id, request.gym_id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            member_id = model.id,
            join_request_id = request.id,
            created,
            "Membership activated"
        );

        Ok((Member::from_entity(model)?, created))
    }

    /// Changes a member's status and appends the transition to its history.
    ///
    /// # Returns
    /// - `Ok(Member)` - Updated member
    /// - `Err(WorkflowError::InvalidStatus)` - Status is not `active`, `inactive` or `suspended`
    /// - `Err(AppError::NotFound)` - Member does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller is neither admin nor the gym's owner
    /// - `Err(AppError::Conflict)` - Member changed between read and write
    pub async fn update_status(
        &self,
        caller: &AuthUser,
        member_id: i32,
        status: &str,
        reason: Option<String>,
    ) -> Result<Member, AppError> {
        let to: MemberStatus = status
            .parse()
            .map_err(|_| WorkflowError::InvalidStatus(status.to_string()))?;

        let member = self.load(member_id).await?;
        if !caller.is_admin() {
            self.require_owner(caller, member.gym_id, "update member status")
                .await?;
        }

        let mut history = member.status_history;
        history.push(StatusChange {
            from: member.status,
            to,
            changed_by: caller.id,
            reason: reason.unwrap_or_default(),
            date: Utc::now(),
        });

        let model = MemberRepository::new(self.db)
            .update_status(member.id, member.updated_at, to, &history)
            .await?
            .ok_or_else(|| concurrent_update(member_id))?;

        tracing::info!(
            member_id,
            from = %member.status,
            to = %to,
            changed_by = caller.id,
            "Member status changed"
        );

        Member::from_entity(model)
    }

    /// Replaces a member's weekly exercise plan.
    ///
    /// Every exercise is checked against the catalog and its numeric fields coerced;
    /// nothing is stored unless all of them pass.
    ///
    /// # Returns
    /// - `Ok(Member)` - Updated member
    /// - `Err(WorkflowError::InvalidExercises)` - One entry per offending exercise
    pub async fn update_exercise_plan(
        &self,
        caller: &AuthUser,
        member_id: i32,
        plan: BTreeMap<Weekday, WorkoutDayInputDto>,
    ) -> Result<Member, AppError> {
        let member = self.load(member_id).await?;
        self.require_owner(caller, member.gym_id, "update exercise plan")
            .await?;

        let plan = validate_workout_plan(plan).map_err(WorkflowError::InvalidExercises)?;

        let model = MemberRepository::new(self.db)
            .set_exercise_plan(member.id, &plan)
            .await?;

        Member::from_entity(model)
    }

    /// Replaces a member's diet plan.
    ///
    /// Day totals that are not supplied are summed from the day's meal items.
    pub async fn update_diet_plan(
        &self,
        caller: &AuthUser,
        member_id: i32,
        days: Vec<DietDayInputDto>,
    ) -> Result<Member, AppError> {
        let member = self.load(member_id).await?;
        self.require_owner(caller, member.gym_id, "update diet plan")
            .await?;

        let plan: Vec<DietDay> = days.into_iter().map(diet_day).collect();

        let model = MemberRepository::new(self.db)
            .set_diet_plan(member.id, &plan)
            .await?;

        Member::from_entity(model)
    }

    /// Appends a measurement snapshot, dated now unless a date is given.
    ///
    /// Fails with `AppError::Conflict` if the member changed between read and write.
    pub async fn append_measurement(
        &self,
        caller: &AuthUser,
        member_id: i32,
        input: MeasurementInputDto,
    ) -> Result<Member, AppError> {
        let member = self.load(member_id).await?;
        self.require_owner(caller, member.gym_id, "append measurement")
            .await?;

        let mut measurements = member.measurements;
        measurements.push(Measurement {
            date: input.date.unwrap_or_else(Utc::now),
            weight: input.weight,
            height: input.height,
            chest: input.chest,
            waist: input.waist,
            hips: input.hips,
            biceps: input.biceps,
            thighs: input.thighs,
            body_fat_percentage: input.body_fat_percentage,
            bmi: input.bmi,
        });

        let model = MemberRepository::new(self.db)
            .set_measurements(member.id, member.updated_at, &measurements)
            .await?
            .ok_or_else(|| concurrent_update(member_id))?;

        Member::from_entity(model)
    }

    /// Gets a member record readable by the caller.
    ///
    /// # Returns
    /// - `Ok(Member)` - Caller is admin, the gym's owner or the member themself
    /// - `Err(AppError::NotFound)` - Member does not exist
    /// - `Err(AuthError::AccessDenied)` - Any other caller
    pub async fn get_by_id(&self, caller: &AuthUser, id: i32) -> Result<Member, AppError> {
        let member = self.load(id).await?;
        self.require_reader(caller, &member).await?;

        Ok(member)
    }

    /// Gets the latest member record of a user.
    pub async fn get_by_user(&self, caller: &AuthUser, user_id: i32) -> Result<Member, AppError> {
        let model = MemberRepository::new(self.db)
            .find_latest_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;
        let member = Member::from_entity(model)?;
        self.require_reader(caller, &member).await?;

        Ok(member)
    }

    /// Gets the member record created from a join request.
    pub async fn get_by_join_request(
        &self,
        caller: &AuthUser,
        join_request_id: i32,
    ) -> Result<Member, AppError> {
        let model = MemberRepository::new(self.db)
            .find_by_join_request_id(join_request_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;
        let member = Member::from_entity(model)?;
        self.require_reader(caller, &member).await?;

        Ok(member)
    }

    /// Gets one page of a gym's roster, newest first.
    ///
    /// Admins must name the gym. Owners may name one of their gyms and otherwise get
    /// the first gym they own.
    ///
    /// # Returns
    /// - `Ok(PaginatedGymMembers)` - The page with member identities
    /// - `Err(AppError::BadRequest)` - Admin without `gym_id`, or a page whose offset overflows
    /// - `Err(AppError::NotFound)` - Owner without gyms, or unknown gym
    /// - `Err(AuthError::AccessDenied)` - Owner naming a gym they do not own
    pub async fn gym_members(
        &self,
        caller: &AuthUser,
        gym_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedGymMembers, AppError> {
        if !matches!(per_page.checked_mul(page), Some(offset) if offset <= i64::MAX as u64) {
            return Err(AppError::BadRequest("page is out of range".to_string()));
        }

        let gym_id = self.resolve_roster_gym(caller, gym_id).await?;

        let (models, total) = MemberRepository::new(self.db)
            .get_by_gym_paginated(gym_id, page, per_page)
            .await?;

        let user_ids = models.iter().map(|m| m.user_id).collect();
        let users: HashMap<i32, UserSummary> = UserRepository::new(self.db)
            .find_by_ids(user_ids)
            .await?
            .iter()
            .map(|u| (u.id, UserSummary::from_entity(u)))
            .collect();

        let members = models
            .into_iter()
            .map(|model| {
                let member = Member::from_entity(model)?;
                let user = users
                    .get(&member.user_id)
                    .cloned()
                    .unwrap_or_else(|| UserSummary::unknown(member.user_id));
                Ok((member, user))
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedGymMembers {
            members,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets the caller's latest membership with its gym.
    pub async fn own_status(&self, caller: &AuthUser) -> Result<MembershipStatusDto, AppError> {
        let model = MemberRepository::new(self.db)
            .find_latest_by_user(caller.id)
            .await?
            .ok_or_else(|| AppError::NotFound("No membership found".to_string()))?;
        let member = Member::from_entity(model)?;

        let gym = GymRepository::new(self.db)
            .find_by_id(member.gym_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gym not found".to_string()))?;

        Ok(MembershipStatusDto {
            member_id: member.id,
            status: member.status,
            membership_plan: member.plan,
            gym: Gym::from_entity(gym)?.summary(),
        })
    }

    async fn load(&self, id: i32) -> Result<Member, AppError> {
        let model = MemberRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

        Member::from_entity(model)
    }

    /// Fails unless the caller owns the gym.
    async fn require_owner(
        &self,
        caller: &AuthUser,
        gym_id: i32,
        action: &str,
    ) -> Result<(), AppError> {
        let gym = GymRepository::new(self.db)
            .find_by_id(gym_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gym not found".to_string()))?;

        if gym.owner_id != caller.id {
            return Err(
                AuthError::AccessDenied(caller.id, format!("{} for gym {}", action, gym_id)).into(),
            );
        }

        Ok(())
    }

    async fn require_reader(&self, caller: &AuthUser, member: &Member) -> Result<(), AppError> {
        if caller.is_admin() || caller.id == member.user_id {
            return Ok(());
        }

        self.require_owner(caller, member.gym_id, "read member").await
    }

    async fn resolve_roster_gym(
        &self,
        caller: &AuthUser,
        gym_id: Option<i32>,
    ) -> Result<i32, AppError> {
        if caller.is_admin() {
            let gym_id = gym_id
                .ok_or_else(|| AppError::BadRequest("gym_id is required for admins".to_string()))?;
            GymRepository::new(self.db)
                .find_by_id(gym_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Gym not found".to_string()))?;

            return Ok(gym_id);
        }

        if let Some(gym_id) = gym_id {
            self.require_owner(caller, gym_id, "list gym members").await?;
            return Ok(gym_id);
        }

        GymRepository::new(self.db)
            .get_by_owner(caller.id)
            .await?
            .first()
            .map(|g| g.id)
            .ok_or_else(|| AppError::NotFound("No gym found for this owner".to_string()))
    }
}

fn concurrent_update(member_id: i32) -> AppError {
    AppError::Conflict(format!(
        "Member {} was modified concurrently, retry the request",
        member_id
    ))
}

/// Builds a stored diet day, summing item macros for totals not supplied.
fn diet_day(input: DietDayInputDto) -> DietDay {
    let items = || input.meals.iter().flat_map(|m| m.items.iter());

    let total_calories = input
        .total_calories
        .unwrap_or_else(|| items().map(|i| i.calories).sum());
    let total_proteins = input
        .total_proteins
        .unwrap_or_else(|| items().map(|i| i.proteins).sum());
    let total_carbs = input
        .total_carbs
        .unwrap_or_else(|| items().map(|i| i.carbs).sum());
    let total_fats = input
        .total_fats
        .unwrap_or_else(|| items().map(|i| i.fats).sum());

    DietDay {
        day: input.day,
        meals: input.meals,
        total_calories,
        total_proteins,
        total_carbs,
        total_fats,
    }
}
