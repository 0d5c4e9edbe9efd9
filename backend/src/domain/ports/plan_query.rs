//! Driving port for the plan snapshot.
//!
//! The snapshot is fetched under [`PLAN_RESOURCE_KEY`], at most once per
//! request. Callers that only need entitlements treat a failure as "no
//! plan" so access fails closed.

use async_trait::async_trait;

use super::define_port_error;
use super::fixtures::FixtureAccount;
use crate::domain::{PLAN_RESOURCE_KEY, PlanSnapshot, UserId};

define_port_error! {
    /// Errors raised while fetching the plan snapshot.
    pub enum PlanQueryError {
        /// The billing backend could not be reached.
        Unavailable { message: String } => "plan service unavailable: {message}",
        /// The billing backend answered with an unusable payload.
        Malformed { message: String } => "plan payload malformed: {message}",
    }
}

/// Domain use-case port for the tenant's plan.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanQuery: Send + Sync {
    /// Fetch the plan snapshot for the account's tenant.
    ///
    /// `Ok(None)` means the tenant has no subscription on file.
    async fn fetch_plan(&self, user_id: &UserId) -> Result<Option<PlanSnapshot>, PlanQueryError>;
}

/// Plan lookups over the fixture directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePlanQuery;

#[async_trait]
impl PlanQuery for FixturePlanQuery {
    async fn fetch_plan(&self, user_id: &UserId) -> Result<Option<PlanSnapshot>, PlanQueryError> {
        let row = FixtureAccount::by_id(user_id).ok_or_else(|| {
            PlanQueryError::malformed(format!(
                "no {PLAN_RESOURCE_KEY} record for account {user_id}"
            ))
        })?;
        Ok(row.plan_snapshot())
    }
}
