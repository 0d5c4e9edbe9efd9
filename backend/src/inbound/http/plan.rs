//! Plan, entitlement and upgrade-prompt handlers.
//!
//! ```text
//! GET /api/v1/plan
//! GET /api/v1/entitlements
//! GET /api/v1/upgrade-prompts/{feature}
//! ```
//!
//! Each request fetches the plan snapshot at most once. Entitlements are
//! recomputed from it every time and never stored.

use actix_web::{get, web};
use serde::Serialize;
use tracing::warn;

use crate::domain::{
    Account, Entitlements, Error, FeatureKey, PLAN_RESOURCE_KEY, PlanSnapshot, PlanTier,
    UpgradePrompt, resolve,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::account::require_account;
use crate::inbound::http::schemas::{
    EntitlementsResponseSchema, ErrorSchema, PlanSnapshotSchema, UpgradePromptSchema,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Entitlements with the plan naming the upgrade banner needs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementsResponse {
    /// Resolved flags and quotas, inlined into the body.
    #[serde(flatten)]
    pub entitlements: Entitlements,
    /// Display name of the current plan, absent without one.
    pub plan_name: Option<&'static str>,
    /// Tier the upgrade banner points at.
    pub next_plan: Option<PlanTier>,
}

impl EntitlementsResponse {
    fn new(account: &Account, plan: Option<&PlanSnapshot>) -> Self {
        let tier = plan.map(PlanSnapshot::tier);
        Self {
            entitlements: resolve(plan, account.role.is_admin()),
            plan_name: tier.map(PlanTier::display_name),
            next_plan: tier.and_then(PlanTier::next),
        }
    }
}

/// Plan snapshot, or `None` when the fetch failed.
///
/// Failures are logged and read as "no plan" so gated features stay locked.
async fn plan_or_none(state: &HttpState, account: &Account) -> Option<PlanSnapshot> {
    match state.plans.fetch_plan(&account.id).await {
        Ok(plan) => plan,
        Err(err) => {
            warn!(
                user_id = %account.id,
                resource = PLAN_RESOURCE_KEY,
                error = %err,
                "plan fetch failed; entitlements fail closed"
            );
            None
        }
    }
}

/// Current plan snapshot.
#[utoipa::path(
    get,
    path = "/api/v1/plan",
    responses(
        (status = 200, description = "Plan snapshot", body = PlanSnapshotSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "No plan on file", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["plan"],
    operation_id = "currentPlan"
)]
#[get("/plan")]
pub async fn current_plan(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<PlanSnapshot>> {
    let account = require_account(&session, &state).await?;
    let plan = state
        .plans
        .fetch_plan(&account.id)
        .await
        .map_err(|err| Error::internal(err.to_string()))?;
    plan.map(web::Json)
        .ok_or_else(|| Error::not_found("no plan on file"))
}

/// Resolved entitlements for the signed-in account.
#[utoipa::path(
    get,
    path = "/api/v1/entitlements",
    responses(
        (status = 200, description = "Entitlements", body = EntitlementsResponseSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["plan"],
    operation_id = "entitlements"
)]
#[get("/entitlements")]
pub async fn entitlements(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<EntitlementsResponse>> {
    let account = require_account(&session, &state).await?;
    let plan = plan_or_none(&state, &account).await;
    Ok(web::Json(EntitlementsResponse::new(&account, plan.as_ref())))
}

/// Upgrade prompt for a feature key.
#[utoipa::path(
    get,
    path = "/api/v1/upgrade-prompts/{feature}",
    params(
        ("feature" = String, Path, description = "Feature key, e.g. `apiAccess` or `contracts`")
    ),
    responses(
        (status = 200, description = "Upgrade prompt", body = UpgradePromptSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Unknown feature key", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["plan"],
    operation_id = "upgradePrompt"
)]
#[get("/upgrade-prompts/{feature}")]
pub async fn upgrade_prompt(
    state: web::Data<HttpState>,
    session: SessionContext,
    feature: web::Path<String>,
) -> ApiResult<web::Json<UpgradePrompt>> {
    let account = require_account(&session, &state).await?;
    let feature = feature
        .parse::<FeatureKey>()
        .map_err(|err| Error::not_found(err.to_string()))?;
    let current = plan_or_none(&state, &account)
        .await
        .map(|plan| plan.tier());
    Ok(web::Json(UpgradePrompt::for_feature(feature, current)))
}
