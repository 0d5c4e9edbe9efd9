//! OpenAPI schemas for domain types.
//!
//! Domain types stay free of `utoipa`. These mirrors describe their wire
//! shape and are registered under the domain type names; nothing
//! constructs them.

#![expect(dead_code, reason = "schema mirrors exist only for OpenAPI generation")]

use utoipa::ToSchema;

/// Mirror of [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = domain::ErrorCode)]
pub enum ErrorCodeSchema {
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    #[schema(rename = "unauthorized")]
    Unauthorized,
    #[schema(rename = "not_found")]
    NotFound,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Mirror of [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Machine-readable failure category.
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "login required")]
    message: String,
    /// Correlation id, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Structured context, e.g. the offending field.
    details: Option<serde_json::Value>,
}

/// Mirror of [`crate::domain::UserRole`].
#[derive(ToSchema)]
#[schema(as = domain::UserRole)]
pub enum UserRoleSchema {
    #[schema(rename = "admin")]
    Admin,
    #[schema(rename = "user")]
    User,
}

/// Mirror of [`crate::domain::SessionUser`].
#[derive(ToSchema)]
#[schema(as = domain::SessionUser)]
pub struct SessionUserSchema {
    role: UserRoleSchema,
}

/// Mirror of [`crate::domain::SessionState`].
#[derive(ToSchema)]
#[schema(as = domain::SessionState, rename_all = "camelCase")]
pub struct SessionStateSchema {
    is_loading: bool,
    is_authenticated: bool,
    needs_password_change: bool,
    needs_license_activation: bool,
    user: Option<SessionUserSchema>,
}

/// Mirror of [`crate::domain::PlanTier`].
#[derive(ToSchema)]
#[schema(as = domain::PlanTier)]
pub enum PlanTierSchema {
    #[schema(rename = "starter")]
    Starter,
    #[schema(rename = "professional")]
    Professional,
    #[schema(rename = "enterprise")]
    Enterprise,
}

/// Mirror of [`crate::domain::PlanSnapshot`]. `-1` caps mean unlimited.
#[derive(ToSchema)]
#[schema(as = domain::PlanSnapshot, rename_all = "camelCase")]
pub struct PlanSnapshotSchema {
    #[schema(example = "professional")]
    plan_type: String,
    #[schema(example = 50)]
    max_contracts: i64,
    #[schema(example = 10)]
    max_licenses: i64,
    current_contracts: i64,
    current_licenses: i64,
}

/// Mirror of [`crate::domain::Entitlements`] plus plan naming.
///
/// Remaining counts are `-1` when unlimited.
#[derive(ToSchema)]
#[schema(as = EntitlementsResponse, rename_all = "camelCase")]
pub struct EntitlementsResponseSchema {
    has_advanced_reports: bool,
    has_audit_trail: bool,
    has_api_access: bool,
    has_multi_currency: bool,
    has_custom_branding: bool,
    has_priority_support: bool,
    can_create_contract: bool,
    can_create_license: bool,
    can_upgrade: bool,
    contracts_remaining: i64,
    licenses_remaining: i64,
    is_unlimited: bool,
    /// Display name of the current plan; absent without a plan.
    #[schema(example = "Professional")]
    plan_name: Option<String>,
    /// Next tier up, if any.
    next_plan: Option<PlanTierSchema>,
}

/// Mirror of [`crate::domain::FeatureKey`].
#[derive(ToSchema)]
#[schema(as = domain::FeatureKey)]
pub enum FeatureKeySchema {
    #[schema(rename = "advancedReports")]
    AdvancedReports,
    #[schema(rename = "auditTrail")]
    AuditTrail,
    #[schema(rename = "apiAccess")]
    ApiAccess,
    #[schema(rename = "multiCurrency")]
    MultiCurrency,
    #[schema(rename = "customBranding")]
    CustomBranding,
    #[schema(rename = "prioritySupport")]
    PrioritySupport,
    #[schema(rename = "contracts")]
    Contracts,
    #[schema(rename = "licenses")]
    Licenses,
}

/// Mirror of [`crate::domain::UpgradePrompt`].
#[derive(ToSchema)]
#[schema(as = domain::UpgradePrompt, rename_all = "camelCase")]
pub struct UpgradePromptSchema {
    feature: FeatureKeySchema,
    message: String,
    suggested_plan: Option<PlanTierSchema>,
}

/// Gatekeeper action.
#[derive(ToSchema)]
#[schema(as = domain::RouteAction)]
pub enum RouteActionSchema {
    /// Standalone page outside the shell.
    #[schema(rename = "render")]
    Render,
    /// Page inside the authenticated shell.
    #[schema(rename = "shell")]
    Shell,
    /// Navigate to `to` and ask again.
    #[schema(rename = "redirect")]
    Redirect,
}

/// Mirror of [`crate::domain::RouteDecision`].
///
/// `page` is set for `render` and `shell`, `to` for `redirect`.
#[derive(ToSchema)]
#[schema(as = domain::RouteDecision)]
pub struct RouteDecisionSchema {
    action: RouteActionSchema,
    /// Snake-case page name, e.g. `contract_detail`.
    #[schema(example = "dashboard")]
    page: Option<String>,
    #[schema(example = "/login")]
    to: Option<String>,
}
