//! OpenAPI document for the portal API.
//!
//! Served through Swagger UI in debug builds and printed by the
//! `openapi-dump` binary for client generation.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::schemas::{
    EntitlementsResponseSchema, ErrorCodeSchema, ErrorSchema, FeatureKeySchema, PlanSnapshotSchema,
    PlanTierSchema, RouteActionSchema, RouteDecisionSchema, SessionStateSchema,
    SessionUserSchema, UpgradePromptSchema, UserRoleSchema,
};

/// Registers the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);
        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// Generated OpenAPI document.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Revenue portal API",
        description = "Session, route gatekeeping and plan entitlements for the IFRS 15 revenue portal."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::account::current_session,
        crate::inbound::http::navigation::navigate,
        crate::inbound::http::plan::current_plan,
        crate::inbound::http::plan::entitlements,
        crate::inbound::http::plan::upgrade_prompt,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        SessionStateSchema,
        SessionUserSchema,
        UserRoleSchema,
        RouteDecisionSchema,
        RouteActionSchema,
        PlanSnapshotSchema,
        PlanTierSchema,
        EntitlementsResponseSchema,
        FeatureKeySchema,
        UpgradePromptSchema,
        crate::inbound::http::auth::LoginRequest,
    )),
    tags(
        (name = "session", description = "Sign-in and session state"),
        (name = "navigation", description = "Route gatekeeping"),
        (name = "plan", description = "Plan snapshot, entitlements and upgrade prompts"),
        (name = "health", description = "Orchestrator probes")
    )
)]
pub struct ApiDoc;
