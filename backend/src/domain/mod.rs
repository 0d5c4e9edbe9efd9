//! Domain primitives and services for the revenue portal.
//!
//! Purpose: keep the gatekeeping and entitlement rules free of transport
//! concerns. Everything here is plain data plus pure functions; adapters
//! reach external systems only through the traits in [`ports`].
//!
//! Public surface:
//! - [`decide`] routes a browser path given a [`SessionState`].
//! - [`resolve`] turns a [`PlanSnapshot`] into [`Entitlements`].
//! - [`UpgradePrompt`] explains how to unlock a [`FeatureKey`].
//! - [`Error`] is the API error payload shared by every adapter.

pub mod auth;
pub mod entitlements;
pub mod error;
pub mod navigation;
pub mod plan;
pub mod ports;
pub mod session;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::entitlements::{
    Entitlements, FeatureKey, FeatureSet, UnknownFeatureKey, UpgradePrompt, resolve,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::navigation::{
    ACTIVATE_LICENSE_PATH, CHANGE_PASSWORD_PATH, LOGIN_PATH, PUBLIC_ROUTES, Page, ROOT_PATH,
    RouteDecision, RouteEntry, SHELL_ROUTES, decide, dispatch, normalise_path,
};
pub use self::plan::{PLAN_RESOURCE_KEY, PlanSnapshot, PlanTier, Quota, UNLIMITED_SENTINEL};
pub use self::session::{SessionPhase, SessionState, SessionUser};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Account, UserId, UserRole, UserValidationError};
