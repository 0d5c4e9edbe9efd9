//! Session state consumed by the route gatekeeper.
//!
//! The state is a read-only snapshot: the browser shell holds it while
//! authentication resolves and the server derives it from the session
//! cookie plus the account directory.

use serde::{Deserialize, Serialize};

use super::{Account, UserRole};

/// Signed-in user as exposed to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Tenant role.
    pub role: UserRole,
}

/// Authentication snapshot for a single browser session.
///
/// # Examples
/// ```
/// use portal::domain::{SessionPhase, SessionState};
///
/// assert_eq!(SessionState::loading().phase(), SessionPhase::Loading);
/// assert_eq!(SessionState::anonymous().phase(), SessionPhase::Unauthenticated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Authentication is still being resolved.
    pub is_loading: bool,
    /// A valid session exists.
    pub is_authenticated: bool,
    /// The account must replace its temporary password.
    pub needs_password_change: bool,
    /// The tenant licence still has to be activated.
    pub needs_license_activation: bool,
    /// The signed-in user, when known.
    pub user: Option<SessionUser>,
}

/// Lifecycle phase derived from a [`SessionState`].
///
/// Variants are listed in evaluation priority: the first one whose
/// condition holds is the active phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Authentication is still resolving.
    Loading,
    /// No valid session.
    Unauthenticated,
    /// Signed in with a temporary password.
    NeedsPasswordChange,
    /// Signed in, licence not yet activated.
    NeedsLicenseActivation,
    /// Signed in and fully onboarded.
    Authenticated,
}

impl SessionState {
    /// State while authentication is still resolving.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// State without a session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// State for a signed-in account.
    #[must_use]
    pub fn for_account(account: &Account) -> Self {
        Self {
            is_loading: false,
            is_authenticated: true,
            needs_password_change: account.needs_password_change,
            needs_license_activation: account.needs_license_activation,
            user: Some(SessionUser { role: account.role }),
        }
    }

    /// Active phase, evaluated in fixed priority order.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Loading
        } else if !self.is_authenticated {
            SessionPhase::Unauthenticated
        } else if self.needs_password_change {
            SessionPhase::NeedsPasswordChange
        } else if self.needs_license_activation {
            SessionPhase::NeedsLicenseActivation
        } else {
            SessionPhase::Authenticated
        }
    }

    /// Role of the signed-in user, if any.
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.user.map(|user| user.role)
    }

    /// Whether the signed-in user is a tenant administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(UserRole::is_admin)
    }
}
