//! Route gatekeeper: decides what the browser shell renders for a path.
//!
//! [`decide`] is pure. It never navigates itself; callers apply a
//! [`RouteDecision::Redirect`] however their transport requires.
//!
//! Rules, first match wins:
//!
//! 1. `/` without a session renders the public showcase.
//! 2. `/landing`, `/showcase` and `/subscribe` always render.
//! 3. `/login` redirects signed-in users to `/`, otherwise renders.
//! 4. While authentication resolves, render the loading placeholder.
//! 5. Without a session, redirect to `/login`.
//! 6. A pending password change pins the user to `/change-password`.
//! 7. A pending licence activation pins the user to `/activate-license`.
//! 8. Otherwise dispatch through [`SHELL_ROUTES`]; no match is not-found.
//!
//! Rule 1 runs before the loading check, so `/` shows the showcase while a
//! session is still being resolved.

use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

use super::{SessionPhase, SessionState, UserRole};

/// Application root.
pub const ROOT_PATH: &str = "/";
/// Sign-in page.
pub const LOGIN_PATH: &str = "/login";
/// Forced password change page.
pub const CHANGE_PASSWORD_PATH: &str = "/change-password";
/// Licence activation page.
pub const ACTIVATE_LICENSE_PATH: &str = "/activate-license";

/// Screens the front-end knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Public product showcase.
    Showcase,
    /// Marketing landing page.
    Landing,
    /// Plan selection and checkout.
    Subscribe,
    /// Sign-in form.
    Login,
    /// Placeholder while authentication resolves.
    Loading,
    /// Forced password change.
    ChangePassword,
    /// Licence key activation.
    ActivateLicense,
    /// Revenue dashboard.
    Dashboard,
    /// Contract list.
    Contracts,
    /// New contract wizard.
    NewContract,
    /// Single contract with performance obligations.
    ContractDetail,
    /// Customer directory.
    Customers,
    /// Tenant licences.
    Licenses,
    /// Billing schedules.
    Billing,
    /// Revenue ledger.
    Revenue,
    /// Reports.
    Reports,
    /// IFRS 15 five-step workspace.
    Ifrs15,
    /// Audit log.
    Audit,
    /// Tenant settings.
    Settings,
    /// Team members.
    Users,
    /// Current plan and usage.
    Plan,
    /// Licence administration across tenants.
    AdminLicenses,
    /// Catch-all for unmatched paths.
    NotFound,
}

/// Outcome of [`decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RouteDecision {
    /// Render a standalone page outside the application shell.
    Render {
        /// Page to render.
        page: Page,
    },
    /// Render a page inside the authenticated application shell.
    Shell {
        /// Page to render.
        page: Page,
    },
    /// Navigate to another path and decide again.
    Redirect {
        /// Target path.
        to: &'static str,
    },
}

impl RouteDecision {
    /// Page rendered by this decision, if it renders one.
    #[must_use]
    pub fn page(self) -> Option<Page> {
        match self {
            Self::Render { page } | Self::Shell { page } => Some(page),
            Self::Redirect { .. } => None,
        }
    }
}

/// Row of the application-shell route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern; `:name` segments match any single segment.
    pub pattern: &'static str,
    /// Page rendered on a match.
    pub page: Page,
    /// Role the session must hold, if any.
    pub required_role: Option<UserRole>,
}

impl RouteEntry {
    const fn open(pattern: &'static str, page: Page) -> Self {
        Self {
            pattern,
            page,
            required_role: None,
        }
    }

    const fn restricted(pattern: &'static str, page: Page, role: UserRole) -> Self {
        Self {
            pattern,
            page,
            required_role: Some(role),
        }
    }

    /// Whether `path` (already normalised) matches this row.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let mut expected = segments(self.pattern);
        let mut actual = segments(path);
        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return true,
                (Some(want), Some(got)) if want.starts_with(':') || want == got => {}
                _ => return false,
            }
        }
    }

    fn admits(&self, role: Option<UserRole>) -> bool {
        self.required_role.is_none_or(|needed| role == Some(needed))
    }
}

/// Pages reachable without authentication.
pub const PUBLIC_ROUTES: [(&str, Page); 3] = [
    ("/landing", Page::Landing),
    ("/showcase", Page::Showcase),
    ("/subscribe", Page::Subscribe),
];

/// Application-shell routes in match order.
pub const SHELL_ROUTES: [RouteEntry; 15] = [
    RouteEntry::open("/", Page::Dashboard),
    RouteEntry::open("/contracts", Page::Contracts),
    RouteEntry::open("/contracts/new", Page::NewContract),
    RouteEntry::open("/contracts/:id", Page::ContractDetail),
    RouteEntry::open("/customers", Page::Customers),
    RouteEntry::open("/licenses", Page::Licenses),
    RouteEntry::open("/billing", Page::Billing),
    RouteEntry::open("/revenue", Page::Revenue),
    RouteEntry::open("/reports", Page::Reports),
    RouteEntry::open("/ifrs15", Page::Ifrs15),
    RouteEntry::open("/audit", Page::Audit),
    RouteEntry::open("/settings", Page::Settings),
    RouteEntry::open("/users", Page::Users),
    RouteEntry::open("/plan", Page::Plan),
    RouteEntry::restricted("/admin/licenses", Page::AdminLicenses, UserRole::Admin),
];

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Normalise a browser path: drop query and fragment, ensure a leading
/// slash and remove a single trailing slash.
///
/// # Examples
/// ```
/// use portal::domain::normalise_path;
///
/// assert_eq!(normalise_path("/contracts/?page=2"), "/contracts");
/// assert_eq!(normalise_path(""), "/");
/// ```
#[must_use]
pub fn normalise_path(raw: &str) -> Cow<'_, str> {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = raw.get(..end).unwrap_or(raw);
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// Decide what to render for `path` given the session.
///
/// # Examples
/// ```
/// use portal::domain::{decide, Page, RouteDecision, SessionState};
///
/// let anon = SessionState::anonymous();
/// assert_eq!(decide("/", &anon), RouteDecision::Render { page: Page::Showcase });
/// assert_eq!(decide("/revenue", &anon), RouteDecision::Redirect { to: "/login" });
/// ```
#[must_use]
pub fn decide(path: &str, session: &SessionState) -> RouteDecision {
    let path = normalise_path(path);
    let path = path.as_ref();

    if path == ROOT_PATH && !session.is_authenticated {
        return RouteDecision::Render {
            page: Page::Showcase,
        };
    }
    if let Some(page) = public_page(path) {
        return RouteDecision::Render { page };
    }
    if path == LOGIN_PATH {
        return if session.is_authenticated {
            RouteDecision::Redirect { to: ROOT_PATH }
        } else {
            RouteDecision::Render { page: Page::Login }
        };
    }

    match session.phase() {
        SessionPhase::Loading => RouteDecision::Render {
            page: Page::Loading,
        },
        SessionPhase::Unauthenticated => RouteDecision::Redirect { to: LOGIN_PATH },
        SessionPhase::NeedsPasswordChange => {
            pin_to(path, CHANGE_PASSWORD_PATH, Page::ChangePassword)
        }
        SessionPhase::NeedsLicenseActivation => {
            pin_to(path, ACTIVATE_LICENSE_PATH, Page::ActivateLicense)
        }
        SessionPhase::Authenticated => RouteDecision::Shell {
            page: dispatch(path, session.role()),
        },
    }
}

fn public_page(path: &str) -> Option<Page> {
    PUBLIC_ROUTES
        .iter()
        .find(|(public, _)| *public == path)
        .map(|(_, page)| *page)
}

fn pin_to(path: &str, target: &'static str, page: Page) -> RouteDecision {
    if path == target {
        RouteDecision::Render { page }
    } else {
        RouteDecision::Redirect { to: target }
    }
}

/// Match `path` against [`SHELL_ROUTES`] for a session holding `role`.
///
/// A row whose role requirement is not met resolves to
/// [`Page::NotFound`], the same as an unknown path.
#[must_use]
pub fn dispatch(path: &str, role: Option<UserRole>) -> Page {
    let Some(entry) = SHELL_ROUTES.iter().find(|entry| entry.matches(path)) else {
        return Page::NotFound;
    };
    if entry.admits(role) {
        entry.page
    } else {
        debug!(path, required = ?entry.required_role, "route requires a role the session lacks");
        Page::NotFound
    }
}
