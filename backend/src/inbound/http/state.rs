//! Shared HTTP adapter state.
//!
//! Handlers take this through `web::Data` so they depend only on domain
//! ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountQuery, LoginService, PlanQuery};

/// Port implementations used by the handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential check for `POST /login`.
    pub login: Arc<dyn LoginService>,
    /// Session state provider.
    pub accounts: Arc<dyn AccountQuery>,
    /// Plan info provider.
    pub plans: Arc<dyn PlanQuery>,
}

impl HttpState {
    /// Bundle the ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use portal::domain::ports::{FixtureAccountQuery, FixtureLoginService, FixturePlanQuery};
    /// use portal::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureLoginService),
    ///     Arc::new(FixtureAccountQuery),
    ///     Arc::new(FixturePlanQuery),
    /// );
    /// let _ = state.plans.clone();
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        accounts: Arc<dyn AccountQuery>,
        plans: Arc<dyn PlanQuery>,
    ) -> Self {
        Self {
            login,
            accounts,
            plans,
        }
    }
}
