//! Domain ports and their development fixtures.

mod macros;
pub(crate) use macros::define_port_error;

mod account_query;
mod fixtures;
mod login_service;
mod plan_query;

#[cfg(test)]
pub use account_query::MockAccountQuery;
pub use account_query::{AccountQuery, FixtureAccountQuery};
pub use fixtures::FIXTURE_PASSWORD;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, LoginService};
#[cfg(test)]
pub use plan_query::MockPlanQuery;
pub use plan_query::{FixturePlanQuery, PlanQuery, PlanQueryError};
