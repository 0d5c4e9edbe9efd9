//! Driving port for account status lookups.
//!
//! This is the session-state source: role plus the two onboarding flags the
//! gatekeeper pins users on.

use async_trait::async_trait;

use super::fixtures::FixtureAccount;
use crate::domain::{Account, Error, UserId};

/// Domain use-case port for reading an account by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Return the account, or `None` when it no longer exists.
    async fn fetch_account(&self, user_id: &UserId) -> Result<Option<Account>, Error>;
}

/// Account lookups over the fixture directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountQuery;

#[async_trait]
impl AccountQuery for FixtureAccountQuery {
    async fn fetch_account(&self, user_id: &UserId) -> Result<Option<Account>, Error> {
        FixtureAccount::by_id(user_id)
            .map(FixtureAccount::account)
            .transpose()
    }
}
