//! Driving port for sign-in.
//!
//! Inbound adapters call this port to turn credentials into an account id
//! without knowing where accounts are stored.

use async_trait::async_trait;

use super::fixtures::{FIXTURE_PASSWORD, FixtureAccount};
use crate::domain::{Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated account id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// In-memory authenticator over the fixture account directory.
///
/// Every fixture account signs in with the shared development password.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        match FixtureAccount::by_email(credentials.email()) {
            Some(row) if credentials.password() == FIXTURE_PASSWORD => row.user_id(),
            _ => Err(Error::unauthorized("invalid credentials")),
        }
    }
}
