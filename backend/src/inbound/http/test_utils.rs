//! Helpers shared by the HTTP adapter tests.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

use crate::domain::ports::{FixtureAccountQuery, FixtureLoginService, FixturePlanQuery};
use crate::inbound::http::state::HttpState;

/// Cookie name used by the test middleware and the production server.
pub const SESSION_COOKIE: &str = "session";

/// Session middleware with a throwaway key and no `Secure` flag.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// Session cookie set on `res`, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
}

/// Handler state backed by the fixture directory.
pub fn fixture_state() -> HttpState {
    HttpState::new(
        Arc::new(FixtureLoginService),
        Arc::new(FixtureAccountQuery),
        Arc::new(FixturePlanQuery),
    )
}
