//! Cookie session access for handlers.
//!
//! [`SessionContext`] wraps the Actix session so handlers speak in account
//! ids rather than raw cookie keys.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Request extractor exposing the signed-in account id.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap an Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the account id after a successful sign-in.
    ///
    /// The session id is renewed so a pre-login cookie cannot be replayed.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.as_ref())
            .map_err(|err| Error::internal(format!("failed to persist session: {err}")))
    }

    /// Account id stored in the cookie, if any.
    ///
    /// A value that no longer parses is treated as signed out.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let Some(raw) = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|err| Error::internal(format!("failed to read session: {err}")))?
        else {
            return Ok(None);
        };
        match UserId::new(raw) {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                warn!(error = %err, "discarding malformed user id from session cookie");
                Ok(None)
            }
        }
    }

    /// Account id or `401 Unauthorized`.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop the session and expire the cookie.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    const ACCOUNT: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    async fn store(session: SessionContext) -> Result<HttpResponse, Error> {
        let id = UserId::new(ACCOUNT).map_err(|err| Error::internal(err.to_string()))?;
        session.persist_user(&id)?;
        Ok(HttpResponse::Ok().finish())
    }

    async fn read(session: SessionContext) -> Result<HttpResponse, Error> {
        let id = session.require_user_id()?;
        Ok(HttpResponse::Ok().body(id.to_string()))
    }

    async fn clear(session: SessionContext) -> HttpResponse {
        session.purge();
        HttpResponse::NoContent().finish()
    }

    async fn corrupt(session: Session) -> Result<HttpResponse, Error> {
        session
            .insert(USER_ID_KEY, "not-a-uuid")
            .map_err(|err| Error::internal(err.to_string()))?;
        Ok(HttpResponse::Ok().finish())
    }

    #[rstest]
    #[actix_web::test]
    async fn stored_id_is_read_back_and_purged() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route("/store", web::post().to(store))
                .route("/read", web::get().to(read))
                .route("/clear", web::post().to(clear)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::post().uri("/store").to_request()).await;
        let cookie = session_cookie(&res).expect("session cookie issued");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/read").cookie(cookie.clone()).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, ACCOUNT);

        let res = test::call_service(
            &app,
            test::TestRequest::post().uri("/clear").cookie(cookie).to_request(),
        )
        .await;
        let expired = session_cookie(&res).expect("removal cookie issued");
        assert_eq!(expired.value(), "");
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    #[actix_web::test]
    async fn missing_or_malformed_ids_are_unauthorised(#[case] corrupted: bool) {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route("/corrupt", web::post().to(corrupt))
                .route("/read", web::get().to(read)),
        )
        .await;

        let mut req = test::TestRequest::get().uri("/read");
        if corrupted {
            let res =
                test::call_service(&app, test::TestRequest::post().uri("/corrupt").to_request())
                    .await;
            req = req.cookie(session_cookie(&res).expect("session cookie issued"));
        }
        let res = test::call_service(&app, req.to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
