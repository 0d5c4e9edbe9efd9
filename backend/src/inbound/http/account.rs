//! Session state for the signed-in account.
//!
//! ```text
//! GET /api/v1/session
//! ```
//!
//! The server never reports a loading state: by the time a request is
//! handled the cookie has either resolved to an account or it has not.

use actix_web::{get, web};
use tracing::warn;

use crate::domain::{Account, Error, SessionState};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, SessionStateSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Account behind the session cookie, if it still exists.
pub(crate) async fn current_account(
    session: &SessionContext,
    state: &HttpState,
) -> ApiResult<Option<Account>> {
    let Some(user_id) = session.user_id()? else {
        return Ok(None);
    };
    let account = state.accounts.fetch_account(&user_id).await?;
    if account.is_none() {
        warn!(user_id = %user_id, "session refers to an unknown account");
    }
    Ok(account)
}

/// Signed-in account or `401 Unauthorized`.
pub(crate) async fn require_account(
    session: &SessionContext,
    state: &HttpState,
) -> ApiResult<Account> {
    current_account(session, state)
        .await?
        .ok_or_else(|| Error::unauthorized("login required"))
}

/// Gatekeeper input derived from the session cookie.
pub(crate) async fn session_state(
    session: &SessionContext,
    state: &HttpState,
) -> ApiResult<SessionState> {
    Ok(current_account(session, state)
        .await?
        .as_ref()
        .map_or_else(SessionState::anonymous, SessionState::for_account))
}

/// Current session state.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Session state", body = SessionStateSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "currentSession",
    security([])
)]
#[get("/session")]
pub async fn current_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<SessionState>> {
    session_state(&session, &state).await.map(web::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockAccountQuery;
    use crate::domain::UserId;
    use crate::inbound::http::auth::login;
    use crate::inbound::http::test_utils::{fixture_state, session_cookie, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn session_after_login(state: HttpState, email: &str) -> Value {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(login).service(current_session)),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(json!({ "email": email, "password": "password" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let cookie = session_cookie(&res).expect("session cookie issued");

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/session")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        test::read_body_json(res).await
    }

    #[rstest]
    #[actix_web::test]
    async fn anonymous_requests_get_unauthenticated_state() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(fixture_state()))
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(current_session)),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/session").to_request(),
        )
        .await;
        let body: SessionState = test::read_body_json(res).await;
        assert_eq!(body, SessionState::anonymous());
    }

    #[rstest]
    #[case("admin@portal.test", "admin", false, false)]
    #[case("newhire@portal.test", "user", true, false)]
    #[case("pending@portal.test", "user", false, true)]
    #[actix_web::test]
    async fn signed_in_state_reflects_the_account(
        #[case] email: &str,
        #[case] role: &str,
        #[case] password_change: bool,
        #[case] licence_activation: bool,
    ) {
        let body = session_after_login(fixture_state(), email).await;
        assert_eq!(body["isLoading"], false);
        assert_eq!(body["isAuthenticated"], true);
        assert_eq!(body["needsPasswordChange"], password_change);
        assert_eq!(body["needsLicenseActivation"], licence_activation);
        assert_eq!(body["user"]["role"], role);
    }

    #[rstest]
    #[actix_web::test]
    async fn vanished_accounts_read_as_signed_out() {
        let mut accounts = MockAccountQuery::new();
        accounts.expect_fetch_account().returning(|_| Ok(None));
        let mut state = fixture_state();
        state.accounts = Arc::new(accounts);

        let body = session_after_login(state, "finance@portal.test").await;
        assert_eq!(body["isAuthenticated"], false);
        assert!(body["user"].is_null());
    }

    #[rstest]
    #[actix_web::test]
    async fn account_lookup_failures_surface_as_errors() {
        let mut accounts = MockAccountQuery::new();
        accounts
            .expect_fetch_account()
            .returning(|_| Err(Error::internal("directory offline")));
        let mut state = fixture_state();
        state.accounts = Arc::new(accounts);

        let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("fixture id");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(test_session_middleware())
                .route(
                    "/seed",
                    web::post().to(move |session: SessionContext| {
                        let id = id.clone();
                        async move {
                            session.persist_user(&id)?;
                            Ok::<_, Error>(actix_web::HttpResponse::Ok().finish())
                        }
                    }),
                )
                .service(web::scope("/api/v1").service(current_session)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::post().uri("/seed").to_request()).await;
        let cookie = session_cookie(&res).expect("session cookie issued");
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/session")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Internal server error");
    }
}
