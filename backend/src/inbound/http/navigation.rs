//! Route gatekeeper over HTTP.
//!
//! ```text
//! GET /api/v1/navigation?path=/contracts/42
//! ```
//!
//! The browser shell asks what to show for a path and follows redirects
//! itself, asking again for the target.

use actix_web::{get, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Error, RouteDecision, decide};
use crate::inbound::http::ApiResult;
use crate::inbound::http::account::session_state;
use crate::inbound::http::schemas::{ErrorSchema, RouteDecisionSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Query string of `GET /api/v1/navigation`.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NavigationQuery {
    /// Browser path, optionally with query or fragment.
    #[param(example = "/contracts/42")]
    pub path: Option<String>,
}

/// Decide what the shell renders for a path.
#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    params(NavigationQuery),
    responses(
        (status = 200, description = "Routing decision", body = RouteDecisionSchema),
        (status = 400, description = "Missing path", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["navigation"],
    operation_id = "navigate",
    security([])
)]
#[get("/navigation")]
pub async fn navigate(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<NavigationQuery>,
) -> ApiResult<web::Json<RouteDecision>> {
    let path = query
        .into_inner()
        .path
        .ok_or_else(|| Error::invalid_request("path is required"))?;
    let current = session_state(&session, &state).await?;
    let decision = decide(&path, &current);
    debug!(path = %path, phase = ?current.phase(), ?decision, "route decided");
    Ok(web::Json(decision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::auth::login;
    use crate::inbound::http::test_utils::{fixture_state, session_cookie, test_session_middleware};
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn ask(email: Option<&str>, path: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(fixture_state()))
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(login).service(navigate)),
        )
        .await;

        let mut cookie: Option<Cookie<'static>> = None;
        if let Some(email) = email {
            let res = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/api/v1/login")
                    .set_json(json!({ "email": email, "password": "password" }))
                    .to_request(),
            )
            .await;
            cookie = session_cookie(&res);
        }

        let mut req = test::TestRequest::get().uri(path);
        if let Some(cookie) = cookie {
            req = req.cookie(cookie);
        }
        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        (status, test::read_body_json(res).await)
    }

    #[rstest]
    #[case(None, "/", json!({ "action": "render", "page": "showcase" }))]
    #[case(None, "/billing", json!({ "action": "redirect", "to": "/login" }))]
    #[case(Some("finance@portal.test"), "/", json!({ "action": "shell", "page": "dashboard" }))]
    #[case(Some("finance@portal.test"), "/login", json!({ "action": "redirect", "to": "/" }))]
    #[case(Some("finance@portal.test"), "/admin/licenses", json!({ "action": "shell", "page": "not_found" }))]
    #[case(Some("admin@portal.test"), "/admin/licenses", json!({ "action": "shell", "page": "admin_licenses" }))]
    #[case(Some("newhire@portal.test"), "/revenue", json!({ "action": "redirect", "to": "/change-password" }))]
    #[case(Some("pending@portal.test"), "/activate-license", json!({ "action": "render", "page": "activate_license" }))]
    #[actix_web::test]
    async fn decisions_follow_the_session(
        #[case] email: Option<&str>,
        #[case] path: &str,
        #[case] expected: Value,
    ) {
        let uri = format!("/api/v1/navigation?path={path}");
        let (status, body) = ask(email, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_path_is_a_bad_request() {
        let (status, body) = ask(None, "/api/v1/navigation").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
    }

    #[rstest]
    #[actix_web::test]
    async fn encoded_query_strings_are_ignored() {
        let (_, body) = ask(
            Some("finance@portal.test"),
            "/api/v1/navigation?path=%2Fcontracts%2F7%3Ftab%3Dobligations",
        )
        .await;
        assert_eq!(body, json!({ "action": "shell", "page": "contract_detail" }));
    }
}
