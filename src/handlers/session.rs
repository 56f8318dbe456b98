use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::{self, AdminSession};
use crate::error::DeskError;
use crate::handlers::admin::ADMIN_PATH;
use crate::middleware::auth::LOGIN_PATH;
use crate::router::DeskState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// GET /login -> login form, or straight to the list when already signed in.
pub async fn login_form(jar: PrivateCookieJar) -> Response {
    if AdminSession::from_jar(&jar).logged_in {
        return Redirect::to(ADMIN_PATH).into_response();
    }
    Html(views::login_page(None)).into_response()
}

/// POST /login
pub async fn login_submit(
    State(state): State<DeskState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match auth::login(
        &state.auth,
        jar,
        &form.username,
        &form.password,
        state.secure_cookie,
    ) {
        Ok(jar) => {
            info!("admin logged in");
            (jar, Redirect::to(ADMIN_PATH)).into_response()
        }
        Err(err @ DeskError::InvalidCredentials) => {
            warn!("rejected admin login");
            let body = views::login_page(Some(&err.public_message()));
            (StatusCode::UNAUTHORIZED, Html(body)).into_response()
        }
        Err(err) => {
            error!(error = %err, "admin login unavailable");
            err.into_response()
        }
    }
}

/// GET /logout -> clear the session and return to the login form.
pub async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    info!("admin logged out");
    (auth::logout(jar), Redirect::to(LOGIN_PATH))
}
