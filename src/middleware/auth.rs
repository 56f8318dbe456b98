use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Key, PrivateCookieJar};
use tracing::debug;

use crate::auth::AdminSession;

pub const LOGIN_PATH: &str = "/login";

/// Guard for admin routes.
/// Resolves only when the private session cookie carries `logged_in = true`;
/// otherwise the request is answered with a redirect to [`LOGIN_PATH`] and
/// the handler never runs.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = match PrivateCookieJar::<Key>::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };
        if AdminSession::from_jar(&jar).logged_in {
            return Ok(Self);
        }
        debug!(path = %parts.uri.path(), "unauthenticated admin request");
        Err(Redirect::to(LOGIN_PATH).into_response())
    }
}
