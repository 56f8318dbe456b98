//! Admin authentication: the credential check and the cookie-held session.

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use time::Duration;

use crate::config::Config;
use crate::error::DeskError;

pub const SESSION_COOKIE: &str = "inquiry_session";

const SESSION_MAX_AGE: Duration = Duration::hours(12);

/// Compares submitted credentials against the configured admin pair.
#[derive(Debug, Clone)]
pub struct Authenticator {
    username: Option<String>,
    password: Option<String>,
}

impl Authenticator {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.admin_username.clone(), cfg.admin_password.clone())
    }

    /// Both values must match. A mismatch never says which one was wrong.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), DeskError> {
        let (Some(expected_user), Some(expected_pass)) =
            (self.username.as_deref(), self.password.as_deref())
        else {
            return Err(DeskError::MissingAdminCredentials);
        };

        let user_ok = username.as_bytes().ct_eq(expected_user.as_bytes());
        let pass_ok = password.as_bytes().ct_eq(expected_pass.as_bytes());
        if bool::from(user_ok & pass_ok) {
            Ok(())
        } else {
            Err(DeskError::InvalidCredentials)
        }
    }
}

/// Per-browser session state, stored encrypted in [`SESSION_COOKIE`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminSession {
    pub logged_in: bool,
}

impl AdminSession {
    /// Missing or undecodable cookies read as logged out.
    pub fn from_jar(jar: &PrivateCookieJar) -> Self {
        jar.get(SESSION_COOKIE)
            .and_then(|c| serde_json::from_str(c.value()).ok())
            .unwrap_or_default()
    }

    pub fn store(self, jar: PrivateCookieJar, secure: bool) -> PrivateCookieJar {
        // serializing a struct of one bool cannot fail
        let value = serde_json::to_string(&self).unwrap_or_default();
        jar.add(session_cookie(value, secure))
    }
}

/// Mark the session as authenticated when `verify` succeeds.
pub fn login(
    auth: &Authenticator,
    jar: PrivateCookieJar,
    username: &str,
    password: &str,
    secure: bool,
) -> Result<PrivateCookieJar, DeskError> {
    auth.verify(username, password)?;
    Ok(AdminSession { logged_in: true }.store(jar, secure))
}

/// Drop the session cookie. Safe to call when no session exists.
pub fn logout(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(clear_cookie())
}

fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(SESSION_MAX_AGE)
        .build()
}

fn clear_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    fn jar() -> PrivateCookieJar {
        PrivateCookieJar::new(Key::generate())
    }

    fn admin() -> Authenticator {
        Authenticator::new(Some("admin".to_string()), Some("s3cret".to_string()))
    }

    #[test]
    fn verify_accepts_exact_pair_only() {
        let auth = admin();
        assert!(auth.verify("admin", "s3cret").is_ok());
        assert!(matches!(
            auth.verify("admin", "wrong"),
            Err(DeskError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.verify("Admin", "s3cret"),
            Err(DeskError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.verify("admin", "s3cret "),
            Err(DeskError::InvalidCredentials)
        ));
    }

    #[test]
    fn verify_fails_when_credentials_unconfigured() {
        let auth = Authenticator::new(Some("admin".to_string()), None);
        assert!(matches!(
            auth.verify("admin", ""),
            Err(DeskError::MissingAdminCredentials)
        ));
        let auth = Authenticator::new(None, None);
        assert!(matches!(
            auth.verify("", ""),
            Err(DeskError::MissingAdminCredentials)
        ));
    }

    #[test]
    fn wrong_password_never_sets_flag() {
        let jar = jar();
        assert!(login(&admin(), jar.clone(), "admin", "wrong", true).is_err());
        assert!(!AdminSession::from_jar(&jar).logged_in);
    }

    #[test]
    fn login_then_logout_round_trip() {
        let jar = login(&admin(), jar(), "admin", "s3cret", true).expect("login");
        assert!(AdminSession::from_jar(&jar).logged_in);

        let jar = logout(jar);
        assert!(!AdminSession::from_jar(&jar).logged_in);

        // idempotent
        let jar = logout(jar);
        assert!(!AdminSession::from_jar(&jar).logged_in);
    }
}
