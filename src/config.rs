use axum_extra::extract::cookie::Key;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::DeskError;

/// Optional config file merged between the defaults and the environment.
pub const CONFIG_FILE: &str = "inquiry.toml";

/// Environment variable prefix, e.g. `INQUIRY_ADMIN_PASSWORD`.
pub const ENV_PREFIX: &str = "INQUIRY_";

/// Minimum length of `session_secret`; the private-cookie key is taken from it verbatim.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub session_secret: String,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    /// Drop the `Secure` cookie attribute so sessions work over plain HTTP.
    pub insecure_cookie: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:database.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            session_secret: String::new(),
            admin_username: None,
            admin_password: None,
            insecure_cookie: false,
        }
    }
}

impl Config {
    /// Defaults, then `inquiry.toml` (if present), then `INQUIRY_*` variables.
    pub fn load() -> Result<Self, DeskError> {
        Ok(Self::figment().extract()?)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Key for the encrypted session cookie.
    pub fn cookie_key(&self) -> Result<Key, DeskError> {
        let secret = self.session_secret.as_bytes();
        if secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(DeskError::CookieKey(format!(
                "session_secret must be at least {MIN_SESSION_SECRET_LEN} bytes, got {}",
                secret.len()
            )));
        }
        Key::try_from(secret).map_err(|e| DeskError::CookieKey(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("INQUIRY_ADMIN_USERNAME", "admin");
            jail.set_env("INQUIRY_ADMIN_PASSWORD", "hunter2");
            jail.set_env("INQUIRY_INSECURE_COOKIE", "true");
            let cfg: Config = Config::figment().extract()?;
            assert_eq!(cfg.admin_username.as_deref(), Some("admin"));
            assert_eq!(cfg.admin_password.as_deref(), Some("hunter2"));
            assert!(cfg.insecure_cookie);
            assert_eq!(cfg.database_url, "sqlite:database.db");
            Ok(())
        });
    }

    #[test]
    fn toml_file_is_merged_below_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                listen_addr = "127.0.0.1:9000"
                loglevel = "debug"
                "#,
            )?;
            jail.set_env("INQUIRY_LOGLEVEL", "warn");
            let cfg: Config = Config::figment().extract()?;
            assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
            assert_eq!(cfg.loglevel, "warn");
            Ok(())
        });
    }

    #[test]
    fn short_session_secret_is_rejected() {
        let cfg = Config {
            session_secret: "too-short".to_string(),
            ..Config::default()
        };
        assert!(matches!(cfg.cookie_key(), Err(DeskError::CookieKey(_))));

        let cfg = Config {
            session_secret: "k".repeat(MIN_SESSION_SECRET_LEN),
            ..Config::default()
        };
        assert!(cfg.cookie_key().is_ok());
    }
}
