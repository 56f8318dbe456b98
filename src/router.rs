use std::sync::Arc;

use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;

use crate::auth::Authenticator;
use crate::config::Config;
use crate::db::InquiryStore;
use crate::error::DeskError;
use crate::handlers::{admin, inquiry, session};

/// Upper bound for any form body.
pub const FORM_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone)]
pub struct DeskState {
    pub store: InquiryStore,
    pub auth: Arc<Authenticator>,
    pub key: Key,
    /// Set the `Secure` attribute on the session cookie.
    pub secure_cookie: bool,
}

impl DeskState {
    pub fn new(store: InquiryStore, cfg: &Config) -> Result<Self, DeskError> {
        Ok(Self {
            store,
            auth: Arc::new(Authenticator::from_config(cfg)),
            key: cfg.cookie_key()?,
            secure_cookie: !cfg.insecure_cookie,
        })
    }
}

impl FromRef<DeskState> for Key {
    fn from_ref(state: &DeskState) -> Self {
        state.key.clone()
    }
}

pub fn desk_router(state: DeskState) -> Router {
    Router::new()
        .route("/", get(inquiry::home_form).post(inquiry::submit_inquiry))
        .route("/login", get(session::login_form).post(session::login_submit))
        .route("/logout", get(session::logout))
        .route("/admin", get(admin::list_inquiries))
        .route("/admin/update_status/{id}", post(admin::update_status))
        .route("/admin/delete_message/{id}", post(admin::delete_inquiry))
        .layer(DefaultBodyLimit::max(FORM_BODY_LIMIT))
        .with_state(state)
}
