use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::error::DeskError;
use crate::middleware::auth::RequireAdmin;
use crate::router::DeskState;
use crate::views;

pub const ADMIN_PATH: &str = "/admin";

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    #[serde(default)]
    pub status: String,
}

/// GET /admin -> table of every stored inquiry.
pub async fn list_inquiries(
    _admin: RequireAdmin,
    State(state): State<DeskState>,
) -> Result<Html<String>, DeskError> {
    let records = state.store.list_all().await.inspect_err(|e| {
        error!(error = %e, "failed to list contact inquiries");
    })?;
    Ok(Html(views::admin_page(&records)))
}

/// Ids come in as text so a malformed one redirects like a missing one.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>()
        .inspect_err(|_| debug!(id = %raw, "ignoring non-numeric inquiry id"))
        .ok()
}

/// POST /admin/update_status/{id} -> always redirects back to the list.
pub async fn update_status(
    _admin: RequireAdmin,
    State(state): State<DeskState>,
    Path(raw_id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Redirect {
    let Some(id) = parse_id(&raw_id) else {
        return Redirect::to(ADMIN_PATH);
    };
    let status = form.status.as_str();
    if status.trim().is_empty() {
        warn!(id, "ignoring blank status update");
        return Redirect::to(ADMIN_PATH);
    }

    match state.store.update_status(id, status).await {
        Ok(true) => info!(id, status, "inquiry status updated"),
        Ok(false) => debug!(id, "status update matched no inquiry"),
        Err(e) => error!(id, error = %e, "failed to update inquiry status"),
    }
    Redirect::to(ADMIN_PATH)
}

/// POST /admin/delete_message/{id} -> always redirects back to the list.
pub async fn delete_inquiry(
    _admin: RequireAdmin,
    State(state): State<DeskState>,
    Path(raw_id): Path<String>,
) -> Redirect {
    let Some(id) = parse_id(&raw_id) else {
        return Redirect::to(ADMIN_PATH);
    };
    match state.store.delete(id).await {
        Ok(true) => info!(id, "inquiry deleted"),
        Ok(false) => debug!(id, "delete matched no inquiry"),
        Err(e) => error!(id, error = %e, "failed to delete inquiry"),
    }
    Redirect::to(ADMIN_PATH)
}
