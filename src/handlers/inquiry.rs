use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::db::NewInquiry;
use crate::router::DeskState;
use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub success: Option<String>,
}

impl HomeQuery {
    fn succeeded(&self) -> bool {
        match self.success.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(v) => !v.eq_ignore_ascii_case("false") && v != "0",
        }
    }
}

/// GET / -> contact form, with a thank-you banner after a redirect from POST.
pub async fn home_form(Query(query): Query<HomeQuery>) -> Html<String> {
    Html(views::home_page(
        query.succeeded(),
        None,
        &NewInquiry::default(),
    ))
}

/// POST / -> store the inquiry and redirect back with `?success=true`.
pub async fn submit_inquiry(
    State(state): State<DeskState>,
    Form(form): Form<NewInquiry>,
) -> Response {
    let inquiry = match form.clone().validate() {
        Ok(v) => v,
        Err(err) => {
            info!(error = %err, "rejected contact form");
            let body = views::home_page(false, Some(&err.public_message()), &form);
            return (StatusCode::BAD_REQUEST, Html(body)).into_response();
        }
    };

    match state.store.insert(inquiry).await {
        Ok(id) => {
            info!(id, "stored contact inquiry");
            Redirect::to("/?success=true").into_response()
        }
        Err(err) => {
            error!(error = %err, "failed to store contact inquiry");
            err.into_response()
        }
    }
}
