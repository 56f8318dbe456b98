use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

use crate::views;

#[derive(Debug, ThisError)]
pub enum DeskError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("Invalid session secret: {0}")]
    CookieKey(String),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("admin credentials are not configured")]
    MissingAdminCredentials,
}

impl From<figment::Error> for DeskError {
    fn from(e: figment::Error) -> Self {
        DeskError::Config(Box::new(e))
    }
}

impl DeskError {
    pub fn status(&self) -> StatusCode {
        match self {
            DeskError::MissingField(_) => StatusCode::BAD_REQUEST,
            DeskError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            DeskError::Database(_)
            | DeskError::Config(_)
            | DeskError::CookieKey(_)
            | DeskError::MissingAdminCredentials => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text safe to show a visitor. Server-side failures never leak detail.
    pub fn public_message(&self) -> String {
        match self {
            DeskError::MissingField(_) | DeskError::InvalidCredentials => self.to_string(),
            _ => "An internal server error occurred.".to_string(),
        }
    }
}

impl IntoResponse for DeskError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = views::error_page(status, &self.public_message());
        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_side_errors_hide_details() {
        let err = DeskError::Database(SqlxError::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.public_message().contains("RowNotFound"));

        let err = DeskError::MissingAdminCredentials;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.public_message().contains("admin"));
    }

    #[test]
    fn client_errors_are_explained() {
        let err = DeskError::MissingField("email");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.public_message().contains("email"));
        assert_eq!(
            DeskError::InvalidCredentials.public_message(),
            "Invalid credentials"
        );
    }
}
