use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DeskError;

/// One stored contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InquiryRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub telegram_username: Option<String>,
    pub interest: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Contact form body as posted to `/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewInquiry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub telegram_username: Option<String>,
    #[serde(default)]
    pub interest: String,
    #[serde(default)]
    pub message: String,
}

impl NewInquiry {
    /// Enforce presence of the required fields. Values are kept exactly as
    /// submitted; only blank optional fields collapse to `None`.
    pub fn validate(self) -> Result<Self, DeskError> {
        let name = required("name", self.name)?;
        let email = required("email", self.email)?;
        let phone = required("phone", self.phone)?;
        let interest = required("interest", self.interest)?;
        let message = required("message", self.message)?;
        Ok(Self {
            name,
            email,
            phone,
            company_name: optional(self.company_name),
            telegram_username: optional(self.telegram_username),
            interest,
            message,
        })
    }
}

fn required(field: &'static str, value: String) -> Result<String, DeskError> {
    if value.trim().is_empty() {
        return Err(DeskError::MissingField(field));
    }
    Ok(value)
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
