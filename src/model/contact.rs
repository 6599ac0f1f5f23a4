use serde::{Deserialize, Serialize};

/// A contact form submission from the public website.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContactMessageDto {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    /// UI language detected by the client, included in the forwarded email.
    #[serde(default)]
    pub language: Option<String>,
}
