use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::models::StatusRecord;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStatusRequest {
    #[serde(default)]
    pub is_enabled: bool,
    pub theme: Option<String>,
    pub request: Option<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    #[validate(url(message = "sound_url must be a valid URL"))]
    pub sound_url: Option<String>,
}

/// Partial status update. A field that is absent from the JSON body is left
/// unchanged; an explicit `null` clears the column. The admin console
/// relies on the latter when switching modes.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusRequest {
    pub is_enabled: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub theme: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub request: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub sound_url: Option<Option<String>>,
}

impl Validate for UpdateStatusRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(Some(url)) = &self.image_url {
            if !url.validate_url() {
                errors.add("image_url", ValidationError::new("url"));
            }
        }
        if let Some(Some(url)) = &self.sound_url {
            if !url.validate_url() {
                errors.add("sound_url", ValidationError::new("url"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Maps a present-but-null JSON value to `Some(None)` while `#[serde(default)]`
/// keeps an absent field as `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub id: i64,
    pub created_at: String,
    pub user_uuid: String,
    pub is_enabled: bool,
    pub theme: Option<String>,
    pub request: Option<String>,
    pub image_url: Option<String>,
    pub sound_url: Option<String>,
}

impl From<StatusRecord> for StatusResponse {
    fn from(record: StatusRecord) -> Self {
        Self {
            id: record.id,
            created_at: record.created_at.to_rfc3339(),
            user_uuid: record.user_uuid.to_string(),
            is_enabled: record.is_enabled,
            theme: record.theme,
            request: record.request,
            image_url: record.image_url,
            sound_url: record.sound_url,
        }
    }
}
