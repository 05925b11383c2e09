use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row in the external `status` table. A user may accumulate several rows;
/// only the newest one is consulted or updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRecord {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub user_uuid: Uuid,
    pub is_enabled: bool,
    pub theme: Option<String>,
    pub request: Option<String>,
    pub image_url: Option<String>,
    pub sound_url: Option<String>,
}

/// Insert payload for the `status` table.
#[derive(Debug, Serialize)]
pub struct NewStatus {
    pub user_uuid: Uuid,
    pub is_enabled: bool,
    pub theme: Option<String>,
    pub request: Option<String>,
    pub image_url: Option<String>,
    pub sound_url: Option<String>,
}

/// Partial update for a status row. `None` leaves the column untouched;
/// `Some(None)` writes NULL to a nullable column.
#[derive(Debug, Default, Serialize)]
pub struct StatusPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_url: Option<Option<String>>,
}

impl StatusPatch {
    pub fn is_empty(&self) -> bool {
        self.is_enabled.is_none()
            && self.theme.is_none()
            && self.request.is_none()
            && self.image_url.is_none()
            && self.sound_url.is_none()
    }
}
