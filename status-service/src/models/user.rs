use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row in the external `users` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub is_admin: bool,
}

/// Insert payload for the `users` table. The store assigns `id` and
/// `created_at`.
#[derive(Debug, Serialize)]
pub struct NewUser {
    pub username: String,
    pub is_admin: bool,
}
