use secrecy::Secret;
use service_core::error::AppError;
use service_core::store::{Table, TableClient};
use uuid::Uuid;

use crate::models::{StatusRecord, User};

/// Typed facade over the external data API's tables.
#[derive(Clone)]
pub struct Db {
    client: TableClient,
}

impl Db {
    pub fn connect(base_url: &str, api_key: Secret<String>) -> Self {
        tracing::info!(url = %base_url, "Initializing table store client");
        Self {
            client: TableClient::new(base_url, api_key),
        }
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        Ok(self.client.health_check().await?)
    }

    pub fn users(&self) -> Table<User> {
        self.client.table("users")
    }

    pub fn statuses(&self) -> Table<StatusRecord> {
        self.client.table("status")
    }

    pub async fn find_user(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users()
            .select()
            .eq("username", username)
            .fetch_optional()
            .await?)
    }

    /// The user's newest status row, if any.
    pub async fn latest_status(&self, user_uuid: Uuid) -> Result<Option<StatusRecord>, AppError> {
        Ok(self
            .statuses()
            .select()
            .eq("user_uuid", user_uuid)
            .order_desc("created_at")
            .fetch_optional()
            .await?)
    }
}
