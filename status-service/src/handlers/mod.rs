pub mod health;
pub mod status;
pub mod transform;
pub mod users;

pub use health::health_check;
pub use status::{create_status, list_status, update_status};
pub use transform::transform_text;
pub use users::{create_user, get_user};

use service_core::error::AppError;

use crate::models::User;
use crate::startup::AppState;

/// Resolve the path's username to a user row or fail with 404.
pub(crate) async fn require_user(state: &AppState, username: &str) -> Result<User, AppError> {
    state
        .db
        .find_user(username)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("User not found")))
}
