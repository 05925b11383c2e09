pub mod status;
pub mod transform;
pub mod users;

pub use status::{CreateStatusRequest, StatusResponse, UpdateStatusRequest};
pub use transform::{TransformRequest, TransformResponse};
pub use users::{CreateUserRequest, UserResponse};
