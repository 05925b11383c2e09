use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct TransformRequest {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TransformResponse {
    pub original_text: String,
    pub transformed_text: String,
    /// Theme that drove the rewrite.
    pub theme: Option<String>,
}
