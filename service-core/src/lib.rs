//! service-core: shared infrastructure for the status backend.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod store;

pub use axum;
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
