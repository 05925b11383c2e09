use secrecy::Secret;
use status_service::config::StatusConfig;
use status_service::startup::Application;
use uuid::Uuid;
use wiremock::MockServer;

pub const STORE_API_KEY: &str = "test-store-key";

pub struct TestApp {
    pub address: String,
    /// Mock of the managed data store's table API.
    pub store: MockServer,
    /// Mock of the hosted model API.
    pub model: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = MockServer::start().await;
        let model = MockServer::start().await;

        let mut config = StatusConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.supabase.url = store.uri();
        config.supabase.api_key = Secret::new(STORE_API_KEY.to_string());
        config.genai.api_key = Secret::new("test-model-key".to_string());
        config.genai.api_base = model.uri();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(app.run_until_stopped());

        TestApp {
            address,
            store,
            model,
            client: reqwest::Client::new(),
        }
    }
}

/// A `users` table row as the data API would return it.
pub fn user_row(username: &str, id: Uuid) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "created_at": "2025-04-01T12:00:00Z",
        "username": username,
        "is_admin": false
    })
}

/// A `status` table row as the data API would return it. Tests tweak
/// individual fields on the returned value.
pub fn status_row(id: i64, user_uuid: Uuid) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "created_at": "2025-04-01T12:00:00Z",
        "user_uuid": user_uuid,
        "is_enabled": false,
        "theme": null,
        "request": null,
        "image_url": null,
        "sound_url": null
    })
}
