use secrecy::Secret;
use service_core::config as core_config;
use service_core::config::get_env;
use service_core::error::AppError;

/// Default hosted model API root. Overridable so tests can point the
/// provider at a local mock server.
const DEFAULT_GENAI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct StatusConfig {
    pub common: core_config::Config,
    pub supabase: SupabaseConfig,
    pub genai: GenaiConfig,
}

/// Connection settings for the managed data store's table API.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct GenaiConfig {
    pub api_key: Secret<String>,
    /// Model used for text rewriting (e.g., gemini-2.0-flash).
    pub model: String,
    pub api_base: String,
}

impl StatusConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = common.environment.is_prod();

        Ok(StatusConfig {
            common,
            supabase: SupabaseConfig {
                url: get_env("SUPABASE_URL", Some("http://localhost:54321"), is_prod)?,
                api_key: Secret::new(get_env("SUPABASE_KEY", Some("dev-service-key"), is_prod)?),
            },
            genai: GenaiConfig {
                api_key: Secret::new(get_env("GENAI_API_KEY", Some("dev-model-key"), is_prod)?),
                model: get_env("GENAI_TEXT_MODEL", Some("gemini-2.0-flash"), is_prod)?,
                api_base: get_env("GENAI_API_BASE", Some(DEFAULT_GENAI_API_BASE), is_prod)?,
            },
        })
    }
}
