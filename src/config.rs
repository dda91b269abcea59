use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the hosted identity service.
    pub identity_url: String,
    /// Service api key sent alongside every verification call.
    pub identity_api_key: String,
    /// Validity window for cached token verifications.
    pub cache_ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Absent key is a request-time error on /api/chat, not a boot failure.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub auth: AuthConfig,
    pub llm: LlmConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let auth = AuthConfig {
            identity_url: std::env::var("IDENTITY_URL")?,
            identity_api_key: std::env::var("IDENTITY_API_KEY")?,
            cache_ttl_minutes: std::env::var("AUTH_CACHE_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(15),
        };
        let llm = LlmConfig {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            model: std::env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".into()),
        };
        Ok(Self {
            database_url,
            auth,
            llm,
        })
    }
}
