use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub api_token: Option<String>,
    pub base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_concurrent_queries: usize,
    pub export_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[redacted]"),
            )
            .field("base_url", &self.base_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_concurrent_queries", &self.max_concurrent_queries)
            .field("export_path", &self.export_path)
            .finish()
    }
}
