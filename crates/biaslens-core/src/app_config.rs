use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub openai_api_key: String,
    pub oracle_model: String,
    pub oracle_base_url: String,
    pub oracle_temperature: f32,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    pub history_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("openai_api_key", &"[redacted]")
            .field("oracle_model", &self.oracle_model)
            .field("oracle_base_url", &self.oracle_base_url)
            .field("oracle_temperature", &self.oracle_temperature)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("fetch_user_agent", &self.fetch_user_agent)
            .field("history_path", &self.history_path)
            .finish()
    }
}
