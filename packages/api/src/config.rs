use std::env;

const DEFAULT_PORT: u16 = 8000;

#[derive(Clone)]
pub struct AppConfig {
    pub api_token: Option<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_token = env::var("API_TOKEN").ok().filter(|token| !token.is_empty());

        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        if api_token.is_some() {
            tracing::info!("bearer token authentication is enabled");
        } else {
            tracing::warn!("API_TOKEN is not set, authentication is disabled (dev mode)");
        }

        Self { api_token, port }
    }

    pub fn is_auth_enabled(&self) -> bool {
        self.api_token.is_some()
    }
}
