//! Server configuration loaded from environment variables.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Frontend dev servers allowed by default (Vite and CRA).
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "http://localhost:3000"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (from PCB_DESIGN_HOST)
    pub host: String,
    /// Bind port (from PCB_DESIGN_PORT)
    pub port: u16,
    /// Allowed CORS origins (from PCB_DESIGN_CORS_ORIGINS, comma-separated; `*` allows any)
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Local development defaults, ignoring the environment.
    pub fn local() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or unparsable keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::local();

        let host = lookup("PCB_DESIGN_HOST").unwrap_or(defaults.host);

        let port = match lookup("PCB_DESIGN_PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PCB_DESIGN_PORT: {}", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        let cors_origins = lookup("PCB_DESIGN_CORS_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        Self {
            host,
            port,
            cors_origins,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cors_layer(&self) -> CorsLayer {
        if self.cors_origins.iter().any(|o| o == "*") {
            return CorsLayer::permissive();
        }

        let origins: Vec<HeaderValue> = self
            .cors_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Skipping invalid CORS origin: {}", o);
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ]))
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_local_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::local());
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PCB_DESIGN_HOST", "0.0.0.0"),
            ("PCB_DESIGN_PORT", "9100"),
            ("PCB_DESIGN_CORS_ORIGINS", "https://a.example, https://b.example,"),
        ]));

        assert_eq!(config.bind_addr(), "0.0.0.0:9100");
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup(&[("PCB_DESIGN_PORT", "not-a-port")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
