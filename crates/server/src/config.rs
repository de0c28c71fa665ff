//! Server configuration from command-line flags and environment.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// community-site server
#[derive(Parser, Debug, Clone)]
#[command(name = "server")]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "SITE_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "SITE_PORT", default_value = "3000")]
    pub port: u16,

    /// Directory holding the built frontend
    #[arg(long, env = "SITE_STATIC_DIR", default_value = "crates/frontend/dist")]
    pub static_dir: PathBuf,

    /// Public URL of this site, used to build the auth callback URL
    #[arg(long, env = "SITE_URL", default_value = "http://localhost:3000")]
    pub site_url: String,

    /// Base URL of the hosted auth service (auth routes are disabled when unset)
    #[arg(long, env = "AUTH_URL")]
    pub auth_url: Option<String>,

    /// Public API key sent to the hosted auth service
    #[arg(long, env = "AUTH_ANON_KEY", default_value = "")]
    pub auth_anon_key: String,

    /// OAuth provider the login route asks the auth service for
    #[arg(long, env = "AUTH_OAUTH_PROVIDER", default_value = "google")]
    pub oauth_provider: String,

    /// Delay applied by the demo auth endpoints, in milliseconds
    #[arg(long, env = "SIMULATED_DELAY_MS", default_value = "1000")]
    pub simulated_delay_ms: u64,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    /// Absolute URL of the auth callback route.
    pub fn callback_url(&self) -> String {
        format!("{}/auth/callback", self.site_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["server"]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.simulated_delay(), Duration::from_millis(1000));
        assert_eq!(config.oauth_provider, "google");
    }

    #[test]
    fn test_flags() {
        let config = ServerConfig::try_parse_from([
            "server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--site-url",
            "https://example.org/",
            "--simulated-delay-ms",
            "0",
        ])
        .unwrap();

        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.callback_url(), "https://example.org/auth/callback");
        assert_eq!(config.simulated_delay(), Duration::ZERO);
    }
}
