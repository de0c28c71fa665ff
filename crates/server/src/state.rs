//! Application state for the web server.

use std::sync::Arc;

use crate::auth::DemoAuthService;
use crate::config::ServerConfig;
use crate::provider::{
    AuthProvider, DisabledAuthProvider, HostedAuthConfig, HostedAuthProvider,
};

/// Shared application state. Everything in it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Demo handler behind the auth forms.
    pub auth: Arc<DemoAuthService>,
    /// External provider behind the login and callback routes.
    pub provider: Arc<dyn AuthProvider>,
    /// Absolute URL of the callback route, handed to the provider.
    pub callback_url: Arc<str>,
}

impl AppState {
    /// Create a new app state from its parts.
    pub fn new(
        auth: DemoAuthService,
        provider: Arc<dyn AuthProvider>,
        callback_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            auth: Arc::new(auth),
            provider,
            callback_url: callback_url.into(),
        }
    }

    /// Build the state described by `config`.
    pub fn from_config(config: &ServerConfig) -> crate::provider::Result<Self> {
        let provider: Arc<dyn AuthProvider> = match &config.auth_url {
            Some(base_url) => Arc::new(HostedAuthProvider::new(HostedAuthConfig {
                base_url: base_url.clone(),
                anon_key: config.auth_anon_key.clone(),
                oauth_provider: config.oauth_provider.clone(),
            })?),
            None => Arc::new(DisabledAuthProvider),
        };

        Ok(Self::new(
            DemoAuthService::new(config.simulated_delay()),
            provider,
            config.callback_url(),
        ))
    }
}
