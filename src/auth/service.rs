//! Stateless façade over the session store and the authentication transport.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::api::AuthTransport;
use crate::models::{AuthResponse, LoginCredentials, RegisterCredentials};
use crate::store::{keys, SessionStore};

pub struct AuthService<S, T> {
    store: S,
    transport: T,
}

impl<S: SessionStore, T: AuthTransport> AuthService<S, T> {
    pub fn new(store: S, transport: T) -> Self {
        Self { store, transport }
    }

    /// True iff the store holds an access token.
    ///
    /// Presence only: no expiry or signature validation, and the empty
    /// string counts. A store read failure is logged and treated as absent.
    pub fn is_authenticated(&self) -> bool {
        self.read_token(keys::ACCESS_TOKEN).is_some()
    }

    /// The stored access token, or `None` if absent.
    pub fn access_token(&self) -> Option<String> {
        self.read_token(keys::ACCESS_TOKEN)
    }

    /// The stored refresh token, or `None` if absent.
    pub fn refresh_token(&self) -> Option<String> {
        self.read_token(keys::REFRESH_TOKEN)
    }

    /// Authenticate with the API and persist the returned token pair.
    ///
    /// Transport errors propagate unchanged; nothing is written on failure.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        let response = self.transport.login(credentials).await?;
        self.persist_tokens(&response)?;
        info!(user_id = %response.user.id, "Logged in");
        Ok(response)
    }

    /// Register a new account and persist the returned token pair.
    ///
    /// Same persistence contract as `login`.
    pub async fn register(&self, credentials: &RegisterCredentials) -> Result<AuthResponse> {
        let response = self.transport.register(credentials).await?;
        self.persist_tokens(&response)?;
        info!(user_id = %response.user.id, "Registered");
        Ok(response)
    }

    /// Remove both token keys from the store. No server-side invalidation
    /// call is made.
    pub fn logout(&self) -> Result<()> {
        self.store
            .remove(keys::ACCESS_TOKEN)
            .context("Failed to remove access token")?;
        self.store
            .remove(keys::REFRESH_TOKEN)
            .context("Failed to remove refresh token")?;
        info!("Logged out");
        Ok(())
    }

    fn persist_tokens(&self, response: &AuthResponse) -> Result<()> {
        self.store
            .set(keys::ACCESS_TOKEN, &response.access_token)
            .context("Failed to persist access token")?;
        self.store
            .set(keys::REFRESH_TOKEN, &response.refresh_token)
            .context("Failed to persist refresh token")
    }

    fn read_token(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                debug!(key, error = %e, "Failed to read token from session store");
                None
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
