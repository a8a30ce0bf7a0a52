//! Authentication request and response types.
//!
//! Wire field names are camelCase (`completeName`, `accessToken`); the
//! structs below carry explicit renames so the Rust side stays snake_case.

use serde::{Deserialize, Serialize};

/// An authenticated account. Replaced wholesale on re-login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(rename = "completeName")]
    pub complete_name: String,
    /// Optional on the wire: may be absent or explicitly null.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Login request input. Transient, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Registration request input. Transient, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterCredentials {
    pub email: String,
    pub password: String,
    #[serde(rename = "completeName")]
    pub complete_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payload of a successful login/register call - the boundary object between
/// the transport and session state.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    pub user: User,
}

/// UI-facing view of the current session.
///
/// `is_authenticated` is derived from token presence, not independently
/// settable. Fields are private so the invariant holds by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    user: Option<User>,
    access_token: Option<String>,
    is_loading: bool,
}

impl AuthState {
    /// No session, no request in flight.
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// A login/register request is in flight.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// An established session.
    pub fn authenticated(user: User, access_token: String) -> Self {
        Self {
            user: Some(user),
            access_token: Some(access_token),
            is_loading: false,
        }
    }

    /// True iff an access token is held. Presence only - no expiry or
    /// well-formedness check, and the empty string counts.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}

// ============================================================================
// Tests
// ============================================================================
