//! HTTP client module for the authentication API.
//!
//! This module provides the `AuthTransport` trait - the seam between the
//! auth service and the network - and `ApiClient`, its reqwest-backed
//! implementation against the JSON login/register endpoints.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

use async_trait::async_trait;

use crate::models::{AuthResponse, LoginCredentials, RegisterCredentials};

/// Network collaborator for authentication calls.
///
/// Implementations perform a single request per call: no retry, no backoff.
#[async_trait]
pub trait AuthTransport {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError>;

    async fn register(&self, credentials: &RegisterCredentials)
        -> Result<AuthResponse, ApiError>;
}
