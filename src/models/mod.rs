//! Data models for authentication.
//!
//! This module contains the data structures exchanged with the
//! authentication API and consumed by UI layers:
//!
//! - `User`: Account identity returned alongside tokens
//! - `LoginCredentials`, `RegisterCredentials`: Transient request inputs
//! - `AuthResponse`: The login/register response payload (token pair + user)
//! - `AuthState`: UI-facing view of the current session

pub mod auth;

pub use auth::{AuthResponse, AuthState, LoginCredentials, RegisterCredentials, User};
