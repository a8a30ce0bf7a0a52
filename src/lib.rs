//! tokencache - client session cache and authentication API client.
//!
//! This crate bridges an HTTP authentication API to a durable session store:
//! `login`/`register` persist the returned token pair, read predicates answer
//! "is there a session?" without touching the network, and `logout` clears it.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod store;

pub use api::{ApiClient, ApiError, AuthTransport};
pub use auth::AuthService;
pub use config::Config;
pub use models::{AuthResponse, AuthState, LoginCredentials, RegisterCredentials, User};
pub use store::{FileStore, KeychainStore, MemoryStore, SessionStore};
