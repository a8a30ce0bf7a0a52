//! Authentication module bridging the HTTP transport to the session store.
//!
//! `AuthService` owns no session state of its own: every predicate reads
//! straight from the injected `SessionStore`, and login/register/logout are
//! the only operations that mutate it.

pub mod service;

pub use service::AuthService;
