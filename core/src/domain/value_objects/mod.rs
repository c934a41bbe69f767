//! Value objects returned by the session services.

pub mod auth_response;

pub use auth_response::AuthResponse;
