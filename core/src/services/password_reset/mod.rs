//! Password reset flow: request, notification, and redemption

mod service;

#[cfg(test)]
mod tests;

pub use service::{PasswordResetConfig, PasswordResetService};
