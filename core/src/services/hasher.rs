//! Password hashing capability consumed by the session and reset services.

use crate::errors::DomainError;

/// Pluggable password hashing capability
///
/// The digest format and algorithm are an infrastructure concern; this core
/// only stores and compares digests through this interface.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a storable digest
    fn hash(&self, plain: &str) -> Result<String, DomainError>;

    /// Verify a plaintext password against a stored digest
    fn verify(&self, plain: &str, digest: &str) -> Result<bool, DomainError>;
}
