//! Bcrypt implementation of the password hashing capability

use tm_core::errors::DomainError;
use tm_core::services::hasher::PasswordHasher;

/// Bcrypt-backed password hasher
///
/// Digests carry their own salt and cost, so verification needs no
/// configuration and old digests keep verifying after a cost bump.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit work factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, DomainError> {
        bcrypt::hash(plain, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool, DomainError> {
        bcrypt::verify(plain, digest).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}
