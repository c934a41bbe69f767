//! Account repository trait defining the interface for credential persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for [`Account`] persistence operations
///
/// The credential store is the aggregate root for accounts. Only the session
/// and password-reset services mutate the password digest; no component
/// bypasses this interface.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The saved account
    /// * `Err(DomainError)` - Save failed (e.g., duplicate email)
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by its email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account registered under this email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Replace the password digest for an account
    ///
    /// # Returns
    /// * `Ok(())` - Digest updated
    /// * `Err(DomainError)` - Account missing or update failed
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), DomainError>;
}
