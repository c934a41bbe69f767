//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::r#trait::AccountRepository;

/// In-memory account repository for tests
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with an existing account
    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(account.id, account);
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Validation {
                message: "Email already exists".to_string(),
            });
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;

        match accounts.get_mut(&id) {
            Some(account) => {
                account.password_hash = password_hash.to_string();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: format!("account {}", id),
            }),
        }
    }
}
