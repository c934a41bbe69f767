//! Mock implementation of PasswordResetRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::reset::PasswordResetToken;
use crate::errors::DomainError;

use super::r#trait::PasswordResetRepository;

/// In-memory password reset repository for tests
pub struct MockPasswordResetRepository {
    tokens: Arc<RwLock<HashMap<String, PasswordResetToken>>>,
}

impl MockPasswordResetRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored tokens, expired or not
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }
}

impl Default for MockPasswordResetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordResetRepository for MockPasswordResetRepository {
    async fn save(&self, token: PasswordResetToken) -> Result<PasswordResetToken, DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<PasswordResetToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }

    async fn delete_by_email(&self, email: &str) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| t.email != email);
        Ok(before - tokens.len())
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(token).is_some())
    }

    async fn delete_expired(&self, before: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let initial = tokens.len();
        tokens.retain(|_, t| t.expires_at >= before);
        Ok(initial - tokens.len())
    }
}
