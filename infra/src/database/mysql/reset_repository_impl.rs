//! MySQL implementation of the PasswordResetRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use tm_core::domain::entities::reset::PasswordResetToken;
use tm_core::errors::DomainError;
use tm_core::repositories::PasswordResetRepository;

/// MySQL-backed password reset token store
pub struct MySqlPasswordResetRepository {
    pool: MySqlPool,
}

impl MySqlPasswordResetRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<PasswordResetToken, DomainError> {
        Ok(PasswordResetToken {
            token: row.try_get("token").map_err(|e| DomainError::Internal {
                message: format!("Failed to get token: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl PasswordResetRepository for MySqlPasswordResetRepository {
    async fn save(&self, token: PasswordResetToken) -> Result<PasswordResetToken, DomainError> {
        let query = r#"
            INSERT INTO password_reset_tokens (token, email, created_at, expires_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&token.token)
            .bind(&token.email)
            .bind(token.created_at)
            .bind(token.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to save reset token: {}", e),
            })?;

        Ok(token)
    }

    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<PasswordResetToken>, DomainError> {
        let query = r#"
            SELECT token, email, created_at, expires_at
            FROM password_reset_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find reset token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_email(&self, email: &str) -> Result<usize, DomainError> {
        let query = "DELETE FROM password_reset_tokens WHERE email = ?";

        let result = sqlx::query(query)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete reset tokens by email: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        let query = "DELETE FROM password_reset_tokens WHERE token = ?";

        let result = sqlx::query(query)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete reset token: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self, before: DateTime<Utc>) -> Result<usize, DomainError> {
        let query = "DELETE FROM password_reset_tokens WHERE expires_at < ?";

        let result = sqlx::query(query)
            .bind(before)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete expired reset tokens: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }
}
