//! MySQL implementation of the RefreshTokenRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tm_core::domain::entities::token::RefreshToken;
use tm_core::errors::DomainError;
use tm_core::repositories::RefreshTokenRepository;

/// MySQL-backed refresh token store
///
/// The opaque token value is the primary key of the `refresh_tokens` table.
/// This table is the source of truth; the Redis cache in front of it holds
/// disposable copies.
pub struct MySqlRefreshTokenRepository {
    pool: MySqlPool,
}

impl MySqlRefreshTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let account_id: String =
            row.try_get("account_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get account_id: {}", e),
            })?;

        Ok(RefreshToken {
            token: row.try_get("token").map_err(|e| DomainError::Internal {
                message: format!("Failed to get token: {}", e),
            })?,
            account_id: Uuid::parse_str(&account_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid account UUID: {}", e),
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
            ip_address: row
                .try_get("ip_address")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get ip_address: {}", e),
                })?,
            user_agent: row
                .try_get("user_agent")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get user_agent: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl RefreshTokenRepository for MySqlRefreshTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                token, account_id, created_at, expires_at, ip_address, user_agent
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&token.token)
            .bind(token.account_id.to_string())
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(&token.ip_address)
            .bind(&token.user_agent)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::Validation {
                        message: "Token already exists".to_string(),
                    }
                }
                _ => DomainError::Internal {
                    message: format!("Failed to save refresh token: {}", e),
                },
            })?;

        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT token, account_id, created_at, expires_at, ip_address, user_agent
            FROM refresh_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find refresh token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_account(&self, account_id: Uuid) -> Result<Vec<RefreshToken>, DomainError> {
        let query = r#"
            SELECT token, account_id, created_at, expires_at, ip_address, user_agent
            FROM refresh_tokens
            WHERE account_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(account_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find account tokens: {}", e),
            })?;

        let mut tokens = Vec::new();
        for row in rows {
            tokens.push(Self::row_to_token(&row)?);
        }

        Ok(tokens)
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        let query = "DELETE FROM refresh_tokens WHERE token = ?";

        let result = sqlx::query(query)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete refresh token: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_account(&self, account_id: Uuid) -> Result<usize, DomainError> {
        let query = "DELETE FROM refresh_tokens WHERE account_id = ?";

        let result = sqlx::query(query)
            .bind(account_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete account tokens: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }

    async fn delete_expired(&self, before: DateTime<Utc>) -> Result<usize, DomainError> {
        let query = "DELETE FROM refresh_tokens WHERE expires_at < ?";

        let result = sqlx::query(query)
            .bind(before)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete expired tokens: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }
}
