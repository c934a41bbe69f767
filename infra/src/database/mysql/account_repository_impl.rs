//! MySQL implementation of the AccountRepository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tm_core::domain::entities::account::Account;
use tm_core::errors::DomainError;
use tm_core::repositories::AccountRepository;

/// MySQL-backed account repository
///
/// Accounts live in the `accounts` table with the UUID stored as a
/// CHAR(36) string and a unique index on `email`.
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid account UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (id, name, email, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.name)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                // The unique index on email turns a duplicate registration
                // into a constraint violation.
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::Validation {
                        message: "Email already exists".to_string(),
                    }
                }
                _ => DomainError::Internal {
                    message: format!("Failed to create account: {}", e),
                },
            })?;

        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, name, email, password_hash, created_at
            FROM accounts
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find account by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, name, email, password_hash, created_at
            FROM accounts
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find account by email: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), DomainError> {
        let query = "UPDATE accounts SET password_hash = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(password_hash)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update password: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("account {}", id),
            });
        }

        Ok(())
    }
}
