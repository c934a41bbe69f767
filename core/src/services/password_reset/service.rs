//! Password reset service implementation

use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};

use crate::domain::entities::audit::{AuditEvent, AuditEventKind};
use crate::domain::entities::reset::PasswordResetToken;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::account::AccountRepository;
use crate::repositories::audit::AuditLogRepository;
use crate::repositories::reset::PasswordResetRepository;
use crate::repositories::token::RefreshTokenRepository;
use crate::services::clock::Clock;
use crate::services::hasher::PasswordHasher;
use crate::services::notifier::EmailNotifier;
use crate::services::revocation::RevocationCoordinator;
use crate::services::token::{RefreshTokenManager, TokenCache};
use tm_shared::config::AuthConfig;

/// Configuration for the password reset flow
#[derive(Debug, Clone)]
pub struct PasswordResetConfig {
    /// Reset token lifetime in minutes
    pub token_lifetime_minutes: i64,
    /// Base URL the reset link points at
    pub frontend_url: String,
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            token_lifetime_minutes: 30,
            frontend_url: "http://localhost:4200".to_string(),
        }
    }
}

impl PasswordResetConfig {
    /// Reset token lifetime as a duration
    pub fn token_lifetime(&self) -> Duration {
        Duration::minutes(self.token_lifetime_minutes)
    }
}

impl From<&AuthConfig> for PasswordResetConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            token_lifetime_minutes: config.reset_token_lifetime_minutes,
            frontend_url: config.frontend_url.clone(),
        }
    }
}

/// Drives the request and redeem halves of a password reset
///
/// A reset token is single-use, time-boxed, and at most one exists per
/// email. Redemption replaces the password digest, burns the token, and
/// revokes every session of the account.
pub struct PasswordResetService<A, P, R, C, K, H, N, L>
where
    A: AccountRepository,
    P: PasswordResetRepository,
    R: RefreshTokenRepository,
    C: TokenCache,
    K: Clock,
    H: PasswordHasher,
    N: EmailNotifier,
    L: AuditLogRepository,
{
    accounts: Arc<A>,
    resets: Arc<P>,
    revocation: RevocationCoordinator<R, C, K>,
    hasher: Arc<H>,
    notifier: Arc<N>,
    audit_log: Arc<L>,
    clock: K,
    config: PasswordResetConfig,
}

impl<A, P, R, C, K, H, N, L> PasswordResetService<A, P, R, C, K, H, N, L>
where
    A: AccountRepository,
    P: PasswordResetRepository,
    R: RefreshTokenRepository,
    C: TokenCache,
    K: Clock,
    H: PasswordHasher,
    N: EmailNotifier,
    L: AuditLogRepository,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        accounts: Arc<A>,
        resets: Arc<P>,
        tokens: Arc<RefreshTokenManager<R, C, K>>,
        hasher: Arc<H>,
        notifier: Arc<N>,
        audit_log: Arc<L>,
        clock: K,
        config: PasswordResetConfig,
    ) -> Self {
        let revocation = RevocationCoordinator::new(tokens);
        Self {
            accounts,
            resets,
            revocation,
            hasher,
            notifier,
            audit_log,
            clock,
            config,
        }
    }

    /// Issue a reset token for an email and send the reset link
    ///
    /// Any prior token for the address is replaced. Notification failures
    /// are logged and dropped; the token stays valid either way.
    ///
    /// # Errors
    /// * `AuthError::UserNotFound` - No account under this email
    pub async fn request_reset(&self, email: &str) -> DomainResult<()> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.resets.delete_by_email(email).await?;

        let now = self.clock.now();
        let token = PasswordResetToken::new(email, now, self.config.token_lifetime());
        let token = self.resets.save(token).await?;

        let link = format!(
            "{}/reset-password?token={}",
            self.config.frontend_url.trim_end_matches('/'),
            token.token
        );
        let body = format!(
            "Hello, {}!\n\n\
             You requested a password reset. Click the link below to choose a new password:\n\n\
             {}\n\n\
             This link expires in {} minutes. If you did not request a reset, you can ignore \
             this email.",
            account.name, link, self.config.token_lifetime_minutes
        );

        if let Err(e) = self
            .notifier
            .send(email, "Password Reset Request", &body)
            .await
        {
            warn!("Reset email delivery failed: {}", e);
        }

        info!(account_id = %account.id, "Password reset requested");
        Ok(())
    }

    /// Redeem a reset token, replacing the password and revoking sessions
    ///
    /// The token is burned on success. An expired token is removed as soon
    /// as the expiry is observed and cannot be retried.
    ///
    /// # Errors
    /// * `ValidationError::PasswordMismatch` - Confirmation does not match
    /// * `AuthError::ResetTokenInvalid` - Unknown token or vanished account
    /// * `AuthError::ResetTokenExpired` - Token lifetime elapsed
    pub async fn redeem(
        &self,
        token: &str,
        new_password: &str,
        confirm_password: &str,
        ip_address: Option<String>,
    ) -> DomainResult<()> {
        if new_password != confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }

        let found = self
            .resets
            .find_by_token(token)
            .await?
            .ok_or(AuthError::ResetTokenInvalid)?;

        let now = self.clock.now();
        if found.is_expired(now) {
            self.resets.delete_by_token(token).await?;
            return Err(AuthError::ResetTokenExpired.into());
        }

        let account = self
            .accounts
            .find_by_email(&found.email)
            .await?
            .ok_or(AuthError::ResetTokenInvalid)?;

        let digest = self.hasher.hash(new_password)?;
        self.accounts.update_password(account.id, &digest).await?;
        self.resets.delete_by_token(token).await?;
        self.revocation.on_password_reset(account.id).await?;

        let event = AuditEvent::new(
            AuditEventKind::PasswordReset,
            &account,
            ip_address,
            None,
            now,
        );
        if let Err(e) = self.audit_log.record(&event).await {
            warn!("Audit write failed: {}", e);
        }

        Ok(())
    }

    /// Purge reset tokens that expired before now
    pub async fn purge_expired(&self) -> DomainResult<usize> {
        let removed = self.resets.delete_expired(self.clock.now()).await?;
        if removed > 0 {
            info!(count = removed, "Purged expired reset tokens");
        }
        Ok(removed)
    }
}
