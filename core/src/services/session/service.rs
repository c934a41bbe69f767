//! Session service implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::account::Account;
use crate::domain::entities::audit::{AuditEvent, AuditEventKind};
use crate::domain::value_objects::auth_response::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
use crate::repositories::account::AccountRepository;
use crate::repositories::audit::AuditLogRepository;
use crate::repositories::token::RefreshTokenRepository;
use crate::services::clock::Clock;
use crate::services::hasher::PasswordHasher;
use crate::services::revocation::RevocationCoordinator;
use crate::services::token::{RefreshTokenManager, TokenCache, TokenIssuer};

/// Facade over credential verification and token lifecycle
///
/// The single entry point for login, registration, refresh, and logout.
/// Composes the account repository, the password hasher, the token issuer,
/// and the refresh-token manager; revocation paths go through the
/// [`RevocationCoordinator`] so cache eviction is never skipped.
pub struct SessionService<A, R, C, K, H, L>
where
    A: AccountRepository,
    R: RefreshTokenRepository,
    C: TokenCache,
    K: Clock,
    H: PasswordHasher,
    L: AuditLogRepository,
{
    accounts: Arc<A>,
    tokens: Arc<RefreshTokenManager<R, C, K>>,
    revocation: RevocationCoordinator<R, C, K>,
    issuer: TokenIssuer<K>,
    hasher: Arc<H>,
    audit_log: Arc<L>,
    clock: K,
}

impl<A, R, C, K, H, L> SessionService<A, R, C, K, H, L>
where
    A: AccountRepository,
    R: RefreshTokenRepository,
    C: TokenCache,
    K: Clock,
    H: PasswordHasher,
    L: AuditLogRepository,
{
    pub fn new(
        accounts: Arc<A>,
        tokens: Arc<RefreshTokenManager<R, C, K>>,
        issuer: TokenIssuer<K>,
        hasher: Arc<H>,
        audit_log: Arc<L>,
        clock: K,
    ) -> Self {
        let revocation = RevocationCoordinator::new(tokens.clone());
        Self {
            accounts,
            tokens,
            revocation,
            issuer,
            hasher,
            audit_log,
            clock,
        }
    }

    /// Authenticate with email and password, establishing a new session
    ///
    /// Any prior session for the account is replaced. An unknown email and a
    /// wrong password both fail with `InvalidCredentials`; the two cases are
    /// indistinguishable to the caller.
    ///
    /// # Errors
    /// * `AuthError::InvalidCredentials` - Unknown email or wrong password
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> DomainResult<AuthResponse> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let refresh_token = self
            .tokens
            .create(account.id, ip_address.clone(), user_agent.clone())
            .await?;
        let access_token = self.issuer.issue(&account)?;

        info!(account_id = %account.id, "Session established");
        self.audit(AuditEventKind::Login, &account, ip_address, user_agent)
            .await;

        Ok(AuthResponse::new(
            account.name,
            access_token,
            refresh_token.token,
        ))
    }

    /// Register a new account and establish its first session
    ///
    /// # Errors
    /// * `ValidationError::PasswordMismatch` - Confirmation does not match
    /// * `AuthError::EmailAlreadyRegistered` - Email is taken
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> DomainResult<AuthResponse> {
        if password != confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }

        if self.accounts.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = self.hasher.hash(password)?;
        let account = Account::new(name, email, password_hash, self.clock.now());
        let account = self.accounts.create(account).await?;

        let refresh_token = self
            .tokens
            .create(account.id, ip_address.clone(), user_agent.clone())
            .await?;
        let access_token = self.issuer.issue(&account)?;

        info!(account_id = %account.id, "Account registered");
        self.audit(AuditEventKind::Register, &account, ip_address, user_agent)
            .await;

        Ok(AuthResponse::new(
            account.name,
            access_token,
            refresh_token.token,
        ))
    }

    /// Exchange a live refresh token for a fresh access token
    ///
    /// The refresh token itself is returned unchanged; it is not rotated.
    ///
    /// # Errors
    /// * `TokenError::InvalidRefreshToken` - Unknown, expired, or orphaned token
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthResponse> {
        let token = self
            .tokens
            .validate(refresh_token)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        // The account can disappear between token creation and refresh;
        // an orphaned token is as dead as an unknown one.
        let account = self
            .accounts
            .find_by_id(token.account_id)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        let access_token = self.issuer.issue(&account)?;

        self.audit(
            AuditEventKind::TokenRefresh,
            &account,
            token.ip_address.clone(),
            token.user_agent.clone(),
        )
        .await;

        Ok(AuthResponse::new(
            account.name,
            access_token,
            token.token,
        ))
    }

    /// End the session identified by a refresh token
    ///
    /// Revoking an unknown token is not an error; the session is gone
    /// either way. Outstanding access tokens stay valid until expiry.
    pub async fn logout(&self, account: &Account, refresh_token: &str) -> DomainResult<()> {
        self.revocation.logout(refresh_token).await?;
        self.audit(AuditEventKind::Logout, account, None, None).await;
        Ok(())
    }

    /// End every session belonging to an account
    ///
    /// Returns the number of sessions revoked.
    pub async fn logout_all(&self, account: &Account) -> DomainResult<usize> {
        let removed = self.revocation.logout_all(account.id).await?;
        self.audit(AuditEventKind::LogoutAll, account, None, None)
            .await;
        Ok(removed)
    }

    /// Resolve an access token to the account it was issued for
    ///
    /// # Errors
    /// * `DomainError::Unauthorized` - Invalid token or vanished account
    pub async fn authenticate(&self, access_token: &str) -> DomainResult<Account> {
        let email = self
            .issuer
            .verify(access_token)
            .ok_or(DomainError::Unauthorized)?;

        self.accounts
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Unauthorized)
    }

    /// Record an audit event, logging and dropping any sink failure
    async fn audit(
        &self,
        kind: AuditEventKind,
        account: &Account,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) {
        let event = AuditEvent::new(kind, account, ip_address, user_agent, self.clock.now());
        if let Err(e) = self.audit_log.record(&event).await {
            warn!(kind = kind.as_str(), "Audit write failed: {}", e);
        }
    }
}
