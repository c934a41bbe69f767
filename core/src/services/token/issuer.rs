//! Signed access token issuance and verification

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::account::Account;
use crate::errors::{DomainResult, TokenError};
use crate::services::clock::Clock;

use super::config::TokenConfig;

/// Claims carried by every access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the account's email address
    pub sub: String,
    /// Issuing service identifier
    pub iss: String,
    /// Issued-at timestamp (Unix seconds)
    pub iat: i64,
    /// Expiry timestamp (Unix seconds)
    pub exp: i64,
}

/// Issues and verifies short-lived signed access tokens
///
/// Tokens are HS256-signed bearer tokens carrying the account email as the
/// subject. Verification is purely cryptographic; no storage lookup is
/// involved, so issued tokens remain valid until expiry even after logout.
pub struct TokenIssuer<K: Clock> {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    lifetime_hours: i64,
    clock: K,
}

impl<K: Clock> TokenIssuer<K> {
    /// Create an issuer from configuration and a clock
    pub fn new(config: &TokenConfig, clock: K) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            issuer: config.issuer.clone(),
            lifetime_hours: config.access_token_lifetime_hours,
            clock,
        }
    }

    /// Issue a signed access token for an account
    ///
    /// # Errors
    /// * `TokenError::TokenGenerationFailed` - Signing failed
    pub fn issue(&self, account: &Account) -> DomainResult<String> {
        let now = self.clock.now();
        let claims = Claims {
            sub: account.email.clone(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(self.lifetime_hours)).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                debug!("Access token signing failed: {}", e);
                TokenError::TokenGenerationFailed
            })?;

        Ok(token)
    }

    /// Verify a token and return the subject email it was issued for
    ///
    /// Returns `None` for any invalid token. Malformed input, a bad
    /// signature, a wrong issuer and an expired token are deliberately
    /// indistinguishable to the caller.
    pub fn verify(&self, token: &str) -> Option<String> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims.sub),
            Err(e) => {
                debug!("Access token rejected: {}", e);
                None
            }
        }
    }
}
