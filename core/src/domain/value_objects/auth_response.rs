//! Authentication response returned to the presentation layer.

use serde::{Deserialize, Serialize};

/// Successful authentication result
///
/// Returned by login, register, and refresh. On refresh, `refresh_token`
/// carries the same value the caller presented; only the access token is
/// reissued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Account display name
    pub name: String,

    /// Short-lived signed access token
    pub access_token: String,

    /// Long-lived opaque refresh token
    pub refresh_token: String,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(
        name: impl Into<String>,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_serialization() {
        let response = AuthResponse::new("Alice", "access", "refresh");
        let json = serde_json::to_string(&response).unwrap();
        let deserialized: AuthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response, deserialized);
    }
}
