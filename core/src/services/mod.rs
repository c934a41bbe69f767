//! Business services containing domain logic and use cases.

pub mod clock;
pub mod hasher;
pub mod notifier;
pub mod password_reset;
pub mod revocation;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use hasher::PasswordHasher;
pub use notifier::EmailNotifier;
pub use password_reset::{PasswordResetConfig, PasswordResetService};
pub use revocation::RevocationCoordinator;
pub use session::SessionService;
pub use token::{
    CacheError, NoOpTokenCache, RefreshTokenManager, TokenCache, TokenConfig, TokenIssuer,
};
