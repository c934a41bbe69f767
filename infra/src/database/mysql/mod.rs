//! MySQL repository implementations using SQLx

pub mod account_repository_impl;
pub mod reset_repository_impl;
pub mod token_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use reset_repository_impl::MySqlPasswordResetRepository;
pub use token_repository_impl::MySqlRefreshTokenRepository;
