//! Outbound email delivery implementations

pub mod http_mailer;
pub mod mock_email;

pub use http_mailer::HttpEmailNotifier;
pub use mock_email::MockEmailService;

/// Mask an email address for logging
///
/// Shows the first character of the local part and the full domain.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{}***@{}", first, domain),
            None => "***".to_string(),
        },
        None => "***".to_string(),
    }
}
