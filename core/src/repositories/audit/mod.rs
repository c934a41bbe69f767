pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod noop;

pub use noop::NoOpAuditLogRepository;
pub use r#trait::AuditLogRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockAuditLogRepository;
