//! Session facade over credential checks and token lifecycle

mod service;

#[cfg(test)]
mod tests;

pub use service::SessionService;
