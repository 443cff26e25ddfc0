//! Delivery collaborator contract.

use chrono::{DateTime, Utc};

/// Delivers an issued passcode to its recipient (email, SMS, ...).
///
/// The passcode flow calls this after a successful save. This crate only
/// assumes the contract; implementations, their retries, and their
/// idempotency are the collaborator's concern.
pub trait PasscodeSender: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send `code` to `to`, along with its expiry and any template
    /// parameters the channel needs.
    fn send(
        &self,
        to: &str,
        code: &str,
        expires_at: DateTime<Utc>,
        params: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;
}
