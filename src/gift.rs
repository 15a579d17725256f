//! Simulated gift delivery.
//!
//! Nothing is ever really sent: a submitted gift card schedules a short
//! timer, and the completion event carries the delivery token so a dismissed
//! form can ignore a late timer.

use crate::app::event::{AppEvent, DeliveryToken};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GiftError {
    #[error("enter a valid recipient e-mail (like name@example.com)")]
    InvalidEmail,
}

/// What the recipient would get, if this were real.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftCard {
    pub recipient_name: String,
    pub recipient_email: String,
    pub wish: String,
}

/// Accepts `local@domain.tld` shapes: a non-empty local part without
/// whitespace, a single `@`, and a domain whose dot is neither the first nor
/// the last character. No trimming; surrounding whitespace is a rejection.
pub fn validate_email(email: &str) -> Result<(), GiftError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(GiftError::InvalidEmail);
    };
    if local.is_empty() || local.chars().any(|c| c.is_whitespace()) {
        return Err(GiftError::InvalidEmail);
    }
    if domain.is_empty() || domain.chars().any(|c| c.is_whitespace() || c == '@') {
        return Err(GiftError::InvalidEmail);
    }
    // '.' is one byte, so byte positions line up with char boundaries here.
    let has_interior_dot = domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len());
    if !has_interior_dot {
        return Err(GiftError::InvalidEmail);
    }
    Ok(())
}

/// Schedules fake gift deliveries and reports back over the event channel.
pub struct DeliveryManager {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    delay: Duration,
}

impl DeliveryManager {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>, delay: Duration) -> Self {
        Self { event_tx, delay }
    }

    /// Start the send animation timer for a submitted gift card. The handler
    /// decides on arrival whether the token is still current.
    pub fn schedule(&self, token: DeliveryToken, card: GiftCard) {
        let event_tx = self.event_tx.clone();
        let delay = self.delay;
        tracing::debug!(
            token,
            recipient = %card.recipient_email,
            delay_ms = delay.as_millis() as u64,
            "gift delivery scheduled"
        );
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = event_tx.send(AppEvent::GiftDeliveryElapsed { token });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert_eq!(validate_email("a@b.co"), Ok(()));
        assert_eq!(validate_email("user@mail.example.org"), Ok(()));
        assert_eq!(validate_email("first.last@sub.domain.io"), Ok(()));
        // Consecutive dots still leave an interior dot, as the prototype allowed.
        assert_eq!(validate_email("a@b..c"), Ok(()));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!(validate_email(""), Err(GiftError::InvalidEmail));
        assert_eq!(validate_email("not-an-email"), Err(GiftError::InvalidEmail));
        assert_eq!(validate_email("@b.co"), Err(GiftError::InvalidEmail));
        assert_eq!(validate_email("a@"), Err(GiftError::InvalidEmail));
        assert_eq!(validate_email("a@bco"), Err(GiftError::InvalidEmail));
        assert_eq!(validate_email("a@b."), Err(GiftError::InvalidEmail));
        assert_eq!(validate_email("a@.co"), Err(GiftError::InvalidEmail));
        assert_eq!(validate_email("a@b@c.d"), Err(GiftError::InvalidEmail));
        assert_eq!(validate_email("a b@c.d"), Err(GiftError::InvalidEmail));
        assert_eq!(validate_email(" a@b.co"), Err(GiftError::InvalidEmail));
        assert_eq!(validate_email("a@b.co "), Err(GiftError::InvalidEmail));
    }

    #[tokio::test]
    async fn scheduled_delivery_fires_with_its_token() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = DeliveryManager::new(tx, Duration::from_millis(5));
        manager.schedule(
            7,
            GiftCard {
                recipient_name: "Sam".to_string(),
                recipient_email: "sam@example.org".to_string(),
                wish: String::new(),
            },
        );
        let event = rx.recv().await;
        assert!(matches!(
            event,
            Some(AppEvent::GiftDeliveryElapsed { token: 7 })
        ));
    }
}
