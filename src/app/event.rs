use crossterm::event::Event as CrosstermEvent;

/// Ties a scheduled gift-send completion to the submission that started it.
pub type DeliveryToken = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The fake gift-send timer fired
    GiftDeliveryElapsed { token: DeliveryToken },

    /// Tick for UI refresh
    Tick,
}
