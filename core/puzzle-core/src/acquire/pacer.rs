use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Gate that keeps at least `delay` between one recorded response and the
/// next request. Built on `tokio::time`, so a paused test runtime drives it.
#[derive(Debug)]
pub struct Pacer {
    delay: Duration,
    next_allowed: Option<Instant>,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, next_allowed: None }
    }

    /// Waits until the next request may be issued. Returns immediately
    /// before the first `mark`.
    pub async fn ready(&self) {
        if let Some(at) = self.next_allowed {
            sleep_until(at).await;
        }
    }

    /// Records that a response was handled; the next `ready` waits `delay` from now.
    pub fn mark(&mut self) {
        self.next_allowed = Some(Instant::now() + self.delay);
    }
}
