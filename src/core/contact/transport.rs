use std::time::Duration;

use async_trait::async_trait;

use super::ContactForm;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("transport unavailable: {0}")]
    Unavailable(String),
    #[error("message rejected: {0}")]
    Rejected(String),
}

/// Delivers a validated contact form somewhere.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<(), TransportError>;
}

/// Stand-in transport: waits a fixed delay, then reports a fixed outcome.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    outcome: Result<(), TransportError>,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            outcome: Ok(()),
        }
    }

    pub fn failing(delay: Duration, error: TransportError) -> Self {
        Self {
            delay,
            outcome: Err(error),
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl Transport for SimulatedTransport {
    async fn send(&self, form: &ContactForm) -> Result<(), TransportError> {
        tracing::debug!(subject = %form.subject, delay = ?self.delay, "simulating message delivery");
        tokio::time::sleep(self.delay).await;
        self.outcome.clone()
    }
}
