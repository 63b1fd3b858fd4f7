// src/infrastructure/latency.rs
use std::time::Duration;
use tracing::debug;

/// Fixed delay standing in for a network round-trip.
///
/// Waiting cannot be cancelled; callers treat the work as succeeded once it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatedLatency {
    duration: Duration,
}

impl SimulatedLatency {
    pub fn from_millis(millis: u64) -> Self {
        Self {
            duration: Duration::from_millis(millis),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn wait(&self) {
        if self.duration.is_zero() {
            return;
        }
        debug!(delay_ms = self.duration.as_millis() as u64, "Simulating latency");
        std::thread::sleep(self.duration);
    }
}
