//! Configuration types.

use std::time::Duration;

/// Session engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Delay before a feedback/derived-result message is emitted.
    pub feedback_delay: Duration,
    /// Delay before the next question message is emitted.
    pub question_delay: Duration,
    /// Capacity of the transcript-event broadcast channel.
    pub event_channel_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            feedback_delay: Duration::from_millis(500),
            question_delay: Duration::from_millis(1000),
            event_channel_capacity: 64,
        }
    }
}

impl EngineConfig {
    /// Zero-delay pacing for tests and synchronous drivers.
    pub fn immediate() -> Self {
        Self {
            feedback_delay: Duration::ZERO,
            question_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}
