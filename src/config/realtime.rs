//! Real-time channel configuration

use serde::Deserialize;

use super::error::ValidationError;

const MAX_QUEUE_CAPACITY: usize = 10_000;

/// Queue sizes for the WebSocket fan-out and the session coordinator
#[derive(Debug, Clone, Deserialize)]
pub struct RealtimeConfig {
    /// Outbound messages buffered per connection before new ones are dropped
    #[serde(default = "default_send_queue_capacity")]
    pub send_queue_capacity: usize,

    /// Inbound commands buffered ahead of the session coordinator
    #[serde(default = "default_command_queue_capacity")]
    pub command_queue_capacity: usize,
}

impl RealtimeConfig {
    /// Validate queue sizes
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_capacity(self.send_queue_capacity, "realtime.send_queue_capacity")?;
        check_capacity(self.command_queue_capacity, "realtime.command_queue_capacity")?;
        Ok(())
    }
}

fn check_capacity(value: usize, name: &'static str) -> Result<(), ValidationError> {
    if value == 0 || value > MAX_QUEUE_CAPACITY {
        return Err(ValidationError::InvalidQueueCapacity(name));
    }
    Ok(())
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            send_queue_capacity: default_send_queue_capacity(),
            command_queue_capacity: default_command_queue_capacity(),
        }
    }
}

fn default_send_queue_capacity() -> usize {
    128
}

fn default_command_queue_capacity() -> usize {
    256
}
