use std::time::Duration;

/// Batch-size confirmation and pacing for opening URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Batches at least this large need confirmation; 0 disables the prompt.
    pub batch_warning_threshold: u32,
    pub inter_open_delay_ms: u64,
}

impl DispatchConfig {
    pub fn requires_confirmation(&self, count: usize) -> bool {
        self.batch_warning_threshold != 0 && count >= self.batch_warning_threshold as usize
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.inter_open_delay_ms)
    }
}

pub fn confirmation_message(count: usize) -> String {
    format!("You are about to open {count} URLs. Continue?")
}
