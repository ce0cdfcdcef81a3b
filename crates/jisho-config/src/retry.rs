use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_times() -> u32 {
    3
}

fn default_delay_seconds() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total lookup attempts per term
    #[serde(default = "default_times")]
    pub times: u32,
    #[serde(rename = "delaySeconds", default = "default_delay_seconds")]
    pub delay_seconds: f64,
}

impl RetryConfig {
    pub fn delay(&self) -> Duration {
        if self.delay_seconds.is_finite() && self.delay_seconds > 0.0 {
            Duration::from_secs_f64(self.delay_seconds)
        } else {
            Duration::ZERO
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            times: default_times(),
            delay_seconds: default_delay_seconds(),
        }
    }
}
