//! Transcript display configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Column width user turns are right-aligned against.
    pub width: u32,
    pub show_timestamps: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 80,
            show_timestamps: true,
        }
    }
}
