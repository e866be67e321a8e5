use serde::{Deserialize, Serialize};
use std::fmt;

// What the results panel is currently showing
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PanelStatus {
    Idle,
    Prompt,
    Processing,
    Completed,
    Error,
}

impl fmt::Display for PanelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            PanelStatus::Idle => "idle",
            PanelStatus::Prompt => "prompt",
            PanelStatus::Processing => "processing",
            PanelStatus::Completed => "completed",
            PanelStatus::Error => "error",
        };
        write!(f, "{}", status_str)
    }
}
