//! Decision validation configuration

use serde::Deserialize;

use crate::domain::decision::ValidationPolicy;

/// Decision validation configuration
///
/// Controls which decision fields must be present at creation time.
/// Defaults match the domain default: title required, everything else
/// optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_require_title")]
    pub require_title: bool,

    #[serde(default)]
    pub require_intent: bool,

    #[serde(default)]
    pub require_final_choice: bool,

    #[serde(default)]
    pub require_reasoning: bool,
}

impl ValidationConfig {
    /// Builds the domain policy from this configuration.
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            require_title: self.require_title,
            require_intent: self.require_intent,
            require_final_choice: self.require_final_choice,
            require_reasoning: self.require_reasoning,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_title: default_require_title(),
            require_intent: false,
            require_final_choice: false,
            require_reasoning: false,
        }
    }
}

fn default_require_title() -> bool {
    true
}
