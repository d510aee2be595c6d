//! Generation parameter configuration

use serde::{Deserialize, Serialize};

/// Parameters sent to the backend with every generation request.
///
/// Fixed per deployment; callers cannot override them per request. Each
/// adapter maps these onto its own wire field names (`sampling_enabled` is
/// only carried by the prompt-text contract, as `do_sample`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub sampling_enabled: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 512,
            temperature: 0.7,
            top_p: 0.9,
            sampling_enabled: true,
        }
    }
}
