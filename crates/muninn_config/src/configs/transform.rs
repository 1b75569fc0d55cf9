use serde::{Deserialize, Serialize};

/// Input normalization and rescaling applied before the backbone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    /// Per-channel mean used for input normalization.
    pub mean: [f32; 3],
    /// Per-channel standard deviation used for input normalization.
    pub std: [f32; 3],
    /// Size the shorter image edge is rescaled to before feeding the backbone.
    pub min_image_size: u32,
    /// Upper bound on the longer image edge after rescaling.
    pub max_image_size: u32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        TransformConfig {
            mean: [0.485, 0.456, 0.406],
            std: [0.229, 0.224, 0.225],
            min_image_size: 600,
            max_image_size: 1333,
        }
    }
}
