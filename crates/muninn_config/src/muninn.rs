use anchors::AnchorConfig;
use serde::{Deserialize, Serialize};

use crate::configs::matcher::MatcherConfig;
use crate::configs::model::ModelConfig;
use crate::configs::transform::TransformConfig;
use crate::Config;

/// Root configuration for the detection stack.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MuninnConfig {
    pub transform: TransformConfig,
    pub anchors: AnchorConfig,
    pub matcher: MatcherConfig,
    pub model: ModelConfig,
}

impl Config for MuninnConfig {
    const PATH: &'static str = "muninn.toml";
}
