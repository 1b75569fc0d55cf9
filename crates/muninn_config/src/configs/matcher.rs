use serde::{Deserialize, Serialize};

/// Thresholds for labeling anchors against ground-truth boxes.
///
/// Anchors with an IoU overlap below the background threshold are labeled
/// background; anchors between the two thresholds are ignored during
/// training.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    /// IoU overlap ratio for foreground anchors.
    pub iou_foreground_threshold: f32,
    /// IoU overlap ratio for background anchors.
    pub iou_background_threshold: f32,
    /// Label assigned to anchors that are neither foreground nor background.
    pub ignore_index: i32,
    /// Label assigned to background anchors.
    pub background_index: i32,
    /// Weights on `(dx, dy, dw, dh)` for normalizing anchor regression
    /// targets.
    pub bbox_reg_weights: [f32; 4],
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            iou_foreground_threshold: 0.4,
            iou_background_threshold: 0.5,
            ignore_index: -2,
            background_index: -1,
            bbox_reg_weights: [1.0, 1.0, 1.0, 1.0],
        }
    }
}
