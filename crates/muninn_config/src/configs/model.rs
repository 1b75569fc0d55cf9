use serde::{Deserialize, Serialize};

/// Backbone network used to compute the feature pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backbone {
    Resnet18,
    Resnet34,
    Resnet50,
    Resnet101,
    Resnet152,
}

/// Model selection and inference thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Number of output classes, excluding the background class.
    pub num_classes: usize,
    pub backbone: Backbone,
    /// Load ImageNet weights into the backbone.
    pub pretrained_backbone: bool,
    /// Prior foreground probability used to bias the classifier logits at
    /// the start of training, for stability under heavy class imbalance.
    pub prior: f32,
    /// Keep the backbone's batch-norm statistics frozen.
    pub freeze_batchnorm: bool,
    /// Boxes overlapping a kept box with IoU at or above this are suppressed.
    pub nms_threshold: f32,
    /// Minimum classification score for a detection to survive
    /// postprocessing.
    pub score_threshold: f32,
    pub max_detections_per_image: usize,
    pub focal_loss_gamma: f32,
    pub focal_loss_alpha: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            num_classes: 80,
            backbone: Backbone::Resnet18,
            pretrained_backbone: true,
            prior: 0.01,
            freeze_batchnorm: true,
            nms_threshold: 0.5,
            score_threshold: 0.05,
            max_detections_per_image: 500,
            focal_loss_gamma: 2.0,
            focal_loss_alpha: 0.25,
        }
    }
}
