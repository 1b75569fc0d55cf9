use serde::{Deserialize, Serialize};

/// Anchor generation parameters for every level of the feature pyramid.
///
/// The defaults place 9 anchors at every grid cell of a five-level pyramid:
/// three octave-scaled sizes per level, each at aspect ratios 1:2, 1:1 and
/// 2:1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnchorConfig {
    /// Anchor sizes (square root of anchor area) in absolute pixels w.r.t.
    /// the network input, one list per pyramid level.
    pub sizes: Vec<Vec<f32>>,
    /// Aspect ratios (height/width), shared by every level.
    pub aspect_ratios: Vec<f32>,
    /// Stride of each pyramid level relative to the input image.
    pub strides: Vec<usize>,
    /// Fraction of the stride by which every anchor center is displaced from
    /// the top-left corner of its grid cell. Must lie in `[0, 1)`.
    pub offset: f32,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        AnchorConfig {
            // Areas of 32² to 512² on pyramid levels P3 to P7, with two extra
            // intermediate octave scales per level.
            sizes: [32.0f32, 64.0, 128.0, 256.0, 512.0]
                .iter()
                .map(|&x| vec![x, x * 2f32.powf(1.0 / 3.0), x * 2f32.powf(2.0 / 3.0)])
                .collect(),
            aspect_ratios: vec![0.5, 1.0, 2.0],
            strides: vec![8, 16, 32, 64, 128],
            offset: 0.0,
        }
    }
}
