use itertools::iproduct;
use ndarray::{concatenate, stack, Array1, Array2, Axis};

use crate::broadcast::LevelParams;
use crate::config::AnchorConfig;
use crate::error::{Error, Result};
use crate::grid::grid_offsets;

/// Generates dense anchor boxes for every level of a feature pyramid.
///
/// The canonical per-cell anchors are synthesized once at construction and
/// frozen; [`generate`](AnchorGenerator::generate) only shifts and tiles them
/// across the grid implied by the runtime feature map shapes. Nothing is
/// mutated after construction, so a shared generator can serve concurrent
/// callers without locking.
#[derive(Debug, Clone)]
pub struct AnchorGenerator {
    strides: Vec<usize>,
    offset: f32,
    cell_anchors: Vec<Array2<f32>>,
}

impl AnchorGenerator {
    /// Create a generator for a pyramid with one level per stride.
    ///
    /// `sizes` are the square roots of anchor areas in input-image pixels and
    /// `aspect_ratios` are height/width ratios; both are broadcast to the
    /// number of levels. `offset` displaces every anchor center from the
    /// top-left corner of its grid cell by that fraction of the stride and
    /// must lie in `[0, 1)`.
    pub fn new(
        sizes: LevelParams,
        aspect_ratios: LevelParams,
        strides: Vec<usize>,
        offset: f32,
    ) -> Result<Self> {
        if strides.is_empty() {
            return Err(Error::EmptyParameter { name: "strides" });
        }
        if !(0.0..1.0).contains(&offset) {
            return Err(Error::Offset { offset });
        }

        let num_levels = strides.len();
        let sizes = sizes.broadcast(num_levels, "sizes")?;
        let aspect_ratios = aspect_ratios.broadcast(num_levels, "aspect_ratios")?;

        let cell_anchors = sizes
            .iter()
            .zip(&aspect_ratios)
            .map(|(sizes, ratios)| cell_anchors(sizes, ratios))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            levels = num_levels,
            per_cell = cell_anchors[0].nrows(),
            "froze cell anchors for every pyramid level"
        );

        Ok(AnchorGenerator {
            strides,
            offset,
            cell_anchors,
        })
    }

    /// Create a generator from a configuration section.
    pub fn from_config(config: &AnchorConfig) -> Result<Self> {
        Self::new(
            LevelParams::PerLevel(config.sizes.clone()),
            LevelParams::Shared(config.aspect_ratios.clone()),
            config.strides.clone(),
            config.offset,
        )
    }

    /// Number of pyramid levels this generator was built for.
    pub fn num_levels(&self) -> usize {
        self.strides.len()
    }

    /// Number of anchors placed at every grid cell, per pyramid level.
    pub fn num_cell_anchors(&self) -> Vec<usize> {
        self.cell_anchors.iter().map(|cell| cell.nrows()).collect()
    }

    /// Stride of each pyramid level relative to the input image.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Fraction of the stride by which every anchor center is displaced.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Generate anchors for the given per-level feature map shapes.
    ///
    /// `grid_sizes` holds one `(height, width)` pair per pyramid level, in
    /// level order. Each level yields `height * width * num_cell_anchors`
    /// boxes in absolute input-image pixel coordinates.
    pub fn generate(&self, grid_sizes: &[(usize, usize)]) -> Result<PyramidAnchors> {
        if grid_sizes.len() != self.strides.len() {
            return Err(Error::GridCount {
                got: grid_sizes.len(),
                expected: self.strides.len(),
            });
        }

        let levels = grid_sizes
            .iter()
            .zip(&self.strides)
            .zip(&self.cell_anchors)
            .map(|((&size, &stride), cell)| {
                let (shift_x, shift_y) = grid_offsets(size, stride, self.offset);
                tile(cell, &shift_x, &shift_y)
            })
            .collect();

        Ok(PyramidAnchors { levels })
    }
}

impl Default for AnchorGenerator {
    fn default() -> Self {
        Self::from_config(&AnchorConfig::default())
            .expect("default anchor configuration is valid")
    }
}

/// Synthesize the canonical anchors for one pyramid level, centered at the
/// origin in `(x0, y0, x1, y1)` format.
///
/// Size-major, aspect-ratio-minor ordering; downstream heads index the
/// per-location anchors in exactly this order. Every box has area `size²`
/// regardless of its aspect ratio.
fn cell_anchors(sizes: &[f32], aspect_ratios: &[f32]) -> Result<Array2<f32>> {
    let mut boxes = Vec::with_capacity(sizes.len() * aspect_ratios.len() * 4);
    for (size, ratio) in iproduct!(sizes.iter().copied(), aspect_ratios.iter().copied()) {
        if size <= 0.0 {
            return Err(Error::NonPositive {
                kind: "size",
                value: size,
            });
        }
        if ratio <= 0.0 {
            return Err(Error::NonPositive {
                kind: "aspect ratio",
                value: ratio,
            });
        }

        // Arithmetic in f64; the stored anchors are f32 like the feature maps.
        let area = f64::from(size) * f64::from(size);
        let w = (area / f64::from(ratio)).sqrt();
        let h = f64::from(ratio) * w;

        let (x1, y1) = ((w / 2.0) as f32, (h / 2.0) as f32);
        boxes.extend_from_slice(&[-x1, -y1, x1, y1]);
    }

    let count = boxes.len() / 4;
    Ok(Array2::from_shape_vec((count, 4), boxes).unwrap())
}

/// Translate the cell anchors to every grid position.
///
/// Emission order is grid-position-major, cell-anchor-minor, so the flat
/// output reshapes back into a per-location, per-anchor structure.
fn tile(cell_anchors: &Array2<f32>, shift_x: &Array1<f32>, shift_y: &Array1<f32>) -> Array2<f32> {
    let positions = shift_x.len();
    let per_cell = cell_anchors.nrows();

    // Both corners move by the same (x, y) shift: translation only.
    let shifts = stack![
        Axis(1),
        shift_x.view(),
        shift_y.view(),
        shift_x.view(),
        shift_y.view()
    ];

    let shifts = shifts.insert_axis(Axis(1));
    let cells = cell_anchors.view().insert_axis(Axis(0));

    let tiled = &shifts.broadcast((positions, per_cell, 4)).unwrap()
        + &cells.broadcast((positions, per_cell, 4)).unwrap();

    tiled
        .into_shape_with_order((positions * per_cell, 4))
        .unwrap()
}

/// Dense anchors for every level of the pyramid, in level order.
#[derive(Debug, Clone)]
pub struct PyramidAnchors {
    levels: Vec<Array2<f32>>,
}

impl PyramidAnchors {
    /// Per-level anchor tensors, each of shape `(Hᵢ·Wᵢ·Aᵢ, 4)`.
    pub fn levels(&self) -> &[Array2<f32>] {
        &self.levels
    }

    /// All levels concatenated into one tensor, preserving level order.
    pub fn concatenated(&self) -> Array2<f32> {
        let views: Vec<_> = self.levels.iter().map(|level| level.view()).collect();
        concatenate(Axis(0), &views).unwrap()
    }

    /// Total number of anchors across all levels.
    pub fn len(&self) -> usize {
        self.levels.iter().map(|level| level.nrows()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_level(sizes: Vec<f32>, ratios: Vec<f32>) -> AnchorGenerator {
        AnchorGenerator::new(
            LevelParams::Shared(sizes),
            LevelParams::Shared(ratios),
            vec![8],
            0.0,
        )
        .unwrap()
    }

    #[test]
    fn cell_anchors_are_size_major_ratio_minor() {
        let anchors = cell_anchors(&[32.0, 64.0], &[0.5, 2.0]).unwrap();

        assert_eq!(anchors.nrows(), 4);
        // (32, 0.5), (32, 2.0), (64, 0.5), (64, 2.0) — the outer loop runs
        // over sizes, the inner loop over aspect ratios.
        for (b, (size, ratio)) in anchors
            .rows()
            .into_iter()
            .zip([(32.0f32, 0.5f32), (32.0, 2.0), (64.0, 0.5), (64.0, 2.0)])
        {
            let (w, h) = (b[2] - b[0], b[3] - b[1]);
            assert!((w * h / (size * size) - 1.0).abs() < 1e-4);
            assert!((h / w / ratio - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn cell_anchors_preserve_area() {
        let anchors = cell_anchors(&[32.0, 64.0, 128.0], &[0.5, 1.0, 2.0]).unwrap();

        for (i, b) in anchors.rows().into_iter().enumerate() {
            let size = [32.0f32, 64.0, 128.0][i / 3];
            let area = (b[2] - b[0]) * (b[3] - b[1]);
            assert!((area / (size * size) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn cell_anchors_honor_aspect_ratio() {
        let anchors = cell_anchors(&[32.0], &[0.5, 1.0, 2.0]).unwrap();

        for (b, ratio) in anchors.rows().into_iter().zip([0.5f32, 1.0, 2.0]) {
            let aspect = (b[3] - b[1]) / (b[2] - b[0]);
            assert!((aspect / ratio - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn cell_anchors_are_centered_at_the_origin() {
        let anchors = cell_anchors(&[32.0, 64.0], &[0.5, 1.0, 2.0]).unwrap();

        for b in anchors.rows() {
            assert_eq!(b[0], -b[2]);
            assert_eq!(b[1], -b[3]);
        }
    }

    #[test]
    fn non_positive_parameters_fail() {
        assert!(matches!(
            cell_anchors(&[-32.0], &[1.0]),
            Err(Error::NonPositive { kind: "size", .. })
        ));
        assert!(matches!(
            cell_anchors(&[32.0], &[0.0]),
            Err(Error::NonPositive {
                kind: "aspect ratio",
                ..
            })
        ));
    }

    #[test]
    fn tiling_is_position_major() {
        let generator = single_level(vec![16.0], vec![1.0, 2.0]);
        let anchors = generator.generate(&[(1, 2)]).unwrap();

        let level = &anchors.levels()[0];
        assert_eq!(level.nrows(), 4);

        // Both anchors of cell (0, 0) come before any anchor of cell (0, 1),
        // which is shifted right by one stride.
        let centers_x: Vec<f32> = level
            .rows()
            .into_iter()
            .map(|b| (b[0] + b[2]) / 2.0)
            .collect();
        assert_eq!(centers_x, vec![0.0, 0.0, 8.0, 8.0]);
    }

    #[test]
    fn output_counts_match_grid_and_cell_anchors() {
        let generator = AnchorGenerator::new(
            LevelParams::Shared(vec![32.0, 64.0, 128.0]),
            LevelParams::Shared(vec![0.5, 1.0, 2.0]),
            vec![8, 16],
            0.0,
        )
        .unwrap();
        assert_eq!(generator.num_cell_anchors(), vec![9, 9]);

        let anchors = generator.generate(&[(2, 3), (4, 4)]).unwrap();
        assert_eq!(anchors.levels()[0].nrows(), 2 * 3 * 9);
        assert_eq!(anchors.levels()[1].nrows(), 4 * 4 * 9);
        assert_eq!(anchors.len(), 54 + 144);
        assert_eq!(anchors.concatenated().nrows(), 54 + 144);
    }

    #[test]
    fn concatenation_preserves_level_order() {
        let generator = AnchorGenerator::new(
            LevelParams::PerLevel(vec![vec![8.0], vec![16.0]]),
            LevelParams::Shared(vec![1.0]),
            vec![8, 16],
            0.0,
        )
        .unwrap();

        let anchors = generator.generate(&[(1, 1), (1, 1)]).unwrap();
        let all = anchors.concatenated();

        assert_eq!(all.nrows(), 2);
        // First row is the 8x8 box of level 0, second the 16x16 box of level 1.
        assert_eq!(all[[0, 2]] - all[[0, 0]], 8.0);
        assert_eq!(all[[1, 2]] - all[[1, 0]], 16.0);
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = AnchorGenerator::default();
        let shapes = [(80, 80), (40, 40), (20, 20), (10, 10), (5, 5)];

        let first = generator.generate(&shapes).unwrap();
        let second = generator.generate(&shapes).unwrap();

        assert_eq!(first.concatenated(), second.concatenated());
    }

    #[test]
    fn offset_outside_unit_interval_fails() {
        for offset in [1.0, -0.1] {
            let result = AnchorGenerator::new(
                LevelParams::Shared(vec![32.0]),
                LevelParams::Shared(vec![1.0]),
                vec![8],
                offset,
            );
            assert!(matches!(result, Err(Error::Offset { .. })));
        }
    }

    #[test]
    fn mismatched_grid_count_fails() {
        let generator = AnchorGenerator::default();

        let result = generator.generate(&[(80, 80)]);
        assert!(matches!(
            result,
            Err(Error::GridCount {
                got: 1,
                expected: 5,
            })
        ));
    }

    #[test]
    fn default_configuration_yields_nine_anchors_per_cell() {
        let generator = AnchorGenerator::default();

        assert_eq!(generator.num_levels(), 5);
        assert_eq!(generator.num_cell_anchors(), vec![9; 5]);
        assert_eq!(generator.strides(), &[8, 16, 32, 64, 128]);
    }
}
