use itertools::iproduct;
use ndarray::Array1;

/// Compute the x and y offsets of every grid cell, in input-image pixels.
///
/// The x coordinates start at `offset * stride` and advance by `stride` for
/// `width` steps; likewise for y with `height` steps. The full Cartesian
/// product is emitted in row-major raster order (all x for the first y, then
/// all x for the second y, and so on), matching how per-location model
/// outputs are flattened.
pub(crate) fn grid_offsets(
    size: (usize, usize),
    stride: usize,
    offset: f32,
) -> (Array1<f32>, Array1<f32>) {
    let (height, width) = size;

    let xs: Vec<f32> = (0..width).map(|i| (i as f32 + offset) * stride as f32).collect();
    let ys: Vec<f32> = (0..height).map(|j| (j as f32 + offset) * stride as f32).collect();

    let mut shift_x = Vec::with_capacity(height * width);
    let mut shift_y = Vec::with_capacity(height * width);
    for (y, x) in iproduct!(ys, xs) {
        shift_x.push(x);
        shift_y.push(y);
    }

    (Array1::from(shift_x), Array1::from(shift_y))
}
