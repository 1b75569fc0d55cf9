use anchors::AnchorGenerator;

fn main() {
    let generator = AnchorGenerator::default();

    // Feature map shapes for a 640x640 input on a P3-P7 pyramid.
    let grid_sizes = [(80, 80), (40, 40), (20, 20), (10, 10), (5, 5)];
    let anchors = generator.generate(&grid_sizes).unwrap();

    for (boxes, stride) in anchors.levels().iter().zip(generator.strides()) {
        println!("stride {stride}: {} anchors", boxes.nrows());
    }
    println!("pyramid total: {} anchors", anchors.len());
}
