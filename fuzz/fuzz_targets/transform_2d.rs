#![no_main]

use glam::DVec2;
use libfuzzer_sys::fuzz_target;
use morphe_transform::{transform_all, Params2D};

fuzz_target!(|data: (f64, f64, f64, f64, Vec<(f64, f64)>)| {
    // transform_all should never panic and must preserve sequence length,
    // even for NaN/infinite parameters.
    let (tx, ty, rotation_degrees, scale, raw_points) = data;
    let params = Params2D::new(DVec2::new(tx, ty), rotation_degrees, scale);
    let points: Vec<DVec2> = raw_points
        .into_iter()
        .map(|(x, y)| DVec2::new(x, y))
        .collect();

    let output = transform_all(&params, &points);
    assert_eq!(output.len(), points.len());
});
