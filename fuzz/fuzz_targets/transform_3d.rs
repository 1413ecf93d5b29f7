#![no_main]

use glam::DVec3;
use libfuzzer_sys::fuzz_target;
use morphe_transform::{transform_all, Params3D};

fuzz_target!(|data: ([f64; 7], Vec<(f64, f64, f64)>)| {
    // transform_all should never panic and must preserve sequence length,
    // even for NaN/infinite parameters.
    let ([tx, ty, tz, rx, ry, rz, scale], raw_points) = data;
    let params = Params3D::new(
        DVec3::new(tx, ty, tz),
        DVec3::new(rx, ry, rz),
        scale,
    );
    let points: Vec<DVec3> = raw_points
        .into_iter()
        .map(|(x, y, z)| DVec3::new(x, y, z))
        .collect();

    let output = transform_all(&params, &points);
    assert_eq!(output.len(), points.len());
});
