#![no_main]

use glam::DVec3;
use libfuzzer_sys::fuzz_target;
use morphe_pick::{PlanePicker, Ray};

fuzz_target!(|data: [f64; 6]| {
    // pick should never panic, and any hit must lie inside the clamped
    // working range with z exactly 0.
    let [ox, oy, oz, dx, dy, dz] = data;
    let ray = Ray::new(DVec3::new(ox, oy, oz), DVec3::new(dx, dy, dz));

    let picker = PlanePicker::default();
    if let Some(point) = picker.pick(&ray) {
        assert_eq!(point.z, 0.0);
        assert!(!(point.x > picker.clamp) && !(point.x < -picker.clamp));
        assert!(!(point.y > picker.clamp) && !(point.y < -picker.clamp));
    }
});
