//! Transform session walkthrough.
//!
//! Places a few points via the canvas mapping, runs a rotate + translate
//! transform, then lifts the result into a 3D session.
//!
//! Run with: `cargo run --example transform_playground`

use glam::{DVec2, DVec3};
use morphe_pick::{CanvasFrame, PlanePicker, Ray};
use morphe_session::{point_label, Session2D};
use morphe_transform::{Params2D, Params3D};

fn main() {
    let frame = CanvasFrame::from_size(400.0, 400.0);
    let mut session = Session2D::new();

    // Clicks on the canvas, in pixel space.
    for click in [
        DVec2::new(210.0, 190.0),
        DVec2::new(250.0, 200.0),
        DVec2::new(200.0, 150.0),
    ] {
        let model = frame.to_model(click);
        session.add_point(model);
        println!(
            "{} added at ({:.1}, {:.1})",
            point_label(session.len() - 1),
            model.x,
            model.y
        );
    }

    session
        .set_params(
            Params2D::from_rotation_degrees(90.0).with_translation(DVec2::new(5.0, 0.0)),
        )
        .expect("finite parameters");

    match session.transform() {
        Ok(count) => println!("{count} points transformed"),
        Err(e) => eprintln!("{e}"),
    }

    for (i, (input, output)) in session
        .points()
        .iter()
        .zip(session.transformed())
        .enumerate()
    {
        println!(
            "{}: ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            point_label(i),
            input.x,
            input.y,
            output.x,
            output.y
        );
    }

    // Hand the point set to a 3D session and spin it about Z.
    let mut session3 = session.lift_to_3d();
    session3
        .set_params(Params3D::IDENTITY.with_rotation_z_degrees(45.0))
        .expect("finite parameters");
    let count = session3.transform().expect("points were lifted");
    println!("3D view: {count} points re-transformed on the z = 0 plane");

    // A pick ray straight down onto the plane, as a 3D click would produce.
    let picker = PlanePicker::default();
    let ray = Ray::new(DVec3::new(7.0, 2.0, 10.0), DVec3::new(0.0, 0.0, -1.0));
    if let Some(point) = picker.pick(&ray) {
        println!(
            "picked ({:.2}, {:.2}, {:.2}) (clamped to the working range)",
            point.x, point.y, point.z
        );
    }
}
