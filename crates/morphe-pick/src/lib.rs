//! Screen-to-model input mapping for the point visualizer.
//!
//! Clicks arrive in screen space; model points live in a Y-up coordinate
//! system centered on the rendering surface. This crate holds the boundary
//! math, with no rendering dependencies:
//!
//! - [`CanvasFrame`] - 2D pixel-to-model mapping (Y axis inverted, origin at
//!   the canvas center)
//! - [`Ray`] / [`PlanePicker`] - 3D picking against the `z = 0` plane with
//!   clamped hits
//! - [`ndc_from_screen`] - pixel to normalized device coordinates
//!
//! # Example
//!
//! ```
//! use glam::DVec2;
//! use morphe_pick::CanvasFrame;
//!
//! let frame = CanvasFrame::from_size(400.0, 400.0);
//! let model = frame.to_model(DVec2::new(210.0, 190.0));
//! assert_eq!(model, DVec2::new(10.0, 10.0));
//! ```

use glam::{DVec2, DVec3};

// ============================================================================
// 2D canvas mapping
// ============================================================================

/// Maps between canvas pixel coordinates and model coordinates.
///
/// The model origin sits at the canvas center, with Y pointing up; screen
/// space has Y pointing down, so the Y component flips sign:
/// `x = px - origin.x`, `y = origin.y - py`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    /// Pixel position of the model origin (the canvas center).
    pub origin: DVec2,
}

impl CanvasFrame {
    /// Creates a frame with the given origin in pixel space.
    pub fn new(origin: DVec2) -> Self {
        Self { origin }
    }

    /// Creates a frame for a canvas of the given size, origin at the center.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Converts a pixel position to model coordinates (Y inverted).
    pub fn to_model(&self, pixel: DVec2) -> DVec2 {
        DVec2::new(pixel.x - self.origin.x, self.origin.y - pixel.y)
    }

    /// Converts a model point back to pixel coordinates, for drawing.
    pub fn to_screen(&self, model: DVec2) -> DVec2 {
        DVec2::new(self.origin.x + model.x, self.origin.y - model.y)
    }
}

/// Converts a pixel position to normalized device coordinates in `[-1, 1]`.
///
/// X maps left-to-right, Y flips so that up is positive, matching the
/// convention perspective cameras expect when building pick rays.
pub fn ndc_from_screen(pixel: DVec2, size: DVec2) -> DVec2 {
    DVec2::new(
        (pixel.x / size.x) * 2.0 - 1.0,
        -((pixel.y / size.y) * 2.0 - 1.0),
    )
}

// ============================================================================
// 3D plane picking
// ============================================================================

/// A ray in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin of the ray.
    pub origin: DVec3,
    /// Direction of the ray (normalized by [`Ray::new`]).
    pub direction: DVec3,
}

impl Ray {
    /// Creates a new ray, normalizing the direction.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Returns the point at parameter t along the ray.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Intersects the ray with the plane `z = 0`.
    ///
    /// Returns `None` when the ray is parallel to the plane or points away
    /// from it. A ray lying in the plane returns its own origin.
    pub fn intersect_plane_z0(&self) -> Option<DVec3> {
        if self.direction.z == 0.0 {
            // Coplanar rays hit at their origin; parallel rays never hit.
            return (self.origin.z == 0.0).then_some(self.origin);
        }
        let t = -self.origin.z / self.direction.z;
        (t >= 0.0).then(|| self.at(t))
    }
}

/// Picks model points on the `z = 0` plane from pick rays.
///
/// Points are only ever added on this plane; hits outside the working range
/// are clamped to `[-clamp, clamp]` on X and Y rather than rejected, and Z is
/// forced to exactly `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanePicker {
    /// Half-extent of the working range on X and Y.
    pub clamp: f64,
}

impl Default for PlanePicker {
    fn default() -> Self {
        Self { clamp: 5.0 }
    }
}

impl PlanePicker {
    /// Creates a picker with the given half-extent.
    pub fn new(clamp: f64) -> Self {
        Self { clamp }
    }

    /// Resolves a pick ray to a model point on the `z = 0` plane.
    ///
    /// Returns `None` only when the ray misses the plane entirely.
    pub fn pick(&self, ray: &Ray) -> Option<DVec3> {
        let hit = ray.intersect_plane_z0()?;
        Some(DVec3::new(
            hit.x.clamp(-self.clamp, self.clamp),
            hit.y.clamp(-self.clamp, self.clamp),
            0.0,
        ))
    }
}
