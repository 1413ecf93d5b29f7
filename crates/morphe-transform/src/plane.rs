//! 2D transform parameters.

use glam::{DMat3, DVec2, DVec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::AffineMap;

/// Parameters of a 2D affine transform: translation, counter-clockwise
/// rotation about the origin, and uniform scale.
///
/// The point map is applied in the order rotate, scale, translate:
///
/// ```text
/// x' = scale * (x*cos - y*sin) + tx
/// y' = scale * (x*sin + y*cos) + ty
/// ```
///
/// Uniform scale commutes with rotation, so both live in a single 2x2
/// linear block. `scale = 0` collapses every point to the translation -
/// a valid mapping, not an error. Negative scale mirrors through the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Params2D {
    /// Translation, applied last.
    pub translation: DVec2,

    /// Rotation about the origin in degrees, counter-clockwise.
    pub rotation_degrees: f64,

    /// Uniform scale factor (1.0 = unchanged).
    pub scale: f64,
}

impl Default for Params2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Params2D {
    /// Identity parameters: zero translation, zero rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: DVec2::ZERO,
        rotation_degrees: 0.0,
        scale: 1.0,
    };

    /// Creates parameters from all components.
    pub fn new(translation: DVec2, rotation_degrees: f64, scale: f64) -> Self {
        Self {
            translation,
            rotation_degrees,
            scale,
        }
    }

    /// Creates parameters with only translation.
    pub fn from_translation(translation: DVec2) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Creates parameters with only rotation (degrees, counter-clockwise).
    pub fn from_rotation_degrees(degrees: f64) -> Self {
        Self {
            rotation_degrees: degrees,
            ..Self::IDENTITY
        }
    }

    /// Creates parameters with only uniform scale.
    pub fn from_scale(scale: f64) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    /// Builder: set translation.
    pub fn with_translation(mut self, translation: DVec2) -> Self {
        self.translation = translation;
        self
    }

    /// Builder: set rotation (degrees, counter-clockwise).
    pub fn with_rotation_degrees(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Builder: set uniform scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Computes the 3x3 homogeneous transformation matrix.
    ///
    /// Linear block is `scale * R(rotation)`, translation in the last column.
    pub fn to_matrix(&self) -> DMat3 {
        let rad = self.rotation_degrees.to_radians();
        let (sin, cos) = rad.sin_cos();

        let m00 = self.scale * cos;
        let m01 = -self.scale * sin;
        let m10 = self.scale * sin;
        let m11 = self.scale * cos;

        DMat3::from_cols(
            DVec3::new(m00, m10, 0.0),
            DVec3::new(m01, m11, 0.0),
            DVec3::new(self.translation.x, self.translation.y, 1.0),
        )
    }

    /// Transforms a single point.
    pub fn transform_point(&self, point: DVec2) -> DVec2 {
        self.to_matrix().transform_point2(point)
    }

    /// Returns true when every field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.rotation_degrees.is_finite() && self.scale.is_finite()
    }
}

impl From<Params2D> for DMat3 {
    fn from(params: Params2D) -> Self {
        params.to_matrix()
    }
}

impl AffineMap for Params2D {
    type Vector = DVec2;
    type Matrix = DMat3;

    fn to_matrix(&self) -> DMat3 {
        self.to_matrix()
    }

    fn apply(matrix: &DMat3, point: DVec2) -> DVec2 {
        matrix.transform_point2(point)
    }

    fn is_finite(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identity_is_exact() {
        let p = DVec2::new(10.0, -3.5);
        assert_eq!(Params2D::IDENTITY.transform_point(p), p);
        assert_eq!(Params2D::default(), Params2D::IDENTITY);
    }

    #[test]
    fn test_translation_only() {
        let params = Params2D::from_translation(DVec2::new(3.0, -2.0));
        assert_eq!(
            params.transform_point(DVec2::new(1.0, 1.0)),
            DVec2::new(4.0, -1.0)
        );
    }

    #[test]
    fn test_rotation_90_ccw() {
        let params = Params2D::from_rotation_degrees(90.0);
        let result = params.transform_point(DVec2::new(1.0, 0.0));
        assert!((result - DVec2::new(0.0, 1.0)).length() < EPS);
    }

    #[test]
    fn test_rotate_then_translate_scenario() {
        // (10, 0) rotated 90 CCW is (0, 10); translated by (5, 0) -> (5, 10).
        let params = Params2D::new(DVec2::new(5.0, 0.0), 90.0, 1.0);
        let result = params.transform_point(DVec2::new(10.0, 0.0));
        assert!((result - DVec2::new(5.0, 10.0)).length() < EPS);
    }

    #[test]
    fn test_full_turn_round_trips() {
        let p = DVec2::new(3.0, 7.0);
        for degrees in [0.0, 360.0] {
            let result = Params2D::from_rotation_degrees(degrees).transform_point(p);
            assert!((result - p).length() < EPS, "{degrees} deg: {result:?}");
        }
    }

    #[test]
    fn test_zero_scale_collapses_to_translation() {
        let params = Params2D::new(DVec2::new(4.0, -1.0), 37.0, 0.0);
        for p in [DVec2::ZERO, DVec2::new(100.0, -50.0), DVec2::new(0.5, 0.5)] {
            assert_eq!(params.transform_point(p), DVec2::new(4.0, -1.0));
        }
    }

    #[test]
    fn test_negative_scale_mirrors_through_origin() {
        let params = Params2D::from_scale(-1.0);
        assert_eq!(
            params.transform_point(DVec2::new(2.0, -3.0)),
            DVec2::new(-2.0, 3.0)
        );
    }

    #[test]
    fn test_scale_applies_after_rotation() {
        // Rotate (1, 0) by 90 then scale by 2 -> (0, 2).
        let params = Params2D::new(DVec2::ZERO, 90.0, 2.0);
        let result = params.transform_point(DVec2::new(1.0, 0.0));
        assert!((result - DVec2::new(0.0, 2.0)).length() < EPS);
    }

    #[test]
    fn test_matrix_matches_point_map() {
        let params = Params2D::new(DVec2::new(1.0, 2.0), 30.0, 1.5);
        let m = params.to_matrix();
        let p = DVec2::new(-2.0, 4.0);
        assert_eq!(m.transform_point2(p), params.transform_point(p));

        // Translation sits in the last column.
        assert_eq!(m.z_axis, DVec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Params2D::IDENTITY.is_finite());
        assert!(!Params2D::from_scale(f64::NAN).is_finite());
        assert!(!Params2D::from_rotation_degrees(f64::INFINITY).is_finite());
        assert!(!Params2D::from_translation(DVec2::new(0.0, f64::NEG_INFINITY)).is_finite());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let params = Params2D::new(DVec2::new(5.0, -1.0), 45.0, 2.0);
        let json = serde_json::to_string(&params).unwrap();
        let parsed: Params2D = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, params);
    }
}
