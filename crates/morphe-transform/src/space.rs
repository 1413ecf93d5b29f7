//! 3D transform parameters.

use glam::{DMat4, DVec3, DVec4};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::AffineMap;

/// Parameters of a 3D affine transform: translation, per-axis Euler rotation
/// in degrees, and uniform scale.
///
/// The homogeneous matrix is composed in a fixed order:
///
/// ```text
/// M = S * Rx * Ry * Rz        (column-vector convention)
/// ```
///
/// with the translation written directly into the last column. Applied to a
/// point this rotates about Z first, then Y, then X, then scales, then
/// translates. Euler rotations do not commute; the order is part of the
/// contract and changing it changes the result.
///
/// Each rotation matrix follows the right-handed convention: `Rx` rotates the
/// Y axis toward Z, `Ry` rotates Z toward X, `Rz` rotates X toward Y.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Params3D {
    /// Translation, written into the matrix translation column.
    pub translation: DVec3,

    /// Euler angles in degrees about the X, Y, and Z axes.
    pub rotation_degrees: DVec3,

    /// Uniform scale factor (1.0 = unchanged).
    pub scale: f64,
}

impl Default for Params3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Params3D {
    /// Identity parameters: zero translation, zero rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: DVec3::ZERO,
        rotation_degrees: DVec3::ZERO,
        scale: 1.0,
    };

    /// Creates parameters from all components.
    pub fn new(translation: DVec3, rotation_degrees: DVec3, scale: f64) -> Self {
        Self {
            translation,
            rotation_degrees,
            scale,
        }
    }

    /// Creates parameters with only translation.
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Creates parameters with only rotation (degrees per axis).
    pub fn from_rotation_degrees(rotation_degrees: DVec3) -> Self {
        Self {
            rotation_degrees,
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
    pub fn with_translation(mut self, translation: DVec3) -> Self {
        self.translation = translation;
        self
    }

    /// Builder: set all three Euler angles (degrees).
    pub fn with_rotation_degrees(mut self, rotation_degrees: DVec3) -> Self {
        self.rotation_degrees = rotation_degrees;
        self
    }

    /// Builder: set the rotation about the X axis (degrees).
    pub fn with_rotation_x_degrees(mut self, degrees: f64) -> Self {
        self.rotation_degrees.x = degrees;
        self
    }

    /// Builder: set the rotation about the Y axis (degrees).
    pub fn with_rotation_y_degrees(mut self, degrees: f64) -> Self {
        self.rotation_degrees.y = degrees;
        self
    }

    /// Builder: set the rotation about the Z axis (degrees).
    pub fn with_rotation_z_degrees(mut self, degrees: f64) -> Self {
        self.rotation_degrees.z = degrees;
        self
    }

    /// Builder: set uniform scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Computes the 4x4 homogeneous transformation matrix.
    ///
    /// Composition order is `S * Rx * Ry * Rz`, then the translation column
    /// is set to `(tx, ty, tz, 1)`.
    pub fn to_matrix(&self) -> DMat4 {
        let rad = DVec3::new(
            self.rotation_degrees.x.to_radians(),
            self.rotation_degrees.y.to_radians(),
            self.rotation_degrees.z.to_radians(),
        );

        let mut m = DMat4::from_scale(DVec3::splat(self.scale))
            * DMat4::from_rotation_x(rad.x)
            * DMat4::from_rotation_y(rad.y)
            * DMat4::from_rotation_z(rad.z);
        m.w_axis = DVec4::new(self.translation.x, self.translation.y, self.translation.z, 1.0);
        m
    }

    /// Transforms a single point (homogeneous coordinate 1).
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.to_matrix().transform_point3(point)
    }

    /// Returns true when every field is a finite number.
    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.rotation_degrees.is_finite() && self.scale.is_finite()
    }
}

impl From<Params3D> for DMat4 {
    fn from(params: Params3D) -> Self {
        params.to_matrix()
    }
}

impl AffineMap for Params3D {
    type Vector = DVec3;
    type Matrix = DMat4;

    fn to_matrix(&self) -> DMat4 {
        self.to_matrix()
    }

    fn apply(matrix: &DMat4, point: DVec3) -> DVec3 {
        matrix.transform_point3(point)
    }

    fn is_finite(&self) -> bool {
        self.is_finite()
    }
}
