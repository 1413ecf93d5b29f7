//! Pure 2D/3D affine point transforms (translate, rotate, uniform scale).
//!
//! This crate is the transformation engine behind the point visualizer:
//! a stateless mapping from input points and transform parameters to output
//! points, with no rendering or UI dependencies.
//!
//! - [`Params2D`] - 2D parameters (translation, CCW rotation in degrees,
//!   uniform scale), composed as rotate, then scale, then translate
//! - [`Params3D`] - 3D parameters with per-axis Euler angles, composed in the
//!   fixed matrix order `S * Rx * Ry * Rz` plus a translation column
//! - [`AffineMap`] - common interface over both, enabling generic code
//! - [`transform_all`] - order-preserving map over a point sequence
//!
//! All arithmetic is `f64` (glam's `DVec2`/`DVec3`/`DMat3`/`DMat4`).
//!
//! # Example
//!
//! ```
//! use glam::DVec2;
//! use morphe_transform::{Params2D, transform_all};
//!
//! let params = Params2D::IDENTITY
//!     .with_rotation_degrees(90.0)
//!     .with_translation(DVec2::new(5.0, 0.0));
//!
//! let out = transform_all(&params, &[DVec2::new(10.0, 0.0)]);
//! assert!((out[0] - DVec2::new(5.0, 10.0)).length() < 1e-9);
//! ```

mod plane;
mod space;

pub use plane::Params2D;
pub use space::Params3D;

/// Unified interface for affine point transforms (2D and 3D).
///
/// Abstracts over dimensionality so stores and pipelines can be written once
/// for both [`Params2D`] (`DVec2`/`DMat3`) and [`Params3D`] (`DVec3`/`DMat4`).
pub trait AffineMap {
    /// The point/translation type (`DVec2` or `DVec3`).
    type Vector: Copy + core::fmt::Debug + PartialEq;

    /// The homogeneous matrix type (`DMat3` or `DMat4`).
    type Matrix: Copy;

    /// Builds the full homogeneous transformation matrix.
    fn to_matrix(&self) -> Self::Matrix;

    /// Applies a previously built matrix to one point (homogeneous
    /// coordinate 1).
    fn apply(matrix: &Self::Matrix, point: Self::Vector) -> Self::Vector;

    /// Transforms a single point.
    fn transform_point(&self, point: Self::Vector) -> Self::Vector {
        Self::apply(&self.to_matrix(), point)
    }

    /// Returns true when every parameter field is a finite number.
    ///
    /// The transform itself is total over all finite inputs; this exists so
    /// boundaries can validate-reject NaN/infinite parameters before they
    /// enter stored state.
    fn is_finite(&self) -> bool;
}

/// Transforms a point sequence, preserving length and order.
///
/// The matrix is built once and applied to each element independently;
/// `output[i]` derives only from `input[i]`.
pub fn transform_all<T: AffineMap>(params: &T, points: &[T::Vector]) -> Vec<T::Vector> {
    let matrix = params.to_matrix();
    points.iter().map(|&p| T::apply(&matrix, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec2, DVec3};

    #[test]
    fn test_transform_all_preserves_length_and_order() {
        let params = Params2D::IDENTITY.with_translation(DVec2::new(1.0, 0.0));
        let input = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 3.0),
            DVec2::new(-4.0, 5.0),
        ];

        let output = transform_all(&params, &input);
        assert_eq!(output.len(), input.len());
        for (i, p) in input.iter().enumerate() {
            assert_eq!(output[i], *p + DVec2::new(1.0, 0.0));
        }
    }

    #[test]
    fn test_transform_all_empty() {
        let params = Params3D::IDENTITY;
        let output = transform_all(&params, &[]);
        assert!(output.is_empty());
    }

    #[test]
    fn test_generic_over_dimension() {
        // The same generic code must serve both engines.
        fn run<T: AffineMap>(params: &T, points: &[T::Vector]) -> Vec<T::Vector> {
            transform_all(params, points)
        }

        let out2 = run(&Params2D::IDENTITY, &[DVec2::new(1.0, 2.0)]);
        assert_eq!(out2, vec![DVec2::new(1.0, 2.0)]);

        let out3 = run(&Params3D::IDENTITY, &[DVec3::new(1.0, 2.0, 3.0)]);
        assert_eq!(out3, vec![DVec3::new(1.0, 2.0, 3.0)]);
    }
}
