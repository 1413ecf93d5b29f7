//! Point and parameter stores driving the affine transform engine.
//!
//! A [`Session`] holds the state behind one visualizer view: the ordered
//! input point sequence, the ordered output sequence, and the current
//! transform parameters. It is single-threaded and request-driven; every
//! operation runs to completion within one user-interaction turn, and the
//! output sequence is only ever replaced wholesale, never streamed.
//!
//! - Points are append-only; there is no single-point deletion, only
//!   [`Session::clear`], which also resets parameters to identity
//! - Parameters are replaced wholesale by [`Session::set_params`], which
//!   rejects non-finite values
//! - [`Session::transform`] recomputes the entire output sequence and fails
//!   only on an empty point set
//!
//! # Example
//!
//! ```
//! use glam::DVec2;
//! use morphe_session::Session2D;
//! use morphe_transform::Params2D;
//!
//! let mut session = Session2D::new();
//! session.add_point(DVec2::new(10.0, 0.0));
//! session
//!     .set_params(Params2D::from_rotation_degrees(90.0))
//!     .unwrap();
//!
//! let count = session.transform().unwrap();
//! assert_eq!(count, 1);
//! assert!((session.transformed()[0] - DVec2::new(0.0, 10.0)).length() < 1e-9);
//! ```

mod error;

pub use error::SessionError;

use morphe_transform::{transform_all, AffineMap, Params2D, Params3D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Session state for one visualizer view.
///
/// Generic over the parameter type so the 2D and 3D views share one store
/// implementation; use [`Session2D`] and [`Session3D`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "P: Serialize, P::Vector: Serialize",
        deserialize = "P: Deserialize<'de>, P::Vector: Deserialize<'de>"
    ))
)]
pub struct Session<P: AffineMap> {
    points: Vec<P::Vector>,
    transformed: Vec<P::Vector>,
    params: P,
}

/// Session over 2D points and parameters.
pub type Session2D = Session<Params2D>;

/// Session over 3D points and parameters.
pub type Session3D = Session<Params3D>;

impl<P: AffineMap + Default> Default for Session<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: AffineMap + Default> Session<P> {
    /// Creates an empty session with identity parameters.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            transformed: Vec::new(),
            params: P::default(),
        }
    }

    /// Empties both point sequences and resets parameters to identity.
    pub fn clear(&mut self) {
        self.points.clear();
        self.transformed.clear();
        self.params = P::default();
    }
}

impl<P: AffineMap> Session<P> {
    /// Appends a point to the input sequence.
    pub fn add_point(&mut self, point: P::Vector) {
        self.points.push(point);
    }

    /// The input point sequence, in insertion order.
    pub fn points(&self) -> &[P::Vector] {
        &self.points
    }

    /// The output point sequence from the last transform (empty until then).
    pub fn transformed(&self) -> &[P::Vector] {
        &self.transformed
    }

    /// The current transform parameters.
    pub fn params(&self) -> &P {
        &self.params
    }

    /// Number of input points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when no points have been placed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Replaces the parameters wholesale.
    ///
    /// Non-finite values (NaN, infinity) are rejected and the stored
    /// parameters are left unchanged.
    pub fn set_params(&mut self, params: P) -> Result<(), SessionError> {
        if !params.is_finite() {
            return Err(SessionError::NonFiniteParams);
        }
        self.params = params;
        Ok(())
    }

    /// Recomputes the entire output sequence from the input sequence and the
    /// current parameters.
    ///
    /// Returns the number of points transformed. The output always has the
    /// same length and order as the input, with `transformed()[i]` derived
    /// only from `points()[i]`.
    pub fn transform(&mut self) -> Result<usize, SessionError> {
        if self.points.is_empty() {
            return Err(SessionError::EmptyPointSet);
        }
        self.transformed = transform_all(&self.params, &self.points);
        Ok(self.transformed.len())
    }
}

impl Session<Params2D> {
    /// Hands the 2D session off to a 3D view.
    ///
    /// Both sequences are lifted onto the `z = 0` plane; 3D parameters start
    /// at identity rather than inheriting the 2D ones.
    pub fn lift_to_3d(&self) -> Session<Params3D> {
        Session {
            points: self.points.iter().map(|p| p.extend(0.0)).collect(),
            transformed: self.transformed.iter().map(|p| p.extend(0.0)).collect(),
            params: Params3D::IDENTITY,
        }
    }
}

/// Display label for the point at `index` (`P1`, `P2`, ...).
pub fn point_label(index: usize) -> String {
    format!("P{}", index + 1)
}
