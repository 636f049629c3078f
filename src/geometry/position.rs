//! Spatial value types shared by the distance and heading helpers.
//!
//! `Position` and `Rotation` are thin wrappers over `nalgebra::Vector3<f64>`
//! so the helpers can lean on nalgebra's vector arithmetic. The checked
//! constructors guard the boundary where untrusted host values enter the
//! crate; the plain constructors are for hot-path callers that already hold
//! valid floats.

use std::fmt;

use nalgebra::Vector3;

/// Result alias for fallible spatial conversions.
pub type SpatialResult<T> = Result<T, SpatialError>;

/// Errors raised at the boundary where host values enter the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpatialError {
    /// A coordinate, angle, or distance cannot be interpreted as a finite
    /// real number.
    InvalidArgument(String),
}

impl fmt::Display for SpatialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpatialError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for SpatialError {}

fn check_finite(value: f64, what: &str) -> SpatialResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SpatialError::InvalidArgument(format!(
            "{} must be a finite real number, got {}",
            what, value
        )))
    }
}

/// Validate an untrusted distance or radius, rejecting NaN and infinities.
///
/// Negative values pass: the proximity checks square their radius, so a
/// negative distance behaves as its magnitude.
pub fn try_distance(value: f64) -> SpatialResult<f64> {
    check_finite(value, "distance")
}

/// A point in 3D world space.
///
/// Plain value type: no identity beyond its components, created by the
/// caller and discarded after use.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub coords: Vector3<f64>,
}

impl Position {
    /// Construct from components the caller already trusts.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coords: Vector3::new(x, y, z),
        }
    }

    /// Construct from untrusted components, rejecting NaN and infinities.
    pub fn try_new(x: f64, y: f64, z: f64) -> SpatialResult<Self> {
        Ok(Self::new(
            check_finite(x, "position x")?,
            check_finite(y, "position y")?,
            check_finite(z, "position z")?,
        ))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.coords.z
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl TryFrom<[f64; 3]> for Position {
    type Error = SpatialError;

    fn try_from(a: [f64; 3]) -> SpatialResult<Self> {
        Self::try_new(a[0], a[1], a[2])
    }
}

impl TryFrom<(f64, f64, f64)> for Position {
    type Error = SpatialError;

    fn try_from(t: (f64, f64, f64)) -> SpatialResult<Self> {
        Self::try_new(t.0, t.1, t.2)
    }
}

impl From<Position> for [f64; 3] {
    fn from(p: Position) -> Self {
        [p.coords.x, p.coords.y, p.coords.z]
    }
}

impl From<Position> for (f64, f64, f64) {
    fn from(p: Position) -> Self {
        (p.coords.x, p.coords.y, p.coords.z)
    }
}

/// An orientation triple in degrees, heading first.
///
/// The component order mirrors the host engine's rotation tuples: rotation
/// about the vertical axis (heading), then pitch, then roll. Only the
/// heading participates in [`position_from_position_rotation`]; the other
/// two components ride along so full host tuples round-trip unchanged.
///
/// [`position_from_position_rotation`]: super::heading::position_from_position_rotation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    pub euler: Vector3<f64>,
}

impl Rotation {
    /// Construct from angles in degrees the caller already trusts.
    #[inline]
    pub fn new(heading: f64, pitch: f64, roll: f64) -> Self {
        Self {
            euler: Vector3::new(heading, pitch, roll),
        }
    }

    /// Construct from untrusted angles, rejecting NaN and infinities.
    pub fn try_new(heading: f64, pitch: f64, roll: f64) -> SpatialResult<Self> {
        Ok(Self::new(
            check_finite(heading, "rotation heading")?,
            check_finite(pitch, "rotation pitch")?,
            check_finite(roll, "rotation roll")?,
        ))
    }

    /// Heading in degrees: 0 points along +z, 90 along +x.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.euler.x
    }

    /// Heading converted to radians.
    #[inline]
    pub fn heading_radians(&self) -> f64 {
        self.euler.x.to_radians()
    }
}

impl TryFrom<[f64; 3]> for Rotation {
    type Error = SpatialError;

    fn try_from(a: [f64; 3]) -> SpatialResult<Self> {
        Self::try_new(a[0], a[1], a[2])
    }
}

impl TryFrom<(f64, f64, f64)> for Rotation {
    type Error = SpatialError;

    fn try_from(t: (f64, f64, f64)) -> SpatialResult<Self> {
        Self::try_new(t.0, t.1, t.2)
    }
}

impl From<Rotation> for [f64; 3] {
    fn from(r: Rotation) -> Self {
        [r.euler.x, r.euler.y, r.euler.z]
    }
}

impl From<Rotation> for (f64, f64, f64) {
    fn from(r: Rotation) -> Self {
        (r.euler.x, r.euler.y, r.euler.z)
    }
}
