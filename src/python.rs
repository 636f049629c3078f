//! Python surface for the scripting host.
//!
//! Mirrors the in-engine calling convention: positions and rotations travel
//! as 3-tuples of floats, distances as plain floats. Values that are not
//! floats fail extraction with the usual `TypeError`; values that are NaN or
//! infinite, tuple members and distance arguments alike, are rejected as
//! `ValueError` by the checked constructors and `try_distance`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::geometry::{self, try_distance, Position, Rotation, SpatialError};

impl From<SpatialError> for PyErr {
    fn from(err: SpatialError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Euclidean distance between two points.
#[pyfunction]
fn distance(pos1: (f64, f64, f64), pos2: (f64, f64, f64)) -> PyResult<f64> {
    let p1 = Position::try_from(pos1)?;
    let p2 = Position::try_from(pos2)?;
    Ok(geometry::distance(&p1, &p2))
}

/// Squared Euclidean distance between two points.
#[pyfunction]
fn distance_squared(pos1: (f64, f64, f64), pos2: (f64, f64, f64)) -> PyResult<f64> {
    let p1 = Position::try_from(pos1)?;
    let p2 = Position::try_from(pos2)?;
    Ok(geometry::distance_squared(&p1, &p2))
}

/// Distance between two points in the x/z plane.
#[pyfunction]
fn horizontal_distance(pos1: (f64, f64, f64), pos2: (f64, f64, f64)) -> PyResult<f64> {
    let p1 = Position::try_from(pos1)?;
    let p2 = Position::try_from(pos2)?;
    Ok(geometry::horizontal_distance(&p1, &p2))
}

/// Squared distance between two points in the x/z plane.
#[pyfunction]
fn horizontal_distance_squared(pos1: (f64, f64, f64), pos2: (f64, f64, f64)) -> PyResult<f64> {
    let p1 = Position::try_from(pos1)?;
    let p2 = Position::try_from(pos2)?;
    Ok(geometry::horizontal_distance_squared(&p1, &p2))
}

/// True iff `pos2` lies within `dist` of `pos1`, boundary inclusive.
#[pyfunction]
fn is_close(pos1: (f64, f64, f64), pos2: (f64, f64, f64), dist: f64) -> PyResult<bool> {
    let p1 = Position::try_from(pos1)?;
    let p2 = Position::try_from(pos2)?;
    let dist = try_distance(dist)?;
    Ok(geometry::is_close(&p1, &p2, dist))
}

/// Horizontal-plane variant of `is_close`.
#[pyfunction]
fn is_close_horizontal(pos1: (f64, f64, f64), pos2: (f64, f64, f64), dist: f64) -> PyResult<bool> {
    let p1 = Position::try_from(pos1)?;
    let p2 = Position::try_from(pos2)?;
    let dist = try_distance(dist)?;
    Ok(geometry::is_close_horizontal(&p1, &p2, dist))
}

/// New position `dist` units from `pos` along the heading of `rot`.
#[pyfunction]
fn position_from_position_rotation(
    pos: (f64, f64, f64),
    rot: (f64, f64, f64),
    dist: f64,
) -> PyResult<(f64, f64, f64)> {
    let p = Position::try_from(pos)?;
    let r = Rotation::try_from(rot)?;
    let dist = try_distance(dist)?;
    Ok(geometry::position_from_position_rotation(&p, &r, dist).into())
}

/// Native accelerator functions for the scripting layer.
#[pymodule]
fn simcore(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(distance, m)?)?;
    m.add_function(wrap_pyfunction!(distance_squared, m)?)?;
    m.add_function(wrap_pyfunction!(horizontal_distance, m)?)?;
    m.add_function(wrap_pyfunction!(horizontal_distance_squared, m)?)?;
    m.add_function(wrap_pyfunction!(is_close, m)?)?;
    m.add_function(wrap_pyfunction!(is_close_horizontal, m)?)?;
    m.add_function(wrap_pyfunction!(position_from_position_rotation, m)?)?;
    Ok(())
}
