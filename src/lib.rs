//! Stateless spatial math for a simulation's scripting layer.
//!
//! The helpers here sit on hot paths (range checks, spawn placement), so
//! every operation is a pure function over small value types: no shared
//! state, safe to call from any thread. Built with the `python` feature the
//! crate doubles as a native extension module for the scripting host.

pub mod geometry;
#[cfg(feature = "python")]
pub mod python;

pub use geometry::{
    distance, distance_squared, horizontal_distance, horizontal_distance_squared, is_close,
    is_close_horizontal, position_from_position_rotation, try_distance, Position, Rotation,
    SpatialError, SpatialResult,
};
