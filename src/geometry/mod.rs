//! Spatial value types and the distance/heading helpers built on them.

pub mod distance;
pub mod heading;
pub mod position;

pub use distance::{
    distance, distance_squared, horizontal_distance, horizontal_distance_squared, is_close,
    is_close_horizontal,
};
pub use heading::position_from_position_rotation;
pub use position::{try_distance, Position, Rotation, SpatialError, SpatialResult};
