//! Attitude determination: the TRIAD two-vector alignment method, producing
//! a unit quaternion rotating the inertial sky frame into the camera body
//! frame from two matched (body, inertial) direction pairs.

pub mod quaternion;
pub mod triad;

pub use quaternion::Quaternion;
pub use triad::{solve, Observation};
