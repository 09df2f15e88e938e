//! Numerical core: 2-D vector algebra and constant-acceleration kinematics.
//!
//! All items are pure and hold no shared state; they are safe to call from any thread.

pub mod constants;
pub mod kinematics;
pub mod vector;

pub use constants::{deg_to_rad, rad_to_deg};
pub use kinematics::{position, time_to_position, velocity_at_time, velocity_from_position};
pub use vector::Vector2;
