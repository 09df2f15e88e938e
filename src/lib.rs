//! Small numerical building blocks for introductory mechanics.
//!
//! - [`Vector2`]: 2-D vector value type with operators, polar conversion and
//!   fallible division.
//! - [`kinematics`](crate::core::kinematics): position, velocity and time-to-position solvers for
//!   one-dimensional motion under constant acceleration.
//!
//! Fallible operations return [`error::Result`] rather than producing infinities or NaN.

pub mod core;
pub mod error;

pub use crate::core::Vector2;
pub use crate::error::{Error, Result};
