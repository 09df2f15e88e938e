use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the vector algebra and kinematics solvers.
///
/// Every fallible operation returns one of these instead of a non-finite value,
/// so a successful result is always usable as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A divisor was exactly zero (scalar division, reflected division, or `unit()`
    /// of the zero vector).
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    /// The equation has no real root (negative discriminant or negative v^2).
    #[error("no real solution: {0}")]
    NoRealSolution(String),

    /// Acceleration and velocity are both numerically zero, so the target is unreachable.
    #[error("degenerate motion: zero velocity and zero acceleration, position unreachable unless already there")]
    DegenerateMotion,

    /// Both roots of the time equation are negative.
    #[error("no positive time solution: target only reachable at t = {t1} or t = {t2}")]
    NoPositiveTimeSolution { t1: f64, t2: f64 },

    /// Invalid input or a result that would not be finite.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
