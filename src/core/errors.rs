use thiserror::Error;

/// The failure kinds the tour models explicitly.
///
/// Only the division and file walkthroughs produce these, and both catch them
/// at the point of use. Nothing in the tour lets a `TourError` escape a
/// demonstration.
#[derive(Debug, Error)]
pub enum TourError {
    /// Integer division was asked to divide by zero. No division was performed.
    #[error("divisor must not be zero")]
    DivisionByZero,

    /// The quotient does not fit in an `i32` (only `i32::MIN / -1`).
    #[error("{0} / {1} overflows a 32-bit integer")]
    Overflow(i32, i32),

    /// Any failure while creating, reading, measuring or deleting a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TourError>;
