//! Error types for the parking lot engine

use thiserror::Error;

/// Error type for slot allocation and release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LotError {
    /// Every slot is occupied
    #[error("Sorry, parking lot is full")]
    Full,
    /// The slot holds no vehicle, or lies outside `1..=capacity` (negative included)
    #[error("Slot number {0} is already empty")]
    AlreadyEmpty(i64),
}
