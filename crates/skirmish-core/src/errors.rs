//! Errors for rejected commands.
//!
//! The step itself never fails; a rejected command is reported and dropped.

use std::fmt;

use crate::enums::WeaponType;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The weapon has already been chosen for this session.
    WeaponAlreadySelected { current: WeaponType },
    /// Pointer coordinates were NaN or infinite.
    NonFinitePointer { x: f64, y: f64 },
    /// Viewport dimensions must be finite and positive.
    InvalidViewport { width: f64, height: f64 },
    /// Key identifier was empty.
    EmptyKey,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::WeaponAlreadySelected { current } => {
                write!(f, "weapon already selected: {current:?}")
            }
            CommandError::NonFinitePointer { x, y } => {
                write!(f, "non-finite pointer position ({x}, {y})")
            }
            CommandError::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size {width}x{height}")
            }
            CommandError::EmptyKey => write!(f, "empty key identifier"),
        }
    }
}

impl std::error::Error for CommandError {}
