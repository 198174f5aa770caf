//! Raw input forwarded from the host to the simulation.
//!
//! Commands are queued and processed at the next step boundary.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponType;

/// All possible host inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// Choose the weapon and start playing. Accepted once.
    SelectWeapon { weapon: WeaponType },

    // --- Keyboard ---
    /// A key went down. Repeats while held are harmless.
    KeyDown { key: String },
    /// A key was released.
    KeyUp { key: String },

    // --- Pointer ---
    /// Absolute pointer position in viewport pixels.
    PointerMoved { x: f64, y: f64 },
    /// One discrete attack attempt (a click).
    Trigger,

    // --- Host ---
    /// The host viewport changed size.
    ResizeViewport { width: f64, height: f64 },
}
