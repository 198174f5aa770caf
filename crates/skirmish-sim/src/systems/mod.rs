//! ECS systems that operate on the simulation world each step.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only)
//! plus whatever engine-owned state they advance. Run order is fixed by the engine.

pub mod aim;
pub mod damage;
pub mod melee;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
