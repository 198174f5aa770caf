//! Simulation constants and tuning parameters.
//!
//! All durations are milliseconds, all distances are viewport pixels.

// --- Entities ---

/// Side length of the player and target bounding boxes.
pub const ENTITY_SIZE: f64 = 30.0;

/// Starting (and maximum) health for every combat entity.
pub const MAX_HEALTH: f64 = 100.0;

/// Base player movement speed (px/ms).
pub const PLAYER_SPEED: f64 = 0.25;

// --- Ranged weapon ---

/// Projectile travel speed (px/ms).
pub const BULLET_SPEED: f64 = 0.5;

/// Projectile length. Also the margin outside the viewport before culling.
pub const BULLET_LENGTH: f64 = 30.0;

/// Projectile thickness (presentation only).
pub const BULLET_THICKNESS: f64 = 2.0;

/// Damage dealt by one projectile hit.
pub const BULLET_DAMAGE: f64 = 10.0;

// --- Melee weapon ---

/// Melee damage per millisecond while the target is in reach.
pub const MELEE_DAMAGE_RATE: f64 = 0.5;

/// Duration of one melee swing.
pub const MELEE_ATTACK_DURATION: f64 = 200.0;

/// Peak outward displacement of the weapon tip during a swing (presentation only).
pub const MELEE_SWING_DISTANCE: f64 = 30.0;

/// Reach added on top of ENTITY_SIZE for melee contact.
pub const MELEE_EXTRA_REACH: f64 = 40.0;

/// Center-to-center distance below which a swing deals damage.
pub const MELEE_REACH: f64 = ENTITY_SIZE + MELEE_EXTRA_REACH;

// --- Recoil ---

/// Magnitude of the knockback impulse applied on every attack.
pub const RECOIL_FORCE: f64 = 5.0;

/// Time over which the recoil impulse is spread.
pub const RECOIL_DURATION: f64 = 200.0;

/// Cosine above which movement counts as aligned with the recoil.
pub const RECOIL_ALIGNED_COSINE: f64 = 0.5;

/// Speed multiplier when moving with the recoil.
pub const RECOIL_ALIGNED_SPEED_FACTOR: f64 = 1.5;

/// Speed multiplier when moving against the recoil.
pub const RECOIL_OPPOSED_SPEED_FACTOR: f64 = 0.5;

// --- Weapon controller ---

/// Minimum time between attack triggers, shared by both weapons.
pub const COOLDOWN_DURATION: f64 = 500.0;

// --- Presentation ---

/// Melee weapon sprite length and width.
pub const MELEE_WEAPON_LENGTH: f64 = 40.0;
pub const MELEE_WEAPON_WIDTH: f64 = 4.0;

/// Ranged weapon sprite length and width.
pub const RANGED_WEAPON_LENGTH: f64 = 30.0;
pub const RANGED_WEAPON_WIDTH: f64 = 2.0;

// --- World defaults ---

/// Default viewport dimensions used when the host does not report its own.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

/// Default spawn points (top-left corner of each bounding box).
pub const PLAYER_START: (f64, f64) = (0.0, 0.0);
pub const TARGET_START: (f64, f64) = (300.0, 300.0);

/// Aim direction before the pointer has ever moved.
pub const INITIAL_AIM: (f64, f64) = (1.0, 0.0);
