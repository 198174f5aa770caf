use std::process::ExitCode;

use tracing::{error, info, warn};

use skirmish_app::config::{self, AppConfig};
use skirmish_app::host;
use skirmish_app::state::AppState;
use skirmish_core::commands::PlayerCommand;
use skirmish_core::constants::{MELEE_REACH, TARGET_START};
use skirmish_core::enums::WeaponType;
use skirmish_core::events::CombatEvent;
use skirmish_core::kinematics;
use skirmish_core::types::Position;

/// Log a snapshot summary every this many frames.
const LOG_EVERY_FRAMES: u64 = 30;

/// Center distance at which the melee approach stops. Well inside reach so
/// the forward lunge of each swing keeps the target in range.
const MELEE_APPROACH_DISTANCE: f64 = MELEE_REACH / 2.0;

const APPROACH_KEYS: [&str; 2] = ["d", "s"];

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let weapon_arg = std::env::args().nth(1).unwrap_or_else(|| "ranged".to_string());
    let weapon = match config::parse_weapon(&weapon_arg) {
        Ok(weapon) => weapon,
        Err(e) => {
            error!(error = %e, "usage: skirmish [ranged|melee]");
            return ExitCode::from(2);
        }
    };
    let app_config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };

    match run_session(&app_config, weapon) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session failed");
            ExitCode::FAILURE
        }
    }
}

/// Scripted session: pick the weapon, aim at the target, and keep pulling
/// the trigger. The engine's cooldown decides which pulls become attacks.
fn run_session(
    app_config: &AppConfig,
    weapon: WeaponType,
) -> Result<(), host::HostError> {
    let state = AppState::new();
    host::start_simulation(&state, app_config)?;

    let target_center = Position::new(TARGET_START.0, TARGET_START.1).center();
    host::send_command(&state, PlayerCommand::SelectWeapon { weapon })?;
    host::send_command(
        &state,
        PlayerCommand::PointerMoved {
            x: target_center.x,
            y: target_center.y,
        },
    )?;
    // Melee walks toward the target first and only swings once close.
    let mut approaching = weapon == WeaponType::Melee;
    if approaching {
        for key in APPROACH_KEYS {
            host::send_command(&state, PlayerCommand::KeyDown { key: key.into() })?;
        }
    }

    let frame_duration = app_config.frame_duration();
    let mut attacks = 0usize;
    let mut last_frame = 0u64;
    for frame in 0..app_config.run_frames {
        if !approaching {
            host::send_command(&state, PlayerCommand::Trigger)?;
        }
        std::thread::sleep(frame_duration);

        attacks += host::take_events(&state)?
            .iter()
            .filter(|e| matches!(e, CombatEvent::AttackTriggered { .. }))
            .count();

        let Some(snapshot) = host::get_snapshot(&state)? else {
            continue;
        };
        if snapshot.time.frame == last_frame {
            continue;
        }
        last_frame = snapshot.time.frame;

        let player = snapshot.player.position;
        if approaching && within_striking_distance(player, snapshot.target.position) {
            for key in APPROACH_KEYS {
                host::send_command(&state, PlayerCommand::KeyUp { key: key.into() })?;
            }
            approaching = false;
            info!(frame = snapshot.time.frame, "in reach; swinging");
        }

        if frame % LOG_EVERY_FRAMES == 0 {
            info!(
                frame = snapshot.time.frame,
                elapsed_ms = snapshot.time.elapsed_ms,
                player_x = snapshot.player.position.x,
                player_y = snapshot.player.position.y,
                target_health = snapshot.target.health.current,
                projectiles = snapshot.projectiles.len(),
                cooldown_ms = snapshot.cooldown_remaining_ms,
                "snapshot"
            );
        }
        if snapshot.target.health.is_depleted() {
            info!(frame = snapshot.time.frame, "target defeated");
            break;
        }
    }

    match host::get_snapshot(&state)? {
        Some(snapshot) => info!(
            attacks,
            frames = snapshot.time.frame,
            target_health = snapshot.target.health.current,
            "session finished"
        ),
        None => warn!("session finished without a snapshot"),
    }

    host::stop_simulation(&state)
}

/// Whether the melee approach can stop: centers within `MELEE_APPROACH_DISTANCE`.
fn within_striking_distance(player: Position, target: Position) -> bool {
    kinematics::distance(player.center(), target.center()) < MELEE_APPROACH_DISTANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_stops_inside_reach() {
        let target = Position::new(TARGET_START.0, TARGET_START.1);

        assert!(!within_striking_distance(Position::new(0.0, 0.0), target));
        // In reach but not yet at the approach distance.
        assert!(!within_striking_distance(Position::new(250.0, 300.0), target));
        assert!(within_striking_distance(Position::new(280.0, 290.0), target));

        // The stopping point leaves room for a full forward lunge.
        let lunge = skirmish_core::constants::RECOIL_FORCE;
        assert!(MELEE_APPROACH_DISTANCE + lunge < MELEE_REACH);
    }
}
