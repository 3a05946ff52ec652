//! Headless runner: steps the physics core over a level at a fixed tick and
//! logs what the player does.

mod demo;

use std::path::PathBuf;

use clap::Parser;
use runner_physics::{
    CollidableRegistry, CollisionSettings, Config, ConfigError, ControlInput, LevelContent,
    MotionTuning, MovingPlatforms, PlayerController, RegistrySettings, Vec3,
};

/// Below this Y the player has fallen out of the level.
const KILL_Y: f32 = -20.0;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Level content (.ron or .toml). Defaults to the built-in demo level.
    #[clap(long)]
    level: Option<PathBuf>,

    /// Collision bands (.ron or .toml).
    #[clap(long)]
    collision: Option<PathBuf>,

    /// Registry geometry settings (.ron or .toml).
    #[clap(long)]
    registry: Option<PathBuf>,

    /// Motion tuning (.ron or .toml).
    #[clap(long)]
    tuning: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[clap(long, default_value_t = 600)]
    ticks: u32,

    /// Tick length in seconds.
    #[clap(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Press jump every N ticks (0 = never).
    #[clap(long, default_value_t = 40)]
    jump_every: u32,

    /// Crystals collected before the run starts (may open the boss gate).
    #[clap(long, default_value_t = 0)]
    crystals: u32,

    /// Write the level in use to this file (.ron or .toml) and exit.
    #[clap(long)]
    dump_level: Option<PathBuf>,
}

fn load_optional<T: Config>(path: Option<&PathBuf>) -> Result<T, ConfigError> {
    match path {
        Some(path) => T::load_from_file(path),
        None => Ok(T::default()),
    }
}

fn main() -> Result<(), ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut level = match &args.level {
        Some(path) => {
            log::info!("Loading level from {}", path.display());
            LevelContent::load_from_file(path)?
        }
        None => demo::demo_level(),
    };

    if let Some(path) = &args.dump_level {
        level.save_to_file(path)?;
        log::info!("Level written to {}", path.display());
        return Ok(());
    }

    let collision: CollisionSettings = load_optional(args.collision.as_ref())?;
    let registry_settings: RegistrySettings = load_optional(args.registry.as_ref())?;
    let tuning: MotionTuning = load_optional(args.tuning.as_ref())?;

    if level.unlock_gate(args.crystals) {
        log::info!("Boss gate unlocked with {} crystals", args.crystals);
    }

    let mut registry = CollidableRegistry::new(registry_settings);
    registry.rebuild(&level);
    let mut platforms = MovingPlatforms::new(&level);
    log::info!(
        "Level ready: {} collidables, {} moving platforms",
        registry.len(),
        platforms.len()
    );
    if registry.settings().mirror_scene {
        log::info!("Scene mirrored around the Y axis");
    }

    let mut player = PlayerController::new(Vec3::from(demo::SPAWN), tuning);
    log::debug!("Motion tuning: {:?}", player.tuning());
    let dt = args.dt.max(f32::EPSILON);
    let ticks_per_second = ((1.0 / dt).round() as u32).max(1);

    for tick in 0..args.ticks {
        // Rebuilding keeps entry order, so the player's grounded handle stays valid.
        if !platforms.is_empty() && platforms.advance(dt, &mut level) {
            registry.rebuild(&level);
        }

        let input = ControlInput {
            advance: true,
            jump: args.jump_every > 0 && tick > 0 && tick % args.jump_every == 0,
        };
        let result = player.step(input, dt, registry.entries(), &collision);

        if (tick + 1) % ticks_per_second == 0 {
            log::info!(
                "t={:.1}s pos=({:.2}, {:.2}, {:.2}) vel=({:.2}, {:.2}, {:.2}) grounded={}",
                (tick + 1) as f32 * dt,
                result.position.x,
                result.position.y,
                result.position.z,
                result.velocity.x,
                result.velocity.y,
                result.velocity.z,
                result.is_grounded,
            );
        }

        if result.position.y < KILL_Y {
            log::warn!(
                "Player fell out of the level at z={:.2} (tick {})",
                result.position.z,
                tick
            );
            break;
        }
    }

    let state = player.state;
    log::info!(
        "Finished at ({:.2}, {:.2}, {:.2}), grounded={}, speed={:.2}/{:.2}",
        state.position.x,
        state.position.y,
        state.position.z,
        state.is_grounded,
        player.run_speed(),
        player.tuning().run_speed
    );
    Ok(())
}
