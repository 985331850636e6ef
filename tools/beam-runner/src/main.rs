//! beam-runner: headless driver for the heat tractor-beam turret.
//!
//! Usage:
//!   beam-runner run --definition turret.json --ticks 600 --enemies 8 --every 60
//!   beam-runner inspect --definition turret.json

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use glam::Vec2;
use log::{info, warn};
use serde::Serialize;

use heatbeam_core::definition::{TurretDefinition, TurretStats};
use heatbeam_core::enums::Team;
use heatbeam_core::state::{DrawCommand, FrameSnapshot};
use heatbeam_sim::systems::render::{self, FrameTime, GlowClock};
use heatbeam_sim::{SimConfig, SimulationEngine};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "inspect" => cmd_inspect(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "beam-runner: heat tractor-beam turret driver\n\
         \n\
         Commands:\n\
         \n\
         run       Place one turret, spawn a ring of enemies and tick\n\
         \n\
           --definition <path> Turret definition JSON (optional, default built in)\n\
           --ticks <N>         Ticks to simulate (default: 600)\n\
           --seed <N>          RNG seed (default: 42)\n\
           --enemies <N>       Hostile units on the ring (default: 8)\n\
           --radius <R>        Ring radius in world units (default: 100)\n\
           --every <N>         Print a frame every N ticks (default: 60)\n\
           --draw              Include the turret draw list in each printed frame\n\
           --save <path>       Write the turret's persisted state when done\n\
         \n\
         inspect   Print a definition with its derived stats\n\
         \n\
           --definition <path> Turret definition JSON (optional)\n"
    );
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            match args[i + 1].parse::<T>() {
                Ok(v) => return v,
                Err(_) => {
                    eprintln!("Error: invalid value for {flag}: {}", args[i + 1]);
                    process::exit(1);
                }
            }
        }
    }
    default
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn load_definition(args: &[String]) -> TurretDefinition {
    let Some(path) = parse_path(args, "--definition") else {
        return TurretDefinition::default();
    };
    match TurretDefinition::from_json_file(&path) {
        Ok(def) => {
            info!("loaded definition `{}` from {}", def.name, path.display());
            def
        }
        Err(e) => {
            eprintln!("Error: {}: {e}", path.display());
            process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: failed to serialize output: {e}");
            process::exit(1);
        }
    }
}

// --- Run command ---

#[derive(Serialize)]
struct FrameReport<'a> {
    frame: &'a FrameSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    draw: Option<Vec<DrawCommand>>,
}

fn cmd_run(args: &[String]) {
    let definition = Arc::new(load_definition(args));
    let ticks: u64 = parse_flag(args, "--ticks", 600);
    let seed: u64 = parse_flag(args, "--seed", 42);
    let enemies: usize = parse_flag(args, "--enemies", 8);
    let radius: f32 = parse_flag(args, "--radius", 100.0);
    let every: u64 = parse_flag(args, "--every", 60).max(1);
    let draw = args.iter().any(|a| a == "--draw");
    let save = parse_path(args, "--save");

    let config = SimConfig {
        seed,
        ..Default::default()
    };
    let delta = config.delta;
    let mut engine = SimulationEngine::new(config);
    let turret = engine.place_turret(Arc::clone(&definition), Vec2::ZERO, Team::SHARDED);
    engine.spawn_ring(enemies, Vec2::ZERO, radius, 0.5, Team::CRUX);

    let mut glow = GlowClock::default();
    let mut effects = 0usize;
    for _ in 0..ticks {
        let frame = engine.tick();
        effects += frame.effects.len();

        // The glow clock advances every frame, reported or not.
        let commands: Vec<DrawCommand> = frame
            .turrets
            .iter()
            .flat_map(|snap| {
                render::describe(
                    snap,
                    &definition,
                    &mut glow,
                    FrameTime {
                        time: frame.time.elapsed,
                        delta,
                    },
                )
            })
            .collect();

        if frame.time.tick % every == 0 {
            print_json(&FrameReport {
                frame: &frame,
                draw: draw.then_some(commands),
            });
        }
    }

    let survivors = engine.world().len();
    info!(
        "ran {} ticks: {} of {} enemies left, {} cool effects",
        ticks, survivors, enemies, effects
    );

    if let Some(path) = save {
        match engine.save_turret(turret) {
            Some(Ok(bytes)) => {
                if let Err(e) = std::fs::write(&path, &bytes) {
                    eprintln!("Error: {}: {e}", path.display());
                    process::exit(1);
                }
                info!("wrote {} bytes of turret state to {}", bytes.len(), path.display());
            }
            Some(Err(e)) => {
                eprintln!("Error: failed to save turret: {e}");
                process::exit(1);
            }
            None => warn!("turret {turret} no longer placed, nothing saved"),
        }
    }
}

// --- Inspect command ---

#[derive(Serialize)]
struct Inspection<'a> {
    definition: &'a TurretDefinition,
    stats: TurretStats,
    world_size: f32,
    clip_size: f32,
    icon_regions: [String; 2],
}

fn cmd_inspect(args: &[String]) {
    let definition = load_definition(args);
    print_json(&Inspection {
        stats: definition.stats(),
        world_size: definition.world_size(),
        clip_size: definition.clip_size(),
        icon_regions: definition.icon_regions(),
        definition: &definition,
    });
}
