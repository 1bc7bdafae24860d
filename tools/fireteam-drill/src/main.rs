//! fireteam-drill: headless skirmish driver for the squad AI.
//!
//! Spawns squads, walks a hostile wave into them and plays the player as a
//! medic who runs to downed marines. Comms traffic goes to the log.
//!
//! Usage:
//!   fireteam-drill --seed 7 --squads 3 --ticks 1200
//!   fireteam-drill --tuning drill.json

use std::path::PathBuf;
use std::process;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use fireteam_ai::targeting::hit_chance;
use fireteam_core::commands::SquadCommand;
use fireteam_core::config::Tuning;
use fireteam_core::enums::{MarineState, NotificationLevel, OrderKind, ThreatLevel};
use fireteam_core::events::{Notification, SquadEvent};
use fireteam_core::types::Enemy;
use fireteam_core::Vec3;
use fireteam_sim::{SimConfig, SquadManager, SquadObserver};

const DT: f32 = 0.1;
const OBJECTIVE: Vec3 = Vec3::new(0.0, 0.0, -150.0);
const WAVE_SIZE: usize = 14;
const ENEMY_SPEED: f32 = 2.5;
const ENEMY_ENGAGE_RANGE: f32 = 30.0;
const ENEMY_HOLD_RANGE: f32 = 18.0;
const ENEMY_ATTACK_INTERVAL: f32 = 1.0;
const ENEMY_HIT_CHANCE: f32 = 0.4;
const MARINE_SHOT_DAMAGE: f32 = 25.0;
const PLAYER_SPEED: f32 = 6.0;

struct DrillArgs {
    seed: u64,
    squads: usize,
    ticks: u64,
    tuning: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args
        .iter()
        .skip(1)
        .any(|a| a == "help" || a == "--help" || a == "-h")
    {
        print_usage();
        return;
    }

    let drill = parse_args(&args[1..]);
    let tuning = match &drill.tuning {
        Some(path) => load_tuning(path),
        None => Tuning::default(),
    };

    run(&drill, tuning);
}

fn print_usage() {
    eprintln!(
        "fireteam-drill: FIRETEAM squad AI skirmish driver\n\
         \n\
           --seed <N>       RNG seed (default: 42)\n\
           --squads <N>     Number of squads (default: 2)\n\
           --ticks <N>      Ticks of {DT}s to simulate (default: 1800)\n\
           --tuning <path>  JSON tuning overrides (optional)\n\
         \n\
         Set RUST_LOG=debug for per-marine state changes.\n"
    );
}

fn parse_value<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
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

fn parse_tuning_path(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--tuning" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_args(args: &[String]) -> DrillArgs {
    DrillArgs {
        seed: parse_value(args, "--seed", 42),
        squads: parse_value(args, "--squads", 2),
        ticks: parse_value(args, "--ticks", 1800),
        tuning: parse_tuning_path(args),
    }
}

fn load_tuning(path: &PathBuf) -> Tuning {
    let json = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: cannot read {}: {e}", path.display());
            process::exit(1);
        }
    };
    match Tuning::from_json(&json) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}: {e}", path.display());
            process::exit(1);
        }
    }
}

/// Prints radio traffic the way the HUD would show it.
struct CommsLog;

impl SquadObserver for CommsLog {
    fn on_comms_message(&mut self, sender: &str, text: &str) {
        log::info!("[comms] {sender}: {text}");
    }

    fn on_notification(&mut self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Critical => log::warn!("[hud] {}", notification.message),
            _ => log::info!("[hud] {}", notification.message),
        }
    }
}

struct Hostile {
    enemy: Enemy,
    attack_cooldown: f32,
}

fn spawn_wave(rng: &mut ChaCha8Rng) -> Vec<Hostile> {
    (0..WAVE_SIZE)
        .map(|i| {
            let threat = match rng.gen_range(0..10) {
                0 => ThreatLevel::High,
                1..=3 => ThreatLevel::Medium,
                _ => ThreatLevel::Low,
            };
            let health = match threat {
                ThreatLevel::High => 300.0,
                ThreatLevel::Medium => 150.0,
                ThreatLevel::Low => 60.0,
            };
            let x = (i as f32 - WAVE_SIZE as f32 / 2.0) * 6.0 + rng.gen_range(-2.0..2.0);
            let z = OBJECTIVE.z + rng.gen_range(-10.0..10.0);
            Hostile {
                enemy: Enemy::new(Vec3::new(x, 0.0, z), threat, health),
                attack_cooldown: rng.gen_range(0.0..ENEMY_ATTACK_INTERVAL),
            }
        })
        .collect()
}

fn enemy_damage(threat: ThreatLevel) -> f32 {
    match threat {
        ThreatLevel::High => 15.0,
        ThreatLevel::Medium => 8.0,
        ThreatLevel::Low => 4.0,
    }
}

fn run(drill: &DrillArgs, tuning: Tuning) {
    let mut manager = SquadManager::new(SimConfig {
        seed: drill.seed,
        tuning,
    });
    manager.set_observer(CommsLog);
    manager.create_squads(drill.squads, Vec3::ZERO);
    manager.queue_commands((0..drill.squads).map(|squad_index| SquadCommand::IssueOrder {
        squad_index,
        order: OrderKind::Advance,
        waypoint: Some(OBJECTIVE + Vec3::new(squad_index as f32 * 12.0, 0.0, 0.0)),
    }));

    // Offset so the drill's own rolls don't mirror the manager's stream.
    let mut rng = ChaCha8Rng::seed_from_u64(drill.seed.wrapping_add(0x5eed));
    let mut hostiles = spawn_wave(&mut rng);
    let mut player = Vec3::new(0.0, 0.0, 10.0);
    let mut downed_total = 0usize;
    let mut revived_total = 0usize;
    let mut callouts = 0usize;
    let mut ticks_run = 0u64;

    log::info!(
        "drill: seed {} | {} squads | {} hostiles",
        drill.seed,
        drill.squads,
        hostiles.len()
    );

    for _ in 0..drill.ticks {
        player = move_player(&mut manager, player);

        let enemies: Vec<Enemy> = hostiles.iter().map(|h| h.enemy).collect();
        for event in manager.update(DT, player, &enemies) {
            match event {
                SquadEvent::MarineDowned { .. } => downed_total += 1,
                SquadEvent::MarineRevived { .. } => revived_total += 1,
                SquadEvent::CommsMessage { .. } => callouts += 1,
                _ => {}
            }
        }
        ticks_run += 1;

        marines_fire(&mut manager, &mut hostiles, &mut rng);
        hostiles_act(&mut manager, &mut hostiles, &mut rng);

        if hostiles.is_empty() {
            log::info!("wave cleared at {:.1}s", manager.time().elapsed_secs);
            break;
        }
        if manager.squads().iter().all(|s| s.is_wiped) {
            log::warn!("all squads down at {:.1}s", manager.time().elapsed_secs);
            break;
        }
    }

    let snapshot = manager.snapshot();
    println!(
        "\n=== drill report ({ticks_run} ticks, {:.1}s) ===",
        snapshot.time.elapsed_secs
    );
    for squad in &snapshot.squads {
        println!(
            "{:<8} active {}/{}  morale {:.2}  {:?}{}",
            squad.callsign,
            squad.active_count,
            squad.marines.len(),
            squad.morale,
            squad.order,
            if squad.is_wiped { "  WIPED" } else { "" }
        );
    }
    println!(
        "hostiles left {} | downed {downed_total} | revived {revived_total} | callouts {callouts}",
        hostiles.len()
    );
}

/// Medic behaviour: run to the nearest downed marine and revive, otherwise
/// trail the first squad.
fn move_player(manager: &mut SquadManager, player: Vec3) -> Vec3 {
    if manager
        .all_marines()
        .iter()
        .any(|m| m.state == MarineState::Reviving)
    {
        return player;
    }

    let revivable = manager
        .revivable_marines(player)
        .first()
        .map(|m| m.id.clone());
    if let Some(marine_id) = revivable {
        manager.queue_command(SquadCommand::BeginRevive {
            marine_id,
            player_position: player,
        });
        return player;
    }

    let downed = manager
        .all_marines()
        .into_iter()
        .filter(|m| m.state.is_incapacitated())
        .map(|m| m.position)
        .min_by(|a, b| a.distance(player).total_cmp(&b.distance(player)));
    let target = match downed {
        Some(position) => position,
        None => match manager.squad(0) {
            Some(squad) => squad.position + Vec3::new(0.0, 0.0, 10.0),
            None => player,
        },
    };
    let delta = target - player;
    let distance = delta.length();
    if distance <= f32::EPSILON {
        return player;
    }
    player + delta / distance * distance.min(PLAYER_SPEED * DT)
}

/// Roll every ready marine's shot against the hostile nearest its target area.
fn marines_fire(manager: &mut SquadManager, hostiles: &mut Vec<Hostile>, rng: &mut ChaCha8Rng) {
    let range = manager.tuning().attack_range;
    let shooters: Vec<(String, Vec3, Vec3, f32)> = manager
        .squads()
        .iter()
        .flat_map(|s| {
            s.marines
                .iter()
                .filter(|m| m.can_fire())
                .filter_map(move |m| {
                    m.target_enemy_pos
                        .map(|t| (m.id.clone(), m.position, t, s.morale))
                })
        })
        .collect();

    for (id, from, target, morale) in shooters {
        if let Err(e) = manager.record_shot(&id) {
            log::warn!("{e}");
            continue;
        }
        let Some(victim) = hostiles
            .iter_mut()
            .min_by(|a, b| {
                a.enemy
                    .position
                    .distance(target)
                    .total_cmp(&b.enemy.position.distance(target))
            })
        else {
            continue;
        };
        let distance = from.distance(victim.enemy.position);
        if rng.gen::<f32>() < hit_chance(distance, range, morale) {
            victim.enemy.health -= MARINE_SHOT_DAMAGE;
        }
    }

    let before = hostiles.len();
    hostiles.retain(|h| h.enemy.health > 0.0);
    if hostiles.len() < before {
        log::debug!("{} hostiles down, {} left", before - hostiles.len(), hostiles.len());
    }
}

/// Hostiles close on the nearest active marine and shoot when in range.
fn hostiles_act(manager: &mut SquadManager, hostiles: &mut [Hostile], rng: &mut ChaCha8Rng) {
    for hostile in hostiles.iter_mut() {
        let nearest = manager
            .active_marines()
            .into_iter()
            .map(|m| (m.id.clone(), m.position))
            .min_by(|a, b| {
                a.1.distance(hostile.enemy.position)
                    .total_cmp(&b.1.distance(hostile.enemy.position))
            });
        let Some((marine_id, marine_pos)) = nearest else {
            return;
        };

        let delta = marine_pos - hostile.enemy.position;
        let distance = delta.length();
        if distance > ENEMY_HOLD_RANGE {
            let travel = (distance - ENEMY_HOLD_RANGE).min(ENEMY_SPEED * DT);
            hostile.enemy.position += delta / distance * travel;
        }

        hostile.attack_cooldown -= DT;
        if hostile.attack_cooldown > 0.0 || distance > ENEMY_ENGAGE_RANGE {
            continue;
        }
        hostile.attack_cooldown = ENEMY_ATTACK_INTERVAL;
        if rng.gen::<f32>() < ENEMY_HIT_CHANCE {
            let damage = enemy_damage(hostile.enemy.threat_level);
            if let Err(e) = manager.apply_damage(&marine_id, damage) {
                log::warn!("{e}");
            }
        }
    }
}
