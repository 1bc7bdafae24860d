//! Squad manager: the top-level registry of the squad AI.
//!
//! `SquadManager` owns every squad, processes queued commands, runs the
//! per-squad systems each update and hands events to the registered observer.
//! Explicitly constructed and owned by whoever runs the game loop; there is
//! no global instance. Completely headless, enabling deterministic testing.

use std::collections::{HashSet, VecDeque};

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use fireteam_ai::{morale, revive};
use fireteam_core::commands::SquadCommand;
use fireteam_core::config::Tuning;
use fireteam_core::constants::{CALLSIGNS, MARINE_NAMES, SQUAD_SIZE};
use fireteam_core::enums::{FormationKind, MarineState, OrderKind};
use fireteam_core::error::SquadError;
use fireteam_core::events::SquadEvent;
use fireteam_core::state::SquadSnapshot;
use fireteam_core::types::{Enemy, SimTime};

use crate::marine::Marine;
use crate::observer::{self, SquadObserver};
use crate::squad::Squad;
use crate::systems::{self, casualty, TickContext};

/// Configuration for a new squad manager.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same names and callout lines.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: Tuning::default(),
        }
    }
}

/// The squad manager. Owns all squads and their marines.
pub struct SquadManager {
    tuning: Tuning,
    rng: ChaCha8Rng,
    time: SimTime,
    squads: Vec<Squad>,
    used_name_indices: HashSet<usize>,
    cover_points: Vec<Vec3>,
    command_queue: VecDeque<SquadCommand>,
    /// Events raised since the last update returned.
    events: Vec<SquadEvent>,
    /// How many of `events` the observer has already seen.
    dispatched: usize,
    observer: Option<Box<dyn SquadObserver>>,
}

impl SquadManager {
    /// Create an empty manager with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            tuning: config.tuning,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            time: SimTime::default(),
            squads: Vec::new(),
            used_name_indices: HashSet::new(),
            cover_points: Vec::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            dispatched: 0,
            observer: None,
        }
    }

    /// Register the callback target for comms, notifications, revives and wipes.
    pub fn set_observer(&mut self, observer: impl SquadObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Replace the cover candidates supplied by level data.
    pub fn set_cover_points(&mut self, points: Vec<Vec3>) {
        self.cover_points = points;
    }

    /// Create `count` squads at `origin`. Returns the indices of the new squads.
    pub fn create_squads(&mut self, count: usize, origin: Vec3) -> Vec<usize> {
        let mut created = Vec::with_capacity(count);
        for _ in 0..count {
            let index = self.squads.len();
            let callsign = CALLSIGNS
                .get(index)
                .map(|c| c.to_string())
                .unwrap_or_else(|| format!("SQUAD-{}", index + 1));
            let names = (0..SQUAD_SIZE).map(|_| self.draw_name()).collect();
            let squad = Squad::new(index, callsign, origin, names, &self.tuning);
            log::info!("{} squad formed at {:?}", squad.callsign, origin);
            self.squads.push(squad);
            created.push(index);
        }
        created
    }

    /// Draw a marine name. Names do not repeat until the pool is exhausted.
    fn draw_name(&mut self) -> String {
        let pool = MARINE_NAMES.len();
        let index = if self.used_name_indices.len() < pool {
            let available: Vec<usize> = (0..pool)
                .filter(|i| !self.used_name_indices.contains(i))
                .collect();
            available[self.rng.gen_range(0..available.len())]
        } else {
            self.rng.gen_range(0..pool)
        };
        self.used_name_indices.insert(index);
        MARINE_NAMES[index].to_string()
    }

    /// Queue a command for processing at the next update boundary.
    pub fn queue_command(&mut self, command: SquadCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SquadCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the squad AI by `dt` seconds.
    ///
    /// Returns every event raised since the previous update, including those
    /// from direct calls such as `apply_damage` in between.
    pub fn update(&mut self, dt: f32, player: Vec3, enemies: &[Enemy]) -> Vec<SquadEvent> {
        self.process_commands();

        let dt = dt.max(0.0);
        let mut ctx = TickContext {
            tuning: &self.tuning,
            rng: &mut self.rng,
            events: &mut self.events,
            now: self.time.elapsed_secs,
        };
        for squad in &mut self.squads {
            // 1. Anchor movement
            systems::movement::run(squad, player, dt, ctx.tuning);
            // 2. Revive progression
            systems::revive::run(squad, player, dt, &mut ctx);
            // 3. Targeting, cover, marine state machine
            systems::combat::run(squad, enemies, &self.cover_points, dt, &mut ctx);
            // 4. Aggregates
            squad.refresh_counts();
            // 5. Morale recovery, skipped on a tick that cost the squad a marine
            if !squad.took_casualty {
                squad.morale = morale::recover(
                    squad.morale,
                    ctx.tuning.morale_recovery_rate,
                    dt,
                    squad.active_count,
                );
            }
            // 6. Callouts
            systems::callouts::run(squad, enemies, player, dt, &mut ctx);
            squad.took_casualty = false;
        }
        self.time.advance(dt);

        self.dispatch();
        self.dispatched = 0;
        std::mem::take(&mut self.events)
    }

    /// Process all queued commands. Failures are logged and dropped.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(e) = self.handle_command(command) {
                log::warn!("dropped squad command: {e}");
            }
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SquadCommand) -> Result<(), SquadError> {
        match command {
            SquadCommand::SetFormation {
                squad_index,
                formation,
            } => self.set_formation(squad_index, formation),
            SquadCommand::IssueOrder {
                squad_index,
                order,
                waypoint,
            } => self.issue_order(squad_index, order, waypoint),
            SquadCommand::IssueGlobalOrder { order } => {
                self.issue_global_order(order);
                Ok(())
            }
            SquadCommand::BeginRevive {
                marine_id,
                player_position,
            } => self.begin_revive(&marine_id, player_position),
            SquadCommand::CancelRevive { marine_id } => self.cancel_revive(&marine_id),
            SquadCommand::ApplyDamage { marine_id, amount } => {
                self.apply_damage(&marine_id, amount).map(|_| ())
            }
        }
    }

    // --- Orders ---

    pub fn set_formation(
        &mut self,
        squad_index: usize,
        formation: FormationKind,
    ) -> Result<(), SquadError> {
        let squad = self.squad_mut(squad_index)?;
        squad.set_formation(formation);
        log::debug!("{} formation -> {:?}", squad.callsign, formation);
        Ok(())
    }

    pub fn issue_order(
        &mut self,
        squad_index: usize,
        order: OrderKind,
        waypoint: Option<Vec3>,
    ) -> Result<(), SquadError> {
        let squad = self.squad_mut(squad_index)?;
        squad.issue_order(order, waypoint);
        log::debug!("{} order -> {:?} {:?}", squad.callsign, order, waypoint);
        Ok(())
    }

    /// Give every squad the same order. Global orders carry no waypoint, so
    /// each squad falls back to its own hold or retreat point.
    pub fn issue_global_order(&mut self, order: OrderKind) {
        for squad in &mut self.squads {
            squad.issue_order(order, None);
        }
        log::debug!("global order -> {:?}", order);
    }

    // --- Combat feed ---

    /// Damage a marine. Returns `Ok(false)` when the marine is inactive
    /// (downed or reviving), which makes the call a no-op.
    pub fn apply_damage(&mut self, marine_id: &str, amount: f32) -> Result<bool, SquadError> {
        let (squad_index, marine_index) = self.locate(marine_id)?;
        let squad = &mut self.squads[squad_index];
        let marine = &mut squad.marines[marine_index];
        if !marine.take_damage(amount) {
            return Ok(false);
        }
        let downed = marine.health <= 0.0;
        squad.recent_damage += amount.max(0.0);
        squad.last_damaged = Some(marine_index);

        if downed {
            let mut ctx = TickContext {
                tuning: &self.tuning,
                rng: &mut self.rng,
                events: &mut self.events,
                now: self.time.elapsed_secs,
            };
            casualty::down_marine(squad, marine_index, &mut ctx);
        }
        self.dispatch();
        Ok(true)
    }

    /// Reset a marine's fire cooldown to the weapon cadence after it fired.
    pub fn record_shot(&mut self, marine_id: &str) -> Result<(), SquadError> {
        let (squad_index, marine_index) = self.locate(marine_id)?;
        self.squads[squad_index].marines[marine_index].fire_cooldown = self.tuning.fire_interval;
        Ok(())
    }

    // --- Revive ---

    /// Player starts reviving a downed marine within reach.
    pub fn begin_revive(&mut self, marine_id: &str, player: Vec3) -> Result<(), SquadError> {
        let (squad_index, marine_index) = self.locate(marine_id)?;
        let proximity = self.tuning.revive_proximity;
        let marine = &mut self.squads[squad_index].marines[marine_index];
        let Some(next) = revive::begin(marine.state) else {
            return Err(SquadError::NotDowned {
                id: marine_id.to_string(),
            });
        };
        let distance = player.distance(marine.position);
        if distance > proximity {
            return Err(SquadError::OutOfReviveRange {
                id: marine_id.to_string(),
                distance,
            });
        }
        if marine.state != next {
            log::debug!("revive of {} started", marine.id);
            marine.state = next;
            marine.revive_progress = 0.0;
        }
        Ok(())
    }

    /// Player lets go of a revive. Cancelling a marine that is not being
    /// revived is a no-op.
    pub fn cancel_revive(&mut self, marine_id: &str) -> Result<(), SquadError> {
        let (squad_index, marine_index) = self.locate(marine_id)?;
        let marine = &mut self.squads[squad_index].marines[marine_index];
        if let Some(next) = revive::cancel(marine.state) {
            log::debug!("revive of {} cancelled", marine.id);
            marine.state = next;
            marine.revive_progress = 0.0;
        }
        Ok(())
    }

    /// Downed or reviving marines the player can reach from `player`.
    pub fn revivable_marines(&self, player: Vec3) -> Vec<&Marine> {
        self.all_marines()
            .into_iter()
            .filter(|m| {
                revive::is_revivable(m.state, player, m.position, self.tuning.revive_proximity)
            })
            .collect()
    }

    // --- Queries ---

    pub fn squads(&self) -> &[Squad] {
        &self.squads
    }

    pub fn squad(&self, index: usize) -> Option<&Squad> {
        self.squads.get(index)
    }

    pub fn marine(&self, marine_id: &str) -> Option<&Marine> {
        self.squads.iter().find_map(|s| s.marine(marine_id))
    }

    /// Every active marine across all squads.
    pub fn active_marines(&self) -> Vec<&Marine> {
        self.all_marines().into_iter().filter(|m| m.is_active).collect()
    }

    /// Every marine, downed ones included.
    pub fn all_marines(&self) -> Vec<&Marine> {
        self.squads.iter().flat_map(|s| s.marines.iter()).collect()
    }

    /// Marines in combat with a target and a spent fire cooldown.
    pub fn firing_marines(&self) -> Vec<&Marine> {
        self.all_marines().into_iter().filter(|m| m.can_fire()).collect()
    }

    pub fn total_active_count(&self) -> usize {
        self.squads.iter().map(|s| s.active_count).sum()
    }

    /// Marines currently in a given state.
    pub fn marines_in_state(&self, state: MarineState) -> Vec<&Marine> {
        self.all_marines().into_iter().filter(|m| m.state == state).collect()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Build a snapshot for the presentation layer.
    pub fn snapshot(&self) -> SquadSnapshot {
        systems::snapshot::build_snapshot(&self.squads, &self.time)
    }

    /// Release every squad and marine and forget which names were used.
    pub fn dispose(&mut self) {
        log::info!("disposing {} squads", self.squads.len());
        self.squads.clear();
        self.used_name_indices.clear();
        self.command_queue.clear();
        self.events.clear();
        self.dispatched = 0;
    }

    /// Get a mutable squad, or `SquadNotFound`.
    fn squad_mut(&mut self, index: usize) -> Result<&mut Squad, SquadError> {
        self.squads
            .get_mut(index)
            .ok_or(SquadError::SquadNotFound { index })
    }

    /// Find (squad index, marine index) for a marine id.
    fn locate(&self, marine_id: &str) -> Result<(usize, usize), SquadError> {
        self.squads
            .iter()
            .enumerate()
            .find_map(|(si, s)| s.marine_index(marine_id).map(|mi| (si, mi)))
            .ok_or_else(|| SquadError::MarineNotFound {
                id: marine_id.to_string(),
            })
    }

    /// Hand events the observer has not seen yet to it.
    fn dispatch(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            for event in &self.events[self.dispatched..] {
                observer::notify(&mut **observer, event);
            }
        }
        self.dispatched = self.events.len();
    }
}
