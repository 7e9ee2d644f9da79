//! ECS systems, components, and shared resources.

pub mod bolt;
pub mod debug;
pub mod driver;
pub mod hud;
pub mod input;
pub mod lifetime;
pub mod mode;
pub mod movement;
pub mod render;
pub mod spawn;
pub mod targeting;

pub use bolt::{bolt_flight_system, spawn_bolt, Bolt, Cannons};
pub use debug::DebugState;
pub use driver::{driver_system, DrivenAttr, Driver, Scale};
pub use hud::{scoreboard_system, ScoreBoard};
pub use input::{
    command_system, input_system, step_gate_system, translate_key_events, Bindings, Groups, Routing, SimpleKeyEvent,
    StepState,
};
pub use lifetime::{spawn_burst, time_to_live_system, Burst, BurstSize, TimeToLive};
pub use mode::{mode_system, phase_system, Banner, GameMode, ModeScope, ModeStack, Phase, PhaseStacks, Suspended};
pub use movement::{
    collision_watch_system, letter_follow_system, letter_offsets, ship_homing_system, PlayerShip, Position, Velocity,
};
pub use render::{debug_overlay_system, present_system, render_system, Renderable, UiLabel, Visual};
pub use spawn::{spawn_enemy_group, spawn_wave_system, wave_ship_count, SpawnWave};
pub use targeting::{targeting_system, ActiveWords, Health, LetterRow, LetterTile, TargetLock, Word};

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

/// Per-frame time step. `ticks` is the number of logical frames this step
/// represents; all animation math is tick-driven.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DeltaTime {
    pub seconds: f32,
    pub ticks: u32,
}

/// Engine-level flags read by the embedding loop.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GlobalState {
    pub exit: bool,
}

/// The simulation RNG. Seeded deterministically in tests.
#[derive(Resource, Debug)]
pub struct GameRng(pub SmallRng);

/// Coarse role tag; capabilities are composed from components, this tag only
/// answers "what is this" for counting and debug output.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Enemy,
    Letter,
    Bolt,
    Effect,
    Ui,
}
