//! The ECS world, schedule, and per-frame tick.

use bevy_ecs::event::{event_update_system, EventRegistry};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::world::World;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;
use tracing::{debug, info};

use crate::asset::Asset;
use crate::dictionary::WordBank;
use crate::error::{GameError, GameResult};
use crate::events::{GameEvent, KeyTyped, ModeTransition, ShotOutcome};
use crate::systems::{
    self, ActiveWords, Bindings, DebugState, DeltaTime, GameMode, GameRng, GlobalState, ModeStack, PhaseStacks,
    Routing, ScoreBoard, SpawnWave, StepState, TargetLock,
};

/// System set for all gameplay systems to ensure they run after input processing.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Systems that translate and route raw input
    Input,
    /// Systems that mutate gameplay state
    Update,
    /// Systems that respond to transition events
    Respond,
}

/// System set for all rendering systems to ensure they run after gameplay logic.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum RenderSet {
    Animation,
    Draw,
    Present,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// All simulation state lives in the `World`; the `Schedule` fixes system
/// execution order. SDL2 resources are stored as `NonSend` to respect their
/// thread affinity.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Builds the world: loads the dictionary, registers events, inserts
    /// resources, configures the schedule, and queues the initial menu mode.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Dictionary` if the embedded word list yields no
    /// usable words; this is the one fatal startup condition.
    pub fn new(canvas: Canvas<Window>, event_pump: EventPump) -> GameResult<Game> {
        info!("Starting game initialization");

        debug!("Loading word dictionary");
        let bank = WordBank::from_text(&Asset::Words.get_text()?).map_err(GameError::from)?;
        info!(words = bank.len(), "Dictionary ready");

        let mut world = World::default();
        let mut schedule = Schedule::default();

        Self::setup_ecs(&mut world);
        Self::insert_resources(&mut world, bank, canvas, event_pump);
        Self::configure_schedule(&mut schedule);

        // The menu takes the stage on the first tick.
        world.send_event(ModeTransition::Push(GameMode::Menu));

        info!("Game initialization completed");
        Ok(Game { world, schedule })
    }

    fn setup_ecs(world: &mut World) {
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<KeyTyped>(world);
        EventRegistry::register_event::<ShotOutcome>(world);
        EventRegistry::register_event::<ModeTransition>(world);
        EventRegistry::register_event::<SpawnWave>(world);
    }

    fn insert_resources(world: &mut World, bank: WordBank, canvas: Canvas<Window>, event_pump: EventPump) {
        world.insert_resource(bank);
        world.insert_resource(GlobalState::default());
        world.insert_resource(DeltaTime { seconds: 0.0, ticks: 0 });
        world.insert_resource(Bindings::default());
        world.insert_resource(Routing::default());
        world.insert_resource(StepState::default());
        world.insert_resource(DebugState::default());
        world.insert_resource(TargetLock::default());
        world.insert_resource(ActiveWords::default());
        world.insert_resource(ScoreBoard::default());
        world.insert_resource(ModeStack::default());
        world.insert_resource(PhaseStacks::default());
        world.insert_resource(GameRng(SmallRng::from_rng(&mut rand::rng())));

        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource::<&'static mut Canvas<Window>>(Box::leak(Box::new(canvas)));
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule
            .add_systems((
                // Double-buffer rotation; events live for two frames.
                event_update_system.before(GameplaySet::Input),
                (systems::input_system, systems::step_gate_system, systems::command_system)
                    .chain()
                    .in_set(GameplaySet::Input),
                (
                    systems::spawn_wave_system,
                    systems::targeting_system,
                    systems::bolt_flight_system,
                    systems::ship_homing_system,
                    systems::letter_follow_system,
                    systems::collision_watch_system,
                    systems::time_to_live_system,
                    systems::scoreboard_system,
                )
                    .chain()
                    .in_set(GameplaySet::Update),
                (systems::mode_system, systems::phase_system).chain().in_set(GameplaySet::Respond),
                systems::driver_system.in_set(RenderSet::Animation),
                (systems::render_system, systems::debug_overlay_system)
                    .chain()
                    .in_set(RenderSet::Draw),
                systems::present_system.in_set(RenderSet::Present),
            ))
            .configure_sets(
                (
                    GameplaySet::Input,
                    GameplaySet::Update.run_if(|modes: bevy_ecs::system::Res<ModeStack>| {
                        modes.current() == Some(GameMode::Playing)
                    }),
                    GameplaySet::Respond,
                    RenderSet::Animation,
                    RenderSet::Draw,
                    RenderSet::Present,
                )
                    .chain(),
            );
    }

    /// Executes one frame of game logic by running all scheduled systems.
    ///
    /// Returns `true` if the game should terminate.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.world.insert_resource(DeltaTime { seconds: dt, ticks: 1 });
        self.schedule.run(&mut self.world);

        self.world
            .get_resource::<GlobalState>()
            .map(|state| state.exit)
            .unwrap_or(true)
    }
}
