#![allow(dead_code)]

use bevy_ecs::{entity::Entity, event::Events, system::RunSystemOnce, world::World};
use glam::Vec2;
use rand::{rngs::SmallRng, SeedableRng};
use zpype::{
    constants::player_rest,
    dictionary::WordBank,
    events::{GameEvent, KeyTyped, ModeTransition, ShotOutcome},
    systems::{
        spawn_enemy_group, targeting_system, ActiveWords, Bindings, Cannons, DebugState, DeltaTime, EntityKind,
        GameRng, GlobalState, ModeStack, PhaseStacks, PlayerShip, Position, Renderable, Routing, ScoreBoard,
        SpawnWave, StepState, TargetLock, Visual,
    },
};

/// Creates a test world with the event channels and resources the gameplay
/// systems expect. The RNG is seeded so spawn tests are deterministic.
pub fn create_test_world() -> World {
    let mut world = World::new();

    world.insert_resource(Events::<GameEvent>::default());
    world.insert_resource(Events::<KeyTyped>::default());
    world.insert_resource(Events::<ShotOutcome>::default());
    world.insert_resource(Events::<ModeTransition>::default());
    world.insert_resource(Events::<SpawnWave>::default());

    world.insert_resource(GlobalState::default());
    world.insert_resource(DebugState::default());
    world.insert_resource(StepState::default());
    world.insert_resource(Bindings::default());
    world.insert_resource(Routing::default());
    world.insert_resource(TargetLock::default());
    world.insert_resource(ActiveWords::default());
    world.insert_resource(ScoreBoard::default());
    world.insert_resource(ModeStack::default());
    world.insert_resource(PhaseStacks::default());
    world.insert_resource(GameRng(SmallRng::seed_from_u64(42)));
    world.insert_resource(DeltaTime {
        seconds: 1.0 / 60.0,
        ticks: 1,
    }); // 60 TPS

    world
}

/// Builds a word bank from a fixed list.
pub fn test_bank(words: &[&str]) -> WordBank {
    WordBank::from_text(&words.join("\n")).expect("test bank should not be empty")
}

/// Spawns the player ship at its resting position.
pub fn spawn_test_player(world: &mut World) -> Entity {
    world
        .spawn((
            EntityKind::Player,
            PlayerShip,
            Cannons::default(),
            Position(player_rest()),
            Renderable {
                visual: Visual::PlayerShip,
                layer: 0,
            },
        ))
        .id()
}

/// Spawns a full enemy group (ship plus letter row) and registers it.
pub fn spawn_test_enemy(world: &mut World, word: &str, at: Vec2) -> Entity {
    let ship = {
        let mut commands = world.commands();
        spawn_enemy_group(&mut commands, word, at)
    };
    world.flush();
    world.resource_mut::<ActiveWords>().0.push(ship);
    ship
}

/// Sends typed characters and runs the targeting resolver once, returning
/// the outcomes in order.
pub fn type_chars(world: &mut World, chars: &str) -> Vec<ShotOutcome> {
    world.resource_mut::<Events<KeyTyped>>().clear();
    world.resource_mut::<Events<ShotOutcome>>().clear();
    for ch in chars.chars() {
        world.resource_mut::<Events<KeyTyped>>().send(KeyTyped(ch));
    }
    world
        .run_system_once(targeting_system)
        .expect("targeting system should run");
    world.resource_mut::<Events<ShotOutcome>>().drain().collect()
}

/// Sends a single mode transition and applies it, leaving the channel empty
/// so later assertions see only transitions the systems under test emit.
pub fn apply_transition(world: &mut World, transition: ModeTransition) {
    world.resource_mut::<Events<ModeTransition>>().clear();
    world.resource_mut::<Events<ModeTransition>>().send(transition);
    world
        .run_system_once(zpype::systems::mode_system)
        .expect("mode system should run");
    world.resource_mut::<Events<ModeTransition>>().clear();
}

/// Entities currently carrying a given kind tag.
pub fn count_kind(world: &mut World, kind: EntityKind) -> usize {
    world
        .query::<&EntityKind>()
        .iter(world)
        .filter(|&&k| k == kind)
        .count()
}
