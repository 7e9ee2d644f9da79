use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use speculoos::prelude::*;
use zpype::constants::mechanics::BURST_TICKS;
use zpype::systems::{
    spawn_burst, time_to_live_system, Burst, BurstSize, Driver, EntityKind, GameMode, ModeScope, Scale,
    TimeToLive,
};

mod common;

#[test]
fn test_time_to_live_counts_down_and_despawns() {
    let mut world = common::create_test_world();
    let entity = world.spawn(TimeToLive { remaining_ticks: 3 }).id();

    world.run_system_once(time_to_live_system).unwrap();
    world.run_system_once(time_to_live_system).unwrap();
    assert_that(&world.get_entity(entity).is_ok()).is_true();

    world.run_system_once(time_to_live_system).unwrap();
    assert_that(&world.get_entity(entity).is_ok()).is_false();
}

#[test]
fn test_burst_carries_its_animation_and_lifetime() {
    let mut world = common::create_test_world();
    {
        let mut commands = world.commands();
        spawn_burst(&mut commands, GameMode::Playing, Vec2::new(100.0, 100.0), BurstSize::Large);
    }
    world.flush();

    let (kind, burst, ttl, scope) = world
        .query::<(&EntityKind, &Burst, &TimeToLive, &ModeScope)>()
        .single(&world)
        .expect("one burst");
    assert_that(kind).is_equal_to(&EntityKind::Effect);
    assert_that(&burst.radius).is_equal_to(18.0);
    assert_that(&ttl.remaining_ticks).is_equal_to(BURST_TICKS);
    assert_that(scope).is_equal_to(&ModeScope(GameMode::Playing));

    let animated = world
        .query_filtered::<(), (bevy_ecs::prelude::With<Driver>, bevy_ecs::prelude::With<Scale>)>()
        .iter(&world)
        .count();
    assert_that(&animated).is_equal_to(1);
}

#[test]
fn test_small_burst_is_smaller() {
    let mut world = common::create_test_world();
    {
        let mut commands = world.commands();
        spawn_burst(&mut commands, GameMode::Playing, Vec2::ZERO, BurstSize::Small);
    }
    world.flush();

    let burst = world.query::<&Burst>().single(&world).expect("one burst");
    assert_that(&burst.radius).is_equal_to(6.0);
}
