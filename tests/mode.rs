use bevy_ecs::{event::Events, system::RunSystemOnce};
use glam::Vec2;
use speculoos::prelude::*;
use zpype::constants::mechanics::WAVE_BASE_SHIPS;
use zpype::events::ModeTransition;
use zpype::systems::{
    phase_system, ActiveWords, Banner, Driver, EntityKind, GameMode, Groups, ModeStack, Phase, PhaseStacks,
    PlayerShip, Routing, ScoreBoard, SpawnWave, Suspended, TargetLock,
};

mod common;

#[test]
fn test_push_suspends_the_covered_mode_and_pop_resumes_it() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Playing));
    let ship = common::spawn_test_enemy(&mut world, "dog", Vec2::new(200.0, 100.0));

    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Paused));
    assert_that(&world.entity(ship).contains::<Suspended>()).is_true();
    assert_that(&world.resource::<ModeStack>().depth()).is_equal_to(2);

    common::apply_transition(&mut world, ModeTransition::Pop);
    assert_that(&world.entity(ship).contains::<Suspended>()).is_false();
    assert_that(&world.resource::<ModeStack>().current()).is_equal_to(Some(GameMode::Playing));
}

#[test]
fn test_pop_despawns_the_leaving_modes_entities() {
    let mut world = common::create_test_world();
    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Playing));
    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Paused));

    // The pause overlay owns at least its label.
    assert_that(&(common::count_kind(&mut world, EntityKind::Ui) >= 1)).is_true();

    common::apply_transition(&mut world, ModeTransition::Pop);
    assert_that(&common::count_kind(&mut world, EntityKind::Ui)).is_equal_to(0);
}

#[test]
fn test_leaving_playing_clears_the_field_and_the_lock() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Playing));
    let ship = common::spawn_test_enemy(&mut world, "dog", Vec2::new(200.0, 100.0));
    world.resource_mut::<TargetLock>().0 = Some(ship);

    common::apply_transition(&mut world, ModeTransition::Switch(GameMode::Outro));

    assert_that(&world.get_entity(ship).is_ok()).is_false();
    assert_that(&common::count_kind(&mut world, EntityKind::Letter)).is_equal_to(0);
    assert_that(&world.resource::<ActiveWords>().0.is_empty()).is_true();
    assert_that(&world.resource::<TargetLock>().0).is_none();
}

#[test]
fn test_menu_entry_retires_the_player_and_resets_the_score() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    world.resource_mut::<ScoreBoard>().hits = 12;

    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Menu));

    assert_that(&common::count_kind(&mut world, EntityKind::Player)).is_equal_to(0);
    assert_that(&world.resource::<ScoreBoard>().hits).is_equal_to(0);
}

#[test]
fn test_applied_transitions_do_not_linger_in_the_channel() {
    let mut world = common::create_test_world();
    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Menu));
    common::apply_transition(&mut world, ModeTransition::Switch(GameMode::Playing));

    // Only transitions emitted by systems under test may be drained later.
    assert_that(&world.resource::<Events<ModeTransition>>().is_empty()).is_true();
}

#[test]
fn test_routing_follows_the_top_mode() {
    let mut world = common::create_test_world();

    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Menu));
    assert_that(&world.resource::<Routing>().0).is_equal_to(Groups::CONTROL | Groups::MENU);

    common::apply_transition(&mut world, ModeTransition::Switch(GameMode::Playing));
    assert_that(&world.resource::<Routing>().0).is_equal_to(Groups::CONTROL | Groups::TYPING);

    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Paused));
    assert_that(&world.resource::<Routing>().0).is_equal_to(Groups::CONTROL);
}

#[test]
fn test_intro_slides_the_player_in_then_switches_to_playing() {
    let mut world = common::create_test_world();
    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Intro));

    let player = world
        .query_filtered::<bevy_ecs::entity::Entity, bevy_ecs::prelude::With<PlayerShip>>()
        .single(&world)
        .expect("entrance should spawn the player");
    assert_that(&world.entity(player).contains::<Driver>()).is_true();

    // Still sliding; the phase holds.
    world.resource_mut::<Events<ModeTransition>>().clear();
    world.run_system_once(phase_system).unwrap();
    assert_that(&world.resource::<Events<ModeTransition>>().is_empty()).is_true();

    // Entrance settled.
    world.entity_mut(player).remove::<Driver>();
    world.run_system_once(phase_system).unwrap();
    let transitions: Vec<ModeTransition> = world.resource_mut::<Events<ModeTransition>>().drain().collect();
    assert_that(&transitions).is_equal_to(vec![ModeTransition::Switch(GameMode::Playing)]);
}

#[test]
fn test_playing_phases_spawn_then_banner_then_play() {
    let mut world = common::create_test_world();
    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Playing));

    // Top phase fields the first wave and pops itself.
    world.run_system_once(phase_system).unwrap();
    let waves: Vec<SpawnWave> = world.resource_mut::<Events<SpawnWave>>().drain().collect();
    assert_that(&waves).is_equal_to(vec![SpawnWave { count: WAVE_BASE_SHIPS }]);
    assert_that(&world.resource::<PhaseStacks>().top(GameMode::Playing))
        .is_equal_to(Some(Phase::WaveBanner { started: false }));

    // The banner phase raises its animated banner.
    world.run_system_once(phase_system).unwrap();
    let banners = world
        .query_filtered::<(), bevy_ecs::prelude::With<Banner>>()
        .iter(&world)
        .count();
    assert_that(&banners).is_equal_to(1);
    assert_that(&world.resource::<PhaseStacks>().top(GameMode::Playing))
        .is_equal_to(Some(Phase::WaveBanner { started: true }));
}

#[test]
fn test_clear_field_queues_the_next_wave() {
    let mut world = common::create_test_world();
    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Playing));
    world.resource_mut::<PhaseStacks>().0.insert(
        GameMode::Playing,
        smallvec::smallvec![Phase::Play],
    );

    world.run_system_once(phase_system).unwrap();

    assert_that(&world.resource::<ScoreBoard>().wave).is_equal_to(2);
    assert_that(&world.resource::<PhaseStacks>().top(GameMode::Playing)).is_equal_to(Some(Phase::SpawnWave));
}

#[test]
fn test_play_phase_holds_while_ships_remain() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    common::apply_transition(&mut world, ModeTransition::Push(GameMode::Playing));
    common::spawn_test_enemy(&mut world, "dog", Vec2::new(200.0, 100.0));
    world.resource_mut::<PhaseStacks>().0.insert(
        GameMode::Playing,
        smallvec::smallvec![Phase::Play],
    );

    world.run_system_once(phase_system).unwrap();

    assert_that(&world.resource::<ScoreBoard>().wave).is_equal_to(1);
    assert_that(&world.resource::<PhaseStacks>().top(GameMode::Playing)).is_equal_to(Some(Phase::Play));
}
