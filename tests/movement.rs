use bevy_ecs::{event::Events, system::RunSystemOnce};
use glam::Vec2;
use speculoos::prelude::*;
use zpype::constants::mechanics::SHIP_SPEED;
use zpype::constants::ui::LETTER_CELL;
use zpype::constants::player_rest;
use zpype::events::ModeTransition;
use zpype::systems::{
    collision_watch_system, letter_follow_system, letter_offsets, ship_homing_system, GameMode, LetterRow,
    LetterTile, Position, Suspended,
};

mod common;

#[test]
fn test_ships_home_one_step_toward_the_player() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    let ship = common::spawn_test_enemy(&mut world, "dog", Vec2::new(240.0, 100.0));

    let before = world.entity(ship).get::<Position>().unwrap().0;
    world.run_system_once(ship_homing_system).unwrap();
    let after = world.entity(ship).get::<Position>().unwrap().0;

    let goal = player_rest();
    assert_that(&(after.distance(goal) < before.distance(goal))).is_true();
    assert_that(&((before.distance(after) - SHIP_SPEED).abs() < 1e-4)).is_true();
}

#[test]
fn test_homing_at_the_goal_is_a_no_op() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    let ship = common::spawn_test_enemy(&mut world, "dog", player_rest());

    world.run_system_once(ship_homing_system).unwrap();
    let after = world.entity(ship).get::<Position>().unwrap().0;
    assert_that(&after.is_finite()).is_true();
    assert_that(&after).is_equal_to(player_rest());
}

#[test]
fn test_suspended_ships_do_not_move() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    let ship = common::spawn_test_enemy(&mut world, "dog", Vec2::new(240.0, 100.0));
    world.entity_mut(ship).insert(Suspended);

    world.run_system_once(ship_homing_system).unwrap();
    let after = world.entity(ship).get::<Position>().unwrap().0;
    assert_that(&after).is_equal_to(Vec2::new(240.0, 100.0));
}

#[test]
fn test_letters_ride_along_with_their_ship() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    let ship = common::spawn_test_enemy(&mut world, "dog", Vec2::new(240.0, 100.0));

    world.entity_mut(ship).get_mut::<Position>().unwrap().0 = Vec2::new(300.0, 160.0);
    world.run_system_once(letter_follow_system).unwrap();

    let letters: Vec<_> = world.entity(ship).get::<LetterRow>().unwrap().0.iter().copied().collect();
    for letter in letters {
        let tile = *world.entity(letter).get::<LetterTile>().unwrap();
        let pos = world.entity(letter).get::<Position>().unwrap().0;
        assert_that(&pos).is_equal_to(Vec2::new(300.0, 160.0) + tile.offset);
    }
}

#[test]
fn test_letter_offsets_form_a_centered_row() {
    let offsets = letter_offsets(4);
    assert_that(&offsets.len()).is_equal_to(4);

    let sum: f32 = offsets.iter().map(|o| o.x).sum();
    assert_that(&(sum.abs() < 1e-4)).is_true();
    for pair in offsets.windows(2) {
        assert_that(&((pair[1].x - pair[0].x - LETTER_CELL).abs() < 1e-4)).is_true();
    }
}

#[test]
fn test_breach_ends_the_run() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    common::spawn_test_enemy(&mut world, "dog", player_rest() + Vec2::new(4.0, -4.0));

    world.run_system_once(collision_watch_system).unwrap();

    let transitions: Vec<ModeTransition> = world.resource_mut::<Events<ModeTransition>>().drain().collect();
    assert_that(&transitions).is_equal_to(vec![ModeTransition::Switch(GameMode::Outro)]);
}

#[test]
fn test_distant_ships_do_not_end_the_run() {
    let mut world = common::create_test_world();
    common::spawn_test_player(&mut world);
    common::spawn_test_enemy(&mut world, "dog", Vec2::new(240.0, 60.0));

    world.run_system_once(collision_watch_system).unwrap();
    assert_that(&world.resource::<Events<ModeTransition>>().is_empty()).is_true();
}
