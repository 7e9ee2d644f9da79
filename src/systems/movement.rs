//! Positions, homing movement, and derived letter placement.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::constants::mechanics::COLLISION_RADIUS;
use crate::events::ModeTransition;
use crate::systems::mode::{GameMode, Suspended};
use crate::systems::targeting::{LetterTile, Word};
use crate::systems::DeltaTime;

/// World-space position in pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Homing speed in pixels per tick.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub speed: f32,
}

/// Marker for the player's ship. There is at most one.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerShip;

/// Each tick, enemy ships take one speed-length step along the normalized
/// vector toward the player. Exact coincidence skips the step so the
/// direction is never a division by zero.
pub fn ship_homing_system(
    time: Res<DeltaTime>,
    player: Query<&Position, With<PlayerShip>>,
    mut ships: Query<(&mut Position, &Velocity), (With<Word>, Without<PlayerShip>, Without<Suspended>)>,
) {
    let Ok(player_pos) = player.single() else {
        return;
    };
    let goal = player_pos.0;

    for (mut position, velocity) in ships.iter_mut() {
        let delta = goal - position.0;
        let distance = delta.length();
        if distance <= f32::EPSILON {
            continue;
        }
        let step = (velocity.speed * time.ticks as f32).min(distance);
        position.0 += delta / distance * step;
    }
}

/// Letters never move on their own; their position is the owning ship's
/// position plus the rigid offset computed at attach time.
pub fn letter_follow_system(
    ships: Query<&Position, (With<Word>, Without<LetterTile>)>,
    mut letters: Query<(&LetterTile, &mut Position), Without<Word>>,
) {
    for (tile, mut position) in letters.iter_mut() {
        if let Ok(ship_pos) = ships.get(tile.ship) {
            position.0 = ship_pos.0 + tile.offset;
        }
    }
}

/// An enemy ship reaching the player ends the run.
pub fn collision_watch_system(
    player: Query<&Position, With<PlayerShip>>,
    ships: Query<&Position, (With<Word>, Without<PlayerShip>, Without<Suspended>)>,
    mut transitions: EventWriter<ModeTransition>,
) {
    let Ok(player_pos) = player.single() else {
        return;
    };
    let breached = ships
        .iter()
        .any(|p| p.0.distance_squared(player_pos.0) < COLLISION_RADIUS * COLLISION_RADIUS);
    if breached {
        tracing::info!("Enemy ship reached the player");
        transitions.write(ModeTransition::Switch(GameMode::Outro));
    }
}

/// Rigid offsets for a word's letter row, centered beneath the ship.
pub fn letter_offsets(len: usize) -> Vec<Vec2> {
    use crate::constants::ui::{LETTER_CELL, LETTER_ROW_DROP};
    let width = len as f32 * LETTER_CELL;
    let left = -width / 2.0 + LETTER_CELL / 2.0;
    (0..len)
        .map(|i| Vec2::new(left + i as f32 * LETTER_CELL, LETTER_ROW_DROP))
        .collect()
}
