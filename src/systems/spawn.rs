//! Wave spawning: word drawing, placement, and enemy group assembly.

use std::collections::VecDeque;

use bevy_ecs::prelude::*;
use glam::Vec2;
use tracing::{info, warn};

use crate::constants::mechanics::{PLACE_RETRY_LIMIT, SHIP_SPEED, WAVE_BASE_SHIPS, WAVE_MAX_SHIPS};
use crate::constants::ui::{layer, PLACE_PADDING, SHIP_HALF};
use crate::constants::spawn_region;
use crate::dictionary::{draw_unique, WordBank};
use crate::geometry::{place_within, Bounds};
use crate::systems::mode::{GameMode, ModeScope};
use crate::systems::movement::{letter_offsets, Position, Velocity};
use crate::systems::render::{Renderable, Visual};
use crate::systems::targeting::{ActiveWords, Health, LetterRow, LetterTile, Word};
use crate::systems::{EntityKind, GameRng};

/// Request to field a wave of `count` enemy ships.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnWave {
    pub count: usize,
}

/// Ships fielded for a given one-based wave number.
pub fn wave_ship_count(wave: u32) -> usize {
    (WAVE_BASE_SHIPS + wave.saturating_sub(1) as usize).min(WAVE_MAX_SHIPS)
}

/// Draws non-conflicting words and assembles an enemy group for each.
///
/// Starvation shrinks the wave instead of failing it; placement falls back
/// to the last sampled position once the retry bound is hit.
pub fn spawn_wave_system(
    mut requests: EventReader<SpawnWave>,
    bank: Res<WordBank>,
    mut rng: ResMut<GameRng>,
    mut active: ResMut<ActiveWords>,
    words: Query<&Word>,
    mut commands: Commands,
) {
    for request in requests.read() {
        let mut texts: Vec<String> = active
            .0
            .iter()
            .filter_map(|&e| words.get(e).ok())
            .map(|w| w.original().to_string())
            .collect();
        let mut placed: Vec<Bounds> = Vec::with_capacity(request.count);
        let (region_min, region_max) = spawn_region();
        let region = Bounds::new(region_min, region_max);

        let mut spawned = 0usize;
        for _ in 0..request.count {
            let borrowed: Vec<&str> = texts.iter().map(String::as_str).collect();
            let word = match draw_unique(&bank, &borrowed, &mut rng.0) {
                Ok(word) => word.to_string(),
                Err(err) => {
                    // Recoverable: field a smaller wave.
                    warn!(%err, spawned, requested = request.count, "Wave spawn starved");
                    break;
                }
            };

            let half = SHIP_HALF + Vec2::splat(PLACE_PADDING / 2.0);
            let center = place_within(&mut rng.0, &region, half, &placed, PLACE_RETRY_LIMIT);
            placed.push(Bounds::from_center_half(center, half));

            let ship = spawn_enemy_group(&mut commands, &word, center);
            active.0.push(ship);
            texts.push(word);
            spawned += 1;
        }

        info!(spawned, requested = request.count, "Wave fielded");
    }
}

/// Spawns one ship with its letter row. Letter offsets are computed once
/// here and held constant for the group's lifetime.
pub fn spawn_enemy_group(commands: &mut Commands, word: &str, center: Vec2) -> Entity {
    let ship = commands
        .spawn((
            EntityKind::Enemy,
            Word::new(word),
            Health(word.len() as u32),
            Position(center),
            Velocity { speed: SHIP_SPEED },
            Renderable {
                visual: Visual::EnemyShip,
                layer: layer::FIELD,
            },
            ModeScope(GameMode::Playing),
        ))
        .id();

    let mut row = VecDeque::with_capacity(word.len());
    for (ch, offset) in word.chars().zip(letter_offsets(word.len())) {
        let letter = commands
            .spawn((
                EntityKind::Letter,
                LetterTile { ch, ship, offset },
                Position(center + offset),
                Renderable {
                    visual: Visual::Glyph(ch),
                    layer: layer::LETTERS,
                },
                ModeScope(GameMode::Playing),
            ))
            .id();
        row.push_back(letter);
    }
    commands.entity(ship).insert(LetterRow(row));
    ship
}
