//! Keystroke resolution: locking, hits, misses, and kills.

use std::collections::VecDeque;

use bevy_ecs::prelude::*;
use glam::Vec2;
use tracing::{debug, trace};

use crate::events::{KeyTyped, ShotOutcome};
use crate::systems::bolt::{spawn_bolt, Cannons};
use crate::systems::lifetime::{spawn_burst, BurstSize};
use crate::systems::mode::GameMode;
use crate::systems::movement::{PlayerShip, Position};

/// The characters of one enemy word. `typed` counts head characters already
/// stripped, so the remaining text is a suffix of the original by
/// construction.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    typed: usize,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            typed: 0,
        }
    }

    pub fn original(&self) -> &str {
        &self.text
    }

    pub fn remaining(&self) -> &str {
        &self.text[self.typed..]
    }

    /// The next character to be typed, if any.
    pub fn head(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Strips the head character. Returns it, or `None` if already spent.
    pub fn advance(&mut self) -> Option<char> {
        let head = self.head()?;
        self.typed += head.len_utf8();
        Some(head)
    }

    pub fn spent(&self) -> bool {
        self.typed >= self.text.len()
    }
}

/// Remaining health of an enemy ship; starts at the word's length.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health(pub u32);

/// The ordered letter entities of a ship, head first. Kept in lockstep with
/// the owning [`Word`]'s remaining text.
#[derive(Component, Debug, Default)]
pub struct LetterRow(pub VecDeque<Entity>);

/// One visual letter, rigidly offset from its ship.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LetterTile {
    pub ch: char,
    pub ship: Entity,
    pub offset: Vec2,
}

/// The ship currently receiving the player's keystrokes, if any.
///
/// The entity id is a generational handle; it is re-validated against the
/// world before every use, so a stale lock is harmless.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TargetLock(pub Option<Entity>);

/// Enemy ships in spawn order. Lock acquisition scans this registry front to
/// back, so earlier spawns win head-character ties (they cannot tie while the
/// first-letter-uniqueness constraint holds, but the order is still the
/// documented tie-break).
#[derive(Resource, Debug, Default)]
pub struct ActiveWords(pub Vec<Entity>);

/// Resolves typed characters in arrival order.
#[allow(clippy::too_many_arguments)]
pub fn targeting_system(
    mut typed: EventReader<KeyTyped>,
    mut lock: ResMut<TargetLock>,
    mut active: ResMut<ActiveWords>,
    mut ships: Query<(&mut Word, &mut LetterRow, &Position)>,
    letters: Query<(&LetterTile, &Position), Without<Word>>,
    mut player: Query<(&Position, &mut Cannons), (With<PlayerShip>, Without<Word>, Without<LetterTile>)>,
    mut outcomes: EventWriter<ShotOutcome>,
    mut commands: Commands,
) {
    for KeyTyped(ch) in typed.read().copied() {
        // Malformed input is rejected at the boundary.
        if !ch.is_ascii_lowercase() {
            continue;
        }

        // A lock pointing at a despawned ship or a spent word is stale.
        if let Some(entity) = lock.0 {
            let stale = ships.get(entity).map(|(word, _, _)| word.spent()).unwrap_or(true);
            if stale {
                lock.0 = None;
            }
        }

        if lock.0.is_none() {
            let candidate = active
                .0
                .iter()
                .copied()
                .find(|&e| ships.get(e).map(|(word, _, _)| word.head() == Some(ch)).unwrap_or(false));
            match candidate {
                Some(entity) => {
                    trace!(?entity, %ch, "Lock acquired");
                    lock.0 = Some(entity);
                }
                None => {
                    outcomes.write(ShotOutcome::Miss);
                    continue;
                }
            }
        }

        let Some(entity) = lock.0 else {
            continue;
        };
        let Ok((mut word, mut row, ship_pos)) = ships.get_mut(entity) else {
            outcomes.write(ShotOutcome::Miss);
            continue;
        };

        if word.head() != Some(ch) {
            // Mismatch while locked: count a miss, keep the lock.
            outcomes.write(ShotOutcome::Miss);
            continue;
        }

        // Strip the head character and its letter entity together.
        word.advance();
        if let Some(letter) = row.0.pop_front() {
            let at = letters
                .get(letter)
                .map(|(_, pos)| pos.0)
                .unwrap_or(ship_pos.0);
            spawn_burst(&mut commands, GameMode::Playing, at, BurstSize::Small);
            commands.entity(letter).despawn();
        }

        if let Ok((player_pos, mut cannons)) = player.single_mut() {
            let muzzle = cannons.muzzle(player_pos.0);
            spawn_bolt(&mut commands, GameMode::Playing, muzzle, entity, ship_pos.0);
        }

        outcomes.write(ShotOutcome::Hit { ship: entity });

        if word.spent() {
            debug!(word = word.original(), "Word spent");
            active.0.retain(|&e| e != entity);
            lock.0 = None;
            outcomes.write(ShotOutcome::Kill { ship: entity });
        }
    }
}
