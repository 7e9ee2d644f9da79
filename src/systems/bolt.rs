//! Player bolts: launch, eased flight, and impact resolution.

use bevy_ecs::prelude::*;
use glam::Vec2;
use tracing::{debug, trace};

use crate::constants::mechanics::{BOLT_TICKS, CANNON_OFFSETS};
use crate::constants::ui::layer;
use crate::systems::lifetime::{spawn_burst, BurstSize};
use crate::systems::mode::{GameMode, ModeScope};
use crate::systems::movement::Position;
use crate::systems::render::{Renderable, Visual};
use crate::systems::targeting::{ActiveWords, Health, LetterRow, TargetLock, Word};
use crate::systems::{DeltaTime, EntityKind};
use crate::tween::Ease;

/// A bolt in flight from `origin` toward `target`.
///
/// `target` is a generational handle; while the target lives its position
/// refreshes `last_known`, and after it dies the bolt finishes its flight to
/// the last known position. The handle is never dereferenced blindly.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Bolt {
    pub target: Entity,
    pub origin: Vec2,
    pub last_known: Vec2,
    pub elapsed: u32,
    pub duration: u32,
}

/// Alternating cannon muzzles on the player ship.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cannons {
    next: usize,
}

impl Cannons {
    /// Muzzle position for the next shot; alternates sides.
    pub fn muzzle(&mut self, ship_center: Vec2) -> Vec2 {
        let offset = CANNON_OFFSETS[self.next % CANNON_OFFSETS.len()];
        self.next = (self.next + 1) % CANNON_OFFSETS.len();
        ship_center + offset
    }
}

pub fn spawn_bolt(commands: &mut Commands, scope: GameMode, origin: Vec2, target: Entity, target_pos: Vec2) {
    trace!(?target, ?origin, "Bolt launched");
    commands.spawn((
        EntityKind::Bolt,
        Position(origin),
        Bolt {
            target,
            origin,
            last_known: target_pos,
            elapsed: 0,
            duration: BOLT_TICKS,
        },
        Renderable {
            visual: Visual::Bolt,
            layer: layer::EFFECTS,
        },
        ModeScope(scope),
    ));
}

/// Advances bolts along their eased flight and resolves impacts.
///
/// On expiry a live target takes one damage: a small burst when health
/// remains, a large burst plus group teardown at zero. A dangling target
/// expires the bolt silently.
pub fn bolt_flight_system(
    time: Res<DeltaTime>,
    mut bolts: Query<(Entity, &mut Bolt, &mut Position), Without<Word>>,
    mut ships: Query<(&mut Health, &Position, &mut LetterRow), With<Word>>,
    mut active: ResMut<ActiveWords>,
    mut lock: ResMut<TargetLock>,
    mut commands: Commands,
) {
    for (entity, mut bolt, mut position) in bolts.iter_mut() {
        if let Ok((_, target_pos, _)) = ships.get(bolt.target) {
            bolt.last_known = target_pos.0;
        }

        bolt.elapsed = (bolt.elapsed + time.ticks).min(bolt.duration);
        let t = Ease::QuadIn.apply(bolt.elapsed as f32 / bolt.duration as f32);
        position.0 = bolt.origin.lerp(bolt.last_known, t);

        if bolt.elapsed < bolt.duration {
            continue;
        }
        commands.entity(entity).despawn();

        let Ok((mut health, target_pos, mut row)) = ships.get_mut(bolt.target) else {
            // Target died before impact; resolve without effect.
            continue;
        };

        health.0 = health.0.saturating_sub(1);
        if health.0 > 0 {
            spawn_burst(&mut commands, GameMode::Playing, position.0, BurstSize::Small);
            continue;
        }

        debug!(ship = ?bolt.target, "Ship destroyed");
        spawn_burst(&mut commands, GameMode::Playing, target_pos.0, BurstSize::Large);
        for letter in row.0.drain(..) {
            commands.entity(letter).despawn();
        }
        active.0.retain(|&e| e != bolt.target);
        if lock.0 == Some(bolt.target) {
            lock.0 = None;
        }
        commands.entity(bolt.target).despawn();
    }
}
