//! Tick-counted lifetimes and short-lived burst effects.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::constants::mechanics::BURST_TICKS;
use crate::constants::ui::layer;
use crate::systems::driver::{DrivenAttr, Driver, Scale};
use crate::systems::mode::{GameMode, ModeScope};
use crate::systems::movement::Position;
use crate::systems::render::{Renderable, Visual};
use crate::systems::{DeltaTime, EntityKind};
use crate::tween::{Ease, Segment, Tween};

/// Despawns the entity once its tick budget runs out.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeToLive {
    pub remaining_ticks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstSize {
    Small,
    Large,
}

/// An expanding explosion ring.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub radius: f32,
}

pub fn spawn_burst(commands: &mut Commands, scope: GameMode, at: Vec2, size: BurstSize) {
    let radius = match size {
        BurstSize::Small => 6.0,
        BurstSize::Large => 18.0,
    };
    // Scale is tween-driven on the x channel: snap up, then ease back down.
    let grow = Tween::new([
        Segment::new(Vec2::new(0.2, 0.0), Vec2::new(1.0, 0.0), BURST_TICKS / 3, Ease::QuadOut),
        Segment::new(Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0), BURST_TICKS - BURST_TICKS / 3, Ease::QuadIn),
    ]);
    commands.spawn((
        EntityKind::Effect,
        Position(at),
        Burst { radius },
        Scale(0.2),
        Driver {
            tween: grow,
            attr: DrivenAttr::Scale,
        },
        TimeToLive {
            remaining_ticks: BURST_TICKS,
        },
        Renderable {
            visual: Visual::Burst,
            layer: layer::EFFECTS,
        },
        ModeScope(scope),
    ));
}

pub fn time_to_live_system(
    time: Res<DeltaTime>,
    mut query: Query<(Entity, &mut TimeToLive)>,
    mut commands: Commands,
) {
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining_ticks = ttl.remaining_ticks.saturating_sub(time.ticks);
        if ttl.remaining_ticks == 0 {
            commands.entity(entity).despawn();
        }
    }
}
