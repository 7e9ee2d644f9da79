//! The animation driver: tween chains attached to entity attributes.

use bevy_ecs::prelude::*;

use crate::systems::mode::Suspended;
use crate::systems::movement::Position;
use crate::systems::DeltaTime;
use crate::tween::Tween;

/// Which attribute a [`Driver`] writes each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrivenAttr {
    Position,
    /// Scalar scale; the tween's x channel is used.
    Scale,
}

/// Uniform scale factor for effect rendering.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Scale(pub f32);

/// Drives one attribute through a finite tween, then detaches.
///
/// The driven attribute keeps the last pushed value after detach; the
/// component's absence is how phases observe "animation done".
#[derive(Component, Debug, Clone)]
pub struct Driver {
    pub tween: Tween,
    pub attr: DrivenAttr,
}

impl Driver {
    pub fn position(tween: Tween) -> Self {
        Self {
            tween,
            attr: DrivenAttr::Position,
        }
    }
}

pub fn driver_system(
    time: Res<DeltaTime>,
    mut query: Query<(Entity, &mut Driver, Option<&mut Position>, Option<&mut Scale>), Without<Suspended>>,
    mut commands: Commands,
) {
    for (entity, mut driver, mut position, mut scale) in query.iter_mut() {
        for _ in 0..time.ticks {
            let Some(value) = driver.tween.advance() else {
                break;
            };
            match driver.attr {
                DrivenAttr::Position => {
                    if let Some(position) = position.as_deref_mut() {
                        position.0 = value;
                    }
                }
                DrivenAttr::Scale => {
                    if let Some(scale) = scale.as_deref_mut() {
                        scale.0 = value.x;
                    }
                }
            }
        }
        if driver.tween.finished() {
            commands.entity(entity).remove::<Driver>();
        }
    }
}
