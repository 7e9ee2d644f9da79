//! Debug overlay state.

use bevy_ecs::prelude::*;

/// Toggles the entity-bounds overlay.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebugState {
    pub enabled: bool,
}

impl DebugState {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        tracing::debug!(enabled = self.enabled, "Debug overlay toggled");
    }
}
