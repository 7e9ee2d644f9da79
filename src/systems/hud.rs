//! Run statistics and the HUD scoreboard.

use bevy_ecs::prelude::*;

use crate::events::ShotOutcome;

/// Running tallies for the current game, reset when a new run starts.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    pub hits: u32,
    pub misses: u32,
    pub kills: u32,
    /// One-based wave number.
    pub wave: u32,
}

impl ScoreBoard {
    /// Hit fraction in [0, 1]; 1.0 before any keystroke lands.
    pub fn accuracy(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            1.0
        } else {
            self.hits as f32 / total as f32
        }
    }

    pub fn status_line(&self) -> String {
        format!(
            "WAVE {}  HITS {}  MISS {}  KILLS {}  ACC {:.0}%",
            self.wave,
            self.hits,
            self.misses,
            self.kills,
            self.accuracy() * 100.0
        )
    }
}

pub fn scoreboard_system(mut outcomes: EventReader<ShotOutcome>, mut score: ResMut<ScoreBoard>) {
    for outcome in outcomes.read() {
        match outcome {
            ShotOutcome::Hit { .. } => score.hits += 1,
            ShotOutcome::Miss => score.misses += 1,
            ShotOutcome::Kill { .. } => score.kills += 1,
        }
    }
}
