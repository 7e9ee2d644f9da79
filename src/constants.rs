//! Game-wide constants: canvas geometry, timing, mechanics tuning.

use std::time::Duration;

use glam::{UVec2, Vec2};

/// Logical canvas size in pixels (portrait field).
pub const CANVAS_SIZE: UVec2 = UVec2::new(480, 640);

/// Window scale factor applied on top of the logical canvas size.
pub const SCALE: f32 = 1.0;

/// Target ticks per second.
pub const TICK_RATE: u32 = 60;

/// The target duration of a single frame.
pub const LOOP_TIME: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

pub mod mechanics {
    use glam::Vec2;

    /// Enemy ship homing speed, pixels per tick at 60 TPS.
    pub const SHIP_SPEED: f32 = 0.45;

    /// Flight time of a bolt, in ticks.
    pub const BOLT_TICKS: u32 = 14;

    /// Cannon muzzle offsets relative to the player ship center. Shots
    /// alternate between the two.
    pub const CANNON_OFFSETS: [Vec2; 2] = [Vec2::new(-14.0, -6.0), Vec2::new(14.0, -6.0)];

    /// A ship closer than this to the player ends the run.
    pub const COLLISION_RADIUS: f32 = 28.0;

    /// Word lengths drawn for enemy ships, inclusive.
    pub const WORD_MIN_LEN: usize = 3;
    pub const WORD_MAX_LEN: usize = 9;

    /// Upper bound on redraws when hunting for a non-conflicting word.
    pub const DRAW_RETRY_LIMIT: usize = 24;

    /// Upper bound on rejection-sampling attempts when placing a ship; after
    /// this the last candidate is accepted even if it overlaps.
    pub const PLACE_RETRY_LIMIT: usize = 16;

    /// Ships in the first wave; later waves add one ship per wave.
    pub const WAVE_BASE_SHIPS: usize = 3;

    /// Most ships a single wave will ever field. Bounded well below the 26
    /// first-letter slots so word drawing cannot be starved by design.
    pub const WAVE_MAX_SHIPS: usize = 12;

    /// Lifetime of an explosion burst, in ticks.
    pub const BURST_TICKS: u32 = 24;
}

pub mod ui {
    use glam::Vec2;

    /// Cell advance of the built-in 8x8 glyph font, with padding.
    pub const LETTER_CELL: f32 = 10.0;

    /// Vertical gap between a ship and its letter row.
    pub const LETTER_ROW_DROP: f32 = 14.0;

    /// Half-extent of a ship's hull for placement and debug boxes.
    pub const SHIP_HALF: Vec2 = Vec2::new(18.0, 12.0);

    /// Exclusion padding between ships placed in the same wave.
    pub const PLACE_PADDING: f32 = 26.0;

    /// Ticks the wave banner holds at screen center.
    pub const BANNER_HOLD_TICKS: u32 = 45;
    pub const BANNER_SLIDE_TICKS: u32 = 30;
    pub const BANNER_DELAY_TICKS: u32 = 15;

    /// Ticks the player entrance slide takes.
    pub const INTRO_SLIDE_TICKS: u32 = 60;

    pub mod layer {
        pub const FIELD: u8 = 0;
        pub const LETTERS: u8 = 1;
        pub const EFFECTS: u8 = 2;
        pub const HUD: u8 = 3;
    }
}

/// The band above the visible field where enemy ships materialize.
pub fn spawn_region() -> (Vec2, Vec2) {
    let w = CANVAS_SIZE.x as f32;
    (Vec2::new(40.0, -180.0), Vec2::new(w - 40.0, -40.0))
}

/// Resting position of the player ship.
pub fn player_rest() -> Vec2 {
    Vec2::new(CANVAS_SIZE.x as f32 / 2.0, CANVAS_SIZE.y as f32 - 70.0)
}
