//! Primitive-based rendering onto the SDL canvas.
//!
//! Everything is drawn with gfx primitives and the built-in 8x8 font; there
//! are no textures to manage. These systems are the only ones (besides input
//! polling) that touch SDL, so the rest of the crate stays headless.

use bevy_ecs::prelude::*;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::warn;

use crate::constants::ui::SHIP_HALF;
use crate::systems::debug::DebugState;
use crate::systems::driver::Scale;
use crate::systems::hud::ScoreBoard;
use crate::systems::lifetime::Burst;
use crate::systems::mode::{GameMode, ModeStack, Suspended};
use crate::systems::movement::Position;
use crate::systems::targeting::{LetterRow, TargetLock};

/// What an entity looks like; interpreted by the render system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    PlayerShip,
    EnemyShip,
    Glyph(char),
    Bolt,
    Burst,
    Label,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderable {
    pub visual: Visual,
    pub layer: u8,
}

/// Text content for `Visual::Label` entities.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct UiLabel {
    pub text: String,
}

const FIELD_COLOR: Color = Color::RGB(90, 200, 250);
const ENEMY_COLOR: Color = Color::RGB(235, 110, 80);
const LOCKED_COLOR: Color = Color::RGB(255, 210, 70);
const LETTER_COLOR: Color = Color::RGB(220, 220, 220);
const SPENT_GLYPH_COLOR: Color = Color::RGB(120, 120, 120);
const EFFECT_COLOR: Color = Color::RGB(255, 160, 60);
const HUD_COLOR: Color = Color::RGB(160, 160, 160);

type Drawable<'a> = (
    Entity,
    &'a Position,
    &'a Renderable,
    Option<&'a Scale>,
    Option<&'a UiLabel>,
    Option<&'a Burst>,
);

#[allow(clippy::type_complexity)]
pub fn render_system(
    mut canvas: NonSendMut<&'static mut Canvas<Window>>,
    drawables: Query<Drawable, Without<Suspended>>,
    rows: Query<&LetterRow>,
    lock: Res<TargetLock>,
    score: Res<ScoreBoard>,
    modes: Res<ModeStack>,
) {
    canvas.set_draw_color(Color::RGB(8, 8, 16));
    canvas.clear();

    let head_letter = lock.0.and_then(|ship| rows.get(ship).ok()).and_then(|row| row.0.front().copied());

    let mut sorted: Vec<Drawable> = drawables.iter().collect();
    sorted.sort_by_key(|(_, _, renderable, _, _, _)| renderable.layer);

    for (entity, position, renderable, scale, label, burst) in sorted {
        let result = draw_one(
            &mut canvas,
            entity,
            position,
            renderable,
            scale,
            label,
            burst,
            lock.0,
            head_letter,
        );
        if let Err(error) = result {
            warn!(%error, "Draw call failed");
        }
    }

    if modes.contains(GameMode::Playing) {
        if let Err(error) = canvas.string(8, 8, &score.status_line(), HUD_COLOR) {
            warn!(%error, "HUD draw failed");
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_one(
    canvas: &mut Canvas<Window>,
    entity: Entity,
    position: &Position,
    renderable: &Renderable,
    scale: Option<&Scale>,
    label: Option<&UiLabel>,
    burst: Option<&Burst>,
    locked: Option<Entity>,
    head_letter: Option<Entity>,
) -> Result<(), String> {
    let (x, y) = (position.0.x as i16, position.0.y as i16);
    match renderable.visual {
        Visual::PlayerShip => {
            canvas.filled_trigon(x, y - 14, x - 16, y + 12, x + 16, y + 12, FIELD_COLOR)?;
            canvas.thick_line(x - 16, y + 12, x + 16, y + 12, 2, FIELD_COLOR)?;
        }
        Visual::EnemyShip => {
            let color = if locked == Some(entity) { LOCKED_COLOR } else { ENEMY_COLOR };
            canvas.filled_trigon(x, y + 10, x - 12, y - 8, x + 12, y - 8, color)?;
        }
        Visual::Glyph(ch) => {
            let color = if head_letter == Some(entity) {
                LOCKED_COLOR
            } else if ch.is_ascii_lowercase() {
                LETTER_COLOR
            } else {
                SPENT_GLYPH_COLOR
            };
            canvas.character(x - 4, y - 4, ch, color)?;
        }
        Visual::Bolt => {
            canvas.filled_circle(x, y, 2, FIELD_COLOR)?;
        }
        Visual::Burst => {
            let radius = burst.map(|b| b.radius).unwrap_or(6.0);
            let factor = scale.map(|s| s.0).unwrap_or(1.0).max(0.0);
            let r = (radius * factor) as i16;
            if r > 0 {
                canvas.circle(x, y, r, EFFECT_COLOR)?;
            }
        }
        Visual::Label => {
            if let Some(label) = label {
                let offset = (label.text.len() * 8 / 2) as i16;
                canvas.string(x - offset, y - 4, &label.text, LETTER_COLOR)?;
            }
        }
    }
    Ok(())
}

/// Outlines entity bounds when the debug overlay is enabled.
pub fn debug_overlay_system(
    canvas: NonSendMut<&'static mut Canvas<Window>>,
    debug: Res<DebugState>,
    entities: Query<(&Position, &Renderable), Without<Suspended>>,
) {
    if !debug.enabled {
        return;
    }
    let color = Color::RGB(60, 220, 60);
    for (position, renderable) in entities.iter() {
        let half = match renderable.visual {
            Visual::PlayerShip | Visual::EnemyShip => SHIP_HALF,
            _ => glam::Vec2::splat(5.0),
        };
        let (x, y) = (position.0.x, position.0.y);
        let result = canvas.rectangle(
            (x - half.x) as i16,
            (y - half.y) as i16,
            (x + half.x) as i16,
            (y + half.y) as i16,
            color,
        );
        if let Err(error) = result {
            warn!(%error, "Debug box draw failed");
        }
    }
}

pub fn present_system(mut canvas: NonSendMut<&'static mut Canvas<Window>>) {
    canvas.present();
}
