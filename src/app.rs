//! SDL initialization, window lifecycle, and the frame loop.

use std::time::{Duration, Instant};

use sdl2::Sdl;
use tracing::{debug, info};

use crate::constants::{CANVAS_SIZE, LOOP_TIME, SCALE};
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;

/// Main application wrapper that manages SDL initialization, window
/// lifecycle, and the game loop.
pub struct App {
    pub game: Game,
    last_tick: Instant,
    // Keep SDL alive for the app lifetime.
    _sdl_context: Sdl,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and sets up the
    /// game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails, or
    /// propagates errors from `Game::new()`.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        debug!(
            width = (CANVAS_SIZE.x as f32 * SCALE).round() as u32,
            height = (CANVAS_SIZE.y as f32 * SCALE).round() as u32,
            "Creating game window"
        );
        let window = video_subsystem
            .window(
                "ZPype",
                (CANVAS_SIZE.x as f32 * SCALE).round() as u32,
                (CANVAS_SIZE.y as f32 * SCALE).round() as u32,
            )
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let game = Game::new(canvas, event_pump)?;

        info!("Application initialization completed");
        Ok(App {
            game,
            last_tick: Instant::now(),
            _sdl_context: sdl_context,
        })
    }

    /// Executes a single frame with consistent pacing.
    ///
    /// Returns `true` if the game should continue running.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = start;

        // Advance the global tick counter used by the log formatter.
        formatter::increment_tick();

        if self.game.tick(dt) {
            return false;
        }

        // Sleep off the remainder of the frame budget.
        let remaining = LOOP_TIME.saturating_sub(start.elapsed());
        if remaining != Duration::ZERO {
            spin_sleep::sleep(remaining);
        }

        true
    }
}
