//! Tick-driven interpolation sequences.
//!
//! A [`Tween`] is an explicit chain of [`Segment`]s consumed one value per
//! tick. An `n`-tick segment yields exactly `n` values, the last of which is
//! its endpoint; holds are segments whose endpoints coincide. Both channels
//! of the `Vec2` advance in lockstep, so a channel that should stand still
//! while the other moves is expressed with equal endpoints on that axis.

use std::collections::VecDeque;

use glam::Vec2;

/// Easing curve applied to a segment's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    /// Accelerating from zero velocity.
    QuadIn,
    /// Decelerating to zero velocity.
    QuadOut,
}

impl Ease {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadOut => t * (2.0 - t),
        }
    }
}

/// One leg of a tween: `from` to `to` over `ticks` frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub ticks: u32,
    pub ease: Ease,
}

impl Segment {
    pub fn new(from: Vec2, to: Vec2, ticks: u32, ease: Ease) -> Self {
        Self { from, to, ticks, ease }
    }

    pub fn linear(from: Vec2, to: Vec2, ticks: u32) -> Self {
        Self::new(from, to, ticks, Ease::Linear)
    }

    /// A segment that stays at `at` for `ticks` frames.
    pub fn hold(at: Vec2, ticks: u32) -> Self {
        Self::new(at, at, ticks, Ease::Linear)
    }

    fn sample(&self, tick: u32) -> Vec2 {
        // tick in 1..=ticks; the final sample is exactly `to`.
        if tick >= self.ticks {
            return self.to;
        }
        let t = self.ease.apply(tick as f32 / self.ticks as f32);
        self.from.lerp(self.to, t)
    }
}

/// An ordered chain of segments, consumed one value per tick.
#[derive(Debug, Clone, Default)]
pub struct Tween {
    segments: VecDeque<Segment>,
    cursor: u32,
}

impl Tween {
    pub fn new(segments: impl IntoIterator<Item = Segment>) -> Self {
        // Zero-tick segments yield no values and are dropped up front.
        let segments: VecDeque<Segment> = segments.into_iter().filter(|s| s.ticks > 0).collect();
        Self { segments, cursor: 0 }
    }

    pub fn single(segment: Segment) -> Self {
        Self::new([segment])
    }

    /// Total remaining values this tween will yield.
    pub fn remaining(&self) -> u32 {
        let pending: u32 = self.segments.iter().skip(1).map(|s| s.ticks).sum();
        match self.segments.front() {
            Some(front) => front.ticks - self.cursor + pending,
            None => 0,
        }
    }

    pub fn finished(&self) -> bool {
        self.segments.is_empty()
    }

    /// Advances one tick. Returns `None` once the chain is exhausted; the
    /// caller is expected to leave the driven attribute at the last value.
    pub fn advance(&mut self) -> Option<Vec2> {
        let front = self.segments.front()?;
        self.cursor += 1;
        let value = front.sample(self.cursor);
        if self.cursor >= front.ticks {
            self.segments.pop_front();
            self.cursor = 0;
        }
        Some(value)
    }
}

impl Iterator for Tween {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        self.advance()
    }
}
