//! Axis-aligned boxes and randomized placement.

use glam::Vec2;
use rand::Rng;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_half(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x && self.min.y <= other.max.y && self.max.y >= other.min.y
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn expand(&self, amount: f32) -> Bounds {
        Bounds {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }
}

/// Uniform random point with `min <= p <= max` per axis.
pub fn random_point(rng: &mut impl Rng, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(rng.random_range(min.x..=max.x), rng.random_range(min.y..=max.y))
}

/// Places a box of half-extent `half` inside `region` by rejection sampling
/// against `obstacles`. After `max_attempts` rejections the last candidate is
/// accepted regardless of overlap, so this always terminates with a position.
pub fn place_within(
    rng: &mut impl Rng,
    region: &Bounds,
    half: Vec2,
    obstacles: &[Bounds],
    max_attempts: usize,
) -> Vec2 {
    let min = region.min + half;
    let max = (region.max - half).max(min);

    let mut candidate = random_point(rng, min, max);
    for _ in 0..max_attempts {
        let probe = Bounds::from_center_half(candidate, half);
        if !obstacles.iter().any(|b| b.intersects(&probe)) {
            return candidate;
        }
        candidate = random_point(rng, min, max);
    }
    candidate
}
