//! ZPype game library crate.

pub mod app;
pub mod asset;
pub mod constants;
pub mod dictionary;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod geometry;
pub mod systems;
pub mod tween;
