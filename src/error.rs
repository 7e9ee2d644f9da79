//! Centralized error types for the ZPype game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use std::io;

/// Main error type for the ZPype game.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur during game operation.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Spawn error: {0}")]
    Spawn(#[from] SpawnError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while loading or querying the word dictionary.
///
/// `Empty` is only possible at startup and is fatal; a dictionary cannot
/// become empty afterwards.
#[derive(thiserror::Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary contains no usable words")]
    Empty,

    #[error("No words of length {0} in dictionary")]
    NoSuchLength(usize),
}

/// Errors raised while drawing words for a wave.
///
/// Starvation is recoverable: the spawner logs it and settles for a smaller
/// wave rather than aborting.
#[derive(thiserror::Error, Debug)]
pub enum SpawnError {
    #[error("Could not draw a non-conflicting word after {attempts} attempts")]
    Starvation { attempts: usize },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
