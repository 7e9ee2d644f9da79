//! The word dictionary and conflict-aware word drawing.

use std::collections::HashMap;

use bevy_ecs::resource::Resource;
use rand::Rng;
use tracing::{debug, warn};

use crate::constants::mechanics::{DRAW_RETRY_LIMIT, WORD_MAX_LEN, WORD_MIN_LEN};
use crate::error::{DictionaryError, SpawnError};

/// Length-bucketed word dictionary, built once at startup.
///
/// Words are normalized to ASCII lowercase. Entries outside the configured
/// length range, containing non-letter characters, or consisting of a single
/// repeated letter are discarded at load time.
#[derive(Debug, Clone, Resource)]
pub struct WordBank {
    buckets: HashMap<usize, Vec<String>>,
    count: usize,
}

impl WordBank {
    /// Builds a bank from newline-separated text.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] if no usable word survives
    /// filtering; an empty dictionary is fatal at startup.
    pub fn from_text(text: &str) -> Result<Self, DictionaryError> {
        let mut buckets: HashMap<usize, Vec<String>> = HashMap::new();
        let mut count = 0usize;
        let mut rejected = 0usize;

        for line in text.lines() {
            let word = line.trim().to_ascii_lowercase();
            if !Self::usable(&word) {
                if !word.is_empty() {
                    rejected += 1;
                }
                continue;
            }
            buckets.entry(word.len()).or_default().push(word);
            count += 1;
        }

        if count == 0 {
            return Err(DictionaryError::Empty);
        }

        debug!(words = count, rejected, buckets = buckets.len(), "Word bank loaded");
        Ok(Self { buckets, count })
    }

    fn usable(word: &str) -> bool {
        if word.len() < WORD_MIN_LEN || word.len() > WORD_MAX_LEN {
            return false;
        }
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }
        // A word that is one letter repeated can never be disambiguated.
        let first = word.as_bytes()[0];
        !word.bytes().all(|b| b == first)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Lengths that actually have words, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Uniform random word of exactly `len` characters.
    pub fn pick(&self, len: usize, rng: &mut impl Rng) -> Result<&str, DictionaryError> {
        let bucket = self.buckets.get(&len).ok_or(DictionaryError::NoSuchLength(len))?;
        let index = rng.random_range(0..bucket.len());
        Ok(&bucket[index])
    }
}

/// Draws a word that conflicts with none of `active`: its exact text must not
/// already be in play, and its first letter must differ from every active
/// word's first letter (typing the head character must identify one ship).
///
/// Lengths are drawn uniformly from the bank's populated buckets. Retries are
/// bounded; exhaustion is reported as recoverable [`SpawnError::Starvation`].
pub fn draw_unique<'a>(bank: &'a WordBank, active: &[&str], rng: &mut impl Rng) -> Result<&'a str, SpawnError> {
    let lengths = bank.lengths();

    for _ in 0..DRAW_RETRY_LIMIT {
        let len = lengths[rng.random_range(0..lengths.len())];
        let Ok(word) = bank.pick(len, rng) else {
            continue;
        };

        let head = word.as_bytes()[0];
        let conflict = active
            .iter()
            .any(|w| *w == word || w.as_bytes().first() == Some(&head));
        if !conflict {
            return Ok(word);
        }
    }

    warn!(attempts = DRAW_RETRY_LIMIT, active = active.len(), "Word draw starved");
    Err(SpawnError::Starvation {
        attempts: DRAW_RETRY_LIMIT,
    })
}
