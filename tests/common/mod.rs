//! Shared test infrastructure for rgb-colour-wheel integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rgb_colour_wheel::{RgbColour, RgbLed, TimeSource};

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records every duty write
pub struct MockLed {
    current: [u8; 3],
    history: heapless::Vec<[u8; 3], 256>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            current: [0, 0, 0],
            history: heapless::Vec::new(),
        }
    }

    pub fn last_channels(&self) -> [u8; 3] {
        self.current
    }

    pub fn history(&self) -> &[[u8; 3]] {
        &self.history
    }
}

impl RgbLed for MockLed {
    fn set_channels(&mut self, red: u8, green: u8, blue: u8) {
        self.current = [red, green, blue];
        self.history
            .push(self.current)
            .expect("MockLed history full, raise its capacity");
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock millisecond clock with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<u64>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(0),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        self.current_time.set(self.current_time.get() + millis);
    }
}

impl TimeSource for MockTimeSource {
    type Instant = u64;

    fn now(&self) -> u64 {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Deterministic RNG so fallback picks are reproducible
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Compare two colours allowing each channel to differ by `tolerance`
pub fn channels_within(a: RgbColour, b: RgbColour, tolerance: u8) -> bool {
    a.channels()
        .iter()
        .zip(b.channels().iter())
        .all(|(x, y)| x.abs_diff(*y) <= tolerance)
}
