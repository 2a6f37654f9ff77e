//! Animation timing for the terminal UI
//!
//! All timelines are plain data driven by `Instant`s passed in from the event
//! loop, so they can be tested without a clock.

use crate::core::WORD_LENGTH;
use std::time::{Duration, Instant};

/// How long a rejected row shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Default lifetime of an alert
pub const ALERT_DURATION: Duration = Duration::from_millis(1000);

/// Lifetime of the victory alert
pub const WIN_ALERT_DURATION: Duration = Duration::from_millis(5000);

/// Staggered flip of every tile in a submitted row
///
/// Tile `i` starts flipping at `i * flip / 2` and shows its colour once its
/// flip has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimeline {
    started: Instant,
    flip: Duration,
}

impl RevealTimeline {
    #[must_use]
    pub const fn new(started: Instant, flip: Duration) -> Self {
        Self { started, flip }
    }

    fn tile_start(&self, tile: usize) -> Duration {
        self.flip / 2 * tile as u32
    }

    /// Time from the first flip starting to the last one ending
    #[must_use]
    pub fn total(&self) -> Duration {
        self.tile_start(WORD_LENGTH - 1) + self.flip
    }

    /// Number of leading tiles whose colour is showing
    #[must_use]
    pub fn tiles_revealed(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        (0..WORD_LENGTH)
            .take_while(|&tile| elapsed >= self.tile_start(tile) + self.flip)
            .count()
    }

    /// Whether tile `tile` is mid-flip
    #[must_use]
    pub fn is_flipping(&self, tile: usize, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started);
        let start = self.tile_start(tile);
        elapsed >= start && elapsed < start + self.flip
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.total()
    }
}

/// Side-to-side shake of the current row after a rejected submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shake {
    started: Instant,
}

impl Shake {
    #[must_use]
    pub const fn new(started: Instant) -> Self {
        Self { started }
    }

    /// Horizontal offset in cells: alternates -1/+1 every 50ms, 0 once done
    #[must_use]
    pub fn offset(&self, now: Instant) -> i16 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= SHAKE_DURATION {
            return 0;
        }
        if (elapsed.as_millis() / 50) % 2 == 0 { -1 } else { 1 }
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= SHAKE_DURATION
    }
}

/// Victory dance of the winning row
///
/// Tile `i` jumps at `i * dance / 5` and stays up for half of `dance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dance {
    started: Instant,
    duration: Duration,
}

impl Dance {
    #[must_use]
    pub const fn new(started: Instant, duration: Duration) -> Self {
        Self { started, duration }
    }

    fn tile_start(&self, tile: usize) -> Duration {
        self.duration / 5 * tile as u32
    }

    /// Whether tile `tile` is raised
    #[must_use]
    pub fn is_raised(&self, tile: usize, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started);
        let start = self.tile_start(tile);
        elapsed >= start && elapsed < start + self.duration / 2
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started)
            >= self.tile_start(WORD_LENGTH - 1) + self.duration
    }
}

/// Transient message shown above the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub text: String,
    expires: Option<Instant>,
}

impl Alert {
    /// Alert that disappears after `duration`, or stays for good with `None`
    #[must_use]
    pub fn new(text: impl Into<String>, now: Instant, duration: Option<Duration>) -> Self {
        Self {
            text: text.into(),
            expires: duration.map(|d| now + d),
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires.is_some_and(|at| now >= at)
    }
}
