//! Wall-clock stamping and the monotonic sequencer.
//!
//! A [`Stamp`] pairs a physical timestamp with a logical counter that breaks
//! ties within the same millisecond. The [`Sequencer`] hands out stamps that
//! are strictly increasing across calls and threads, even when the wall
//! clock stalls or rewinds: the emitted timestamp is clamped to
//! `max(wall_clock, last_emitted)` and the counter bumps within a tick.

use chrono::Utc;
use parking_lot::Mutex;

/// A `(timestamp, disambiguator)` pair with total ordering.
///
/// Ordering is physical time first, then counter, matching the lexicographic
/// order of the key segments the stamp encodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stamp {
    /// Wall-clock milliseconds since the Unix epoch
    pub wall_ms: u64,
    /// Tie-breaking counter within a single millisecond tick
    pub seq: u64,
}

/// Source of strictly increasing stamps.
///
/// All minting goes through one mutex so concurrent callers always receive
/// pairwise-distinct, monotonically ordered stamps. There is no observable
/// failure mode: a non-monotonic clock only ever extends the current tick.
pub struct Sequencer {
    clock: Box<dyn Fn() -> u64 + Send + Sync>,
    last: Mutex<Option<Stamp>>,
}

impl Sequencer {
    /// Create a sequencer driven by the system wall clock.
    pub fn new() -> Self {
        Self::with_clock(wall_clock_ms)
    }

    /// Create a sequencer driven by a caller-supplied clock.
    ///
    /// The clock returns milliseconds since the Unix epoch. Used by tests to
    /// exercise same-tick and clock-rewind behavior deterministically.
    pub fn with_clock(clock: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: Mutex::new(None),
        }
    }

    /// Produce the next stamp, strictly greater than every stamp this
    /// sequencer has returned before.
    pub fn next(&self) -> Stamp {
        let now = (self.clock)();
        let mut last = self.last.lock();
        let stamp = match *last {
            // Same tick, or the clock went backwards: stay on the last
            // emitted timestamp and bump the counter.
            Some(prev) if now <= prev.wall_ms => Stamp {
                wall_ms: prev.wall_ms,
                seq: prev.seq + 1,
            },
            _ => Stamp {
                wall_ms: now,
                seq: 0,
            },
        };
        *last = Some(stamp);
        stamp
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer").field("last", &*self.last.lock()).finish()
    }
}

fn wall_clock_ms() -> u64 {
    // Pre-1970 clocks clamp to 0 rather than wrapping.
    Utc::now().timestamp_millis().max(0) as u64
}
