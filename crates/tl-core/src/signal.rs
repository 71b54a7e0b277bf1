//! Traffic-signal phase model.
//!
//! # Cycle layout
//!
//! Every junction repeats the same cycle forever, starting at time 0:
//!
//! ```text
//! |<---- green ---->|<-- yellow -->|<----- red ----->|
//! 0               green        green+yellow        cycle
//! ```
//!
//! Only `[0, green)` lets a traveler through.  Yellow blocks just like red,
//! so a traveler arriving at offset `t >= green` waits until the next cycle
//! begins, i.e. `cycle - t`.
//!
//! A cycle of length zero means the junction has no signal at all.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Travel-time unit used by the routing engine (abstract "time units").
pub type Cost = u64;

/// Sentinel for "not reached yet" in tentative-distance arrays.
pub const INFINITE_COST: Cost = Cost::MAX;

/// The `(red, green, yellow)` duration triple of a junction's signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalPhase {
    pub red:    u32,
    pub green:  u32,
    pub yellow: u32,
}

impl SignalPhase {
    /// Phase applied to junctions whose snapshot line could not be parsed.
    pub const FALLBACK: SignalPhase = SignalPhase { red: 10, green: 5, yellow: 2 };

    /// Build a phase from raw (possibly user-typed) durations.
    ///
    /// Rejects negative values and values that do not fit a `u32`.
    pub fn new(red: i64, green: i64, yellow: i64) -> CoreResult<Self> {
        Ok(Self {
            red:    checked_duration("red", red)?,
            green:  checked_duration("green", green)?,
            yellow: checked_duration("yellow", yellow)?,
        })
    }

    /// A signal that never blocks: the whole cycle is green.
    #[inline]
    pub const fn always_green(len: u32) -> Self {
        Self { red: 0, green: len, yellow: 0 }
    }

    /// Total cycle length.
    #[inline]
    pub fn cycle(&self) -> Cost {
        self.red as Cost + self.green as Cost + self.yellow as Cost
    }

    /// Shorthand for [`waiting_time`]`(*self, arrival)`.
    #[inline]
    pub fn waiting_time(&self, arrival: Cost) -> Cost {
        waiting_time(*self, arrival)
    }
}

impl Default for SignalPhase {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl fmt::Display for SignalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R:{} G:{} Y:{}", self.red, self.green, self.yellow)
    }
}

/// Time a traveler arriving at `arrival` must wait before moving on.
///
/// Always `0` for a zero-length cycle; otherwise in `[0, cycle)`.
#[inline]
pub fn waiting_time(phase: SignalPhase, arrival: Cost) -> Cost {
    let cycle = phase.cycle();
    if cycle == 0 {
        return 0;
    }
    let t = arrival % cycle;
    if t < phase.green as Cost {
        0
    } else {
        cycle - t
    }
}

fn checked_duration(field: &'static str, value: i64) -> CoreResult<u32> {
    if value < 0 {
        return Err(CoreError::NegativeDuration { field, value });
    }
    u32::try_from(value).map_err(|_| CoreError::DurationOverflow { field, value })
}
