use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Planet;
use crate::error::{DashaError, DashaResult};

/// A closed interval of absolute time.
///
/// `start <= end` is enforced on construction. Zero-length intervals are
/// valid degenerate values, so downstream queries must tolerate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DashaResult<Self> {
        if end < start {
            return Err(DashaError::InvalidData(format!(
                "interval end {end} precedes start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        self.end - self.start
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Membership on the closed interval: `start <= instant <= end`.
    ///
    /// A transition instant therefore belongs to both the ending and the
    /// starting period; the resolver's in-order first-match scan is the
    /// authoritative tie-break.
    #[must_use]
    pub fn contains(self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// One entry of an antardasha weight table: the sub-period's ruling planet
/// and its share of the parent duration in percent.
///
/// The table is externally supplied and is used as exact multiplicative
/// weights. Entries need not sum to 100 and are never renormalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedPeriod {
    pub planet: Planet,
    pub weight_percent: f64,
}

/// Splits `parent` into one sub-interval per weight entry, in entry order.
///
/// A running cursor starts at `parent.start`; each entry claims
/// `parent.duration * weight_percent / 100` (millisecond resolution). Each
/// boundary is positioned from the cumulative weight so that per-entry
/// rounding never accumulates into drift, and the last emitted interval's
/// end is snapped to `parent.end` exactly, closing the far boundary with no
/// gap or overlap.
///
/// A single-entry table yields the whole parent regardless of its
/// percentage. A degenerate parent yields degenerate children.
#[must_use]
pub fn subdivide(parent: TimeInterval, weights: &[WeightedPeriod]) -> Vec<(Planet, TimeInterval)> {
    let total_millis = parent.duration().num_milliseconds();
    let mut children = Vec::with_capacity(weights.len());
    let mut cursor = parent.start;
    let mut cumulative_percent = 0.0;

    for weight in weights {
        // A non-positive weight violates the table invariant; clamp instead of
        // letting it produce an inverted child interval.
        cumulative_percent += weight.weight_percent.max(0.0);
        let claimed = (total_millis as f64 * (cumulative_percent / 100.0)).round() as i64;
        let end = parent.start + Duration::milliseconds(claimed);
        children.push((weight.planet, TimeInterval { start: cursor, end }));
        cursor = end;
    }

    if let Some((_, last)) = children.last_mut() {
        // Overshooting tables (sum > 100) would otherwise leave the snapped
        // child inverted.
        last.start = last.start.min(parent.end);
        last.end = parent.end;
    }
    children
}
