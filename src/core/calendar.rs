use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

/// A calendar-aware span in whole years, months, and days.
///
/// Each component is floored after subtracting the coarser ones, so the
/// value reads the way a person states an age: "2 years, 3 months, 11 days".
/// Variable month and year lengths are respected; nothing here divides a
/// flat day count by 365 or 30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDelta {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl CalendarDelta {
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        days: 0,
    };

    #[must_use]
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Calendar difference from `from` to `to`, non-negative by construction.
    ///
    /// Whole months are counted first, with end-of-month days clamped the
    /// way calendar arithmetic clamps them (Jan 31 plus one month lands on
    /// the last day of February). The leftover is a floored day count from
    /// the month anchor. `to < from` yields zero.
    #[must_use]
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        if to <= from {
            return Self::ZERO;
        }

        let mut whole_months = month_span(from, to);
        let mut anchor = add_months(from, whole_months);
        if anchor > to {
            whole_months = whole_months.saturating_sub(1);
            anchor = add_months(from, whole_months);
        }

        let days = (to - anchor).num_days().max(0) as u32;
        Self {
            years: whole_months / 12,
            months: whole_months % 12,
            days,
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// Raw signed month distance by calendar position, ignoring day-of-month.
fn month_span(from: DateTime<Utc>, to: DateTime<Utc>) -> u32 {
    use chrono::Datelike;
    let span =
        (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    span.max(0) as u32
}

fn add_months(instant: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    instant
        .checked_add_months(Months::new(months))
        .unwrap_or(instant)
}
