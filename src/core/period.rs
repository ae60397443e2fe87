use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{CalendarDelta, Planet, TimeInterval};
use crate::error::DashaResult;

/// A top-level (Mahadasha) period as supplied by the chart-data collaborator.
///
/// `elapsed`/`remaining` default to zero when the source omits them, and an
/// absent antardasha subtree stays `None` rather than an empty structure, so
/// presence of the subtree means "resolved", never "resolved but empty".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MahadashaPeriod {
    pub planet: Planet,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub elapsed: CalendarDelta,
    #[serde(default)]
    pub remaining: CalendarDelta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antardasha: Option<ResolvedAntardasha>,
}

impl MahadashaPeriod {
    pub fn new(
        planet: Planet,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> DashaResult<Self> {
        TimeInterval::new(start_date, end_date)?;
        Ok(Self {
            planet,
            start_date,
            end_date,
            elapsed: CalendarDelta::ZERO,
            remaining: CalendarDelta::ZERO,
            antardasha: None,
        })
    }

    /// The period's interval, revalidated because deserialized values bypass
    /// [`MahadashaPeriod::new`].
    pub fn interval(&self) -> DashaResult<TimeInterval> {
        TimeInterval::new(self.start_date, self.end_date)
    }
}

/// A resolved Antardasha subtree: the ordered sub-period sequence plus the
/// optional marker for the sub-period containing the evaluation instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAntardasha {
    pub sequence: Vec<AntardashaPeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentAntardasha>,
}

/// One Antardasha sub-period.
///
/// The third-level subdivision is carried structurally only; nothing in this
/// crate computes pratyantardasha boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AntardashaPeriod {
    pub planet: Planet,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pratyantardasha: Option<Vec<PratyantardashaPeriod>>,
}

impl AntardashaPeriod {
    pub fn interval(&self) -> DashaResult<TimeInterval> {
        TimeInterval::new(self.start_date, self.end_date)
    }
}

/// Third-level leaf node, modeled but never derived here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PratyantardashaPeriod {
    pub planet: Planet,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// The sub-period containing the evaluation instant, with calendar figures
/// for how far in it has run and how much remains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAntardasha {
    pub planet: Planet,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub elapsed: CalendarDelta,
    pub remaining: CalendarDelta,
}
