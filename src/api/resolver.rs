use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::{
    AntardashaPeriod, CalendarDelta, CurrentAntardasha, MahadashaPeriod, Planet,
    ResolvedAntardasha, subdivide,
};
use crate::error::DashaResult;

use super::ReferenceStore;

/// Resolves the Antardasha subtree of one top-level period.
///
/// Looks up the weight table for the period's ruling planet and subdivides
/// the period's interval in table order. When the caller flags this period
/// as the currently running one via `current_planet`, the first sub-period
/// whose closed interval contains `now` is tagged with elapsed/remaining
/// calendar figures.
///
/// A weight-table miss fails the whole operation with
/// [`crate::DashaError::MissingReferenceData`]; no partial subtree is
/// produced. An absent current marker is a valid state (for instance when
/// `now` lies outside the period entirely), not an error.
///
/// Pure apart from the store lookup: the same inputs always yield the same
/// subtree, and `now` is explicit so resolution is deterministic in tests.
pub fn resolve_antardasha(
    top_level: &MahadashaPeriod,
    store: &impl ReferenceStore,
    current_planet: Option<Planet>,
    now: DateTime<Utc>,
) -> DashaResult<ResolvedAntardasha> {
    let weights = store.antardasha_weights(top_level.planet)?;
    let parent = top_level.interval()?;
    let children = subdivide(parent, &weights);

    let current = if current_planet == Some(top_level.planet) {
        children
            .iter()
            .find(|(_, interval)| interval.contains(now))
            .map(|&(planet, interval)| CurrentAntardasha {
                planet,
                start_date: interval.start(),
                end_date: interval.end(),
                elapsed: CalendarDelta::between(interval.start(), now),
                remaining: CalendarDelta::between(now, interval.end()),
            })
    } else {
        None
    };

    debug!(
        planet = %top_level.planet,
        sub_periods = children.len(),
        has_current = current.is_some(),
        "resolved antardasha"
    );

    let sequence = children
        .into_iter()
        .map(|(planet, interval)| AntardashaPeriod {
            planet,
            start_date: interval.start(),
            end_date: interval.end(),
            pratyantardasha: None,
        })
        .collect();

    Ok(ResolvedAntardasha { sequence, current })
}
