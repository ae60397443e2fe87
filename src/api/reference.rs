use indexmap::IndexMap;
use tracing::debug;

use crate::core::{PLANET_CYCLE, Planet, WeightedPeriod};
use crate::error::{DashaError, DashaResult};

/// Full-cycle Vimshottari period lengths in years, aligned with
/// [`PLANET_CYCLE`]. The cycle totals 120 years.
const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Collaborator seam for the externally owned antardasha percentage tables.
///
/// A lookup miss or an empty table is a [`DashaError::MissingReferenceData`]
/// condition, never silently zero. The store is read-only from this crate's
/// perspective.
pub trait ReferenceStore {
    fn antardasha_weights(&self, planet: Planet) -> DashaResult<Vec<WeightedPeriod>>;
}

/// In-memory reference store keyed by the top-level planet.
///
/// Backed by an `IndexMap` so the weight order supplied at insertion is the
/// order subdivision receives, which the ordering invariant requires.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceStore {
    tables: IndexMap<Planet, Vec<WeightedPeriod>>,
}

impl InMemoryReferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) the weight table for one top-level planet.
    pub fn insert(&mut self, planet: Planet, weights: Vec<WeightedPeriod>) {
        debug!(%planet, entries = weights.len(), "insert reference table");
        self.tables.insert(planet, weights);
    }

    /// Builds the standard Vimshottari table.
    ///
    /// Each mahadasha's antardasha sequence starts from its own planet and
    /// proceeds cyclically; each entry's share is its full-cycle period as a
    /// percentage of the 120-year total.
    #[must_use]
    pub fn vimshottari() -> Self {
        let mut store = Self::new();
        for (index, &planet) in PLANET_CYCLE.iter().enumerate() {
            let weights = (0..PLANET_CYCLE.len())
                .map(|offset| {
                    let position = (index + offset) % PLANET_CYCLE.len();
                    WeightedPeriod {
                        planet: PLANET_CYCLE[position],
                        weight_percent: VIMSHOTTARI_YEARS[position] / VIMSHOTTARI_TOTAL_YEARS
                            * 100.0,
                    }
                })
                .collect();
            store.tables.insert(planet, weights);
        }
        store
    }
}

impl ReferenceStore for InMemoryReferenceStore {
    fn antardasha_weights(&self, planet: Planet) -> DashaResult<Vec<WeightedPeriod>> {
        match self.tables.get(&planet) {
            Some(weights) if !weights.is_empty() => Ok(weights.clone()),
            _ => Err(DashaError::MissingReferenceData { planet }),
        }
    }
}
