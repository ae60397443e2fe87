use crate::core::{MahadashaPeriod, Planet};
use crate::error::{DashaError, DashaResult};

/// The top-level Mahadasha sequence of one chart, plus which planet's period
/// is currently running.
///
/// The sequence keeps the order it was supplied in; nothing here resorts by
/// date or name. The timeline is read-only once built; resolved antardasha
/// subtrees live in the session, never merged back into the timeline.
#[derive(Debug, Clone)]
pub struct DashaTimeline {
    sequence: Vec<MahadashaPeriod>,
    current_planet: Option<Planet>,
}

impl DashaTimeline {
    #[must_use]
    pub fn new(sequence: Vec<MahadashaPeriod>, current_planet: Option<Planet>) -> Self {
        Self {
            sequence,
            current_planet,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &[MahadashaPeriod] {
        &self.sequence
    }

    #[must_use]
    pub fn current_planet(&self) -> Option<Planet> {
        self.current_planet
    }

    /// The currently running top-level period, when its planet is present in
    /// the sequence.
    #[must_use]
    pub fn current_period(&self) -> Option<&MahadashaPeriod> {
        let planet = self.current_planet?;
        self.sequence.iter().find(|period| period.planet == planet)
    }

    /// Looks up the top-level period ruled by `planet`.
    pub fn period_for(&self, planet: Planet) -> DashaResult<&MahadashaPeriod> {
        self.sequence
            .iter()
            .find(|period| period.planet == planet)
            .ok_or(DashaError::MissingTopLevelPeriod { planet })
    }
}
