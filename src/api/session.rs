use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::core::{Planet, ResolvedAntardasha};
use crate::error::DashaResult;

use super::{DashaTimeline, ReferenceStore, resolve_antardasha};

/// Proof that a resolution request belongs to a specific selection.
///
/// A ticket is minted by [`DashaSession::select`] and handed back to
/// [`DashaSession::apply`] together with the resolved subtree. Tickets from
/// superseded selections no longer match the session's version, so their
/// results are discarded instead of overwriting a newer selection's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    planet: Planet,
    version: u64,
}

impl SelectionTicket {
    #[must_use]
    pub fn planet(self) -> Planet {
        self.planet
    }
}

/// One caller's view over a dasha timeline: the latest selection and at most
/// one materialized Antardasha subtree.
///
/// The subtree is replaced wholesale on every new resolution; selection
/// change discards the previous subtree immediately. Results for superseded
/// selections are dropped (last-selection-wins, not first-completion-wins),
/// which stands in for explicit cancellation of in-flight lookups.
#[derive(Debug)]
pub struct DashaSession {
    timeline: DashaTimeline,
    selected: Option<Planet>,
    resolved: Option<ResolvedAntardasha>,
    version: u64,
}

impl DashaSession {
    #[must_use]
    pub fn new(timeline: DashaTimeline) -> Self {
        Self {
            timeline,
            selected: None,
            resolved: None,
            version: 0,
        }
    }

    #[must_use]
    pub fn timeline(&self) -> &DashaTimeline {
        &self.timeline
    }

    #[must_use]
    pub fn selected(&self) -> Option<Planet> {
        self.selected
    }

    #[must_use]
    pub fn resolved(&self) -> Option<&ResolvedAntardasha> {
        self.resolved.as_ref()
    }

    /// Selects a top-level period for detail viewing.
    ///
    /// Fails with [`crate::DashaError::MissingTopLevelPeriod`] when the
    /// planet is absent from the timeline; the previous selection and
    /// subtree stay untouched in that case. On success any previously
    /// resolved subtree is discarded and a fresh ticket is minted.
    pub fn select(&mut self, planet: Planet) -> DashaResult<SelectionTicket> {
        self.timeline.period_for(planet)?;
        self.version += 1;
        self.selected = Some(planet);
        self.resolved = None;
        debug!(%planet, version = self.version, "select mahadasha");
        Ok(SelectionTicket {
            planet,
            version: self.version,
        })
    }

    /// Clears the selection and any materialized subtree.
    pub fn clear_selection(&mut self) {
        self.version += 1;
        self.selected = None;
        self.resolved = None;
        trace!(version = self.version, "clear selection");
    }

    /// Applies a resolution produced for `ticket`.
    ///
    /// Returns `true` when the ticket still names the latest selection and
    /// the subtree was stored; `false` when the result arrived for a
    /// superseded selection and was dropped.
    pub fn apply(&mut self, ticket: SelectionTicket, resolved: ResolvedAntardasha) -> bool {
        if ticket.version != self.version {
            debug!(
                planet = %ticket.planet,
                ticket_version = ticket.version,
                session_version = self.version,
                "discard stale resolution"
            );
            return false;
        }
        self.resolved = Some(resolved);
        true
    }

    /// Synchronous select-resolve-apply path against a local store.
    pub fn resolve_at(
        &mut self,
        planet: Planet,
        store: &impl ReferenceStore,
        now: DateTime<Utc>,
    ) -> DashaResult<()> {
        let ticket = self.select(planet)?;
        let top_level = self.timeline.period_for(planet)?.clone();
        let resolved =
            resolve_antardasha(&top_level, store, self.timeline.current_planet(), now)?;
        self.apply(ticket, resolved);
        Ok(())
    }

    /// [`DashaSession::resolve_at`] evaluated at wall-clock time.
    pub fn resolve_now(&mut self, planet: Planet, store: &impl ReferenceStore) -> DashaResult<()> {
        self.resolve_at(planet, store, Utc::now())
    }
}
