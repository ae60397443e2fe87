//! dasha-rs: Vimshottari dasha timeline engine.
//!
//! This crate computes the hierarchical planetary period timeline of a Vedic
//! birth chart: given a fixed Mahadasha sequence and a percentage weight
//! table, it derives exact Antardasha boundaries, tags the sub-period that
//! contains an evaluation instant, and reports elapsed/remaining time in
//! calendar units. Chart rendering, ephemeris computation, and reference
//! data persistence are external collaborators.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{
    DashaSession, DashaTimeline, InMemoryReferenceStore, ReferenceStore, SelectionTicket,
    resolve_antardasha,
};
pub use crate::core::{
    AntardashaPeriod, CalendarDelta, CurrentAntardasha, MahadashaPeriod, Planet,
    ResolvedAntardasha, TimeInterval, WeightedPeriod,
};
pub use error::{DashaError, DashaResult};
