pub mod json_contract;
pub mod reference;
pub mod resolver;
pub mod session;
pub mod timeline;

pub use crate::core::ResolvedAntardasha;
pub use json_contract::{RESOLVED_ANTARDASHA_JSON_SCHEMA_V1, ResolvedAntardashaJsonContractV1};
pub use reference::{InMemoryReferenceStore, ReferenceStore};
pub use resolver::resolve_antardasha;
pub use session::{DashaSession, SelectionTicket};
pub use timeline::DashaTimeline;
