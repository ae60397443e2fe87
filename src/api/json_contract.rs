use serde::{Deserialize, Serialize};

use crate::core::ResolvedAntardasha;
use crate::error::{DashaError, DashaResult};

pub const RESOLVED_ANTARDASHA_JSON_SCHEMA_V1: u32 = 1;

/// Versioned wire envelope for a resolved Antardasha subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAntardashaJsonContractV1 {
    pub schema_version: u32,
    pub resolved: ResolvedAntardasha,
}

impl ResolvedAntardasha {
    pub fn to_json_contract_v1_pretty(&self) -> DashaResult<String> {
        let payload = ResolvedAntardashaJsonContractV1 {
            schema_version: RESOLVED_ANTARDASHA_JSON_SCHEMA_V1,
            resolved: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashaError::InvalidData(format!("failed to serialize antardasha contract v1: {e}"))
        })
    }

    /// Parses either a bare subtree or a v1 envelope.
    pub fn from_json_compat_str(input: &str) -> DashaResult<Self> {
        if let Ok(resolved) = serde_json::from_str::<ResolvedAntardasha>(input) {
            return Ok(resolved);
        }
        let payload: ResolvedAntardashaJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                DashaError::InvalidData(format!("failed to parse antardasha json payload: {e}"))
            })?;
        if payload.schema_version != RESOLVED_ANTARDASHA_JSON_SCHEMA_V1 {
            return Err(DashaError::InvalidData(format!(
                "unsupported antardasha schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.resolved)
    }
}
