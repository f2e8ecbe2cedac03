use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PeakError, PeakResult};
use crate::render::Renderer;

use super::{EngineSnapshot, PeakEngine};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for persisted editing sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> PeakResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload)
            .map_err(|e| PeakError::InvalidData(format!("failed to serialize peak session: {e}")))
    }

    /// Parses either a bare snapshot or a versioned envelope.
    ///
    /// A top-level `schema_version` key selects the envelope; anything else is
    /// read as a bare snapshot, so parse errors point at the actual payload.
    pub fn from_json_compat_str(input: &str) -> PeakResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| PeakError::InvalidData(format!("peak session is not valid json: {e}")))?;

        let Some(version) = value.get("schema_version") else {
            return serde_json::from_value(value).map_err(|e| {
                PeakError::InvalidData(format!("malformed bare peak session: {e}"))
            });
        };
        if version.as_u64() != Some(u64::from(ENGINE_SNAPSHOT_JSON_SCHEMA_V1)) {
            return Err(PeakError::InvalidData(format!(
                "unsupported peak session schema version: {version}"
            )));
        }

        let payload: EngineSnapshotJsonContractV1 = serde_json::from_value(value)
            .map_err(|e| PeakError::InvalidData(format!("malformed peak session v1: {e}")))?;
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> PeakEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> PeakResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }

    /// Restores an engine from JSON written by
    /// [`PeakEngine::snapshot_json_contract_v1_pretty`] or a bare snapshot.
    pub fn from_json_compat_str(renderer: R, input: &str) -> PeakResult<Self> {
        let snapshot = EngineSnapshot::from_json_compat_str(input)?;
        Self::from_snapshot(renderer, snapshot)
    }
}
