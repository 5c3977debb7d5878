use serde::{Deserialize, Serialize};

use crate::error::{ArcError, ArcResult};

use super::{CorrelationReport, DatasetSummary};

pub const CORRELATION_REPORT_JSON_SCHEMA_V1: u32 = 1;
pub const DATASET_SUMMARY_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReportJsonContractV1 {
    pub schema_version: u32,
    pub report: CorrelationReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummaryJsonContractV1 {
    pub schema_version: u32,
    pub summary: DatasetSummary,
}

impl CorrelationReport {
    pub fn to_json_pretty(&self) -> ArcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ArcError::InvalidData(format!("failed to serialize correlation report json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ArcResult<String> {
        let payload = CorrelationReportJsonContractV1 {
            schema_version: CORRELATION_REPORT_JSON_SCHEMA_V1,
            report: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ArcError::InvalidData(format!(
                "failed to serialize correlation report contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare report or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> ArcResult<Self> {
        if let Ok(report) = serde_json::from_str::<CorrelationReport>(input) {
            return Ok(report);
        }
        let payload: CorrelationReportJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ArcError::InvalidData(format!("failed to parse correlation report json: {e}"))
            })?;
        if payload.schema_version != CORRELATION_REPORT_JSON_SCHEMA_V1 {
            return Err(ArcError::InvalidData(format!(
                "unsupported correlation report schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.report)
    }
}

impl DatasetSummary {
    pub fn to_json_contract_v1_pretty(&self) -> ArcResult<String> {
        let payload = DatasetSummaryJsonContractV1 {
            schema_version: DATASET_SUMMARY_JSON_SCHEMA_V1,
            summary: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ArcError::InvalidData(format!("failed to serialize dataset summary contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ArcResult<Self> {
        if let Ok(summary) = serde_json::from_str::<DatasetSummary>(input) {
            return Ok(summary);
        }
        let payload: DatasetSummaryJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ArcError::InvalidData(format!("failed to parse dataset summary json: {e}"))
        })?;
        if payload.schema_version != DATASET_SUMMARY_JSON_SCHEMA_V1 {
            return Err(ArcError::InvalidData(format!(
                "unsupported dataset summary schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.summary)
    }
}
