use crate::models::ScanResult;
use serde::{Deserialize, Serialize};

/// Scan report under the fixed Annex IV schema key. Both lists are sorted
/// and unique so that identical inputs produce byte-identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    #[serde(rename = "section_2_b_design_specifications")]
    pub design_specifications: DesignSpecifications,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSpecifications {
    pub detected_libraries: Vec<String>,
    pub risk_classification_detected: Vec<String>,
}

impl ComplianceReport {
    pub fn from_scan(result: &ScanResult) -> Self {
        // BTreeSet iteration is already sorted
        Self {
            design_specifications: DesignSpecifications {
                detected_libraries: result.detected_libraries.iter().cloned().collect(),
                risk_classification_detected: result.risk_flags.iter().cloned().collect(),
            },
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, crate::error::AiActError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn detected_libraries(&self) -> &[String] {
        &self.design_specifications.detected_libraries
    }

    pub fn risk_classifications(&self) -> &[String] {
        &self.design_specifications.risk_classification_detected
    }

    pub fn high_risk_count(&self) -> usize {
        self.design_specifications
            .risk_classification_detected
            .iter()
            .filter(|flag| flag.contains("High Risk"))
            .count()
    }
}
