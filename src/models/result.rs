use std::collections::BTreeSet;

/// Accumulated outcome of one scan, whether via tree walk or manual entry.
/// A module name enters `detected_libraries` only when at least one catalog
/// entry matched it, and every flag in `risk_flags` came from such a match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanResult {
    pub detected_libraries: BTreeSet<String>,
    pub risk_flags: BTreeSet<String>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one matched module with the classifications it picked up.
    /// Called only for modules with at least one match.
    pub fn record(&mut self, module_name: &str, classifications: &[&str]) {
        if classifications.is_empty() {
            return;
        }

        self.detected_libraries.insert(module_name.to_string());
        for classification in classifications {
            self.risk_flags.insert((*classification).to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.detected_libraries.is_empty() && self.risk_flags.is_empty()
    }

    pub fn high_risk_count(&self) -> usize {
        self.risk_flags
            .iter()
            .filter(|flag| flag.contains("High Risk"))
            .count()
    }
}
