use crate::error::AiActError;
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Built-in risk catalog used whenever no external catalog can be loaded.
/// Prefixes map to the Annex III risk category they most commonly indicate.
const DEFAULT_RISK_MAP: &[(&str, &str)] = &[
    ("face_recognition", "High Risk: Biometrics (Annex III.1)"),
    ("dlib", "High Risk: Biometrics (Annex III.1)"),
    ("opencv-python", "Potential Risk: Visual Analysis"),
    ("cv2", "Potential Risk: Visual Analysis"),
    ("sklearn", "General ML (Check for Employment/Credit Scoring)"),
    ("torch", "Deep Learning (Check for Generative/Biometric)"),
    ("pypdf2", "Potential Risk: Resume Parsing (Employment - Annex III.4)"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct RiskEntry {
    pub prefix: String,
    pub classification: String,
}

/// Ordered mapping from library-name prefix to risk classification.
/// Entry order never affects the outcome: matching collects every hit.
#[derive(Debug, Clone)]
pub struct RiskCatalog {
    entries: Vec<RiskEntry>,
}

impl RiskCatalog {
    pub fn default_catalog() -> Self {
        Self {
            entries: DEFAULT_RISK_MAP
                .iter()
                .map(|(prefix, classification)| RiskEntry {
                    prefix: prefix.to_string(),
                    classification: classification.to_string(),
                })
                .collect(),
        }
    }

    /// Load an external catalog: a JSON object mapping prefix to
    /// classification. Missing, unreadable, or malformed files are errors
    /// here; `load_or_default` is the forgiving boundary.
    pub fn try_load(path: &Path) -> Result<Self, AiActError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| AiActError::CatalogError(format!("{}: {}", path.display(), e)))?;

        let map: BTreeMap<String, String> = serde_json::from_str(&raw)
            .map_err(|e| AiActError::CatalogError(format!("{}: {}", path.display(), e)))?;

        let entries: Vec<RiskEntry> = map
            .into_iter()
            .map(|(prefix, classification)| RiskEntry {
                prefix,
                classification,
            })
            .collect();

        if entries.iter().any(|entry| entry.prefix.is_empty()) {
            return Err(AiActError::CatalogError(format!(
                "{}: empty prefix in catalog",
                path.display()
            )));
        }

        Ok(Self { entries })
    }

    /// Catalog loading never blocks a scan: any failure collapses to the
    /// built-in default.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default_catalog();
        };

        match Self::try_load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                debug!("falling back to built-in risk catalog: {}", e);
                Self::default_catalog()
            }
        }
    }

    /// Collect the classification of every entry whose prefix starts the
    /// module name. A literal string-prefix check: "face_recognition_v2"
    /// matches the "face_recognition" entry. No short-circuit; a module can
    /// pick up several classifications.
    pub fn classify(&self, module_name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| module_name.starts_with(entry.prefix.as_str()))
            .map(|entry| entry.classification.as_str())
            .collect()
    }

    pub fn entries(&self) -> &[RiskEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_classifies_biometrics() {
        let catalog = RiskCatalog::default_catalog();

        let flags = catalog.classify("face_recognition");
        assert_eq!(flags, vec!["High Risk: Biometrics (Annex III.1)"]);
    }

    #[test]
    fn test_prefix_over_matching() {
        let catalog = RiskCatalog::default_catalog();

        // Deliberate policy: a literal prefix hit, not segment-aware
        let flags = catalog.classify("face_recognition_v2");
        assert_eq!(flags, vec!["High Risk: Biometrics (Annex III.1)"]);

        let flags = catalog.classify("cv2.aruco");
        assert_eq!(flags, vec!["Potential Risk: Visual Analysis"]);
    }

    #[test]
    fn test_unknown_module_matches_nothing() {
        let catalog = RiskCatalog::default_catalog();

        assert!(catalog.classify("math").is_empty());
        assert!(catalog.classify("").is_empty());
    }

    #[test]
    fn test_all_entries_checked_no_short_circuit() {
        let catalog = RiskCatalog {
            entries: vec![
                RiskEntry {
                    prefix: "tf".to_string(),
                    classification: "first".to_string(),
                },
                RiskEntry {
                    prefix: "tflite".to_string(),
                    classification: "second".to_string(),
                },
            ],
        };

        let flags = catalog.classify("tflite_runtime");
        assert_eq!(flags, vec!["first", "second"]);
    }

    #[test]
    fn test_try_load_external_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tensorflow": "Deep Learning"}}"#).unwrap();

        let catalog = RiskCatalog::try_load(file.path()).unwrap();
        assert_eq!(catalog.classify("tensorflow"), vec!["Deep Learning"]);
        assert!(catalog.classify("torch").is_empty());
    }

    #[test]
    fn test_try_load_rejects_empty_prefix() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"": "Anything"}}"#).unwrap();

        assert!(RiskCatalog::try_load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_falls_back_on_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let catalog = RiskCatalog::load_or_default(Some(file.path()));
        assert_eq!(
            catalog.classify("dlib"),
            vec!["High Risk: Biometrics (Annex III.1)"]
        );
    }

    #[test]
    fn test_load_or_default_falls_back_on_missing_file() {
        let catalog =
            RiskCatalog::load_or_default(Some(Path::new("/nonexistent/risk_map.json")));
        assert_eq!(catalog.entries().len(), 7);
    }
}
