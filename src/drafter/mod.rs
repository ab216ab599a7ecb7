use crate::error::AiActError;
use crate::models::ComplianceReport;

/// Render a preliminary Annex IV draft (markdown) from a scan report.
/// Local templating only; the certified document pipeline lives elsewhere.
pub fn generate_draft(report: &ComplianceReport) -> Result<String, AiActError> {
    if report.detected_libraries().is_empty() && report.risk_classifications().is_empty() {
        return Err(AiActError::DraftError(
            "scan report contains no detected libraries".to_string(),
        ));
    }

    let mut draft = String::new();
    draft.push_str("# Annex IV Technical Documentation (Preliminary Draft)\n\n");
    draft.push_str("## 2(b) Design Specifications\n\n");

    draft.push_str("The system integrates the following third-party AI/ML libraries,\n");
    draft.push_str("identified by static analysis of its source code:\n\n");
    for library in report.detected_libraries() {
        draft.push_str(&format!("- `{}`\n", library));
    }

    draft.push_str("\n## Risk Classifications Detected\n\n");
    for classification in report.risk_classifications() {
        draft.push_str(&format!("- {}\n", classification));
    }

    let high_risk = report.high_risk_count();
    if high_risk > 0 {
        draft.push_str(&format!(
            "\n> **Note:** {} high-risk classification(s) detected. Articles 9-15\n\
             > obligations (risk management, data governance, human oversight)\n\
             > likely apply and must be documented before deployment.\n",
            high_risk
        ));
    }

    draft.push_str("\n---\n*Generated by aiact. This draft is a starting point, not legal advice.*\n");

    Ok(draft)
}
