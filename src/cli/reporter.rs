use crate::error::AiActError;
use crate::models::ComplianceReport;

/// Formats scan output for the operator. The JSON body itself stays stable
/// and machine-readable; the surrounding banner and summary are cosmetic.
pub struct ReportPrinter;

impl ReportPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_report(&self, report: &ComplianceReport) -> Result<(), AiActError> {
        println!("\n--- COMPLIANCE SCAN COMPLETE ---");
        println!("{}", report.to_json_pretty()?);
        Ok(())
    }

    pub fn print_summary(&self, report: &ComplianceReport) {
        let high_risk = report.high_risk_count();
        if high_risk > 0 {
            println!("\n[!] {} High Risk classification(s) detected.", high_risk);
        }
        println!("[+] Want to generate the official Annex IV PDF for this repo?");
        println!("[+] Sign up at: https://annexfour.eu");
    }

    pub fn print_draft_hint(&self) {
        println!("\nTo generate a draft, save the above JSON to a file (e.g., scan.json) and run:");
        println!("  aiact draft scan.json");
    }
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::new()
    }
}
