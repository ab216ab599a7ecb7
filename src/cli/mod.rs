pub mod args;
pub mod prompt;
pub mod reporter;

pub use args::{Cli, Command};
pub use prompt::ManualPrompter;
pub use reporter::ReportPrinter;

use crate::catalog::RiskCatalog;
use crate::drafter;
use crate::error::AiActError;
use crate::models::ComplianceReport;
use crate::scanner::ComplianceScanner;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn run(&self) -> Result<i32, AiActError> {
        // Operator configuration from a local .env, a no-op when absent
        if let Ok(path) = dotenvy::dotenv() {
            debug!("loaded environment from {}", path.display());
        }

        match &self.cli.command {
            Command::Scan {
                path,
                libs,
                output,
                catalog,
            } => self.run_scan(path.as_deref(), libs.as_deref(), output.as_deref(), catalog.as_deref()),
            Command::Manual { catalog } => self.run_manual(catalog.as_deref()),
            Command::Draft { scan_json } => self.run_draft(scan_json),
        }
    }

    fn resolve_catalog(&self, override_path: Option<&Path>) -> RiskCatalog {
        let path: Option<PathBuf> = override_path
            .map(Path::to_path_buf)
            .or_else(args::default_catalog_path);
        RiskCatalog::load_or_default(path.as_deref())
    }

    fn run_scan(
        &self,
        path: Option<&Path>,
        libs: Option<&str>,
        output: Option<&Path>,
        catalog: Option<&Path>,
    ) -> Result<i32, AiActError> {
        let scanner = ComplianceScanner::new(self.resolve_catalog(catalog));

        let result = match (libs, path) {
            (Some(libs), _) => scanner.scan_names(&prompt::parse_library_list(libs)),
            (None, Some(path)) => scanner.scan_tree(path)?,
            (None, None) => {
                return Err(AiActError::InvalidArguments(
                    "provide either a repository path or --libs".to_string(),
                ))
            }
        };

        let report = ComplianceReport::from_scan(&result);
        let printer = ReportPrinter::new();

        match output {
            Some(output_path) => {
                // Persisting is fatal to the output step only: the in-memory
                // report is still printed when the write fails
                match fs::write(output_path, report.to_json_pretty()?) {
                    Ok(()) => {
                        println!("[+] Scan results saved to {}", output_path.display());
                    }
                    Err(e) => {
                        warn!("failed to save report to {}: {}", output_path.display(), e);
                        printer.print_report(&report)?;
                        printer.print_summary(&report);
                        return Err(e.into());
                    }
                }
            }
            None => printer.print_report(&report)?,
        }

        printer.print_summary(&report);
        Ok(0)
    }

    fn run_manual(&self, catalog: Option<&Path>) -> Result<i32, AiActError> {
        let names = match ManualPrompter::new().prompt_library_names() {
            Ok(names) => names,
            Err(AiActError::NoInput) => {
                println!("No libraries entered. Exiting.");
                return Ok(0);
            }
            Err(e) => return Err(e),
        };

        let scanner = ComplianceScanner::new(self.resolve_catalog(catalog));
        let report = ComplianceReport::from_scan(&scanner.scan_names(&names));

        let printer = ReportPrinter::new();
        printer.print_report(&report)?;
        printer.print_draft_hint();
        Ok(0)
    }

    fn run_draft(&self, scan_json: &Path) -> Result<i32, AiActError> {
        let raw = fs::read_to_string(scan_json)?;
        let report: ComplianceReport = serde_json::from_str(&raw)?;

        println!("[*] Generating Annex IV draft...");
        let draft = drafter::generate_draft(&report)?;

        println!("\n--- GENERATED ANNEX IV DRAFT ---\n");
        println!("{}", draft);

        match fs::write("ANNEX_IV_DRAFT.md", &draft) {
            Ok(()) => {
                println!("[+] Saved to ANNEX_IV_DRAFT.md");
                println!("[!] This is a preliminary draft, not a certified document.");
            }
            Err(e) => warn!("failed to save ANNEX_IV_DRAFT.md: {}", e),
        }

        Ok(0)
    }
}
