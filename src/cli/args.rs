use crate::error::AiActError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aiact")]
#[command(about = "AI Act static scanner and Annex IV drafter")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the static AST scanner on a repository
    Scan {
        /// Path to the repository to scan (optional if --libs is used)
        path: Option<PathBuf>,

        /// Comma-separated list of libraries to scan manually (e.g. "tensorflow,cv2")
        #[arg(long)]
        libs: Option<String>,

        /// Path to save the JSON scan report
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// External risk catalog (JSON prefix -> classification); falls back
        /// to the built-in catalog when missing or malformed
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Interactive manual entry of libraries
    Manual {
        /// External risk catalog override
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Generate an Annex IV draft from a saved scan report
    Draft {
        /// Path to the scan report JSON produced by `aiact scan`
        scan_json: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Result<Self, AiActError> {
        let cli = Self::try_parse().map_err(|e| AiActError::InvalidArguments(e.to_string()))?;
        cli.validate()?;
        Ok(cli)
    }

    pub fn validate(&self) -> Result<(), AiActError> {
        if let Command::Scan { path, libs, .. } = &self.command {
            if path.is_none() && libs.is_none() {
                return Err(AiActError::InvalidArguments(
                    "provide either a repository path or --libs".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Default external catalog location: `risk_map.json` next to the binary.
/// Resolved here, at the CLI boundary, and handed down explicitly.
pub fn default_catalog_path() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("risk_map.json")))
}
