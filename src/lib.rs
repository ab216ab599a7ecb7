pub mod catalog;
pub mod cli;
pub mod drafter;
pub mod error;
pub mod models;
pub mod parser;
pub mod scanner;

pub use error::AiActError;

// Re-export commonly used types
pub use catalog::{RiskCatalog, RiskEntry};
pub use models::{ComplianceReport, ScanResult};
pub use parser::ImportExtractor;
pub use scanner::{ComplianceScanner, FileOutcome, SkipReason, MAX_SOURCE_FILE_BYTES};

pub use cli::CliHandler;
