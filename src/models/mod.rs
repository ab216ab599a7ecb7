pub mod report;
pub mod result;

pub use report::{ComplianceReport, DesignSpecifications};
pub use result::ScanResult;
