pub mod auditor;
pub mod config;
pub mod record;

pub use auditor::{Finding, SimilarityAuditor, Verdict};
pub use config::{AuditConfig, ConfigError};
pub use record::{read_json, read_lines, PasswordRecord, RecordsError};

pub mod audit {
    use crate::*;
    use std::path::Path;

    /// Reads records from `path`: a JSON array when the extension is `.json`,
    /// otherwise one password per line.
    pub fn load_records(path: &Path) -> Result<Vec<PasswordRecord>, RecordsError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            read_json(reader)
        } else {
            read_lines(reader)
        }
    }

    pub fn create_auditor(config_path: Option<&Path>) -> Result<SimilarityAuditor, ConfigError> {
        let config = match config_path {
            Some(path) => AuditConfig::load(path)?,
            None => AuditConfig::default(),
        };
        Ok(SimilarityAuditor::new(config))
    }
}
