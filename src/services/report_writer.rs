use std::fs;
use std::path::Path;
use serde::Serialize;
use crate::errors::{VerdictError, VerdictResult};

pub struct ReportWriter;

impl ReportWriter {

    pub fn write_markdown(path: &Path, report: &str) -> VerdictResult<()> {
        fs::write(path, report).map_err(|e| VerdictError::file_error(path, "write report", &e.to_string()))?;
        log::debug!("Wrote report to {}", path.display());
        Ok(())
    }

    pub fn write_json<T: Serialize>(path: &Path, summary: &T) -> VerdictResult<()> {
        let json = serde_json::to_string_pretty(summary)
            .map_err(|e| VerdictError::file_error(path, "serialize summary", &e.to_string()))?;
        fs::write(path, json).map_err(|e| VerdictError::file_error(path, "write JSON summary", &e.to_string()))?;
        log::debug!("Wrote JSON summary to {}", path.display());
        Ok(())
    }
}
