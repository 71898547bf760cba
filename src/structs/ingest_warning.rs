use serde::Serialize;
use crate::errors::VerdictError;

/// A scan file that contributed nothing, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestWarning {
    pub path: String,
    pub reason: VerdictError,
}

impl IngestWarning {
    pub fn message(&self) -> String {
        self.reason.to_string()
    }
}
