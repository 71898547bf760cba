use serde::{Deserialize, Serialize};

/// Site a ZAP report was taken against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanTarget {
    pub source_file: String,
    pub name: String,
    pub host: String,
    pub port: String,
    pub ssl: bool,
}

impl ScanTarget {
    pub fn url(&self) -> String {
        let protocol = if self.ssl { "https" } else { "http" };
        format!("{}://{}:{}", protocol, self.host, self.port)
    }
}
