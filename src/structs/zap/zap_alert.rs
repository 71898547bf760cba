use serde::Deserialize;
use serde_json::Value;
use crate::helpers::serde_helper::{list_or_empty, string_like};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZapAlert {
    #[serde(default, deserialize_with = "string_like")]
    pub name: String,

    #[serde(default, deserialize_with = "string_like")]
    pub riskdesc: String,

    #[serde(default, deserialize_with = "string_like")]
    pub confidence: String,

    #[serde(default, deserialize_with = "string_like")]
    pub riskcode: String,

    #[serde(default, deserialize_with = "string_like")]
    pub desc: String,

    #[serde(default, deserialize_with = "string_like")]
    pub solution: String,

    #[serde(default, deserialize_with = "string_like")]
    pub reference: String,

    #[serde(default, deserialize_with = "list_or_empty")]
    pub instances: Vec<Value>,
}
