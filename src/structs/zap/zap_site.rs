use serde::Deserialize;
use crate::helpers::serde_helper::{bool_like, default_on_null, string_like};
use crate::structs::zap::zap_alert::ZapAlert;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZapSite {
    #[serde(default, rename = "@name", deserialize_with = "string_like")]
    pub name: String,

    #[serde(default, rename = "@host", deserialize_with = "string_like")]
    pub host: String,

    #[serde(default, rename = "@port", deserialize_with = "string_like")]
    pub port: String,

    #[serde(default, rename = "@ssl", deserialize_with = "bool_like")]
    pub ssl: bool,

    #[serde(default, deserialize_with = "default_on_null")]
    pub alerts: Vec<ZapAlert>,
}
