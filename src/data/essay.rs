//! Long-form essay document: ordered sections plus a references list of
//! full resource records. Single file at data/essay-content.json.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::lighthouse::Image;
use crate::data::resource::Resource;

pub const DEFAULT_ESSAY_PATH: &str = "data/essay-content.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssayContent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Option<Vec<EssaySection>>,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub references: Option<Vec<Resource>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssaySection {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_lighthouses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
}

/// Read and parse the essay document (structural tier only).
pub fn read_essay_file(path: &Path) -> Result<EssayContent, super::loader::LoadError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
