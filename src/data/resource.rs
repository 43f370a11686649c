//! External resource records (government files, papers, books, videos) kept
//! in data/resources.json as a flat array.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_RESOURCES_PATH: &str = "data/resources.json";

/// One external reference. relatedLighthouses holds soft ids into the
/// lighthouse set; dangling ids are allowed and never checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub related_lighthouses: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCategory {
    Government,
    Academic,
    Book,
    Video,
    Other,
}

impl ResourceCategory {
    pub const ALL: &'static [ResourceCategory] = &[
        Self::Government,
        Self::Academic,
        Self::Book,
        Self::Video,
        Self::Other,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "government" => Some(Self::Government),
            "academic" => Some(Self::Academic),
            "book" => Some(Self::Book),
            "video" => Some(Self::Video),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Academic => "academic",
            Self::Book => "book",
            Self::Video => "video",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLanguage {
    English,
    Chinese,
    Both,
}

impl ResourceLanguage {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::English),
            "zh" => Some(Self::Chinese),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "zh",
            Self::Both => "both",
        }
    }
}

/// Link health of a resource, tracked by hand as links rot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Active,
    Broken,
    Archived,
}

impl ResourceStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "broken" => Some(Self::Broken),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Broken => "broken",
            Self::Archived => "archived",
        }
    }
}

impl Resource {
    pub fn category_parsed(&self) -> Option<ResourceCategory> {
        ResourceCategory::parse(&self.category)
    }

    /// Membership test against the soft-reference id list. Missing list
    /// never matches (it also never passes validation).
    pub fn relates_to(&self, lighthouse_id: &str) -> bool {
        self.related_lighthouses
            .as_deref()
            .is_some_and(|ids| ids.iter().any(|id| id == lighthouse_id))
    }
}

/// Read and parse the resource list file (structural tier only).
pub fn read_resources_file(path: &Path) -> Result<Vec<Resource>, super::loader::LoadError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
