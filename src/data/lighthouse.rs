//! Lighthouse document types: identity, location, heritage, history, technical
//! specs, media and editorial content. One JSON file per lighthouse under
//! data/lighthouses/, loaded by id.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Hand-authored lighthouse documents, in declaration order. The dataset is
/// fixed at authoring time; the loader never scans the directory.
pub const LIGHTHOUSE_IDS: &[&str] = &["cape-d-aguilar", "green-island", "waglan-island"];

pub const DEFAULT_LIGHTHOUSES_DIR: &str = "data/lighthouses";

/// One lighthouse document as authored on disk. Required text fields default
/// to "" and required groups to None so that missing data surfaces as
/// validation errors instead of parse failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lighthouse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chinese_name: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub heritage: Option<Heritage>,
    #[serde(default)]
    pub history: Option<History>,
    #[serde(default)]
    pub technical: Option<Technical>,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heritage {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    #[serde(default)]
    pub built: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architect: Option<String>,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technical {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_characteristic: Option<String>,
    #[serde(default)]
    pub current_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub gallery: Vec<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_historical: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub significance: String,
    #[serde(default)]
    pub current_condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visiting_info: Option<String>,
}

/// Official heritage classification of a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeritageStatus {
    DeclaredMonument,
    Grade3Historic,
    None,
}

impl HeritageStatus {
    pub const ALL: &'static [HeritageStatus] = &[
        Self::DeclaredMonument,
        Self::Grade3Historic,
        Self::None,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "declared_monument" => Some(Self::DeclaredMonument),
            "grade_3_historic" => Some(Self::Grade3Historic),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeclaredMonument => "declared_monument",
            Self::Grade3Historic => "grade_3_historic",
            Self::None => "none",
        }
    }
}

/// Operational state of the light itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightStatus {
    Active,
    Inactive,
    Automated,
}

impl LightStatus {
    pub const ALL: &'static [LightStatus] = &[Self::Active, Self::Inactive, Self::Automated];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "automated" => Some(Self::Automated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Automated => "automated",
        }
    }
}

impl Lighthouse {
    /// Parsed heritage status, None when the group is missing or the value
    /// is outside the closed set.
    pub fn heritage_status(&self) -> Option<HeritageStatus> {
        self.heritage
            .as_ref()
            .and_then(|h| HeritageStatus::parse(&h.status))
    }

    /// Parsed operational status, same contract as heritage_status.
    pub fn light_status(&self) -> Option<LightStatus> {
        self.technical
            .as_ref()
            .and_then(|t| LightStatus::parse(&t.current_status))
    }
}

/// Read and parse one lighthouse document. Read and parse failures are the
/// structural error tier; field problems are left to the validator.
pub fn read_lighthouse_file(
    lighthouses_dir: &Path,
    id: &str,
) -> Result<Lighthouse, super::loader::LoadError> {
    let path = lighthouses_dir.join(format!("{id}.json"));
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
