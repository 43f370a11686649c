//! JSON payload builders for the read-only dataset API. Every handler
//! re-runs the loader against the data directory; invalid entities are
//! already filtered there, so handlers only shape output.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::data::export::{export_all, flatten_timeline, map_features, resources_by_category};
use crate::data::loader::{
    load_essay_content, load_lighthouse, load_lighthouse_stats, load_lighthouses, load_resources,
    load_resources_by_category, load_resources_for_lighthouse, search_lighthouses, LoadError,
    StderrSink, DEFAULT_DATA_DIR,
};
use crate::data::resource::ResourceCategory;

#[derive(Debug)]
pub enum ApiError {
    Load(LoadError),
    Serialize(serde_json::Error),
    NotFound(&'static str),
    BadRequest(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Load(err) => write!(f, "data load failed: {err}"),
            ApiError::Serialize(err) => write!(f, "serialization failed: {err}"),
            ApiError::NotFound(what) => write!(f, "{what} not found"),
            ApiError::BadRequest(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        ApiError::Load(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialize(err)
    }
}

fn data_dir() -> &'static Path {
    Path::new(DEFAULT_DATA_DIR)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn health_payload() -> Result<String, ApiError> {
    #[derive(Serialize)]
    struct Health {
        status: &'static str,
        service: &'static str,
    }
    to_json(&Health {
        status: "ok",
        service: "pharos",
    })
}

pub fn lighthouses_payload() -> Result<String, ApiError> {
    let lighthouses = load_lighthouses(data_dir(), &StderrSink)?;
    to_json(&lighthouses)
}

pub fn lighthouse_payload(id: &str) -> Result<String, ApiError> {
    match load_lighthouse(data_dir(), id, &StderrSink)? {
        Some(lighthouse) => to_json(&lighthouse),
        None => Err(ApiError::NotFound("Lighthouse")),
    }
}

pub fn search_payload(query: &str) -> Result<String, ApiError> {
    let matches = search_lighthouses(data_dir(), query, &StderrSink)?;
    to_json(&matches)
}

/// Resource listing with optional `category` and `lighthouse` filters.
/// An unknown category is a client error, not an empty result.
pub fn resources_payload(
    category: Option<&str>,
    lighthouse_id: Option<&str>,
) -> Result<String, ApiError> {
    let resources = match (category, lighthouse_id) {
        (Some(raw), _) => {
            let Some(category) = ResourceCategory::parse(raw) else {
                return Err(ApiError::BadRequest(format!(
                    "unknown category '{raw}' (expected one of: government, academic, book, video, other)"
                )));
            };
            load_resources_by_category(data_dir(), category, &StderrSink)?
        }
        (None, Some(id)) => load_resources_for_lighthouse(data_dir(), id, &StderrSink)?,
        (None, None) => load_resources(data_dir(), &StderrSink)?,
    };
    to_json(&resources)
}

pub fn resources_grouped_payload() -> Result<String, ApiError> {
    let resources = load_resources(data_dir(), &StderrSink)?;
    to_json(&resources_by_category(&resources))
}

pub fn essay_payload() -> Result<String, ApiError> {
    match load_essay_content(data_dir(), &StderrSink)? {
        Some(essay) => to_json(&essay),
        None => Err(ApiError::NotFound("Essay")),
    }
}

pub fn map_payload() -> Result<String, ApiError> {
    let lighthouses = load_lighthouses(data_dir(), &StderrSink)?;
    to_json(&map_features(&lighthouses))
}

pub fn timeline_payload() -> Result<String, ApiError> {
    let lighthouses = load_lighthouses(data_dir(), &StderrSink)?;
    to_json(&flatten_timeline(&lighthouses))
}

pub fn stats_payload() -> Result<String, ApiError> {
    let stats = load_lighthouse_stats(data_dir(), &StderrSink)?;
    to_json(&stats)
}

pub fn export_payload() -> Result<String, ApiError> {
    let sink = StderrSink;
    let lighthouses = load_lighthouses(data_dir(), &sink)?;
    let resources = load_resources(data_dir(), &sink)?;
    let essay = load_essay_content(data_dir(), &sink)?;
    let stats = load_lighthouse_stats(data_dir(), &sink)?;
    to_json(&export_all(lighthouses, resources, essay, stats))
}
