//! Validated accessors over the on-disk dataset. Every call re-reads the
//! source files; the dataset is three documents plus two lists, so there is
//! nothing worth caching. Entities that fail validation are dropped and
//! reported through the injected DiagnosticSink; read/parse failures are
//! the structural tier and propagate as LoadError.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::data::essay::{read_essay_file, EssayContent};
use crate::data::lighthouse::{
    read_lighthouse_file, HeritageStatus, LightStatus, Lighthouse, LIGHTHOUSE_IDS,
};
use crate::data::resource::{read_resources_file, Resource, ResourceCategory};
use crate::data::validate::{validate_essay_content, validate_lighthouse, validate_resource};

pub const DEFAULT_DATA_DIR: &str = "data";

/// Structural failure: the file could not be read or is not the expected
/// JSON shape. Field-level problems never take this path.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "read failed: {err}"),
            LoadError::Parse(err) => write!(f, "invalid JSON: {err}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Where validation warnings go. Injected so loading stays pure in tests;
/// binaries pass StderrSink.
pub trait DiagnosticSink {
    fn warn(&self, entity: &str, detail: &str);
}

/// Default sink: one warning line per invalid entity on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn warn(&self, entity: &str, detail: &str) {
        eprintln!("warning: {entity}: {detail}");
    }
}

/// Sink that swallows everything. For callers that already inspect results.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _entity: &str, _detail: &str) {}
}

fn lighthouses_dir(data_dir: &Path) -> std::path::PathBuf {
    data_dir.join("lighthouses")
}

fn resources_path(data_dir: &Path) -> std::path::PathBuf {
    data_dir.join("resources.json")
}

fn essay_path(data_dir: &Path) -> std::path::PathBuf {
    data_dir.join("essay-content.json")
}

/// Load every lighthouse document, dropping invalid ones. Declaration
/// order is preserved; no sorting.
pub fn load_lighthouses(
    data_dir: &Path,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Lighthouse>, LoadError> {
    let dir = lighthouses_dir(data_dir);
    let mut lighthouses = Vec::with_capacity(LIGHTHOUSE_IDS.len());

    for id in LIGHTHOUSE_IDS {
        let lighthouse = read_lighthouse_file(&dir, id)?;
        let validation = validate_lighthouse(&lighthouse);
        if validation.is_valid() {
            lighthouses.push(lighthouse);
        } else {
            sink.warn(
                &format!("lighthouse {id}"),
                &validation.joined_messages(),
            );
        }
    }

    Ok(lighthouses)
}

/// Load one lighthouse by id. Unknown id and validation failure both come
/// back as None; only read/parse failure is an error.
pub fn load_lighthouse(
    data_dir: &Path,
    id: &str,
    sink: &dyn DiagnosticSink,
) -> Result<Option<Lighthouse>, LoadError> {
    if !LIGHTHOUSE_IDS.contains(&id) {
        return Ok(None);
    }

    let lighthouse = read_lighthouse_file(&lighthouses_dir(data_dir), id)?;
    let validation = validate_lighthouse(&lighthouse);
    if validation.is_valid() {
        Ok(Some(lighthouse))
    } else {
        sink.warn(&format!("lighthouse {id}"), &validation.joined_messages());
        Ok(None)
    }
}

/// Load the resource list, dropping invalid entries and preserving source
/// order for the rest.
pub fn load_resources(
    data_dir: &Path,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Resource>, LoadError> {
    let all = read_resources_file(&resources_path(data_dir))?;
    let mut resources = Vec::with_capacity(all.len());

    for (index, resource) in all.into_iter().enumerate() {
        let validation = validate_resource(&resource);
        if validation.is_valid() {
            resources.push(resource);
        } else {
            sink.warn(
                &format!("resource {index}"),
                &validation.joined_messages(),
            );
        }
    }

    Ok(resources)
}

pub fn load_resources_by_category(
    data_dir: &Path,
    category: ResourceCategory,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Resource>, LoadError> {
    let resources = load_resources(data_dir, sink)?;
    Ok(resources
        .into_iter()
        .filter(|resource| resource.category == category.as_str())
        .collect())
}

pub fn load_resources_for_lighthouse(
    data_dir: &Path,
    lighthouse_id: &str,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Resource>, LoadError> {
    let resources = load_resources(data_dir, sink)?;
    Ok(resources
        .into_iter()
        .filter(|resource| resource.relates_to(lighthouse_id))
        .collect())
}

/// Load the essay. All-or-nothing: any validation error yields None.
pub fn load_essay_content(
    data_dir: &Path,
    sink: &dyn DiagnosticSink,
) -> Result<Option<EssayContent>, LoadError> {
    let essay = read_essay_file(&essay_path(data_dir))?;
    let validation = validate_essay_content(&essay);
    if validation.is_valid() {
        Ok(Some(essay))
    } else {
        sink.warn("essay", &validation.joined_messages());
        Ok(None)
    }
}

/// Case-insensitive substring search over name, Chinese name, description
/// and address. The empty query matches everything.
pub fn search_lighthouses(
    data_dir: &Path,
    query: &str,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Lighthouse>, LoadError> {
    let lighthouses = load_lighthouses(data_dir, sink)?;
    let needle = query.to_lowercase();

    Ok(lighthouses
        .into_iter()
        .filter(|lighthouse| matches_query(lighthouse, &needle))
        .collect())
}

fn matches_query(lighthouse: &Lighthouse, needle: &str) -> bool {
    if lighthouse.name.to_lowercase().contains(needle) {
        return true;
    }
    if lighthouse
        .chinese_name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(needle))
    {
        return true;
    }
    if lighthouse
        .content
        .as_ref()
        .is_some_and(|content| content.description.to_lowercase().contains(needle))
    {
        return true;
    }
    lighthouse
        .location
        .as_ref()
        .is_some_and(|location| location.address.to_lowercase().contains(needle))
}

/// Aggregate counts over the valid lighthouse set. Year bounds are None for
/// an empty set instead of a garbage min/max.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseStats {
    pub total: usize,
    pub active: usize,
    pub automated: usize,
    pub inactive: usize,
    pub monuments: usize,
    pub grade3_historic: usize,
    pub oldest_year: Option<i32>,
    pub newest_year: Option<i32>,
}

/// Pure aggregation over an already-loaded slice.
pub fn stats_for(lighthouses: &[Lighthouse]) -> LighthouseStats {
    let status_count = |status: LightStatus| {
        lighthouses
            .iter()
            .filter(|l| l.light_status() == Some(status))
            .count()
    };
    let heritage_count = |status: HeritageStatus| {
        lighthouses
            .iter()
            .filter(|l| l.heritage_status() == Some(status))
            .count()
    };

    let built_years = || {
        lighthouses
            .iter()
            .filter_map(|l| l.history.as_ref().map(|h| h.built))
    };

    LighthouseStats {
        total: lighthouses.len(),
        active: status_count(LightStatus::Active),
        automated: status_count(LightStatus::Automated),
        inactive: status_count(LightStatus::Inactive),
        monuments: heritage_count(HeritageStatus::DeclaredMonument),
        grade3_historic: heritage_count(HeritageStatus::Grade3Historic),
        oldest_year: built_years().min(),
        newest_year: built_years().max(),
    }
}

pub fn load_lighthouse_stats(
    data_dir: &Path,
    sink: &dyn DiagnosticSink,
) -> Result<LighthouseStats, LoadError> {
    let lighthouses = load_lighthouses(data_dir, sink)?;
    Ok(stats_for(&lighthouses))
}

#[cfg(test)]
mod tests {
    use super::stats_for;

    #[test]
    fn stats_for_empty_set_has_no_year_bounds() {
        let stats = stats_for(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.oldest_year, None);
        assert_eq!(stats.newest_year, None);
    }
}
