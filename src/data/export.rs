//! Display-oriented projections over already-loaded data. Nothing here
//! validates or reads files; inputs come from the loader.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::essay::EssayContent;
use crate::data::lighthouse::Lighthouse;
use crate::data::loader::LighthouseStats;
use crate::data::resource::Resource;

/// One map marker. Coordinates are [longitude, latitude] to match GeoJSON
/// position order expected by the map layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFeature {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chinese_name: Option<String>,
    pub coordinates: [f64; 2],
    pub heritage: String,
    pub status: String,
    pub built: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,
}

pub fn map_features(lighthouses: &[Lighthouse]) -> Vec<MapFeature> {
    lighthouses
        .iter()
        .map(|lighthouse| {
            let location = lighthouse.location.as_ref();
            MapFeature {
                id: lighthouse.id.clone(),
                name: lighthouse.name.clone(),
                chinese_name: lighthouse.chinese_name.clone(),
                coordinates: [
                    location.map(|l| l.longitude).unwrap_or_default(),
                    location.map(|l| l.latitude).unwrap_or_default(),
                ],
                heritage: lighthouse
                    .heritage
                    .as_ref()
                    .map(|h| h.status.clone())
                    .unwrap_or_default(),
                status: lighthouse
                    .technical
                    .as_ref()
                    .map(|t| t.current_status.clone())
                    .unwrap_or_default(),
                built: lighthouse
                    .history
                    .as_ref()
                    .map(|h| h.built)
                    .unwrap_or_default(),
                height: lighthouse.technical.as_ref().and_then(|t| t.height),
                range: lighthouse.technical.as_ref().and_then(|t| t.range),
            }
        })
        .collect()
}

/// Group resources by category name, preserving source order within each
/// group. BTreeMap keeps the category order deterministic.
pub fn resources_by_category(resources: &[Resource]) -> BTreeMap<String, Vec<Resource>> {
    let mut grouped: BTreeMap<String, Vec<Resource>> = BTreeMap::new();
    for resource in resources {
        grouped
            .entry(resource.category.clone())
            .or_default()
            .push(resource.clone());
    }
    grouped
}

/// One timeline event tagged with its lighthouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub lighthouse_id: String,
    pub lighthouse_name: String,
    pub year: i32,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Flatten every lighthouse timeline into one list sorted ascending by
/// year. The sort is stable: equal years keep their source order.
pub fn flatten_timeline(lighthouses: &[Lighthouse]) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = lighthouses
        .iter()
        .flat_map(|lighthouse| {
            lighthouse
                .history
                .iter()
                .flat_map(|history| history.timeline.iter())
                .map(move |event| TimelineEntry {
                    lighthouse_id: lighthouse.id.clone(),
                    lighthouse_name: lighthouse.name.clone(),
                    year: event.year,
                    event: event.event.clone(),
                    description: event.description.clone(),
                })
        })
        .collect();

    entries.sort_by_key(|entry| entry.year);
    entries
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub export_date: String,
    pub total_lighthouses: usize,
    pub total_resources: usize,
    pub essay_loaded: bool,
}

/// Everything the site needs in one envelope, for verification dumps and
/// bulk consumers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExport {
    pub lighthouses: Vec<Lighthouse>,
    pub resources: Vec<Resource>,
    pub essay: Option<EssayContent>,
    pub stats: LighthouseStats,
    pub metadata: ExportMetadata,
}

pub fn export_all(
    lighthouses: Vec<Lighthouse>,
    resources: Vec<Resource>,
    essay: Option<EssayContent>,
    stats: LighthouseStats,
) -> DataExport {
    let metadata = ExportMetadata {
        export_date: chrono::Utc::now().to_rfc3339(),
        total_lighthouses: lighthouses.len(),
        total_resources: resources.len(),
        essay_loaded: essay.is_some(),
    };

    DataExport {
        lighthouses,
        resources,
        essay,
        stats,
        metadata,
    }
}
