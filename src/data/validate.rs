//! Field-level validation for every document type. Validators are pure:
//! they take an already-parsed document, collect every violation into a
//! ValidationResult, and never touch the filesystem.

use serde::Serialize;
use url::Url;

use crate::data::essay::EssayContent;
use crate::data::lighthouse::{
    HeritageStatus, Image, LightStatus, Lighthouse, TimelineEvent,
};
use crate::data::resource::{Resource, ResourceCategory, ResourceLanguage, ResourceStatus};

/// Hong Kong bounding box for coordinate sanity checks.
pub const LAT_BOUNDS: (f64, f64) = (22.1, 22.6);
pub const LON_BOUNDS: (f64, f64) = (113.8, 114.5);

/// Earliest plausible year in the dataset. The first HK lighthouse dates to
/// 1875; 1800 leaves room for pre-construction timeline entries.
pub const MIN_YEAR: i32 = 1800;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Fold a nested result in, prefixing each error's field with an
    /// indexed path like `history.timeline[2]`.
    pub fn absorb(&mut self, prefix: &str, nested: ValidationResult) {
        for error in nested.errors {
            self.errors.push(ValidationError {
                field: format!("{prefix}.{}", error.field),
                message: error.message,
            });
        }
    }

    /// One human-readable line per entity: every message, comma-joined.
    pub fn joined_messages(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require_text(result: &mut ValidationResult, field: &str, value: &str, message: &str) {
    if is_blank(value) {
        result.push(field, message);
    }
}

/// Accepted year window: 1800 through ten years past today, so announced
/// but unfinished restoration work can be recorded ahead of time.
pub fn is_valid_year(year: i32) -> bool {
    use chrono::Datelike;
    let current_year = chrono::Utc::now().year();
    (MIN_YEAR..=current_year + 10).contains(&year)
}

pub fn is_within_hong_kong(latitude: f64, longitude: f64) -> bool {
    (LAT_BOUNDS.0..=LAT_BOUNDS.1).contains(&latitude)
        && (LON_BOUNDS.0..=LON_BOUNDS.1).contains(&longitude)
}

/// Absolute URL with a host. `Url::parse` alone accepts schemes like
/// `mailto:`; the host check keeps those out.
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}

pub fn validate_timeline_event(event: &TimelineEvent) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !is_valid_year(event.year) {
        result.push(
            "year",
            "Year must be a valid year between 1800 and current year + 10",
        );
    }

    require_text(&mut result, "event", &event.event, "Event description is required");

    result
}

pub fn validate_image(image: &Image) -> ValidationResult {
    let mut result = ValidationResult::default();

    require_text(&mut result, "url", &image.url, "Image URL is required");
    require_text(
        &mut result,
        "alt",
        &image.alt,
        "Alt text is required for accessibility",
    );

    result
}

pub fn validate_lighthouse(lighthouse: &Lighthouse) -> ValidationResult {
    let mut result = ValidationResult::default();

    require_text(&mut result, "id", &lighthouse.id, "Lighthouse ID is required");
    require_text(&mut result, "name", &lighthouse.name, "Lighthouse name is required");

    match &lighthouse.location {
        None => result.push("location", "Location is required"),
        Some(location) => {
            if !is_within_hong_kong(location.latitude, location.longitude) {
                result.push(
                    "location.coordinates",
                    "Coordinates must be within Hong Kong bounds",
                );
            }
            require_text(
                &mut result,
                "location.address",
                &location.address,
                "Address is required",
            );
        }
    }

    match &lighthouse.heritage {
        None => result.push("heritage", "Heritage information is required"),
        Some(heritage) => {
            if HeritageStatus::parse(&heritage.status).is_none() {
                result.push(
                    "heritage.status",
                    "Heritage status must be one of: declared_monument, grade_3_historic, none",
                );
            }
            if let Some(year) = heritage.year {
                if !is_valid_year(year) {
                    result.push("heritage.year", "Heritage year must be valid");
                }
            }
        }
    }

    match &lighthouse.history {
        None => result.push("history", "History information is required"),
        Some(history) => {
            if !is_valid_year(history.built) {
                result.push("history.built", "Built year is required and must be valid");
            }
            require_text(
                &mut result,
                "history.purpose",
                &history.purpose,
                "Purpose is required",
            );
            for (index, event) in history.timeline.iter().enumerate() {
                result.absorb(
                    &format!("history.timeline[{index}]"),
                    validate_timeline_event(event),
                );
            }
        }
    }

    match &lighthouse.technical {
        None => result.push("technical", "Technical information is required"),
        Some(technical) => {
            if LightStatus::parse(&technical.current_status).is_none() {
                result.push(
                    "technical.currentStatus",
                    "Current status must be one of: active, inactive, automated",
                );
            }
            if technical.height.is_some_and(|height| height <= 0.0) {
                result.push("technical.height", "Height must be positive if provided");
            }
            if technical.range.is_some_and(|range| range <= 0.0) {
                result.push("technical.range", "Range must be positive if provided");
            }
        }
    }

    match &lighthouse.media {
        None => result.push("media", "Media information is required"),
        Some(media) => {
            require_text(
                &mut result,
                "media.heroImage",
                &media.hero_image,
                "Hero image is required",
            );
            for (index, image) in media.gallery.iter().enumerate() {
                result.absorb(&format!("media.gallery[{index}]"), validate_image(image));
            }
            if let Some(historical) = &media.historical_images {
                for (index, image) in historical.iter().enumerate() {
                    result.absorb(
                        &format!("media.historicalImages[{index}]"),
                        validate_image(image),
                    );
                }
            }
        }
    }

    match &lighthouse.content {
        None => result.push("content", "Content information is required"),
        Some(content) => {
            require_text(
                &mut result,
                "content.description",
                &content.description,
                "Description is required",
            );
            require_text(
                &mut result,
                "content.significance",
                &content.significance,
                "Significance is required",
            );
            require_text(
                &mut result,
                "content.currentCondition",
                &content.current_condition,
                "Current condition is required",
            );
        }
    }

    result
}

pub fn validate_resource(resource: &Resource) -> ValidationResult {
    let mut result = ValidationResult::default();

    require_text(&mut result, "id", &resource.id, "Resource ID is required");
    require_text(&mut result, "title", &resource.title, "Title is required");

    if ResourceCategory::parse(&resource.category).is_none() {
        result.push(
            "category",
            "Category must be one of: government, academic, book, video, other",
        );
    }

    if is_blank(&resource.url) || !is_valid_url(&resource.url) {
        result.push("url", "Valid URL is required");
    }

    require_text(
        &mut result,
        "description",
        &resource.description,
        "Description is required",
    );

    if ResourceLanguage::parse(&resource.language).is_none() {
        result.push("language", "Language must be one of: en, zh, both");
    }

    if ResourceStatus::parse(&resource.status).is_none() {
        result.push("status", "Status must be one of: active, broken, archived");
    }

    if resource.related_lighthouses.is_none() {
        result.push("relatedLighthouses", "Related lighthouses must be an array");
    }

    result
}

pub fn validate_essay_content(essay: &EssayContent) -> ValidationResult {
    let mut result = ValidationResult::default();

    require_text(&mut result, "id", &essay.id, "Essay ID is required");
    require_text(&mut result, "title", &essay.title, "Title is required");
    require_text(
        &mut result,
        "lastUpdated",
        &essay.last_updated,
        "Last updated date is required",
    );

    match essay.sections.as_deref() {
        None | Some([]) => result.push("sections", "At least one section is required"),
        Some(sections) => {
            for (index, section) in sections.iter().enumerate() {
                require_text(
                    &mut result,
                    &format!("sections[{index}].heading"),
                    &section.heading,
                    "Section heading is required",
                );
                require_text(
                    &mut result,
                    &format!("sections[{index}].content"),
                    &section.content,
                    "Section content is required",
                );
                if let Some(images) = &section.images {
                    for (image_index, image) in images.iter().enumerate() {
                        result.absorb(
                            &format!("sections[{index}].images[{image_index}]"),
                            validate_image(image),
                        );
                    }
                }
            }
        }
    }

    match essay.references.as_deref() {
        None => result.push("references", "References must be an array"),
        Some(references) => {
            for (index, reference) in references.iter().enumerate() {
                result.absorb(&format!("references[{index}]"), validate_resource(reference));
            }
        }
    }

    result
}
