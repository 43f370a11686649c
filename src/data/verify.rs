//! Dataset verification: read everything, validate everything, report
//! per-entity pass/fail. Only read/parse failures are fatal; entities that
//! fail field validation are listed in the report.

use std::fmt;
use std::fmt::Write as _;
use std::path::Path;

use crate::data::essay::read_essay_file;
use crate::data::lighthouse::{read_lighthouse_file, LIGHTHOUSE_IDS};
use crate::data::loader::LoadError;
use crate::data::resource::read_resources_file;
use crate::data::validate::{
    validate_essay_content, validate_lighthouse, validate_resource, ValidationResult,
};

#[derive(Debug, Clone)]
pub struct EntityReport {
    pub label: String,
    pub result: ValidationResult,
}

#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub lighthouses: Vec<EntityReport>,
    pub resources: Vec<EntityReport>,
    pub essay: Option<EntityReport>,
    pub essay_sections: usize,
    pub essay_references: usize,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.lighthouses.iter().all(|e| e.result.is_valid())
            && self.resources.iter().all(|e| e.result.is_valid())
            && self.essay.as_ref().is_some_and(|e| e.result.is_valid())
    }

    fn count_valid(entities: &[EntityReport]) -> usize {
        entities.iter().filter(|e| e.result.is_valid()).count()
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();

        writeln!(
            out,
            "lighthouses: {}/{} valid",
            Self::count_valid(&self.lighthouses),
            self.lighthouses.len()
        )?;
        for entity in &self.lighthouses {
            write_entity(&mut out, entity)?;
        }

        writeln!(
            out,
            "resources: {}/{} valid",
            Self::count_valid(&self.resources),
            self.resources.len()
        )?;
        for entity in &self.resources {
            write_entity(&mut out, entity)?;
        }

        match &self.essay {
            Some(entity) => {
                writeln!(
                    out,
                    "essay: {} ({} sections, {} references)",
                    if entity.result.is_valid() { "valid" } else { "invalid" },
                    self.essay_sections,
                    self.essay_references
                )?;
                write_entity(&mut out, entity)?;
            }
            None => writeln!(out, "essay: not checked")?,
        }

        write!(f, "{}", out.trim_end())
    }
}

fn write_entity(out: &mut String, entity: &EntityReport) -> fmt::Result {
    if entity.result.is_valid() {
        writeln!(out, "  [ok]   {}", entity.label)
    } else {
        writeln!(out, "  [fail] {}", entity.label)?;
        for error in &entity.result.errors {
            writeln!(out, "         {}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

/// Read and validate the whole dataset. Err only on the structural tier.
pub fn verify_dataset(data_dir: &Path) -> Result<VerifyReport, LoadError> {
    let mut report = VerifyReport::default();

    let lighthouses_dir = data_dir.join("lighthouses");
    for id in LIGHTHOUSE_IDS {
        let lighthouse = read_lighthouse_file(&lighthouses_dir, id)?;
        let label = if lighthouse.name.is_empty() {
            (*id).to_string()
        } else {
            format!("{} ({id})", lighthouse.name)
        };
        report.lighthouses.push(EntityReport {
            label,
            result: validate_lighthouse(&lighthouse),
        });
    }

    let resources = read_resources_file(&data_dir.join("resources.json"))?;
    for (index, resource) in resources.iter().enumerate() {
        let label = if resource.title.is_empty() {
            format!("resource {index}")
        } else {
            format!("{} ({})", resource.title, resource.category)
        };
        report.resources.push(EntityReport {
            label,
            result: validate_resource(resource),
        });
    }

    let essay = read_essay_file(&data_dir.join("essay-content.json"))?;
    report.essay_sections = essay.sections.as_deref().map_or(0, <[_]>::len);
    report.essay_references = essay.references.as_deref().map_or(0, <[_]>::len);
    report.essay = Some(EntityReport {
        label: if essay.title.is_empty() {
            "essay".to_string()
        } else {
            essay.title.clone()
        },
        result: validate_essay_content(&essay),
    });

    Ok(report)
}
