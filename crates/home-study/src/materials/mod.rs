//! Study materials and activities posted by teachers, and the per-student report built from them.

pub mod domain;
pub mod intake;
pub mod listing;
pub mod report;

pub use domain::{Attachment, MaterialId, MaterialKind, MaterialRecord};
pub use intake::{MaterialDraft, MaterialIntakeError};
pub use listing::{list_materials, KindCounts, MaterialFilter, MaterialListing};
pub use report::StudentReport;

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum MaterialImportError {
    #[error("failed to read materials export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid materials JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a JSON array of materials as exported by the materials API.
pub fn load_materials<P: AsRef<Path>>(path: P) -> Result<Vec<MaterialRecord>, MaterialImportError> {
    let file = std::fs::File::open(path)?;
    let materials = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(materials)
}
