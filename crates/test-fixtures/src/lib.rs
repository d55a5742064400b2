//! Shared JSON fixtures for the CPL match engine tests.
//!
//! Fixtures live next to this crate's manifest, so any crate in the workspace
//! can load them as a dev-dependency regardless of its own location.

use std::path::PathBuf;

use cpl_core::models::{CatalogUnitRecord, ExternalUnitRecord};
use cpl_core::{CatalogUnit, ExternalUnit};
use serde::de::DeserializeOwned;

/// Root directory of the fixture files.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The sample institutional catalog, converted through the ingestion records.
pub fn sample_catalog() -> Vec<CatalogUnit> {
    load_fixture::<Vec<CatalogUnitRecord>>("catalog.json")
        .into_iter()
        .map(|r| r.into_unit().expect("catalog fixture is valid"))
        .collect()
}

/// The sample transcript units, converted through the ingestion records.
pub fn sample_external_units() -> Vec<ExternalUnit> {
    load_fixture::<Vec<ExternalUnitRecord>>("external_units.json")
        .into_iter()
        .map(|r| r.into_unit().expect("external unit fixture is valid"))
        .collect()
}
