//! Shared fixtures for the integration tests.

use acf2g_babel::{JsonStore, LayoutInstance, RecordId, RecordSource};
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The sample site export used across tests.
pub fn site() -> JsonStore {
    let source = fs::read_to_string(fixture_path("site.json")).expect("fixture to exist");
    JsonStore::from_json(&source).expect("fixture to parse")
}

pub fn layouts_of(store: &JsonStore, id: u64) -> Vec<LayoutInstance> {
    store
        .get_layout_instances(RecordId(id))
        .expect("record to exist")
}
