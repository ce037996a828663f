//! Common test utilities and fixture helpers.
//!
//! Integration tests share the small dataset checked in under
//! `docs/fixtures/` plus a handful of in-memory graph builders.

use std::fs;
use std::path::{Path, PathBuf};

use roadtrip_lib::{BorderRecord, Dataset, DatasetPaths, RoadTrip};
use tempfile::TempDir;

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Paths to the three checked-in fixture files.
pub fn fixture_paths() -> DatasetPaths {
    let dir = fixtures_dir();
    DatasetPaths::new(
        dir.join("borders.txt"),
        dir.join("capdist.csv"),
        dir.join("state_name.tsv"),
    )
}

/// Load the checked-in fixture dataset.
#[allow(dead_code)]
pub fn fixture_roadtrip() -> RoadTrip {
    RoadTrip::from_paths(&fixture_paths()).expect("fixture dataset loads")
}

/// In-memory roadtrip over borders only.
#[allow(dead_code)]
pub fn roadtrip_from(records: Vec<BorderRecord>) -> RoadTrip {
    RoadTrip::new(Dataset {
        borders: records,
        ..Dataset::default()
    })
}

/// Scenario graph: A–B 100, B–C 50, A–C 200, plus isolated D.
#[allow(dead_code)]
pub fn triangle_records() -> Vec<BorderRecord> {
    vec![
        BorderRecord::new("A", &[("B", 100), ("C", 200)]),
        BorderRecord::new("B", &[("C", 50)]),
        BorderRecord::new("D", &[]),
    ]
}

/// Temporary directory holding a copy of the fixture files.
#[allow(dead_code)]
pub struct FixtureEnv {
    _temp_dir: TempDir,
    pub paths: DatasetPaths,
}

#[allow(dead_code)]
impl FixtureEnv {
    /// Copy the fixture files into a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let source = fixture_paths();
        let paths = DatasetPaths::new(
            temp_dir.path().join("borders.txt"),
            temp_dir.path().join("capdist.csv"),
            temp_dir.path().join("state_name.tsv"),
        );
        fs::copy(&source.borders, &paths.borders).expect("copy borders");
        fs::copy(&source.capitals, &paths.capitals).expect("copy capdist");
        fs::copy(&source.country_codes, &paths.country_codes).expect("copy state names");
        Self {
            _temp_dir: temp_dir,
            paths,
        }
    }

    /// Overwrite the borders file with custom content.
    pub fn write_borders(&self, content: &str) {
        fs::write(&self.paths.borders, content).expect("write borders");
    }

    /// Overwrite the capital distances file with custom content.
    pub fn write_capitals(&self, content: &str) {
        fs::write(&self.paths.capitals, content).expect("write capdist");
    }

    pub fn temp_path(&self) -> &Path {
        self._temp_dir.path()
    }
}
