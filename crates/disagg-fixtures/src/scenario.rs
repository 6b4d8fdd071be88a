//! JSON scenarios: a site, a forecast, ground-motion models per region, a
//! hazard curve, and bin edges, loaded from `test-fixtures/scenarios`.

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use disagg_core::config::BinsConfig;
use disagg_core::traits::{GroundMotionModel, GroundMotionRegistry};
use disagg_core::types::{Site, TectonicRegion};

use crate::forecast::InMemoryForecast;
use crate::ground_motion::{AttenuationModel, FixedGroundMotion};

/// Root directory of the test-fixtures folder.
///
/// Walks up from `CARGO_MANIFEST_DIR` so it works from any workspace crate.
pub fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!("Could not find test-fixtures directory from CARGO_MANIFEST_DIR={manifest_dir}");
        }
    }
    path.join("test-fixtures")
}

/// Absolute path to a fixture file.
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

/// All JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixture_path(subdir);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
}

/// Load `scenarios/<name>.json`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("scenarios/{name}.json"))
}

/// Tabulated hazard curve as stored in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub levels: Vec<f64>,
    pub poes: Vec<f64>,
    #[serde(default)]
    pub log_log: bool,
}

/// Ground-motion model assignment for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroundMotionSpec {
    Fixed {
        region: TectonicRegion,
        probability: f64,
        epsilon: f64,
    },
    Attenuation {
        region: TectonicRegion,
        #[serde(default)]
        model: AttenuationModel,
    },
}

impl GroundMotionSpec {
    pub fn region(&self) -> TectonicRegion {
        match self {
            Self::Fixed { region, .. } | Self::Attenuation { region, .. } => *region,
        }
    }

    fn build(&self) -> Arc<dyn GroundMotionModel> {
        match self {
            Self::Fixed {
                probability,
                epsilon,
                ..
            } => Arc::new(FixedGroundMotion::new(*probability, *epsilon)),
            Self::Attenuation { model, .. } => Arc::new(*model),
        }
    }
}

/// A complete disaggregation input plus the expected outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub site: Site,
    pub poe: f64,
    pub bins: BinsConfig,
    pub curve: CurveSpec,
    pub forecast: InMemoryForecast,
    pub ground_motion: Vec<GroundMotionSpec>,
    /// Expected raw-mode total rate, when the scenario pins one.
    #[serde(default)]
    pub expected_total_rate: Option<f64>,
    /// Expected non-zero raw-mode cells as `(index, value)` pairs.
    #[serde(default)]
    pub expected_cells: Vec<([usize; 5], f64)>,
}

impl Scenario {
    /// Registry with one model per `ground_motion` entry.
    pub fn registry(&self) -> GroundMotionRegistry {
        self.ground_motion
            .iter()
            .fold(GroundMotionRegistry::new(), |registry, spec| {
                registry.with(spec.region(), spec.build())
            })
    }
}
