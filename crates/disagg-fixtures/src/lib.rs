//! Test fixtures for the disaggregation engine.
//!
//! In-memory implementations of the collaborator traits, plus a loader for
//! the JSON scenarios under `test-fixtures/scenarios`.

pub mod forecast;
pub mod ground_motion;
pub mod scenario;

pub use forecast::{InMemoryForecast, InMemorySource};
pub use ground_motion::{AttenuationModel, ConstantHazardCurve, FailingGroundMotion, FixedGroundMotion};
pub use scenario::{
    fixture_path, fixtures_root, list_fixtures, load_fixture, load_scenario, CurveSpec,
    GroundMotionSpec, Scenario,
};
