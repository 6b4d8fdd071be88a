use disagg_core::errors::*;
use disagg_core::types::{Dimension, TectonicRegion};

#[test]
fn bin_error_carries_dimension_and_length() {
    let err = BinError::TooFewEdges {
        dimension: Dimension::Epsilon,
        len: 1,
    };
    let msg = err.to_string();
    assert!(msg.contains("epsilon"));
    assert!(msg.contains('1'));
    assert_eq!(err.dimension(), Dimension::Epsilon);
    assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
}

#[test]
fn out_of_range_carries_value_and_bounds() {
    let err = ClassifyError::OutOfRange {
        value: 7.5,
        low: 5.0,
        high: 7.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("7.5"));
    assert!(msg.contains('5'));
    assert_eq!(err.error_code(), "OUT_OF_RANGE_VALUE");
}

#[test]
fn missing_collaborator_names_region() {
    let err = EngineError::MissingCollaborator {
        region: TectonicRegion::SubductionInterface,
    };
    assert!(err.to_string().contains("subduction_interface"));
    assert_eq!(err.error_code(), "MISSING_COLLABORATOR");
}

#[test]
fn engine_error_forwards_subsystem_codes() {
    let err: EngineError = NormalizeError::DivideByZero.into();
    assert_eq!(err.error_code(), "DIVIDE_BY_ZERO");

    let err: EngineError = GeoError::EmptyInput.into();
    assert_eq!(err.error_code(), "EMPTY_INPUT");

    let err: EngineError = ConfigError::Bins(BinError::Missing {
        dimension: Dimension::Latitude,
    })
    .into();
    assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
}

#[test]
fn coded_string_prefixes_code() {
    let err = EngineError::InvalidState {
        parameter: "min_mag".into(),
    };
    let s = err.coded_string();
    assert!(s.starts_with("[INVALID_STATE]"));
    assert!(s.contains("min_mag"));
}

#[test]
fn invalid_rupture_probability_names_source_and_rupture() {
    let err = EngineError::InvalidRuptureProbability {
        source_index: 3,
        rupture_index: 7,
        value: -0.3,
    };
    let msg = err.to_string();
    assert!(msg.contains("Rupture 7 of source 3"));
    assert!(msg.contains("-0.3"));
    assert_eq!(err.error_code(), "INVALID_PROBABILITY");
}

#[test]
fn matrix_shape_mismatch_reports_counts() {
    let err = MatrixError::ShapeMismatch {
        shape: [2, 2, 2, 2, 5],
        expected: 80,
        actual: 1,
    };
    assert!(err.to_string().contains("needs 80 cells, got 1"));
    assert_eq!(err.error_code(), "SHAPE_MISMATCH");
}
