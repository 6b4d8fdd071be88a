use std::sync::Arc;

use disagg_core::traits::GroundMotionRegistry;
use disagg_core::types::{Location, Rupture, Site, TectonicRegion};
use disagg_engine::{
    classify, in_range, nearest_point, normalized, BinSpecification, DisaggregationEngine,
    DisaggregationMatrix, EngineOptions,
};
use disagg_fixtures::{ConstantHazardCurve, FixedGroundMotion, InMemoryForecast, InMemorySource};
use proptest::prelude::*;

/// Sorted edge sequences of 2..12 values, duplicates allowed.
fn edges() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, 2..12).prop_map(|mut v| {
        v.sort_by(|a, b| a.total_cmp(b));
        v
    })
}

fn rupture() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (-1.0f64..3.0, -1.0f64..3.0, 4.0f64..8.0, 0.0f64..0.5)
}

proptest! {
    #[test]
    fn classify_agrees_with_in_range(edges in edges(), value in -120.0f64..120.0) {
        match classify(&edges, value) {
            Ok(i) => {
                prop_assert!(in_range(&edges, value));
                prop_assert!(edges[i] <= value && value < edges[i + 1]);
            }
            Err(_) => prop_assert!(!in_range(&edges, value)),
        }
    }

    #[test]
    fn top_edge_never_in_range(edges in edges()) {
        let top = edges[edges.len() - 1];
        prop_assert!(!in_range(&edges, top));
        prop_assert!(classify(&edges, top).is_err());
    }

    #[test]
    fn normalized_sums_to_one(cells in prop::collection::vec(0.0f64..10.0, 1..60)) {
        let mut matrix = DisaggregationMatrix::zeros([cells.len(), 1, 1, 1, 1]);
        for (i, c) in cells.iter().enumerate() {
            matrix[[i, 0, 0, 0, 0]] = *c;
        }
        let total = matrix.total();
        prop_assume!(total > 0.0);
        let result = normalized(&matrix, total).unwrap();
        prop_assert!((result.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn nearest_point_is_minimal(
        points in prop::collection::vec((-60.0f64..60.0, -170.0f64..170.0, 0.0f64..30.0), 1..20),
        target in (-60.0f64..60.0, -170.0f64..170.0),
    ) {
        let points: Vec<Location> = points
            .into_iter()
            .map(|(lat, lon, depth)| Location::new(lat, lon, depth))
            .collect();
        let target = Location::surface(target.0, target.1);
        let nearest = nearest_point(&points, &target).unwrap();
        for p in &points {
            prop_assert!(nearest.distance <= disagg_engine::geo::distance(p, &target));
        }
        prop_assert_eq!(points[nearest.index], nearest.location);
    }

    #[test]
    fn matrix_sum_equals_accepted_contributions(
        ruptures in prop::collection::vec(rupture(), 1..40),
        exceedance in 0.0f64..=1.0,
        epsilon in -4.0f64..4.0,
    ) {
        let bins = BinSpecification::new(
            vec![0.0, 0.5, 1.0, 2.0],
            vec![0.0, 1.0, 2.0],
            vec![5.0, 6.0, 7.0],
            vec![-3.0, 0.0, 3.0],
            vec![0.0, 1000.0],
        )
        .unwrap();

        let source_probability = 0.05;
        let rate = -(1.0f64 - source_probability).ln();
        let mut expected = 0.0;
        let mut surface_ruptures = Vec::new();
        for &(lat, lon, mag, p) in &ruptures {
            if bins.all_in_range(lat, lon, mag, epsilon) {
                expected += rate * exceedance * p;
            }
            surface_ruptures.push(Rupture::new(mag, p, vec![Location::surface(lat, lon)]));
        }

        let forecast = InMemoryForecast::new(4.0).with_source(
            InMemorySource::new(TectonicRegion::SubductionSlab, surface_ruptures)
                .with_total_probability(source_probability),
        );
        let registry = GroundMotionRegistry::new().with(
            TectonicRegion::SubductionSlab,
            Arc::new(FixedGroundMotion::new(exceedance, epsilon)),
        );
        let result = DisaggregationEngine::new(bins, EngineOptions::raw())
            .compute(
                &Site::new(Location::surface(1.0, 1.0)),
                &forecast,
                &registry,
                0.1,
                &ConstantHazardCurve(0.2),
            )
            .unwrap();

        prop_assert!((result.matrix.total() - expected).abs() <= 1e-12 * expected.max(1.0));
        prop_assert!(result.matrix.cells().iter().all(|&c| c >= 0.0));
        let d = &result.diagnostics;
        prop_assert_eq!(d.ruptures_accepted + d.rejected(), ruptures.len());
    }
}
