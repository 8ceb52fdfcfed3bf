//! Fixed scenarios run through every traversal.

use deluge_core::GridPoint;
use deluge_engine::{Algorithm, FloodEngine, RecordingObserver};
use deluge_test_utils::{fixtures, random_terrain, reference_points};

fn p(r: i32, c: i32) -> GridPoint {
    GridPoint::new(r, c)
}

fn flooded_by_each(terrain: &deluge_terrain::Terrain) -> Vec<(Algorithm, Vec<GridPoint>)> {
    Algorithm::ALL
        .into_iter()
        .map(|alg| {
            let mut e = FloodEngine::new(terrain);
            e.run(alg).unwrap();
            (alg, e.state().flooded_points())
        })
        .collect()
}

#[test]
fn pit_scenario() {
    for (alg, pts) in flooded_by_each(&fixtures::pit()) {
        assert_eq!(pts, vec![p(1, 1)], "{alg}");
    }
}

#[test]
fn valley_scenario() {
    for (alg, pts) in flooded_by_each(&fixtures::valley()) {
        assert_eq!(pts, vec![p(0, 1), p(0, 2), p(0, 3)], "{alg}");
    }
}

#[test]
fn flat_scenario_with_two_sources() {
    let t = fixtures::flat(3, 3, vec![p(0, 0), p(2, 1)]);
    for (alg, pts) in flooded_by_each(&t) {
        assert_eq!(pts.len(), 9, "{alg}");
    }
}

#[test]
fn ridge_keeps_second_basin_dry() {
    let t = fixtures::two_basins();
    for (alg, pts) in flooded_by_each(&t) {
        assert_eq!(pts.len(), 9, "{alg}");
        assert!(pts.iter().all(|q| q.col() < 3), "{alg}");
    }
}

#[test]
fn raising_the_water_overtops_the_ridge() {
    let t = fixtures::two_basins().with_water_level(8.0);
    for (alg, pts) in flooded_by_each(&t) {
        assert_eq!(pts.len(), 21, "{alg}");
    }
}

#[test]
fn serpentine_visit_orders_differ_but_sets_agree() {
    let t = fixtures::serpentine(9);
    let mut orders = Vec::new();
    for alg in Algorithm::ALL {
        let mut rec = RecordingObserver::default();
        let mut e = FloodEngine::new(&t);
        e.run_observed(alg, &mut rec).unwrap();
        let mut sorted = rec.admitted.clone();
        sorted.sort();
        assert_eq!(sorted, reference_points(&t), "{alg}");
        orders.push(rec.admitted);
    }
    // A single corridor leaves no choice: every discipline walks it in order.
    assert_eq!(orders[0], orders[1]);
    assert_eq!(orders[1], orders[2]);
}

#[test]
fn seeded_random_terrains_match_oracle() {
    for seed in 0..40u64 {
        let t = random_terrain(seed, 24, 31, 5, 9, 4.0);
        let expected = reference_points(&t);
        for (alg, pts) in flooded_by_each(&t) {
            assert_eq!(pts, expected, "seed {seed}, {alg}");
        }
    }
}

#[test]
fn large_open_basin_floods_fully_with_every_algorithm() {
    let t = fixtures::flat(300, 300, vec![p(150, 150)]);
    for alg in Algorithm::ALL {
        let mut e = FloodEngine::new(&t);
        let m = e.run(alg).unwrap();
        assert_eq!(m.admitted, 90_000, "{alg}");
        assert_eq!(m.sources_rejected, 0);
    }
}
