use std::thread;

use utm_mgrs::{Ellipsoid, ProjectionConstants, derive_projection_constants};

const GRS80_F: f64 = 1.0 / 298.257222101;

fn assert_rel_eq(actual: f64, expected: f64) {
    let rel = ((actual - expected) / expected).abs();
    assert!(rel < 1e-12, "{actual} != {expected} (relative error {rel})");
}

#[test]
fn grs80_constants_are_stable_to_order_eight() {
    let constants = derive_projection_constants(6_378_137.0, GRS80_F);

    assert!((constants.rectifying_radius() - 6_367_449.145_771_047_5).abs() < 1e-6);

    let expected = [
        8.377_318_247_285_513e-4,
        7.608_527_848_149_655e-7,
        1.197_645_520_855_306_5e-9,
        2.429_170_728_036_747e-12,
        5.711_818_510_466_336e-15,
        1.479_997_974_926_257e-17,
    ];
    for (actual, expected) in constants.alpha().iter().zip(expected) {
        assert_rel_eq(*actual, expected);
    }
}

// Karney (2011), "Transverse Mercator with an accuracy of a few nanometers",
// eq. (35) truncated at n^6 and evaluated in 40-digit arithmetic. Terms past
// n^6 shift alpha3 by under 1e-10 relative.
#[test]
fn grs80_constants_match_sixth_order_series() {
    let constants = Ellipsoid::GRS80.projection_constants();
    let close = |actual: f64, expected: f64| ((actual - expected) / expected).abs() < 1e-10;

    assert!((constants.rectifying_radius() - 6_367_449.145_771_047_5).abs() < 1e-6);
    assert!(close(constants.alpha()[0], 8.377_318_247_285_513_3e-4));
    assert!(close(constants.alpha()[1], 7.608_527_848_149_474_5e-7));
    assert!(close(constants.alpha()[2], 1.197_645_520_942_267_3e-9));
}

#[test]
fn wgs84_constants_match_sixth_order_series() {
    let constants = Ellipsoid::WGS84.projection_constants();
    let close = |actual: f64, expected: f64| ((actual - expected) / expected).abs() < 1e-10;

    assert!((constants.rectifying_radius() - 6_367_449.145_823_415_3).abs() < 1e-6);
    assert!(close(constants.alpha()[0], 8.377_318_206_244_698_2e-4));
    assert!(close(constants.alpha()[1], 7.608_527_773_572_308_6e-7));
    assert!(close(constants.alpha()[2], 1.197_645_503_329_452_6e-9));
}

#[test]
fn wgs84_constants_are_stable_to_order_eight() {
    let constants = Ellipsoid::WGS84.projection_constants();

    assert!((constants.rectifying_radius() - 6_367_449.145_823_415).abs() < 1e-6);
    assert_rel_eq(constants.alpha()[0], 8.377_318_206_244_698e-4);
    assert_rel_eq(constants.alpha()[1], 7.608_527_773_572_489e-7);
    assert_rel_eq(constants.alpha()[2], 1.197_645_503_242_492e-9);
}

#[test]
fn third_flattening_drives_the_series() {
    let constants = derive_projection_constants(6_378_137.0, GRS80_F);
    let n = GRS80_F / (2.0 - GRS80_F);

    assert_eq!(constants.third_flattening(), n);
    assert_eq!(Ellipsoid::GRS80.third_flattening(), n);
    // Leading terms of the series
    assert!((constants.alpha()[0] - n / 2.0).abs() < n * n);
    assert!((constants.alpha()[1] - 13.0 * n * n / 48.0).abs() < n * n * n);
}

#[test]
fn sphere_has_no_series_terms() {
    let constants = derive_projection_constants(6_371_000.0, 0.0);

    assert_eq!(constants.rectifying_radius(), 6_371_000.0);
    assert_eq!(constants.alpha(), [0.0; 6]);
}

#[test]
fn derivation_is_deterministic() {
    let first = derive_projection_constants(6_378_137.0, GRS80_F);

    for _ in 0..10 {
        let again = derive_projection_constants(6_378_137.0, GRS80_F);
        assert_eq!(again.rectifying_radius().to_bits(), first.rectifying_radius().to_bits());
        for (a, b) in again.alpha().iter().zip(first.alpha()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    let from_threads: Vec<ProjectionConstants> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| Ellipsoid::GRS80.projection_constants()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for constants in from_threads {
        assert_eq!(constants, first);
    }
}

#[test]
fn ellipsoid_presets() {
    assert_eq!(Ellipsoid::default(), Ellipsoid::GRS80);
    assert_eq!(Ellipsoid::GRS80.semimajor_axis(), 6_378_137.0);
    assert_eq!(Ellipsoid::GRS80.flattening(), GRS80_F);
    assert_ne!(Ellipsoid::GRS80.projection_constants(), Ellipsoid::WGS84.projection_constants());

    let international = Ellipsoid::new(6_378_388.0, 1.0 / 297.0);
    assert_eq!(
        international.projection_constants(),
        derive_projection_constants(6_378_388.0, 1.0 / 297.0)
    );
}
