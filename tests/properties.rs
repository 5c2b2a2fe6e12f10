use approx::{abs_diff_eq, relative_eq};
use geocalc::{area, distance, is_valid, split_geotrace, try_distance, Error};
use proptest::prelude::*;

fn arb_geopoint() -> impl Strategy<Value = String> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| format!("{} {}", lat, lng))
}

fn arb_geopoint_with_extras() -> impl Strategy<Value = String> {
    (arb_geopoint(), -500.0f64..9000.0, 0.0f64..100.0)
        .prop_map(|(point, alt, acc)| format!("{} {} {}", point, alt, acc))
}

fn arb_path(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![arb_geopoint(), arb_geopoint_with_extras()],
        0..max_len,
    )
}

fn arb_out_of_range() -> impl Strategy<Value = String> {
    prop_oneof![
        (90.0001f64..1000.0, -180.0f64..=180.0).prop_map(|(lat, lng)| format!("{} {}", lat, lng)),
        (-1000.0f64..-90.0001, -180.0f64..=180.0).prop_map(|(lat, lng)| format!("{} {}", lat, lng)),
        (-90.0f64..=90.0, 180.0001f64..1000.0).prop_map(|(lat, lng)| format!("{} {}", lat, lng)),
        (-90.0f64..=90.0, -1000.0f64..-180.0001).prop_map(|(lat, lng)| format!("{} {}", lat, lng)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn valid_paths_give_non_negative_results(path in arb_path(20)) {
        prop_assert!(is_valid(&path));
        let a = area(&path);
        let d = distance(&path);
        prop_assert!(a >= 0.0, "area {} for {:?}", a, path);
        prop_assert!(d >= 0.0, "distance {} for {:?}", d, path);
    }

    #[test]
    fn one_out_of_range_point_gives_nan(
        path in arb_path(10),
        bad in arb_out_of_range(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut path = path;
        let index = at.index(path.len() + 1);
        path.insert(index, bad);

        prop_assert!(!is_valid(&path));
        prop_assert!(area(&path).is_nan());
        prop_assert!(distance(&path).is_nan());
        let reports_index = matches!(
            try_distance(&path),
            Err(Error::InvalidGeopoint { index: i, .. }) if i == index
        );
        prop_assert!(reports_index, "wrong index reported for {:?}", path);
    }

    #[test]
    fn distance_is_symmetric(path in arb_path(20)) {
        let reversed: Vec<String> = path.iter().rev().cloned().collect();
        let forward = distance(&path);
        let backward = distance(&reversed);
        prop_assert!(abs_diff_eq!(forward, backward, epsilon = 0.02), "{} != {}", forward, backward);
    }

    #[test]
    fn area_is_rotation_invariant(path in arb_path(12), shift in 0usize..12) {
        prop_assume!(!path.is_empty());
        let mut rotated = path.clone();
        rotated.rotate_left(shift % path.len());
        let a = area(&path);
        let b = area(&rotated);
        prop_assert!(
            relative_eq!(a, b, epsilon = 0.02, max_relative = 1e-9),
            "{} != {}",
            a,
            b
        );
    }
}

#[test]
fn area_scenarios() {
    let square = area(&["0 0", "0 1", "1 1", "1 0"]);
    assert!(abs_diff_eq!(square, 12_391_256_135.81, epsilon = 0.011));

    assert!(area(&["invalid 0", "0 1", "1 1"]).is_nan());
    assert!(area(&["0 0 10 -1", "0 1 10 -1", "1 1 10 -1"]).is_nan());
}

#[test]
fn empty_altitude_is_accepted() {
    let triangle = area(&["0 0  5", "0 1  5", "1 1  5"]);
    assert!(abs_diff_eq!(triangle, 6_195_628_067.9, epsilon = 0.011));
}

#[test]
fn abbreviated_infinity_is_rejected() {
    assert!(distance(&["0 0 inf", "0 1 infinity"]).is_nan());
    assert!(abs_diff_eq!(
        distance(&["0 0 Infinity", "0 1 -Infinity"]),
        111_318.85,
        epsilon = 0.011
    ));
}

#[test]
fn distance_scenarios() {
    assert!(abs_diff_eq!(distance(&["0 0", "0 1"]), 111_318.85, epsilon = 0.011));
    assert_eq!(distance(&["45 45"]), 0.0);
}

#[test]
fn geotrace_input() {
    let trace = "0 0 0 0;0 1 0 0;1 1 0 0;1 0 0 0;";
    let geopoints = split_geotrace(trace);
    assert_eq!(geopoints.len(), 4);
    assert!(abs_diff_eq!(area(&geopoints), 12_391_256_135.81, epsilon = 0.011));
    assert!(abs_diff_eq!(distance(&geopoints), 333_939.58, epsilon = 0.011));
}
