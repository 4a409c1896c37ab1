//! Property tests: round-trips, involution, and region bijection.

use proptest::prelude::*;
use zenorient::*;

fn any_code() -> impl Strategy<Value = OrientationCode> {
    (0usize..48).prop_map(|i| {
        OrientationCode::all()
            .nth(i)
            .expect("48 orientation codes")
    })
}

fn any_transform() -> impl Strategy<Value = AxisTransform> {
    (any_code(), any_code()).prop_map(|(a, b)| AxisTransform::resolve(a, b))
}

/// Input size, transform, and an output region within the output extent.
fn sized_request() -> impl Strategy<Value = ([u32; 3], AxisTransform, IndexRegion)> {
    ([0u32..9, 0u32..9, 0u32..9], any_transform()).prop_flat_map(|(size, t)| {
        let extent = t.permute_axes(size);
        let axis = move |a: usize| {
            (0..=extent[a]).prop_flat_map(move |o| (Just(o), 0..=extent[a] - o))
        };
        (Just(size), Just(t), axis(0), axis(1), axis(2)).prop_map(
            |(size, t, (o0, s0), (o1, s1), (o2, s2))| {
                (size, t, IndexRegion::new([o0, o1, o2], [s0, s1, s2]))
            },
        )
    })
}

proptest! {
    #[test]
    fn string_round_trip(c in any_code()) {
        prop_assert_eq!(OrientationCode::parse(&c.to_string()).unwrap(), c);
    }

    #[test]
    fn lowercase_parses_to_same_code(c in any_code()) {
        let lower = c.to_string().to_ascii_lowercase();
        prop_assert_eq!(lower.parse::<OrientationCode>().unwrap(), c);
    }

    #[test]
    fn parse_accepts_exactly_valid_codes(s in "[A-Za-z]{0,4}") {
        let valid = OrientationCode::all().any(|c| c.to_string().eq_ignore_ascii_case(&s));
        prop_assert_eq!(OrientationCode::parse(&s).is_ok(), valid, "{}", s);
    }

    #[test]
    fn parse_never_panics(s in "\\PC{0,6}") {
        let _ = OrientationCode::parse(&s);
    }

    #[test]
    fn direction_round_trip(c in any_code()) {
        prop_assert_eq!(OrientationCode::from_direction(&c.to_direction()), c);
    }

    #[test]
    fn scaled_direction_keeps_code(c in any_code(), noise in -0.2f64..0.2) {
        // Perturb the off-axis entries; the dominant component still wins.
        let mut d = c.to_direction();
        for row in d.rows.iter_mut() {
            for v in row.iter_mut() {
                if *v == 0.0 {
                    *v = noise;
                }
            }
        }
        prop_assert_eq!(OrientationCode::from_direction(&d), c);
    }

    #[test]
    fn identity_resolution(c in any_code()) {
        prop_assert!(AxisTransform::resolve(c, c).is_identity());
    }

    #[test]
    fn involution(a in any_code(), b in any_code()) {
        let there = AxisTransform::resolve(a, b);
        let back = AxisTransform::resolve(b, a);
        prop_assert!(there.compose(back).is_identity());
        prop_assert!(back.compose(there).is_identity());
    }

    #[test]
    fn resolve_then_apply(a in any_code(), b in any_code()) {
        prop_assert_eq!(AxisTransform::resolve(a, b).apply(a), b);
    }

    #[test]
    fn region_mapping_is_bijective((size, t, requested) in sized_request()) {
        let input = GridDescription::with_size(size);
        let required = map_to_input(&requested, &input, &t).unwrap();
        prop_assert!(required.fits_within(size));
        prop_assert_eq!(required.voxel_count(), requested.voxel_count());
        prop_assert_eq!(map_to_output(&required, &input, &t).unwrap(), requested);
    }

    #[test]
    fn oversized_requests_fail((size, t, requested) in sized_request(), axis in 0usize..3) {
        let input = GridDescription::with_size(size);
        let mut grown = requested;
        grown.size[axis] = t.permute_axes(size)[axis] - requested.origin[axis] + 1;
        let is_out_of_bounds = matches!(
            map_to_input(&grown, &input, &t),
            Err(OrientError::RegionOutOfBounds { .. })
        );
        prop_assert!(is_out_of_bounds);
    }

    #[test]
    fn output_grid_is_canonical(
        size in [1u32..6, 1u32..6, 1u32..6],
        given in any_code(),
        desired in any_code(),
    ) {
        let input = GridDescription::new(size, [0.7, 1.1, 2.3], [1.0, -2.0, 5.0], given.to_direction());
        let p = plan(&input, desired);
        prop_assert_eq!(p.given, given);
        prop_assert_eq!(p.output.orientation(), desired);
        prop_assert_eq!(p.output.direction, desired.to_direction());
        prop_assert_eq!(p.output.size, p.transform.permute_axes(size));
    }
}
