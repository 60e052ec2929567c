use lp_curves::*;

fn wiggly_stroke() -> Vec<Coord2> {
    vec![
        Coord2(12.0, 40.0),
        Coord2(18.5, 33.0),
        Coord2(27.0, 31.5),
        Coord2(33.0, 38.0),
        Coord2(41.0, 52.0),
        Coord2(55.5, 49.0),
        Coord2(60.0, 30.0),
    ]
}

#[test]
fn smoothed_path_starts_and_ends_on_the_samples() {
    let points  = wiggly_stroke();
    let path    = smooth_path(&points);

    assert!(path.start_point() == Some(points[0]));
    assert!(path.end_point() == Some(points[points.len()-1]));
}

#[test]
fn flattened_path_starts_and_ends_on_the_samples() {
    let points      = wiggly_stroke();
    let flattened   = smooth_path(&points).flatten(0.5);

    assert!(flattened.len() == 1);
    assert!(flattened[0][0] == points[0]);
    assert!(flattened[0][flattened[0].len()-1] == points[points.len()-1]);
}

#[test]
fn smoothed_curve_passes_through_every_sample() {
    let points = wiggly_stroke();
    let curves = smooth_curves(&points);

    for (index, curve) in curves.iter().enumerate() {
        assert!(curve.start_point() == points[index]);
        assert!(curve.end_point() == points[index+1]);
    }
}

#[test]
fn two_points_make_a_straight_line() {
    let start   = Coord2(3.0, 4.0);
    let end     = Coord2(30.0, -12.0);
    let curves  = smooth_curves(&[start, end]);

    assert!(curves.len() == 1);
    assert!(curves[0].control_points() == (start, end));

    // Every point along the curve lies on the line between the two points
    let direction = (end - start).to_unit_vector();
    for step in 0..=10 {
        let point   = curves[0].point_at_pos((step as f32) / 10.0);
        let offset  = point - start;
        let cross   = offset.0 * direction.1 - offset.1 * direction.0;

        assert!(cross.abs() < 0.001);
    }
}

#[test]
fn short_input_generates_nothing() {
    assert!(smooth_curves(&[]).is_empty());
    assert!(smooth_curves(&[Coord2(1.0, 1.0)]).is_empty());
    assert!(smooth_path(&[Coord2(1.0, 1.0)]).is_empty());
}

#[test]
fn boundary_control_points_reuse_the_endpoints() {
    let points = wiggly_stroke();
    let curves = smooth_curves(&points);

    assert!(curves[0].control_points().0 == points[0]);
    assert!(curves[curves.len()-1].control_points().1 == points[points.len()-1]);
}

#[test]
fn flatten_respects_the_step_size() {
    let path        = Path::from_polyline(&[Coord2(0.0, 0.0), Coord2(10.0, 0.0)], false);
    let flattened   = path.flatten(1.0);

    assert!(flattened[0].len() == 11);
    for (index, point) in flattened[0].iter().enumerate() {
        assert!((point.0 - index as f32).abs() < 0.0001);
    }
}

#[test]
fn closed_polyline_returns_to_the_start() {
    let square = Path::from_polyline(&[Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(1.0, 1.0), Coord2(0.0, 1.0)], true);

    assert!(square.len() == 5);
    assert!(square.end_point() == Some(Coord2(0.0, 0.0)));
}

#[test]
fn huge_components_flatten_to_a_limited_number_of_points() {
    let path = Path::from_components(vec![
        PathComponent::Move(Coord2(0.0, 0.0)),
        PathComponent::Line(Coord2(1e30, 0.0)),
        PathComponent::Bezier(Coord2(0.0, 1e30), Coord2(1e30, 1e30), Coord2(-1e30, 1e30)),
    ]);
    let flattened = path.flatten(1.0);

    assert!(flattened.len() == 1);
    assert!(flattened[0].len() <= 2*MAX_FLATTEN_STEPS + 1);
    assert!(flattened[0][0] == Coord2(0.0, 0.0));
    assert!(flattened[0][flattened[0].len()-1] == Coord2(0.0, 1e30));
}

#[test]
fn huge_smoothed_stroke_flattens_to_a_limited_number_of_points() {
    let flattened = smooth_path(&[Coord2(4.0, 20.0), Coord2(1e30, 20.0), Coord2(1e30, -1e30)]).flatten(0.5);

    assert!(flattened[0].len() <= 2*MAX_FLATTEN_STEPS + 1);
}
