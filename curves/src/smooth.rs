use super::path::*;
use super::bezier::*;
use super::coordinate::*;

use itertools::*;

///
/// Fits a smooth curve through a list of pointer samples
///
/// One cubic section is generated between each pair of consecutive points. The control points are derived
/// Catmull-Rom style from the neighbouring samples, so every section shares its tangent with the section
/// before it. At either end of the sequence there is no neighbour: the endpoint is reused, which places the
/// boundary control point on the endpoint itself. As a result, two points produce a straight line.
///
/// Fewer than two points produce no curves at all.
///
pub fn smooth_curves(points: &[Coord2]) -> Vec<Curve> {
    if points.len() < 2 {
        return vec![];
    }

    let last_index = points.len()-1;

    points.iter()
        .copied()
        .tuple_windows()
        .enumerate()
        .map(|(index, (start, end))| {
            let cp1 = if index == 0 {
                start
            } else {
                start + (end - points[index-1]) / 6.0
            };

            let cp2 = if index+1 == last_index {
                end
            } else {
                end - (points[index+2] - start) / 6.0
            };

            Curve::from_points(start, (cp1, cp2), end)
        })
        .collect()
}

///
/// Generates the smoothed path for a list of pointer samples (see `smooth_curves`)
///
pub fn smooth_path(points: &[Coord2]) -> Path {
    Path::from_curves(&smooth_curves(points))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn interior_joins_share_a_tangent() {
        let points = vec![Coord2(0.0, 0.0), Coord2(10.0, 5.0), Coord2(20.0, -3.0), Coord2(35.0, 2.0)];
        let curves = smooth_curves(&points);

        for (before, after) in curves.iter().tuple_windows() {
            let incoming = before.end_point() - before.control_points().1;
            let outgoing = after.control_points().0 - after.start_point();

            assert!(incoming.distance_to(&outgoing) < 0.0001);
        }
    }

    #[test]
    fn one_curve_per_pair_of_points() {
        let points = vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 0.0), Coord2(3.0, 1.0), Coord2(4.0, 0.0)];

        assert!(smooth_curves(&points).len() == 4);
    }
}
