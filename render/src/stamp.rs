use lp_curves::*;

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use itertools::*;

/// Lines this thin or thinner are drawn as single pixel lines instead of with dabs
const HAIRLINE_WIDTH: f32 = 1.0;

///
/// The distance between the points of a flattened path for a line of a particular width
///
#[inline]
pub (crate) fn flatten_step(width: f32) -> f32 {
    (width / 4.0).max(1.0)
}

///
/// Stamps a single round dab onto an image
///
/// Pixels are replaced rather than blended, so a transparent colour erases what's beneath the dab.
///
pub (crate) fn stamp_dab(image: &mut RgbaImage, center: Coord2, width: f32, color: Rgba<u8>) {
    let radius = (width / 2.0).round().max(0.0) as i32;

    draw_filled_circle_mut(image, (center.0.round() as i32, center.1.round() as i32), radius, color);
}

///
/// Clips a line segment to a rectangle, returning the part of it that lies inside
///
fn clip_segment(from: Coord2, to: Coord2, min: Coord2, max: Coord2) -> Option<(Coord2, Coord2)> {
    let delta = to - from;
    if !delta.0.is_finite() || !delta.1.is_finite() {
        return None;
    }

    // Clipped points take the coordinate of the edge they were clipped against, which stays exact for very long lines
    let point_on_edge = |t: f32, axis: usize, edge: f32| {
        if axis == 0 { Coord2(edge, from.1 + delta.1 * t) } else { Coord2(from.0 + delta.0 * t, edge) }
    };

    let (mut start, mut start_point)    = (0.0f32, from);
    let (mut end, mut end_point)        = (1.0f32, to);

    let edges = [
        (-delta.0,  from.0 - min.0, 0, min.0),
        (delta.0,   max.0 - from.0, 0, max.0),
        (-delta.1,  from.1 - min.1, 1, min.1),
        (delta.1,   max.1 - from.1, 1, max.1),
    ];

    for (direction, distance, axis, edge) in edges {
        if direction == 0.0 {
            // Parallel to this edge, so either entirely inside or entirely outside it
            if distance < 0.0 { return None; }
        } else {
            let t = distance / direction;

            if direction < 0.0 {
                if t > end { return None; }
                if t > start {
                    start       = t;
                    start_point = point_on_edge(t, axis, edge);
                }
            } else {
                if t < start { return None; }
                if t < end {
                    end         = t;
                    end_point   = point_on_edge(t, axis, edge);
                }
            }
        }
    }

    Some((start_point, end_point))
}

///
/// Draws a line through a list of points by stamping dabs along it
///
/// Segments are clipped to the image (widened by the line width) first, so the cost of drawing depends on the size
/// of the image rather than the length of the line.
///
pub (crate) fn stamp_polyline(image: &mut RgbaImage, points: &[Coord2], width: f32, color: Rgba<u8>) {
    let margin  = width.max(HAIRLINE_WIDTH) / 2.0 + 1.0;
    let min     = Coord2(-margin, -margin);
    let max     = Coord2(image.width() as f32 + margin, image.height() as f32 + margin);

    match points.len() {
        0 => { }
        1 => stamp_dab(image, points[0], width, color),

        _ => {
            let visible_segments = points.iter()
                .tuple_windows()
                .filter_map(|(from, to)| clip_segment(*from, *to, min, max));

            if width <= HAIRLINE_WIDTH {
                for (from, to) in visible_segments {
                    draw_line_segment_mut(image, (from.0, from.1), (to.0, to.1), color);
                }
            } else {
                // Dabs overlap by at least half their radius so the line has no gaps
                let spacing = (width / 4.0).max(0.5);

                for (from, to) in visible_segments {
                    let steps = (from.distance_to(&to) / spacing).ceil().max(1.0) as usize;

                    stamp_dab(image, from, width, color);
                    for step in 1..=steps {
                        let t = (step as f32) / (steps as f32);
                        stamp_dab(image, from + (to - from) * t, width, color);
                    }
                }
            }
        }
    }
}

///
/// Stamps every subpath of a path
///
pub (crate) fn stamp_path(image: &mut RgbaImage, path: &Path, width: f32, color: Rgba<u8>) {
    for subpath in path.flatten(flatten_step(width)) {
        stamp_polyline(image, &subpath, width, color);
    }
}
