use super::bezier::*;
use super::coordinate::*;

use serde::{Serialize, Deserialize};

/// The most points that `flatten` will generate for a single component of a path
pub const MAX_FLATTEN_STEPS: usize = 4096;

///
/// A single component of a path
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum PathComponent {
    /// Starts a new subpath at the specified point
    Move(Coord2),

    /// Straight line to the specified point
    Line(Coord2),

    /// Cubic bezier curve to a point (end point, first control point, second control point)
    Bezier(Coord2, Coord2, Coord2),
}

///
/// A path made up of moves, lines and bezier curves
///
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Path {
    components: Vec<PathComponent>
}

impl Path {
    ///
    /// Creates a new empty path
    ///
    pub fn new() -> Path {
        Path { components: vec![] }
    }

    ///
    /// Creates a path from a list of components
    ///
    pub fn from_components(components: Vec<PathComponent>) -> Path {
        Path { components }
    }

    ///
    /// Creates a path that follows a sequence of curves, which are assumed to be joined end to start
    ///
    pub fn from_curves(curves: &[Curve]) -> Path {
        let mut components = vec![];

        if let Some(first) = curves.first() {
            components.push(PathComponent::Move(first.start_point()));

            for curve in curves {
                let (cp1, cp2) = curve.control_points();
                components.push(PathComponent::Bezier(curve.end_point(), cp1, cp2));
            }
        }

        Path { components }
    }

    ///
    /// Creates a path made of straight lines through a set of points
    ///
    pub fn from_polyline(points: &[Coord2], closed: bool) -> Path {
        let mut components = vec![];

        if let Some(first) = points.first() {
            components.push(PathComponent::Move(*first));
            components.extend(points[1..].iter().map(|point| PathComponent::Line(*point)));

            if closed && points.len() > 1 {
                components.push(PathComponent::Line(*first));
            }
        }

        Path { components }
    }

    #[inline]
    pub fn components(&self) -> &[PathComponent] {
        &self.components
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    ///
    /// The point where this path begins
    ///
    pub fn start_point(&self) -> Option<Coord2> {
        self.components.first().map(|component| component.end_point())
    }

    ///
    /// The point where this path finishes
    ///
    pub fn end_point(&self) -> Option<Coord2> {
        self.components.last().map(|component| component.end_point())
    }

    ///
    /// Converts this path to a list of points, where consecutive points along each component are no more than
    /// about `max_step` apart. Each subpath begins with the point from its `Move` component.
    ///
    /// No component is divided into more than `MAX_FLATTEN_STEPS` steps, so very long components have points
    /// further apart than `max_step`.
    ///
    pub fn flatten(&self, max_step: f32) -> Vec<Vec<Coord2>> {
        let max_step        = if max_step > 0.0 { max_step } else { 1.0 };
        let mut subpaths    = vec![];
        let mut current     = vec![];
        let mut last_point  = Coord2::origin();

        for component in self.components.iter() {
            match *component {
                PathComponent::Move(point) => {
                    if !current.is_empty() {
                        subpaths.push(current);
                    }

                    current     = vec![point];
                    last_point  = point;
                }

                PathComponent::Line(end) => {
                    let steps = steps_for_length(last_point.distance_to(&end), max_step);

                    for step in 1..=steps {
                        let t = (step as f32) / (steps as f32);
                        current.push(last_point + (end - last_point) * t);
                    }

                    last_point = end;
                }

                PathComponent::Bezier(end, cp1, cp2) => {
                    let curve = Curve::from_points(last_point, (cp1, cp2), end);
                    let steps = steps_for_length(curve.hull_length(), max_step);

                    for step in 1..=steps {
                        let t = (step as f32) / (steps as f32);
                        current.push(curve.point_at_pos(t));
                    }

                    last_point = end;
                }
            }
        }

        if !current.is_empty() {
            subpaths.push(current);
        }

        subpaths
    }
}

impl PathComponent {
    ///
    /// The point where this component leaves the pen
    ///
    #[inline]
    pub fn end_point(&self) -> Coord2 {
        match self {
            PathComponent::Move(point)          => *point,
            PathComponent::Line(point)          => *point,
            PathComponent::Bezier(point, _, _)  => *point
        }
    }
}

#[inline]
fn steps_for_length(length: f32, max_step: f32) -> usize {
    if length.is_finite() {
        ((length / max_step).ceil() as usize).clamp(1, MAX_FLATTEN_STEPS)
    } else {
        1
    }
}
