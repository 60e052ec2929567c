//!
//! # Cubic bezier curves
//!

mod basis;

pub use self::basis::*;

use super::coordinate::*;

use serde::{Serialize, Deserialize};

///
/// Trait implemented by things representing a cubic bezier curve
///
pub trait BezierCurve<Point: Coordinate> {
    ///
    /// Creates a new bezier curve of the same type from some points
    ///
    fn from_points(start: Point, control_points: (Point, Point), end: Point) -> Self;

    ///
    /// The start point of this curve
    ///
    fn start_point(&self) -> Point;

    ///
    /// The end point of this curve
    ///
    fn end_point(&self) -> Point;

    ///
    /// The control points in this curve
    ///
    fn control_points(&self) -> (Point, Point);

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    #[inline]
    fn point_at_pos(&self, t: f32) -> Point {
        let (cp1, cp2) = self.control_points();
        basis(t, self.start_point(), cp1, cp2, self.end_point())
    }

    ///
    /// The length of the control polygon, which is never shorter than the curve itself
    ///
    fn hull_length(&self) -> f32 {
        let (cp1, cp2) = self.control_points();

        self.start_point().distance_to(&cp1)
            + cp1.distance_to(&cp2)
            + cp2.distance_to(&self.end_point())
    }
}

///
/// Represents a Bezier curve
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Curve {
    pub start_point:    Coord2,
    pub end_point:      Coord2,
    pub control_points: (Coord2, Coord2)
}

impl BezierCurve<Coord2> for Curve {
    fn from_points(start: Coord2, control_points: (Coord2, Coord2), end: Coord2) -> Curve {
        Curve {
            start_point:    start,
            end_point:      end,
            control_points: control_points
        }
    }

    #[inline]
    fn start_point(&self) -> Coord2 {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord2 {
        self.end_point
    }

    #[inline]
    fn control_points(&self) -> (Coord2, Coord2) {
        self.control_points
    }
}
