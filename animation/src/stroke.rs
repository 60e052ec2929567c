use crate::brushes::*;
use crate::shape::*;

use lp_curves::*;

use serde::{Serialize, Deserialize};

///
/// A freehand stroke: the raw pointer samples and the style they are drawn with
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Coord2>,
    pub style:  StrokeStyle,
}

impl Stroke {
    ///
    /// Creates a stroke with no points
    ///
    pub fn new(style: StrokeStyle) -> Stroke {
        Stroke {
            points: vec![],
            style:  style
        }
    }

    ///
    /// Adds a pointer sample to the end of this stroke
    ///
    /// Samples that repeat the previous position are skipped.
    ///
    pub fn add_point(&mut self, point: Coord2) {
        if point.is_nan() {
            return;
        }

        if self.points.last() != Some(&point) {
            self.points.push(point);
        }
    }

    ///
    /// True if this stroke is a single tap, which is drawn as a dot
    ///
    #[inline]
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    ///
    /// The smoothed path through the samples in this stroke
    ///
    pub fn path(&self) -> Path {
        smooth_path(&self.points)
    }
}

///
/// An action that draws on a frame
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum DrawAction {
    /// A freehand stroke made with the pencil, brush or eraser
    Stroke(Stroke),

    /// A shape placed with the shape tool
    Shape(PlacedShape),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::*;

    fn pencil() -> StrokeStyle {
        Tool::Pencil.stroke_style(Color::BLACK, 4.0).unwrap()
    }

    #[test]
    fn repeated_samples_are_skipped() {
        let mut stroke = Stroke::new(pencil());

        stroke.add_point(Coord2(1.0, 1.0));
        stroke.add_point(Coord2(1.0, 1.0));
        stroke.add_point(Coord2(2.0, 1.0));

        assert!(stroke.points.len() == 2);
    }

    #[test]
    fn nan_samples_are_skipped() {
        let mut stroke = Stroke::new(pencil());

        stroke.add_point(Coord2(f32::NAN, 1.0));

        assert!(stroke.points.is_empty());
    }

    #[test]
    fn tap_is_a_dot() {
        let mut stroke = Stroke::new(pencil());
        stroke.add_point(Coord2(5.0, 5.0));

        assert!(stroke.is_dot());
        assert!(stroke.path().is_empty());
    }

    #[test]
    fn stroke_path_follows_samples() {
        let mut stroke = Stroke::new(pencil());
        stroke.add_point(Coord2(0.0, 0.0));
        stroke.add_point(Coord2(10.0, 10.0));
        stroke.add_point(Coord2(20.0, 0.0));

        assert!(stroke.path().start_point() == Some(Coord2(0.0, 0.0)));
        assert!(stroke.path().end_point() == Some(Coord2(20.0, 0.0)));
    }
}
