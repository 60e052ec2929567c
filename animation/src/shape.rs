use crate::color::*;

use lp_curves::*;

use serde::{Serialize, Deserialize};

use std::f32;

/// Number of points used to approximate the outline of a circle
pub const CIRCLE_SEGMENTS: usize = 64;

///
/// The primitive shapes that can be placed with the shape tool
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ShapeKind {
    Square,
    Circle,
    Triangle,
    Arrow,
}

impl ShapeKind {
    ///
    /// All of the shapes, in the order the shape tool offers them
    ///
    pub fn all() -> [ShapeKind; 4] {
        [ShapeKind::Square, ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Arrow]
    }
}

///
/// The parameters shared by every shape constructor
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ShapeParams {
    /// The point the shape is centered on (and rotated and scaled about)
    pub center: Coord2,

    /// The nominal size of the shape (side length of the square, diameter of the circle)
    pub size: f32,

    pub color: Color,

    /// Uniform scale factor
    #[serde(default = "default_scale")]
    pub scale: f32,

    /// Rotation in degrees
    #[serde(default)]
    pub rotation: f32,
}

fn default_scale() -> f32 { 1.0 }

impl ShapeParams {
    ///
    /// Creates a set of shape parameters with no scaling or rotation
    ///
    pub fn new(center: Coord2, size: f32, color: Color) -> ShapeParams {
        ShapeParams { center, size, color, scale: 1.0, rotation: 0.0 }
    }

    pub fn with_scale(self, scale: f32) -> ShapeParams {
        ShapeParams { scale, ..self }
    }

    pub fn with_rotation(self, rotation: f32) -> ShapeParams {
        ShapeParams { rotation, ..self }
    }
}

///
/// A list of points that are stroked as a single line
///
#[derive(Clone, PartialEq, Debug)]
pub struct Outline {
    pub points: Vec<Coord2>,

    /// True if the last point joins back to the first
    pub closed: bool,
}

impl Outline {
    ///
    /// Converts this outline to a path
    ///
    pub fn to_path(&self) -> Path {
        Path::from_polyline(&self.points, self.closed)
    }
}

///
/// The stroke geometry for a shape
///
#[derive(Clone, PartialEq, Debug)]
pub struct ShapeGeometry {
    pub color:      Color,
    pub outlines:   Vec<Outline>,
}

impl ShapeGeometry {
    ///
    /// Iterates over every vertex in this shape
    ///
    pub fn vertices(&self) -> impl '_+Iterator<Item=Coord2> {
        self.outlines.iter().flat_map(|outline| outline.points.iter().copied())
    }

    ///
    /// The paths that should be stroked to draw this shape
    ///
    pub fn to_paths(&self) -> Vec<Path> {
        self.outlines.iter().map(|outline| outline.to_path()).collect()
    }
}

///
/// A shape that has been placed on a frame
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PlacedShape {
    pub kind:   ShapeKind,
    pub params: ShapeParams,

    /// Width of the line used to draw the outline
    pub width:  f32,
}

impl PlacedShape {
    pub fn geometry(&self) -> ShapeGeometry {
        shape_geometry(self.kind, &self.params)
    }
}

///
/// Moves a set of untransformed points to their scaled and rotated positions
///
fn transform_points(points: Vec<Coord2>, center: Coord2, scale: f32, rotation: f32) -> Vec<Coord2> {
    points.into_iter()
        .map(|point| point.scale_about(center, scale))
        .map(|point| if rotation == 0.0 { point } else { point.rotate_about(center, rotation) })
        .collect()
}

fn outline(points: Vec<Coord2>, closed: bool, center: Coord2, scale: f32, rotation: f32) -> Outline {
    Outline {
        points: transform_points(points, center, scale, rotation),
        closed: closed
    }
}

///
/// Creates the geometry for a square
///
pub fn square(center: Coord2, size: f32, color: Color, scale: f32, rotation: f32) -> ShapeGeometry {
    let Coord2(cx, cy)  = center;
    let half            = size / 2.0;

    let corners = vec![
        Coord2(cx-half, cy-half),
        Coord2(cx+half, cy-half),
        Coord2(cx+half, cy+half),
        Coord2(cx-half, cy+half),
    ];

    ShapeGeometry {
        color:      color,
        outlines:   vec![outline(corners, true, center, scale, rotation)]
    }
}

///
/// Creates the geometry for a circle (the size is the diameter)
///
pub fn circle(center: Coord2, size: f32, color: Color, scale: f32, rotation: f32) -> ShapeGeometry {
    let Coord2(cx, cy)  = center;
    let radius          = size / 2.0;
    let angle_per_side  = (2.0*f32::consts::PI) / (CIRCLE_SEGMENTS as f32);

    let points = (0..CIRCLE_SEGMENTS)
        .map(|segment| {
            let angle = (segment as f32) * angle_per_side;
            Coord2(cx + angle.cos()*radius, cy + angle.sin()*radius)
        })
        .collect();

    ShapeGeometry {
        color:      color,
        outlines:   vec![outline(points, true, center, scale, rotation)]
    }
}

///
/// Creates the geometry for a triangle, pointing up
///
pub fn triangle(center: Coord2, size: f32, color: Color, scale: f32, rotation: f32) -> ShapeGeometry {
    let Coord2(cx, cy)  = center;
    let half            = size / 2.0;

    let points = vec![
        Coord2(cx, cy-half),
        Coord2(cx+half, cy+half),
        Coord2(cx-half, cy+half),
    ];

    ShapeGeometry {
        color:      color,
        outlines:   vec![outline(points, true, center, scale, rotation)]
    }
}

///
/// Creates the geometry for an arrow pointing right: the shaft and the head are two separate lines
///
pub fn arrow(center: Coord2, size: f32, color: Color, scale: f32, rotation: f32) -> ShapeGeometry {
    let Coord2(cx, cy)  = center;
    let half            = size / 2.0;
    let quarter         = size / 4.0;

    let shaft = vec![
        Coord2(cx-half, cy),
        Coord2(cx+half, cy),
    ];
    let head = vec![
        Coord2(cx+quarter, cy-quarter),
        Coord2(cx+half, cy),
        Coord2(cx+quarter, cy+quarter),
    ];

    ShapeGeometry {
        color:      color,
        outlines:   vec![
            outline(shaft, false, center, scale, rotation),
            outline(head, false, center, scale, rotation),
        ]
    }
}

///
/// Creates the geometry for a shape of a particular kind
///
pub fn shape_geometry(kind: ShapeKind, params: &ShapeParams) -> ShapeGeometry {
    let constructor: fn(Coord2, f32, Color, f32, f32) -> ShapeGeometry = match kind {
        ShapeKind::Square   => square,
        ShapeKind::Circle   => circle,
        ShapeKind::Triangle => triangle,
        ShapeKind::Arrow    => arrow,
    };

    constructor(params.center, params.size, params.color, params.scale, params.rotation)
}
