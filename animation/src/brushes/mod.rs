//!
//! # Drawing tools and the styles they apply to strokes
//!

use crate::color::*;
use crate::shape::*;

use serde::{Serialize, Deserialize};

/// Opacity applied to strokes made with the brush tool
pub const BRUSH_OPACITY: f32 = 0.6;

///
/// The tools that can be selected in the editor
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Tool {
    /// Hard-edged line at full opacity
    Pencil,

    /// Soft, partially transparent line
    Brush,

    /// Removes whatever has been drawn beneath the stroke
    Eraser,

    /// Places a primitive shape
    Shape(ShapeKind),
}

impl Default for Tool {
    fn default() -> Tool {
        Tool::Pencil
    }
}

///
/// Whether a stroke adds paint or removes it
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DrawingStyle {
    Draw,
    Erase,
}

///
/// How a freehand stroke should be rendered
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color:          Color,
    pub width:          f32,
    pub opacity:        f32,
    pub drawing_style:  DrawingStyle,
}

impl Tool {
    ///
    /// The drawing style for strokes made with this tool
    ///
    pub fn drawing_style(&self) -> DrawingStyle {
        match self {
            Tool::Eraser    => DrawingStyle::Erase,
            _               => DrawingStyle::Draw
        }
    }

    ///
    /// If this tool places shapes, the kind of shape it places
    ///
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Shape(kind)   => Some(*kind),
            _                   => None
        }
    }

    ///
    /// The style of a freehand stroke made with this tool, or None if the tool does not draw freehand strokes
    ///
    pub fn stroke_style(&self, color: Color, width: f32) -> Option<StrokeStyle> {
        let opacity = match self {
            Tool::Pencil    => 1.0,
            Tool::Brush     => BRUSH_OPACITY,
            Tool::Eraser    => 1.0,
            Tool::Shape(_)  => { return None; }
        };

        Some(StrokeStyle {
            color:          color,
            width:          width,
            opacity:        opacity,
            drawing_style:  self.drawing_style()
        })
    }
}
