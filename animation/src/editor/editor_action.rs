use crate::color::*;
use crate::brushes::*;

use lp_curves::*;

use serde::{Serialize, Deserialize};

///
/// Actions that can be dispatched to the editor state
///
/// Numeric values typed by the user (frame counts, playback speeds) are passed through as text: the editor
/// validates them and ignores the action if they're not usable.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum EditorAction {
    /// Chooses the tool used for drawing
    SelectTool(Tool),

    /// Chooses the colour for new strokes and shapes
    ChangeColor(Color),

    /// Chooses the line width for new strokes and shapes (clamped to the configured range)
    ChangeWidth(f32),

    /// The pointer went down on the canvas
    BeginStroke(Coord2),

    /// The pointer moved while drawing a stroke
    ExtendStroke(Coord2),

    /// The pointer was released: the stroke is added to the current frame
    FinishStroke,

    /// The stroke was abandoned without drawing anything
    CancelStroke,

    /// Places a shape using the current shape tool (size, scale and rotation fall back to defaults)
    PlaceShape {
        center:     Coord2,
        #[serde(default)]
        size:       Option<f32>,
        #[serde(default)]
        scale:      Option<f32>,
        #[serde(default)]
        rotation:   Option<f32>,
    },

    Undo,
    Redo,

    /// Adds a blank frame after the current one
    AddFrame,

    /// Adds a copy of the current frame after it
    DuplicateFrame,

    /// Removes the current frame
    DeleteFrame,

    /// Removes every frame, leaving a single blank one
    DeleteAllFrames,

    /// Makes a different frame the current one
    SelectFrame(usize),

    /// Generates frames showing a bouncing ball
    GenerateFrames { count: String },

    /// Changes the playback speed, in frames per second
    SetPlaybackSpeed { fps: String },

    /// Shows or hides the previous frame beneath the current one
    SetOnionSkin(bool),

    StartPlayback,
    StopPlayback,

    /// Requests that the animation is exported as a GIF
    SaveAsGif,
}
