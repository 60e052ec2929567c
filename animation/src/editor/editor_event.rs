use crate::color::*;
use crate::brushes::*;

use serde::{Serialize, Deserialize};

///
/// Why an action did not change the editor state
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum IgnoredAction {
    /// The action edits the animation, which can't happen while it's playing
    WhilePlaying,

    /// The text entered as a frame count was not usable
    InvalidFrameCount(String),

    /// The text entered as a playback speed was not usable
    InvalidPlaybackSpeed(String),

    /// A stroke action arrived when no stroke was being drawn
    NoStrokeInProgress,

    /// The selected tool does not draw freehand strokes
    NotAStrokeTool,

    /// The selected tool does not place shapes
    NotAShapeTool,

    NothingToUndo,
    NothingToRedo,

    /// There is no frame with the requested index
    NoSuchFrame(usize),

    /// The width was not a finite number
    InvalidWidth,

    AlreadyPlaying,
    NotPlaying,
}

///
/// Describes how the editor state changed in response to an action
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum EditorEvent {
    /// The drawing on the frame with this index changed
    FrameChanged(usize),

    /// Frames were added, removed or reordered
    FramesChanged,

    /// The frame with this index became the current frame
    FrameSelected(usize),

    /// The stroke being drawn changed (started, extended or cancelled)
    StrokeChanged,

    ToolChanged(Tool),
    ColorChanged(Color),
    WidthChanged(f32),
    PlaybackSpeedChanged(u32),
    OnionSkinChanged(bool),

    PlaybackStarted { fps: u32 },
    PlaybackStopped,

    /// The animation should be exported as a GIF at this frame rate
    ExportRequested { fps: u32 },

    /// The action had no effect
    Ignored(IgnoredAction),
}
