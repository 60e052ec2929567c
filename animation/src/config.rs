use crate::color::*;
use crate::error::*;
use crate::generate::*;

use log::*;
use serde::{Serialize, Deserialize};

use std::fs;
use std::path::Path;

/// Slowest playback speed, in frames per second
pub const MIN_FPS: u32 = 1;

/// Fastest playback speed, in frames per second
pub const MAX_FPS: u32 = 60;

///
/// The size of the drawing canvas, in pixels
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width:  u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> CanvasSize {
        CanvasSize { width: 720, height: 1280 }
    }
}

///
/// Settings for the editor
///
/// Every field has a default, so a configuration file only needs to list the settings it changes.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Size of every frame in the animation
    pub canvas: CanvasSize,

    /// Colour behind every frame (the frames themselves are transparent)
    pub background: Color,

    /// Colour selected when the editor starts
    pub default_color: Color,

    /// Line width selected when the editor starts
    pub default_width: f32,

    /// Narrowest line the width control allows
    pub min_width: f32,

    /// Widest line the width control allows
    pub max_width: f32,

    /// Size of a shape placed without an explicit size
    pub default_shape_size: f32,

    /// Playback speed used when the editor starts, in frames per second
    pub default_fps: u32,

    /// The largest number of frames that can be generated in one go
    pub max_generated_frames: usize,

    /// The number of actions per frame that can be undone (unlimited if not set)
    pub history_limit: Option<usize>,

    /// True if the previous frame should be shown beneath the current one
    pub onion_skin: bool,

    /// Settings for the bouncing ball generator
    pub ball: BallSettings,
}

impl Default for EditorConfig {
    fn default() -> EditorConfig {
        EditorConfig {
            canvas:                 CanvasSize::default(),
            background:             Color::WHITE,
            default_color:          Color::BLUE,
            default_width:          8.0,
            min_width:              1.0,
            max_width:              64.0,
            default_shape_size:     160.0,
            default_fps:            12,
            max_generated_frames:   500,
            history_limit:          None,
            onion_skin:             true,
            ball:                   BallSettings::default(),
        }
    }
}

impl EditorConfig {
    ///
    /// Reads a configuration from a JSON string
    ///
    pub fn from_json_str(json: &str) -> Result<EditorConfig, AnimationError> {
        let config = serde_json::from_str::<EditorConfig>(json).map_err(AnimationError::InvalidConfig)?;
        Ok(config.validated())
    }

    ///
    /// Reads a configuration from a JSON file
    ///
    pub fn load(path: impl AsRef<Path>) -> Result<EditorConfig, AnimationError> {
        let path = path.as_ref();
        debug!("Loading editor configuration from {}", path.display());

        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    ///
    /// Replaces any settings that can't be used with sensible values
    ///
    pub fn validated(mut self) -> EditorConfig {
        let defaults = EditorConfig::default();

        if self.canvas.width == 0 || self.canvas.height == 0 {
            warn!("Canvas size {}x{} is empty, using {}x{}", self.canvas.width, self.canvas.height, defaults.canvas.width, defaults.canvas.height);
            self.canvas = defaults.canvas;
        }

        if !(self.min_width > 0.0) || !(self.max_width >= self.min_width) {
            warn!("Width range {}..{} is not usable, using {}..{}", self.min_width, self.max_width, defaults.min_width, defaults.max_width);
            self.min_width = defaults.min_width;
            self.max_width = defaults.max_width;
        }

        if !self.default_width.is_finite() {
            self.default_width = defaults.default_width;
        }
        self.default_width = self.default_width.clamp(self.min_width, self.max_width);

        if !(self.default_shape_size > 0.0) {
            self.default_shape_size = defaults.default_shape_size;
        }

        self.default_fps            = self.default_fps.clamp(MIN_FPS, MAX_FPS);
        self.max_generated_frames   = self.max_generated_frames.max(1);

        if !(self.ball.time_step > 0.0) {
            self.ball.time_step = defaults.ball.time_step;
        }

        self
    }
}
