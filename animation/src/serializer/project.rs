use crate::color::*;
use crate::frame::*;
use crate::error::*;
use crate::config::*;
use crate::editor::*;

use serde::{Serialize, Deserialize};
use log::*;

use std::io::{Read, Write};

/// The version number written to new project files
pub const PROJECT_VERSION: u32 = 1;

///
/// The contents of a project file
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Project {
    pub version:        u32,
    pub canvas:         CanvasSize,
    pub background:     Color,
    pub playback_fps:   u32,
    pub frames:         Vec<Frame>,
}

impl Project {
    ///
    /// Captures the animation currently being edited
    ///
    pub fn from_state(state: &EditorState) -> Project {
        Project {
            version:        PROJECT_VERSION,
            canvas:         state.canvas_size(),
            background:     state.config().background,
            playback_fps:   state.playback_fps(),
            frames:         state.frames().to_vec(),
        }
    }
}

///
/// Writes the animation in an editor state as a project file
///
pub fn save_project<W: Write>(writer: W, state: &EditorState) -> Result<(), AnimationError> {
    let project = Project::from_state(state);
    debug!("Saving project with {} frames", project.frames.len());

    serde_json::to_writer_pretty(writer, &project).map_err(AnimationError::InvalidProject)
}

///
/// Reads a project file
///
pub fn load_project<R: Read>(reader: R) -> Result<Project, AnimationError> {
    let project = serde_json::from_reader::<_, Project>(reader).map_err(AnimationError::InvalidProject)?;

    if project.version > PROJECT_VERSION || project.version == 0 {
        return Err(AnimationError::UnsupportedVersion(project.version));
    }

    if project.frames.is_empty() {
        return Err(AnimationError::EmptyProject);
    }

    debug!("Loaded project with {} frames", project.frames.len());
    Ok(project)
}

impl EditorState {
    ///
    /// Creates an editor for a project
    ///
    /// The canvas, background and playback speed stored in the project replace the ones in the configuration.
    ///
    pub fn from_project(project: Project, config: EditorConfig) -> EditorState {
        let config = EditorConfig {
            canvas:         project.canvas,
            background:     project.background,
            default_fps:    project.playback_fps,
            ..config
        };

        EditorState::with_frames(config, project.frames)
    }
}
