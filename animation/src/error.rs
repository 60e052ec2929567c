use thiserror::Error;

use std::io;

///
/// Errors that can occur while loading or storing an animation
///
#[derive(Debug, Error)]
pub enum AnimationError {
    /// A colour could not be parsed
    #[error("'{0}' is not a valid colour (expected #rgb, #rrggbb or #rrggbbaa)")]
    InvalidColor(String),

    /// The configuration file was not valid JSON for an editor configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    /// A project file could not be parsed
    #[error("invalid project file: {0}")]
    InvalidProject(#[source] serde_json::Error),

    /// A project file was written by a newer version of the editor
    #[error("project version {0} is not supported")]
    UnsupportedVersion(u32),

    /// A project file contains no frames
    #[error("project contains no frames")]
    EmptyProject,

    /// Reading or writing a file failed
    #[error(transparent)]
    Io(#[from] io::Error),
}
