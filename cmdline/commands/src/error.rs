use lp_animation::*;
use lp_render::*;

use thiserror::Error;

use std::io;
use std::sync::*;

///
/// Errors that stop a command stream
///
/// The errors are shared so that they can be sent to every subscriber of the output stream.
///
#[derive(Clone, Debug, Error)]
pub enum CommandError {
    /// A configuration or project file could not be read or written
    #[error("{0}")]
    Animation(#[source] Arc<AnimationError>),

    /// A frame could not be rendered or exported
    #[error("{0}")]
    Render(#[source] Arc<RenderError>),

    /// A file could not be opened
    #[error("could not open '{path}': {source}")]
    File { path: String, #[source] source: Arc<io::Error> },

    /// A script was not a JSON list of editor actions
    #[error("invalid script: {0}")]
    InvalidScript(String),

    /// A frame index was out of range
    #[error("frame {index} does not exist (the animation has {count} frames)")]
    NoSuchFrame { index: usize, count: usize },
}

impl CommandError {
    ///
    /// Creates an error for a file that could not be opened or created
    ///
    pub fn file(path: &str, source: io::Error) -> CommandError {
        CommandError::File { path: path.to_string(), source: Arc::new(source) }
    }
}

impl From<AnimationError> for CommandError {
    fn from(err: AnimationError) -> CommandError {
        CommandError::Animation(Arc::new(err))
    }
}

impl From<RenderError> for CommandError {
    fn from(err: RenderError) -> CommandError {
        CommandError::Render(Arc::new(err))
    }
}

impl From<image::ImageError> for CommandError {
    fn from(err: image::ImageError) -> CommandError {
        CommandError::Render(Arc::new(RenderError::Image(err)))
    }
}
