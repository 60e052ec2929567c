use thiserror::Error;

use std::io;

///
/// Errors that can occur while rendering or exporting an animation
///
#[derive(Debug, Error)]
pub enum RenderError {
    /// There were no frames to export
    #[error("the animation has no frames")]
    EmptyAnimation,

    /// The frame rate can't be used as a frame delay
    #[error("{0} frames per second is not a usable frame rate")]
    InvalidFrameRate(u32),

    /// The image library could not encode the output
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
