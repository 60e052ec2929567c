use super::error::*;
use super::raster::*;

use lp_animation::*;

use image::{Delay, Frame as ImageFrame, RgbaImage};
use image::codecs::gif::{GifEncoder, Repeat};
use log::*;

use std::io::Write;

///
/// Settings for exporting an animation as a GIF
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GifExport {
    /// Frames per second: each frame is shown for `1000 / fps` milliseconds
    pub fps: u32,

    /// Number of times to repeat the animation, or None to loop forever
    pub repeat: Option<u16>,
}

impl GifExport {
    ///
    /// An export that loops forever at the specified frame rate
    ///
    pub fn new(fps: u32) -> GifExport {
        GifExport { fps, repeat: None }
    }

    pub fn with_repeat(self, repeat: Option<u16>) -> GifExport {
        GifExport { repeat, ..self }
    }

    ///
    /// The time each frame is shown for
    ///
    pub fn frame_delay(&self) -> Result<Delay, RenderError> {
        if self.fps == 0 {
            return Err(RenderError::InvalidFrameRate(self.fps));
        }

        Ok(Delay::from_numer_denom_ms(1000, self.fps))
    }

    ///
    /// Encodes a list of rendered frames as a GIF
    ///
    pub fn encode<W: Write>(&self, writer: W, frames: &[RgbaImage]) -> Result<(), RenderError> {
        if frames.is_empty() {
            return Err(RenderError::EmptyAnimation);
        }

        let delay       = self.frame_delay()?;
        let mut encoder = GifEncoder::new(writer);

        encoder.set_repeat(match self.repeat {
            Some(count) => Repeat::Finite(count),
            None        => Repeat::Infinite
        })?;

        for frame in frames.iter() {
            encoder.encode_frame(ImageFrame::from_parts(frame.clone(), 0, 0, delay))?;
        }

        Ok(())
    }
}

///
/// Encodes a list of rendered frames as a GIF that loops forever
///
pub fn encode_gif<W: Write>(writer: W, frames: &[RgbaImage], fps: u32) -> Result<(), RenderError> {
    GifExport::new(fps).encode(writer, frames)
}

///
/// Renders every frame in an editor and writes them as a GIF at the editor's playback speed
///
pub fn export_gif<W: Write>(writer: W, state: &EditorState) -> Result<(), RenderError> {
    let renderer    = FrameRenderer::for_editor(state);
    let fps         = state.playback_fps();

    info!("Exporting {} frames at {} fps", state.frames().len(), fps);

    let images = state.frames().iter()
        .map(|frame| renderer.render_frame(frame, None))
        .collect::<Vec<_>>();

    encode_gif(writer, &images, fps)
}
