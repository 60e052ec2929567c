use crate::state::*;
use crate::error::*;
use crate::output::*;

use lp_render::*;

use flo_stream::*;
use futures::prelude::*;

use std::fs::{File};
use std::io::{BufWriter, Write};

///
/// Writes every frame of the animation to a GIF file
///
pub fn export_animation_gif<'a>(path: &'a str, output: &'a mut Publisher<LpCommandOutput>, state: &'a mut CommandState) -> impl Future<Output=Result<(), CommandError>>+Send+'a {
    async move {
        let file        = File::create(path).map_err(|err| CommandError::file(path, err))?;
        let mut writer  = BufWriter::new(file);

        export_gif(&mut writer, state.editor())?;
        writer.flush().map_err(|err| CommandError::file(path, err))?;

        let msg = format!("Exported {} frames to '{}' at {} fps", state.editor().frames().len(), path, state.editor().playback_fps());
        output.publish(LpCommandOutput::Message(msg)).await;

        Ok(())
    }
}

///
/// Renders a single frame (with the onion skin, if it's turned on) to an image file
///
pub fn render_frame_png<'a>(index: usize, path: &'a str, output: &'a mut Publisher<LpCommandOutput>, state: &'a mut CommandState) -> impl Future<Output=Result<(), CommandError>>+Send+'a {
    async move {
        let editor  = state.editor();
        let count   = editor.frames().len();
        let frame   = editor.frames().get(index).ok_or(CommandError::NoSuchFrame { index, count })?;
        let onion   = if editor.onion_skin() && index > 0 { editor.frames().get(index-1) } else { None };

        let image   = FrameRenderer::for_editor(editor).render_frame(frame, onion);
        image.save(path)?;

        output.publish(LpCommandOutput::Message(format!("Rendered frame {} to '{}'", index, path))).await;

        Ok(())
    }
}
