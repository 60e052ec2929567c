use crate::state::*;
use crate::output::*;

use lp_animation::*;

use flo_stream::*;
use futures::prelude::*;
use itertools::*;

///
/// Writes a summary of the animation and the editor settings
///
pub fn summarize<'a>(output: &'a mut Publisher<LpCommandOutput>, state: &'a mut CommandState) -> impl Future<Output=()>+Send+'a {
    async move {
        let editor  = state.editor();
        let canvas  = editor.canvas_size();

        let (strokes, shapes) = editor.frames().iter()
            .flat_map(|frame| frame.visible_actions())
            .fold((0, 0), |(strokes, shapes), action| match action {
                DrawAction::Stroke(_)   => (strokes+1, shapes),
                DrawAction::Shape(_)    => (strokes, shapes+1),
            });
        let blank_frames = editor.frames().iter().filter(|frame| frame.is_blank()).count();

        let lines = vec![
            format!("Canvas:         {}x{}", canvas.width, canvas.height),
            format!("Frames:         {} ({} blank)", editor.frames().len(), blank_frames),
            format!("Current frame:  {}", editor.current_frame_index()),
            format!("Drawing:        {} strokes, {} shapes", strokes, shapes),
            format!("Playback:       {} fps ({} ms per frame)", editor.playback_fps(), editor.playback_clock().frame_delay().as_millis()),
            format!("Tool:           {:?}", editor.tool()),
            format!("Colour:         {}", editor.color()),
            format!("Width:          {}", editor.width()),
            format!("Onion skin:     {}", if editor.onion_skin() { "on" } else { "off" }),
        ];

        output.publish(LpCommandOutput::Output(lines.into_iter().join("\n") + "\n")).await;
    }
}
