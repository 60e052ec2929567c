use crate::state::*;
use crate::output::*;

use flo_stream::*;
use futures::prelude::*;

///
/// Writes a line describing each frame in the animation
///
pub fn list_frames<'a>(output: &'a mut Publisher<LpCommandOutput>, state: &'a mut CommandState) -> impl Future<Output=()>+Send+'a {
    async move {
        let editor = state.editor();

        for (index, frame) in editor.frames().iter().enumerate() {
            let marker  = if index == editor.current_frame_index() { "*" } else { " " };
            let history = frame.history();
            let line    = format!("{} {:>4}  {}  {} drawn, history {}/{}\n",
                marker,
                index,
                frame.id(),
                frame.visible_actions().count(),
                history.current_history_position(),
                history.len());

            output.publish(LpCommandOutput::Output(line)).await;
        }
    }
}
