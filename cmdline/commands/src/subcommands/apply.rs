use crate::state::*;
use crate::error::*;
use crate::output::*;

use lp_animation::*;

use flo_stream::*;
use futures::prelude::*;

///
/// Describes an event from the editor as a message for the user
///
fn describe_event(event: &EditorEvent) -> LpCommandOutput {
    use self::EditorEvent::*;

    match event {
        FrameChanged(index)             => LpCommandOutput::Message(format!("Frame {} changed", index)),
        FramesChanged                   => LpCommandOutput::Message("Frames changed".to_string()),
        FrameSelected(index)            => LpCommandOutput::Message(format!("Selected frame {}", index)),
        StrokeChanged                   => LpCommandOutput::Message("Stroke changed".to_string()),
        ToolChanged(tool)               => LpCommandOutput::Message(format!("Tool is now {:?}", tool)),
        ColorChanged(color)             => LpCommandOutput::Message(format!("Colour is now {}", color)),
        WidthChanged(width)             => LpCommandOutput::Message(format!("Width is now {}", width)),
        PlaybackSpeedChanged(fps)       => LpCommandOutput::Message(format!("Playback speed is now {} fps", fps)),
        OnionSkinChanged(onion_skin)    => LpCommandOutput::Message(format!("Onion skin {}", if *onion_skin { "on" } else { "off" })),
        PlaybackStarted { fps }         => LpCommandOutput::Message(format!("Playing at {} fps", fps)),
        PlaybackStopped                 => LpCommandOutput::Message("Stopped playing".to_string()),
        ExportRequested { fps }         => LpCommandOutput::Error(format!("SaveAsGif does not write a file: use the ExportGif command (export-gif) to save the animation at {} fps", fps)),
        Ignored(reason)                 => LpCommandOutput::Error(format!("Ignored: {:?}", reason)),
    }
}

///
/// Sends an action to the editor and reports what changed
///
pub fn apply_action<'a>(action: EditorAction, output: &'a mut Publisher<LpCommandOutput>, state: &'a mut CommandState) -> impl Future<Output=()>+Send+'a {
    async move {
        let events = state.editor_mut().dispatch(action);

        for event in events.iter() {
            output.publish(describe_event(event)).await;
        }
    }
}

///
/// Sends every action in a JSON list to the editor
///
/// The script is parsed before any action is applied, so a script with a syntax error changes nothing.
///
pub fn apply_script<'a>(script: &'a str, output: &'a mut Publisher<LpCommandOutput>, state: &'a mut CommandState) -> impl Future<Output=Result<(), CommandError>>+Send+'a {
    async move {
        let actions = serde_json::from_str::<Vec<EditorAction>>(script)
            .map_err(|err| CommandError::InvalidScript(err.to_string()))?;

        for action in actions {
            apply_action(action, output, state).await;
        }

        Ok(())
    }
}
