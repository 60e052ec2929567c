use crate::state::*;
use crate::error::*;
use crate::output::*;

use lp_animation::*;

use flo_stream::*;
use futures::prelude::*;

use std::fs::{File};
use std::io::{BufReader, BufWriter, Write};

///
/// Reads the editor configuration from a JSON file
///
pub fn load_config<'a>(path: &'a str, output: &'a mut Publisher<LpCommandOutput>, state: &'a mut CommandState) -> impl Future<Output=Result<(), CommandError>>+Send+'a {
    async move {
        let config = EditorConfig::load(path)?;
        *state = state.set_config(config);

        output.publish(LpCommandOutput::Message(format!("Loaded configuration from '{}'", path))).await;

        Ok(())
    }
}

///
/// Starts a new animation with a single blank frame
///
pub fn new_animation<'a>(output: &'a mut Publisher<LpCommandOutput>, state: &'a mut CommandState) -> impl Future<Output=()>+Send+'a {
    async move {
        let editor  = EditorState::new(state.config().clone());
        *state      = state.set_editor(editor);

        output.publish(LpCommandOutput::Message("Created a new animation".to_string())).await;
    }
}

///
/// Reads a project file and starts editing it
///
pub fn read_project<'a>(path: &'a str, output: &'a mut Publisher<LpCommandOutput>, state: &'a mut CommandState) -> impl Future<Output=Result<(), CommandError>>+Send+'a {
    async move {
        let file    = File::open(path).map_err(|err| CommandError::file(path, err))?;
        let project = load_project(BufReader::new(file))?;
        let editor  = EditorState::from_project(project, state.config().clone());
        let msg     = format!("Read {} frames from '{}'", editor.frames().len(), path);

        *state = state.set_editor(editor);
        output.publish(LpCommandOutput::Message(msg)).await;

        Ok(())
    }
}

///
/// Writes the animation being edited to a project file
///
pub fn write_project<'a>(path: &'a str, output: &'a mut Publisher<LpCommandOutput>, state: &'a mut CommandState) -> impl Future<Output=Result<(), CommandError>>+Send+'a {
    async move {
        let file        = File::create(path).map_err(|err| CommandError::file(path, err))?;
        let mut writer  = BufWriter::new(file);

        save_project(&mut writer, state.editor())?;
        writer.flush().map_err(|err| CommandError::file(path, err))?;

        output.publish(LpCommandOutput::Message(format!("Wrote {} frames to '{}'", state.editor().frames().len(), path))).await;

        Ok(())
    }
}
