use super::state::*;

use lp_animation::*;

///
/// Command that can be issued to a Live Pictures command stream
///
#[derive(Clone, Debug)]
pub enum LpCommand {
    /// Write out a message describing the version of Live Pictures that this is
    Version,

    /// Sends the current state to the output
    ReadState,

    /// Replaces the current state
    SetState(CommandState),

    /// Reads the editor configuration from a JSON file (the current frames are kept)
    LoadConfig(String),

    /// Replaces the animation with a new one containing a single blank frame
    NewAnimation,

    /// Reads the project file at the specified path
    ReadProject(String),

    /// Writes the animation to a project file at the specified path
    WriteProject(String),

    /// Sends an action to the editor
    Apply(EditorAction),

    /// Sends a list of actions to the editor, read from a JSON array
    ///
    /// `SaveAsGif` in a script only reports an error: `ExportGif` is the command that writes the GIF file.
    ApplyScript(String),

    /// Writes a line describing each frame to the output
    ListFrames,

    /// Writes a summary of the animation and the editor settings to the output
    Summarize,

    /// Renders every frame as a GIF at the specified path
    ExportGif(String),

    /// Renders a single frame as a PNG at the specified path
    RenderFrame(usize, String),
}
