use super::state::*;
use super::error::*;
use super::command::*;

///
/// Possible types of output from a LpCommand
///
#[derive(Clone, Debug)]
pub enum LpCommandOutput {
    /// A particular command has started running
    BeginCommand(LpCommand),

    /// Display a message to the user
    Message(String),

    /// Display an error message to the user (the command keeps running)
    Error(String),

    /// Text generated by the command (eg, a frame listing)
    Output(String),

    /// Retrieved the current state of the command stream
    State(CommandState),

    /// A command has finished running
    FinishCommand(LpCommand),

    /// A command generated an error (this is generally the last item in the stream)
    Failure(CommandError)
}
