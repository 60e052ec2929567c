use super::state::*;
use super::error::*;
use super::output::*;
use super::command::*;
use super::subcommands::*;

use flo_stream::*;
use futures::prelude::*;
use futures::stream;
use futures::task::{Poll};
use log::*;

///
/// Runs a series of commands provided by a stream and returns a stream of the resulting output
///
pub fn lp_run_commands<InputStream>(commands: InputStream) -> impl Stream<Item=LpCommandOutput>+Send+Unpin
where InputStream: 'static+Stream<Item=LpCommand>+Unpin+Send {
    lp_run_commands_with_state(commands, CommandState::new())
}

///
/// Runs a series of commands, starting from a particular state
///
pub fn lp_run_commands_with_state<InputStream>(commands: InputStream, initial_state: CommandState) -> impl Stream<Item=LpCommandOutput>+Send+Unpin
where InputStream: 'static+Stream<Item=LpCommand>+Unpin+Send {
    // Create the output
    let mut output_publisher    = Publisher::new(1);
    let mut output              = output_publisher.subscribe();
    let mut runner              = Some(run_commands(commands, output_publisher, initial_state).boxed());

    // Reading from the output stream causes commands to be run
    stream::poll_fn(move |context| {
        // Try to run a command
        if let Some(ref mut active_runner) = runner {
            if active_runner.poll_unpin(context) == Poll::Ready(()) {
                // Command has completed: free up the runner
                runner = None;
            }
        }

        // Try to read some output. We stop running when the output stream is no longer being read from
        output.poll_next_unpin(context)
    })
}

///
/// Runs a single command
///
fn run_command<'a>(command: LpCommand, output: &'a mut Publisher<LpCommandOutput>, state: &'a mut CommandState) -> impl Future<Output=Result<(), CommandError>>+Send+'a {
    async move {
        debug!("Running command {:?}", command);

        // Commands begin and end with a 'begin/finish' output
        output.publish(LpCommandOutput::BeginCommand(command.clone())).await;

        // Dispatch the command action
        match command {
            LpCommand::Version                      => {
                let msg = format!("{} ({}) v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_DESCRIPTION"), env!("CARGO_PKG_VERSION"));

                output.publish(LpCommandOutput::Message(msg)).await;
            }

            LpCommand::ReadState                    => { output.publish(LpCommandOutput::State(state.clone())).await; }
            LpCommand::SetState(ref new_state)      => { *state = new_state.clone(); }

            LpCommand::LoadConfig(ref path)         => { load_config(path, output, state).await?; }
            LpCommand::NewAnimation                 => { new_animation(output, state).await; }
            LpCommand::ReadProject(ref path)        => { read_project(path, output, state).await?; }
            LpCommand::WriteProject(ref path)       => { write_project(path, output, state).await?; }

            LpCommand::Apply(ref action)            => { apply_action(action.clone(), output, state).await; }
            LpCommand::ApplyScript(ref script)      => { apply_script(script, output, state).await?; }

            LpCommand::ListFrames                   => { list_frames(output, state).await; }
            LpCommand::Summarize                    => { summarize(output, state).await; }

            LpCommand::ExportGif(ref path)          => { export_animation_gif(path, output, state).await?; }
            LpCommand::RenderFrame(index, ref path) => { render_frame_png(index, path, output, state).await?; }
        }

        // Finish the command
        output.publish(LpCommandOutput::FinishCommand(command.clone())).await;

        Ok(())
    }
}

///
/// Runs the specified series of commands and writes the output to the given publisher
///
fn run_commands<InputStream>(mut commands: InputStream, mut output: Publisher<LpCommandOutput>, initial_state: CommandState) -> impl Future<Output=()>+Send
where InputStream: 'static+Stream<Item=LpCommand>+Send+Unpin {
    let mut state = initial_state;

    async move {
        while let Some(command) = commands.next().await {
            // Run the next command
            match run_command(command, &mut output, &mut state).await {
                Ok(())      => { }
                Err(err)    => {
                    // Stop running commands if we get an error
                    warn!("Command failed: {}", err);
                    output.publish(LpCommandOutput::Failure(err)).await;
                    break;
                }
            }
        }
    }
}
