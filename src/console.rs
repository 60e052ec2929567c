use lp_commands::*;

use tokio::io::{stdout, stderr, AsyncWriteExt};
use futures::prelude::*;

use std::io;

///
/// Sends the command output to the console
///
/// Returns false if a command failed.
///
pub async fn run_console<InputStream>(command_output: InputStream) -> io::Result<bool>
where InputStream: Stream<Item=LpCommandOutput>+Send+Unpin {
    let mut command_output = command_output;

    // The command output goes to stdout. Messages are sent to stderr
    let mut output_stream   = stdout();
    let mut message_stream  = stderr();
    let mut succeeded       = true;

    while let Some(input) = command_output.next().await {
        use self::LpCommandOutput::*;

        match input {
            BeginCommand(_cmd)      => { }
            Message(msg)            => { message_stream.write_all(msg.as_bytes()).await?; message_stream.write_all(b"\n").await?; }
            Error(err)              => { message_stream.write_all(err.as_bytes()).await?; message_stream.write_all(b"\n").await?; }
            Output(output)          => { output_stream.write_all(output.as_bytes()).await?; }
            State(_state)           => { }
            FinishCommand(_cmd)     => { }
            Failure(error)          => {
                let msg = format!("ERROR: {}\n", error);
                message_stream.write_all(msg.as_bytes()).await?;
                succeeded = false;
            }
        }
    }

    output_stream.flush().await?;
    message_stream.flush().await?;

    Ok(succeeded)
}
