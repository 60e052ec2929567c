//!
//! # Live Pictures command line tool
//!
//! Edits, summarises and exports Live Pictures animations by running scripting commands against a project file.
//!

use lp_commands::*;
use lp_animation::*;

use tokio::io::{stdin, AsyncReadExt};
use tokio::fs;
use futures::stream;
use clap::{Arg, ArgMatches, Command};
use log::*;

mod console;
use self::console::*;

use std::process;

///
/// Describes the command line parameters
///
fn command_line() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help(concat!("Licensed under the Apache License, Version 2.0 (the \"License\");\n",
            "you may not use this file except in compliance with the License.\n",
            "You may obtain a copy of the License at\n",
            "\n",
            "http://www.apache.org/licenses/LICENSE-2.0\n\n"))
        .arg(Arg::new("config")
            .long("config")
            .short('c')
            .value_name("FILE")
            .help("Reads the editor configuration (canvas size, default colours, ball settings...) from a JSON file"))
        .arg(Arg::new("input")
            .long("input")
            .short('i')
            .value_name("FILE")
            .help("Specifies the project file to edit"))
        .arg(Arg::new("output")
            .long("output")
            .short('o')
            .value_name("FILE")
            .help("Writes the animation to a project file once the command has finished"))
        .subcommand(Command::new("new")
            .about("Starts a new animation with a single blank frame"))
        .subcommand(Command::new("ls-frames")
            .about("Lists the frames in the animation"))
        .subcommand(Command::new("summary")
            .about("Shows a summary of the animation"))
        .subcommand(Command::new("bounce")
            .about("Adds frames showing a bouncing ball to the animation")
            .arg(Arg::new("frames")
                .long("frames")
                .short('n')
                .value_name("N")
                .default_value("24")
                .help("The number of frames to generate")))
        .subcommand(Command::new("apply")
            .about("Applies a script (a JSON list of editor actions) to the animation")
            .arg(Arg::new("SCRIPT")
                .help("The file to read the script from (standard input if this is '-' or not specified)")
                .required(false)
                .index(1)))
        .subcommand(Command::new("export-gif")
            .about("Renders every frame of the animation to an animated GIF")
            .arg(Arg::new("OUTPUT")
                .help("The GIF file to write")
                .required(true)
                .index(1)))
        .subcommand(Command::new("render-frame")
            .about("Renders a single frame to a PNG file")
            .arg(Arg::new("INDEX")
                .help("The index of the frame to render (the first frame is 0)")
                .required(true)
                .value_parser(clap::value_parser!(usize))
                .index(1))
            .arg(Arg::new("OUTPUT")
                .help("The PNG file to write")
                .required(true)
                .index(2)))
}

///
/// Reads a script from a file, or from standard input
///
async fn read_script(path: Option<&String>) -> std::io::Result<String> {
    match path.map(|path| path.as_str()) {
        None | Some("-")    => {
            let mut script = String::new();
            stdin().read_to_string(&mut script).await?;
            Ok(script)
        }

        Some(path)          => fs::read_to_string(path).await
    }
}

///
/// Converts the command line parameters to a list of commands
///
async fn commands_for_params(params: &ArgMatches) -> Result<Vec<LpCommand>, String> {
    let mut input = vec![];

    // Configuration comes first, so it applies to everything that follows
    if let Some(config) = params.get_one::<String>("config") {
        input.push(LpCommand::LoadConfig(config.clone()));
    }

    if let Some(project) = params.get_one::<String>("input") {
        input.push(LpCommand::ReadProject(project.clone()));
    }

    match params.subcommand() {
        Some(("new", _))                    => { input.push(LpCommand::NewAnimation); }
        Some(("ls-frames", _))              => { input.push(LpCommand::ListFrames); }
        Some(("summary", _))                => { input.push(LpCommand::Summarize); }

        Some(("bounce", bounce))            => {
            let count = bounce.get_one::<String>("frames").cloned().unwrap_or_default();
            input.push(LpCommand::Apply(EditorAction::GenerateFrames { count }));
        }

        Some(("apply", apply))              => {
            let path    = apply.get_one::<String>("SCRIPT");
            let script  = read_script(path).await
                .map_err(|err| format!("Could not read script '{}': {}", path.map(|path| path.as_str()).unwrap_or("-"), err))?;

            input.push(LpCommand::ApplyScript(script));
        }

        Some(("export-gif", export))        => {
            if let Some(output) = export.get_one::<String>("OUTPUT") {
                input.push(LpCommand::ExportGif(output.clone()));
            }
        }

        Some(("render-frame", render))      => {
            if let (Some(index), Some(output)) = (render.get_one::<usize>("INDEX"), render.get_one::<String>("OUTPUT")) {
                input.push(LpCommand::RenderFrame(*index, output.clone()));
            }
        }

        _                                   => { input.push(LpCommand::Summarize); }
    }

    if let Some(output) = params.get_one::<String>("output") {
        input.push(LpCommand::WriteProject(output.clone()));
    }

    Ok(input)
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params      = command_line().get_matches();
    let commands    = match commands_for_params(&params).await {
        Ok(commands)    => commands,
        Err(msg)        => {
            eprintln!("{}", msg);
            process::exit(2);
        }
    };

    debug!("Running {} commands", commands.len());

    // Write the output to the console
    match run_console(lp_run_commands(stream::iter(commands))).await {
        Ok(true)    => { }
        Ok(false)   => { process::exit(1); }
        Err(err)    => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
