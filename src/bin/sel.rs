// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `sel` is a command line tool that allows you to pick one of the options
//! piped into it via `stdin`, then runs a command of your choosing with the
//! selection. It supports plain text lines and, with `--json`, choice
//! records carrying separators, disabled markers, and descriptions.
//!
//! ```shell
//! ls -1 | sel -c "echo you picked %"
//! cat templates.jsonl | sel --json -m "Select a project template:" -c "echo %"
//! ```

use std::{
    io::{stdin, BufRead},
    process::Command,
};

use clap::{CommandFactory, Parser};
use miette::Diagnostic;
use selectify::{
    entry_from_json_line, is_stdin_piped, is_stdout_piped, select_from_list,
    try_initialize_logging, SelectConfig, SelectEntry, StdinIsPipedResult::*,
    StdoutIsPipedResult::*,
};
use thiserror::Error;

const SELECTED_ITEM_SYMBOL: char = '%';

#[derive(Debug, Parser)]
#[command(bin_name = "sel")]
#[command(about = "Pick one item from a list piped in via stdin 👉", long_about = None)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
struct CliArgs {
    /// The selected item is substituted for `%` and the command is executed
    /// in your shell. For eg: "echo %". Please wrap the command in quotes 💡
    #[arg(value_name = "command", long, short = 'c')]
    command_to_run_with_selection: String,

    /// Prompt message shown above the list
    #[arg(value_name = "message", long, short = 'm', default_value = "Select an item")]
    message: String,

    /// Parse each stdin line as a JSON choice record (separators, disabled
    /// markers, descriptions) instead of a plain value
    #[arg(long, short = 'j')]
    json: bool,

    /// Pre-select this value if present among the enabled choices
    #[arg(value_name = "value", long, short = 'd')]
    default: Option<String>,

    /// Stop the cursor at the list ends instead of wrapping around
    #[arg(long)]
    no_wrap: bool,

    /// Write a DEBUG-level log to this file (watch it with `tail -f`)
    #[arg(value_name = "file", long)]
    log_file: Option<String>,
}

#[derive(Debug, Error, Diagnostic)]
enum SelError {
    #[error("nothing to select: stdin produced no choice lines")]
    #[diagnostic(help("pipe at least one line into sel, eg: `ls -1 | sel -c \"echo %\"`"))]
    EmptyChoiceList,

    #[error("failed to run command `{command}`")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn main() -> miette::Result<()> {
    let cli_args = CliArgs::parse();

    if let Some(ref log_file) = cli_args.log_file {
        try_initialize_logging(log_file)?;
        tracing::debug!(?cli_args, "start");
    }

    let bin_name = CliArgs::command();
    let bin_name = bin_name.get_bin_name().unwrap_or("this command");

    // macos has issues w/ stdin piped in.
    // https://github.com/crossterm-rs/crossterm/issues/396
    if cfg!(target_os = "macos") {
        match (is_stdin_piped(), is_stdout_piped()) {
            (StdinIsPiped, _) => {
                show_error_stdin_pipe_does_not_work_on_macos();
            }
            (_, StdoutIsPiped) => {
                show_error_do_not_pipe_stdout(bin_name);
            }
            (StdinIsNotPiped, StdoutIsNotPiped) => {
                show_error_need_to_pipe_stdin(bin_name);
            }
        }
        return Ok(());
    }

    match (is_stdin_piped(), is_stdout_piped()) {
        (StdinIsPiped, StdoutIsNotPiped) => show_tui(cli_args)?,
        (StdinIsPiped, StdoutIsPiped) => {
            show_error_do_not_pipe_stdout(bin_name);
        }
        (StdinIsNotPiped, StdoutIsPiped) => {
            show_error_need_to_pipe_stdin(bin_name);
            show_error_do_not_pipe_stdout(bin_name);
        }
        (StdinIsNotPiped, StdoutIsNotPiped) => {
            show_error_need_to_pipe_stdin(bin_name);
        }
    }

    Ok(())
}

fn show_error_stdin_pipe_does_not_work_on_macos() {
    println!(
        "Unfortunately at this time the macOS `stdin` pipe does not work.\
         \nhttps://github.com/crossterm-rs/crossterm/issues/396"
    );
}

fn show_error_need_to_pipe_stdin(bin_name: &str) {
    println!(
        "Please pipe the output of another command into {bin_name}. \
         \n✅ For example: `ls -1 | {bin_name} -c \"echo %\"`"
    );
}

fn show_error_do_not_pipe_stdout(bin_name: &str) {
    println!(
        "Please do *not* pipe the output of {bin_name} to another command. \
         \n❎ For eg, don't do this: `ls -1 | {bin_name} -c \"echo %\" | cat`"
    );
}

fn show_tui(cli_args: CliArgs) -> miette::Result<()> {
    let lines: Vec<String> = stdin().lock().lines().map_while(Result::ok).collect();

    tracing::debug!(line_count = lines.len(), "read choice lines from stdin");

    if lines.is_empty() {
        return Err(SelError::EmptyChoiceList.into());
    }

    let entries: Vec<SelectEntry<String>> = if cli_args.json {
        lines.iter().map(|line| entry_from_json_line(line)).collect()
    } else {
        lines.into_iter().map(SelectEntry::choice).collect()
    };

    let mut config = SelectConfig::new(cli_args.message, entries)
        .with_wrap_around(!cli_args.no_wrap);
    if let Some(default) = cli_args.default {
        config = config.with_default_value(default);
    }

    // Actually get input from the user.
    let maybe_selected = select_from_list(config);

    tracing::debug!(?maybe_selected, "prompt resolved");

    match maybe_selected {
        Some(selected_item) => {
            let actual_command_to_run = cli_args
                .command_to_run_with_selection
                .replace(SELECTED_ITEM_SYMBOL, &selected_item);
            execute_command(&actual_command_to_run)?;
        }
        None => {
            // User aborted; nothing to run.
        }
    }

    Ok(())
}

fn execute_command(cmd_str: &str) -> miette::Result<()> {
    // This let binding is required to make the code below work.
    let mut command = if cfg!(target_os = "windows") {
        Command::new("cmd")
    } else {
        Command::new("sh")
    };

    let command = if cfg!(target_os = "windows") {
        command.arg("/C").arg(cmd_str)
    } else {
        command.arg("-c").arg(cmd_str)
    };

    let output = command.output().map_err(|source| SelError::CommandFailed {
        command: cmd_str.to_string(),
        source,
    })?;
    print!("{}", String::from_utf8_lossy(&output.stdout));

    Ok(())
}
