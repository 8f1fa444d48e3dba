use stripdelim_core::{CliArgs, Command as CoreCommand, FilterConfig, process_stream};
mod logging;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use console::style;
use std::io;
use std::process::ExitCode;

fn print_completions_cli(shell: clap_complete::Shell) {
    let mut cmd = CliArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

fn main() -> Result<ExitCode> {
    let cli: CliArgs = CliArgs::parse();

    if let Some(command_enum_val) = cli.command {
        match command_enum_val {
            CoreCommand::Completion(args) => {
                print_completions_cli(args.shell);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    let main_app_args = cli.main_opts;
    logging::init_logging(&main_app_args.log_level);

    let config = FilterConfig::from(&main_app_args);
    tracing::debug!(?config, "starting");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    match process_stream(stdin, stdout, &config) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", style(format!("Error: {}", e)).red());
            Ok(ExitCode::FAILURE)
        }
    }
}
