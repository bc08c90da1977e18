//! # Command Line Interface
//!
//! The command tree is built in `cli.rs`, which is shared with `build.rs`.
//! Subcommands are run by the `commands` module.

use env_logger;
#[cfg(windows)]
use colored;
use log::error;
use m100kit::commands;
use m100kit::commands::CommandError;
use m100kit::STDRESULT;

include!("cli.rs");

fn main() -> STDRESULT
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    let matches = build_cli().get_matches();

    if let Some(cmd) = matches.subcommand_matches("pack") {
        return commands::langx::pack(cmd);
    }

    if let Some(cmd) = matches.subcommand_matches("tokenize") {
        return commands::langx::tokenize(cmd);
    }

    if let Some(cmd) = matches.subcommand_matches("detokenize") {
        return commands::langx::detokenize(cmd);
    }

    error!("No subcommand was found, try `m100kit --help`");
    return Err(Box::new(CommandError::InvalidCommand));
}
