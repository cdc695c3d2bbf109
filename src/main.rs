//! Captable CLI - cap table modeling and dilution scenario tool
//!
//! Usage: captable <COMMAND>
//!
//! Commands:
//!   show      Render the cap table
//!   simulate  Simulate a priced round and report dilution
//!   timeline  Show vesting progress and the sampled timeline
//!   check     Verify the structure's consistency invariants

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { file } => commands::cmd_show(file, cli.json, cli.color).map(|_| ExitCode::SUCCESS),
        Commands::Simulate {
            raise,
            pre_money,
            round_name,
            investors,
            file,
            at,
        } => commands::cmd_simulate(
            raise, pre_money, round_name, investors, file, at, cli.json, cli.color,
        )
        .map(|_| ExitCode::SUCCESS),
        Commands::Timeline {
            timeframe,
            from,
            file,
            at,
        } => commands::cmd_timeline(timeframe, from, file, at, cli.json, cli.color)
            .map(|_| ExitCode::SUCCESS),
        Commands::Check { file } => commands::cmd_check(file, cli.json, cli.color),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
