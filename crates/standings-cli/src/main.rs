mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("standings=info,standings_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = cli_utils::Settings::resolve(&args);

    match args.command {
        Some(Command::Load { files }) => commands::load::run(&settings, &files),
        Some(Command::Show { teams, times, json }) => {
            commands::show::run(&settings, commands::show::View::from_flags(teams, times), json)
        }
        Some(Command::Export { output, format }) => {
            commands::export::run(&settings, output.as_deref(), format)
        }
        Some(Command::ClearPoints { drivers, teams }) => {
            commands::clear::clear_points(&settings, drivers, teams)
        }
        Some(Command::DeleteAll { yes }) => commands::clear::delete_all(&settings, yes),
        Some(Command::Demo { set }) => commands::demo::run(&settings, set),
        Some(Command::Config { save }) => commands::config::run(&settings, save),
        None => commands::show::run(&settings, commands::show::View::All, false),
    }
}
