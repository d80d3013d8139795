//! easy-commit CLI - Conventional commits from an interactive wizard

mod cli;
mod colors;
mod commands;
mod interaction;
mod logging;
mod output;

use std::process::ExitCode;

use cli::Commands;

fn main() -> ExitCode {
    let cli = cli::parse();
    let level_source = logging::init(cli.verbose, cli.quiet);

    let config = match commands::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(e.exit_code() as u8);
        }
    };
    logging::apply_config_level(level_source, &config.logger.level);

    let result = match cli.command {
        Some(Commands::Init { force }) => commands::run_init(force, cli.json, cli.quiet),
        Some(Commands::Types) => commands::run_types(&config, cli.json),
        Some(Commands::Last) => commands::run_last(&config, cli.json),
        None => commands::run_commit(cli.commit, &config, cli.json, cli.quiet),
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
