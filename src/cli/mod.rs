pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        Some(command @ types::Commands::Process { .. }) => {
            commands::handle_process_command(
                command,
                cli.source.as_ref(),
                cli.destination.as_ref(),
            );
        }
        Some(types::Commands::Clean {}) => {
            commands::handle_clean_command(cli.source.as_ref());
        }
        None => {
            // Default to the process command if none provided
            let command = types::Commands::Process {
                config: None,
                source: None,
                destination: None,
                base_url: None,
                include: None,
                no_lists: false,
                state_file: None,
            };
            commands::handle_process_command(
                &command,
                cli.source.as_ref(),
                cli.destination.as_ref(),
            );
        }
    }
}
