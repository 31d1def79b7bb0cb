mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hypr-hotspots",
    version,
    about = "Auto-hide status bar and hover hotspots for Hyprland"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Start the hotspots daemon
    Start,
    /// Stop the hotspots daemon
    Stop,
    /// Show whether the daemon is running
    Status,
    /// Re-read the configuration file
    Reload,
    /// Forward a toggle key event (bind this in hyprland.conf)
    Key {
        #[command(subcommand)]
        state: KeyCommands,
    },
    /// Check the setup for common problems
    Doctor,
    /// Run the daemon (internal, not for direct use)
    #[command(hide = true)]
    Daemon,
}

#[derive(Subcommand)]
enum KeyCommands {
    /// The key went down
    Press {
        /// Key name, e.g. Super_L
        name: String,
    },
    /// The key went up
    Release {
        /// Key name, e.g. Super_L
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Stop => commands::stop::execute(),
        Commands::Status => commands::status::execute(),
        Commands::Reload => commands::reload::execute(),
        Commands::Key { state } => match state {
            KeyCommands::Press { name } => commands::key::execute(name, true),
            KeyCommands::Release { name } => commands::key::execute(name, false),
        },
        Commands::Doctor => commands::doctor::execute(),
        Commands::Daemon => commands::daemon::execute(),
    }
}
