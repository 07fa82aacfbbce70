//! CLI argument parsing and command definitions.
//!
//! Provides the `culina` command surface: server launch, account
//! administration, and configuration management.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments for the `culina` binary.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "CULINA_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<BaseCommand>,
}

/// Built-in `culina` commands.
#[derive(Subcommand, Debug)]
pub enum BaseCommand {
    /// Start the HTTP API server.
    Serve {
        /// Host address to bind to (overrides configuration).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides configuration).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Create a staff account with full privileges.
    Createsuperuser {
        /// Email address for the new account.
        #[arg(long)]
        email: String,

        /// Password for the new account.
        #[arg(long)]
        password: String,
    },

    /// Account operations.
    User(UserCommand),

    /// Configuration operations.
    Config(ConfigCommand),

    /// Print version information.
    Version,

    /// Check that the configured database answers.
    Health,
}

/// Account-specific subcommands.
#[derive(Parser, Debug)]
pub struct UserCommand {
    /// User subcommand to execute.
    #[command(subcommand)]
    pub command: UserAction,
}

/// Available account subcommands.
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// List every registered account.
    List,
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "server.port").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "server.port").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
