//! The `culina` application.
//!
//! Owns the loaded configuration and dispatches parsed CLI commands to the
//! API server, the storage layer, or the config handlers.

use crate::cli::{BaseCommand, CliArgs, UserAction};
use crate::config::CulinaConfig;
use crate::config_handlers;
use culina_api::AppState;
use culina_core::Result;
use culina_storage::{Database, UserStore};
use tracing_subscriber::EnvFilter;

// ============================================================================
// CulinaCli
// ============================================================================

/// CLI application holding the resolved configuration.
pub struct CulinaCli {
    name: String,
    config: CulinaConfig,
    version: String,
}

impl CulinaCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = CulinaConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    /// Create a new CLI application with an already-built config.
    pub fn new(name: impl Into<String>, config: CulinaConfig) -> Self {
        Self {
            name: name.into(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &CulinaConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(BaseCommand::Serve { host, port }) => self.serve(host, port).await,
            Some(BaseCommand::Createsuperuser { email, password }) => {
                self.create_superuser(&email, &password).await
            }
            Some(BaseCommand::User(user_cmd)) => self.handle_user(user_cmd.command).await,
            Some(BaseCommand::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            Some(BaseCommand::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(BaseCommand::Health) => self.health().await,
            None => {
                println!("{} {} (use --help for usage)", self.name, self.version);
                Ok(())
            }
        }
    }

    /// Open the configured database and serve the HTTP API.
    ///
    /// Flags override configured bind values when present.
    async fn serve(&self, host: Option<String>, port: Option<u16>) -> Result<()> {
        let host = host.unwrap_or_else(|| self.config.server.host.clone());
        let port = port.unwrap_or(self.config.server.port);

        let db = Database::connect(&self.config.database.url).await?;
        let app = culina_api::app(AppState::new(&db));

        let addr = format!("{host}:{port}");
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("{} listening on {addr}", self.name);
        axum::serve(listener, app).await?;
        Ok(())
    }

    /// Create a staff account with full privileges.
    async fn create_superuser(&self, email: &str, password: &str) -> Result<()> {
        let db = Database::connect(&self.config.database.url).await?;
        let user = UserStore::new(&db).create_superuser(email, password).await?;
        println!("Superuser {} created", user.email);
        Ok(())
    }

    /// Dispatch account subcommands.
    async fn handle_user(&self, command: UserAction) -> Result<()> {
        match command {
            UserAction::List => {
                let db = Database::connect(&self.config.database.url).await?;
                let users = UserStore::new(&db).list().await?;
                for user in &users {
                    println!("{}\t{}", user.email, user.name);
                }
                Ok(())
            }
        }
    }

    /// Confirm the configured database answers a query.
    async fn health(&self) -> Result<()> {
        let db = Database::connect(&self.config.database.url).await?;
        db.ping().await?;
        println!("{}: healthy", self.name);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
