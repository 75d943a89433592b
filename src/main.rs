use clap::{Parser, Subcommand};
use crudinator::error::Result;

mod cli;

#[derive(Parser)]
#[command(name = "crudinator")]
#[command(version = "0.1.0")]
#[command(about = "Turn entity models into CRUD service actions with GraphQL signatures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an example configuration
    Init {
        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Generate service descriptors as JSON
    Generate {
        /// Config file path
        #[arg(long, default_value = "crudinator.toml")]
        config: String,

        /// Only generate the service with this model name
        #[arg(long)]
        service: Option<String>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Render the GraphQL SDL for all services
    Sdl {
        /// Config file path
        #[arg(long, default_value = "crudinator.toml")]
        config: String,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Validate a JSON parameter payload against an action
    Check {
        /// Config file path
        #[arg(long, default_value = "crudinator.toml")]
        config: String,

        /// Model name of the service
        #[arg(long)]
        service: String,

        /// Action name (count, find, get, create, insert, update, remove)
        #[arg(long)]
        action: String,

        /// Parameters as a JSON object
        #[arg(long)]
        params: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { output } => {
            cli::init::run(output)?;
        }
        Commands::Generate { config, service, output } => {
            cli::generate::run(config, service, output)?;
        }
        Commands::Sdl { config, output } => {
            cli::sdl::run(config, output)?;
        }
        Commands::Check { config, service, action, params } => {
            cli::check::run(config, service, action, params)?;
        }
    }

    Ok(())
}
