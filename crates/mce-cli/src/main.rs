use clap::{Parser, Subcommand};
use mce::{
    commands::{self, ConfigAction},
    CliError, GlobalOpts, ProjectContext,
};
use mce_logger as logger;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mce")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "TinyMCE plugin scaffold tooling",
    long_about = "mce discovers editor plugins under src/plugins, generates bundle configs for them and keeps the package.json export map in sync. Without a subcommand it runs update-exports."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the package.json export map from the discovered plugins
    UpdateExports,
    /// List discovered plugins
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print bundle configs for the external bundler
    BundleConfig {
        /// Production build (minified, no sourcemaps). Also set by NODE_ENV=production
        #[arg(long)]
        production: bool,
        /// Write the configs to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Empty the library and demo output directories
    Clean {
        /// Skip confirmation and delete
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Inspect or change mce.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    init_tracing();

    let ctx = match ProjectContext::load(&cli.global) {
        Ok(ctx) => ctx,
        Err(e) => {
            logger::error(&format!("Failed to load project: {}", e));
            std::process::exit(1);
        }
    };

    let result: Result<(), CliError> = match cli.command.unwrap_or(Commands::UpdateExports) {
        Commands::UpdateExports => match commands::update_exports(&ctx) {
            Ok(_) => Ok(()),
            Err(e) => {
                logger::error(&format!("{} {}", commands::UPDATE_FAILED, e));
                logger::show_log_path();
                std::process::exit(1);
            }
        },
        Commands::List { json } => commands::list_plugins(&ctx, json),
        Commands::BundleConfig { production, output } => {
            commands::print_bundle_configs(&ctx, production, output.as_deref())
        }
        Commands::Clean { yes } => commands::clean_outputs(&ctx, yes),
        Commands::Config { action } => commands::handle_config(action, &ctx, &cli.global),
    };

    if let Err(e) = result {
        logger::error(&e.to_string());
        logger::show_log_path();
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logger::verbosity_to_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}
