use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kassa::cli::{handle_config_command, handle_init_command, handle_products_command, run_session};
use kassa::config::{KassaPaths, Settings};
use kassa::services::Register;

#[derive(Parser)]
#[command(
    name = "kassa",
    version,
    about = "Minimal terminal point-of-sale register",
    long_about = "Kassa keeps a catalog of priced products, builds a receipt from \
                  '<productId> <quantity>' commands and saves it to the Receipts \
                  directory on 'pay'."
)]
struct Cli {
    /// Directory holding products, receipt counter and receipts
    #[arg(long, global = true, env = "KASSA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive register (default)
    Run,

    /// List the product catalog
    Products {
        /// Show product list lines that could not be parsed
        #[arg(long)]
        skipped: bool,
    },

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => KassaPaths::with_base_dir(dir),
        None => KassaPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let (mut register, _) = Register::open(&paths, &settings);
            let stdin = std::io::stdin();
            run_session(
                &mut register,
                &settings.currency_suffix,
                stdin.lock(),
                std::io::stdout(),
            )?;
        }
        Commands::Products { skipped } => {
            handle_products_command(&paths, &settings, skipped)?;
        }
        Commands::Init => {
            handle_init_command(&paths, &settings)?;
        }
        Commands::Config => {
            handle_config_command(&paths, &settings)?;
        }
    }

    Ok(())
}

/// Log to stderr so the register's own output stays clean.
///
/// `RUST_LOG=kassa=debug` shows skipped product lines and added items.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
