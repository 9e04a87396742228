use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{handle_add, handle_view, AddArgs, ViewArgs};
use tally::config::{Settings, TallyPaths};
use tally::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal finance ledger",
    long_about = "tally is a terminal-based personal finance ledger. It records \
                  income and expense transactions in a plain CSV file and shows \
                  range-filtered views with summaries and daily totals."
)]
struct Cli {
    /// Ledger file to operate on (defaults to the data directory's ledger.csv)
    #[arg(long, global = true, env = "TALLY_LEDGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new transaction (prompts for missing fields)
    Add(AddArgs),

    /// Show transactions and a summary for a date range
    View(ViewArgs),

    /// Create the config directories and the ledger file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = LedgerStore::new(cli.file.unwrap_or_else(|| paths.ledger_file()));

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&store, args)?,
        Some(Commands::View(args)) => handle_view(&store, &settings, args)?,
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            store.initialize()?;
            settings.save(&paths)?;
            println!("Initialized ledger at: {}", store.path().display());
        }
        Some(Commands::Config) => {
            println!("tally configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Ledger file:      {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("tally - Terminal-based personal finance ledger");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally add' to record a transaction.");
        }
    }

    Ok(())
}
