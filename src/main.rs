use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pocketspend::cli::{
    handle_add, handle_budget_command, handle_category_command, handle_clear,
    handle_currency_command, handle_delete, handle_export_command, handle_list, handle_month,
    handle_quick_command, handle_summary, handle_week,
};
use pocketspend::config::{paths::SpendPaths, settings::Settings};
use pocketspend::storage::{init, Storage};

#[derive(Parser)]
#[command(
    name = "pocketspend",
    version,
    about = "Terminal-based daily spending tracker",
    long_about = "PocketSpend tracks day-to-day expenses against a daily budget. \
                  Log amounts in a couple of keystrokes, watch the remaining \
                  budget on a live dashboard, and review weekly and monthly \
                  totals from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Add an expense entry
    Add {
        /// Amount (e.g., "4.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
        /// Day to add to (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        day: Option<String>,
    },

    /// Delete an expense entry by id
    Delete {
        /// Entry id (as shown by `list`)
        id: String,
        /// Day the entry belongs to (defaults to today)
        #[arg(short, long)]
        day: Option<String>,
    },

    /// List a day's entries
    List {
        /// Day to list (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        day: Option<String>,
    },

    /// Remove all entries for a day
    Clear {
        /// Day to clear (defaults to today)
        #[arg(short, long)]
        day: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Quick-add amount management
    #[command(subcommand)]
    Quick(pocketspend::cli::QuickCommands),

    /// Daily budget management
    #[command(subcommand)]
    Budget(pocketspend::cli::BudgetCommands),

    /// Currency selection
    #[command(subcommand)]
    Currency(pocketspend::cli::CurrencyCommands),

    /// Category commands
    #[command(subcommand)]
    Category(pocketspend::cli::CategoryCommands),

    /// Show today's spending against the budget
    Summary,

    /// Show totals for the last 7 days
    Week,

    /// Show the current month's total
    Month,

    /// Export the spend history
    #[command(subcommand)]
    Export(pocketspend::cli::ExportCommands),

    /// Initialize data files with defaults
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    // Log to stderr; silent unless RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Seed defaults on first run so every command works out of the box
    if init::needs_initialization(&paths) {
        init::initialize_storage(&paths)?;
    }

    // Load all documents before anything renders
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) | None => {
            pocketspend::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Add {
            amount,
            category,
            note,
            day,
        }) => {
            handle_add(&storage, &amount, category.as_deref(), note, day.as_deref())?;
        }
        Some(Commands::Delete { id, day }) => {
            handle_delete(&storage, &id, day.as_deref())?;
        }
        Some(Commands::List { day }) => {
            handle_list(&storage, day.as_deref())?;
        }
        Some(Commands::Clear { day, yes }) => {
            handle_clear(&storage, day.as_deref(), yes)?;
        }
        Some(Commands::Quick(cmd)) => {
            handle_quick_command(&storage, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, cmd)?;
        }
        Some(Commands::Currency(cmd)) => {
            handle_currency_command(&storage, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary(&storage)?;
        }
        Some(Commands::Week) => {
            handle_week(&storage)?;
        }
        Some(Commands::Month) => {
            handle_month(&storage)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing PocketSpend at: {}", paths.base_dir().display());
            init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Defaults:");
            println!("  Daily budget: 50.00");
            println!("  Quick amounts: 1, 5, 10, 20");
            println!("  Currency: USD");
            println!();
            println!("Run 'pocketspend' to launch the dashboard.");
        }
        Some(Commands::Config) => {
            println!("PocketSpend Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Export date format: {}", settings.date_format);
            println!("  Day check interval: {}s", settings.day_check_interval_secs);
        }
    }

    // Flush any pending ledger writes before exiting
    storage.shutdown();

    Ok(())
}
