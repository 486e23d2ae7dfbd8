//! CLI frontend for Augury daily fortunes.

mod commands;
mod settings;

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use settings::Settings;

#[derive(Parser)]
#[command(
    name = "augury",
    about = "Augury: one fortune per category, once a day",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the ledger state
    #[arg(long, global = true, env = "AUGURY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// RNG seed for reproducible readings
    #[arg(long, global = true, env = "AUGURY_SEED")]
    seed: Option<u64>,

    /// Pin "today" to a calendar day (YYYY-MM-DD)
    #[arg(long, global = true, hide = true, env = "AUGURY_DATE")]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw today's fortune for a category (love, career, wealth)
    Read {
        /// Category to read
        category: String,
    },

    /// Show which categories are still available today
    Status,

    /// List past readings grouped by recency
    History {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show a past reading by id
    Show {
        /// Reading id
        id: String,
    },

    /// Print a shareable message for a reading (default: the current fortune)
    Share {
        /// Reading id
        id: Option<String>,
    },

    /// Export the full history
    Export {
        /// Output format: markdown, text, json
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show reading statistics
    Stats,

    /// Clear the reading history
    Clear {
        /// Confirm the irreversible clear
        #[arg(long)]
        yes: bool,

        /// Only forget the current fortune, keep history
        #[arg(long)]
        current_only: bool,
    },
}

fn main() {
    if !settings::init_logging() {
        eprintln!("warning: log subscriber already installed; AUGURY_LOG is ignored");
    }
    let cli = Cli::parse();

    let settings = Settings {
        data_dir: cli.data_dir,
        seed: cli.seed,
        date: cli.date,
    };

    let result = settings.open_book().and_then(|mut book| match cli.command {
        Commands::Read { category } => commands::read::run(&mut book, &category),
        Commands::Status => commands::status::run(&book),
        Commands::History { category } => commands::history::run(&book, category.as_deref()),
        Commands::Show { id } => commands::show::run(&book, &id),
        Commands::Share { id } => commands::share::run(&book, id.as_deref()),
        Commands::Export { format, output } => {
            commands::export::run(&book, &format, output.as_deref())
        }
        Commands::Stats => commands::stats::run(&book),
        Commands::Clear { yes, current_only } => commands::clear::run(&mut book, yes, current_only),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
