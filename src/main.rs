use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use outlay::config::{paths::OutlayPaths, settings::Settings};
use outlay::display;
use outlay::ledger::Ledger;
use outlay::sample;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Terminal-based expense tracking application",
    long_about = "Outlay is a terminal-based expense tracker. Records live in \
                  memory for the lifetime of the session; summaries are derived \
                  on demand. Run without arguments to launch the interactive \
                  interface."
)]
struct Cli {
    /// Start with an empty ledger instead of the demo records
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Print a spending summary
    #[command(subcommand)]
    Summary(SummaryCommands),

    /// List all transactions
    #[command(alias = "txns")]
    Transactions,

    /// List income sources with the monthly-equivalent total
    Income,

    /// Show current configuration and paths
    Config,
}

#[derive(Subcommand)]
enum SummaryCommands {
    /// The trailing 7-day window against the week before
    Weekly,
    /// The current calendar month against the budget
    Monthly,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = OutlayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let today = Local::now().date_naive();
    let ledger = if cli.empty {
        Ledger::new()
    } else {
        sample::seeded_ledger(today)
    };

    match cli.command {
        None | Some(Commands::Tui) => {
            outlay::tui::run_tui(ledger, settings)?;
        }
        Some(Commands::Summary(SummaryCommands::Weekly)) => {
            print!("{}", display::weekly_report(&ledger, &settings, today));
        }
        Some(Commands::Summary(SummaryCommands::Monthly)) => {
            print!("{}", display::monthly_report(&ledger, &settings, today));
        }
        Some(Commands::Transactions) => {
            print!("{}", display::format_expense_list(&ledger, &settings));
        }
        Some(Commands::Income) => {
            print!(
                "{}",
                display::format_income_list(ledger.income_sources(), &settings)
            );
        }
        Some(Commands::Config) => {
            println!("Outlay Configuration");
            println!("====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!(
                "  Monthly budget:  {}",
                settings
                    .monthly_budget
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("  Swipe threshold: {}", settings.swipe_threshold);
            println!("  Date format:     {}", settings.date_format);
        }
    }

    Ok(())
}
