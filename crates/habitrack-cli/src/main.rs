use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use habitrack_core::DailyStatus;

mod commands;

#[derive(Parser)]
#[command(name = "habitrack", version, about = "Habitrack CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the predefined habit catalog
    Catalog {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Tracked habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Record a day's outcome (logging the same status again clears it)
    Log {
        /// Habit id or name
        habit: String,
        /// Outcome: success, partial or fail
        #[arg(value_parser = commands::parse_status)]
        status: DailyStatus,
        /// Day to record (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Attach a free-text note to a day
    Note {
        /// Habit id or name
        habit: String,
        text: String,
        /// Day to annotate (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Current streak for a habit
    Streak {
        /// Habit id or name
        habit: String,
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Twelve-month history calendar for a habit
    Calendar {
        /// Habit id or name
        habit: String,
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Emit the grid as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Ask the AI coach for a motivational message
    Advice {
        /// Habit id or name
        habit: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Advisor credential management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
}

fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .ok();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Catalog { json } => commands::catalog::run(json),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Log {
            habit,
            status,
            date,
        } => commands::log::run(&habit, status, date),
        Commands::Note { habit, text, date } => commands::note::run(&habit, &text, date),
        Commands::Streak { habit, date } => commands::streak::run(&habit, date),
        Commands::Calendar { habit, date, json } => commands::calendar::run(&habit, date, json),
        Commands::Advice { habit } => commands::advice::run(&habit),
        Commands::Config { action } => commands::config::run(action),
        Commands::Auth { action } => commands::auth::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
