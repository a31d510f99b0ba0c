use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;

use dentalzen::cli::{
    handle_book_command, handle_calendar_command, handle_services_command, handle_slots_command,
    BookArgs,
};
use dentalzen::config::{paths::DATA_DIR_ENV, BookingPaths, Settings};

#[derive(Parser)]
#[command(
    name = "dentalzen",
    version,
    about = "Book a DentalZen appointment from the terminal",
    long_about = "DentalZen walks you through booking a dental appointment: pick a \
                  service, pick a date and time, leave your contact details and \
                  confirm. Run without a command to open the interactive booking screen."
)]
struct Cli {
    /// Directory holding config.json and booking.log
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive booking screen
    #[command(alias = "ui")]
    Tui,

    /// List the services on offer
    Services,

    /// List the bookable time slots
    Slots,

    /// Show which days of a month can be booked
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Book an appointment without the interactive screen
    Book(BookArgs),

    /// Write the default configuration file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => BookingPaths::with_base_dir(dir),
        None => BookingPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    dentalzen::logging::init(&paths, &settings)?;
    debug!(base_dir = %paths.base_dir().display(), "Paths resolved");

    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Tui) | None => {
            dentalzen::tui::run_tui(&settings)?;
        }
        Some(Commands::Services) => handle_services_command(&settings)?,
        Some(Commands::Slots) => handle_slots_command(&settings)?,
        Some(Commands::Calendar { month }) => {
            handle_calendar_command(&settings, month.as_deref(), today)?;
        }
        Some(Commands::Book(args)) => handle_book_command(&settings, args, today)?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "DentalZen is already initialized at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Initialized DentalZen at: {}", paths.base_dir().display());
                println!("Edit config.json to change the closed day, services or time slots.");
            }
        }
        Some(Commands::Config) => {
            println!("DentalZen Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Clinic name:    {}", settings.clinic_name);
            println!("  Closed on:      {}", settings.closed_weekday);
            println!("  Date format:    {}", settings.date_format);
            println!("  Services:       {}", settings.catalog().len());
            println!("  Time slots:     {}", settings.time_slots().len());
            println!("  Log level:      {}", settings.log_level);
        }
    }

    Ok(())
}
