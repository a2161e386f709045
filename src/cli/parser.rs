use crate::core::summary::SummaryWindow;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for triplogs
/// CLI application to track driving trips and expenses with SQLite
#[derive(Parser)]
#[command(
    name = "triplogs",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple trip logging CLI: track trips, vehicles and odometer readings, and compute earnings, expenses and tax deductions",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// View or change application settings
    Settings {
        #[arg(long, help = "Distance unit: miles or kilometers")]
        unit: Option<String>,

        #[arg(long, help = "Currency code, e.g. USD or EUR")]
        currency: Option<String>,

        #[arg(
            long = "deduction-rate",
            help = "Tax deduction per distance unit, e.g. 0.67"
        )]
        deduction_rate: Option<f64>,
    },

    /// View or change the user information used on reports
    User {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long = "city-state", help = "City and state, e.g. 'Austin, TX'")]
        city_state: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long = "zip", help = "Zip / postal code")]
        zip_code: Option<String>,
    },

    /// Manage vehicles
    Vehicle {
        #[arg(long, help = "Add a new vehicle (requires --make and --model)")]
        add: bool,

        #[arg(long, help = "List all vehicles")]
        list: bool,

        #[arg(long = "del", value_name = "ID", help = "Delete a vehicle by id")]
        del: Option<String>,

        #[arg(long, help = "Vehicle make, e.g. Toyota")]
        make: Option<String>,

        #[arg(long, help = "Vehicle model, e.g. Prius")]
        model: Option<String>,

        #[arg(long, help = "Model year, e.g. 2021")]
        year: Option<i32>,

        #[arg(long = "plate", help = "License plate")]
        license_plate: Option<String>,

        #[arg(long, help = "Current odometer reading")]
        odometer: Option<i64>,

        #[arg(
            long,
            short = 'f',
            help = "Delete without confirmation (trips attributed to the vehicle are deleted with it)"
        )]
        force: bool,
    },

    /// Record or list manual odometer check-ins
    Odometer {
        #[arg(long, value_name = "ID", help = "Vehicle the reading belongs to")]
        vehicle: Option<String>,

        #[arg(long, help = "Odometer value")]
        reading: Option<i64>,

        #[arg(long, help = "Reading date (YYYY-MM-DD), defaults to today")]
        date: Option<String>,

        #[arg(long, help = "List recorded readings")]
        list: bool,

        #[arg(long, help = "Filter listed readings by year")]
        year: Option<i32>,
    },

    /// Add or edit a trip
    Add {
        /// Date of the trip (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        #[arg(long = "in", help = "Start time (HH:MM)")]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long = "out", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(long, help = "Distance driven")]
        miles: Option<f64>,

        #[arg(long, help = "Gross earnings")]
        gross: Option<f64>,

        #[arg(long = "gas", help = "Gasoline expense")]
        gasoline: Option<f64>,

        #[arg(long, help = "Tolls expense")]
        tolls: Option<f64>,

        #[arg(long, help = "Food expense")]
        food: Option<f64>,

        #[arg(long, value_name = "ID", help = "Vehicle the trip is attributed to")]
        vehicle: Option<String>,

        #[arg(
            long = "odo-start",
            help = "Odometer at departure (auto-filled from the vehicle when omitted)"
        )]
        odo_start: Option<i64>,

        #[arg(long = "odo-end", help = "Odometer at arrival")]
        odo_end: Option<i64>,

        /// Edit an existing trip instead of creating a new one
        #[arg(long = "id", help = "Trip id to edit (used with --edit)")]
        edit_id: Option<String>,

        /// Enable edit mode (requires --id)
        #[arg(
            long = "edit",
            requires = "edit_id",
            help = "Edit existing trip instead of creating a new one"
        )]
        edit: bool,
    },

    /// Delete a trip by id
    Del {
        /// Trip id to delete
        id: String,
    },

    /// List trips
    List {
        #[arg(long, help = "Calendar year to list (defaults to the current year)")]
        year: Option<i32>,

        #[arg(long, help = "List every year, grouped", conflicts_with = "year")]
        all: bool,

        #[arg(
            long,
            help = "Interleave odometer check-ins with trips (single year only)"
        )]
        timeline: bool,
    },

    /// Show aggregated earnings for a reporting window
    Summary {
        #[arg(long, value_enum, default_value = "7d")]
        window: SummaryWindow,
    },

    /// Export trip data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Restrict the export to one calendar year")]
        year: Option<i32>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Write all data to a single backup file
    Backup {
        #[arg(
            long,
            value_name = "FILE",
            help = "Destination file (defaults to trip-logs-backup-<date>.json)"
        )]
        file: Option<String>,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Replace all data from a backup file (destructive)
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Apply without interactive confirmation")]
        force: bool,
    },
}
