mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use chamados_core::error::ChamadosError;

#[derive(Parser)]
#[command(
    name = "chamados",
    version,
    about = "Triage tool for MOB service ticket reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a report (xlsx/xls/csv) and show the canonical dataset
    Parse {
        /// Path to the report file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the canonical rows to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Restrict a column to a value, e.g. --filter "Status=Em Campo".
        /// Repeatable; repeated values for one column accumulate.
        #[arg(short, long = "filter", value_name = "COL=VALUE")]
        filter: Vec<String>,
    },
    /// Export the pending (due today or overdue) rows as a styled xlsx
    Export {
        /// Path to the report file
        input_file: PathBuf,

        /// Output path (default: pendencias_mob_<date>.xlsx)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Restrict a column to a value before the pending cut. Repeatable.
        #[arg(short, long = "filter", value_name = "COL=VALUE")]
        filter: Vec<String>,

        /// Reference date (YYYY-MM-DD) instead of the system date
        #[arg(long, value_name = "DATE")]
        today: Option<String>,
    },
    /// List the canonical columns and the accepted source header spellings
    Schema,
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
            filter,
        } => commands::parse::run(input_file, &output, out, &filter),
        Commands::Export {
            input_file,
            out,
            filter,
            today,
        } => commands::export::run(input_file, out, &filter, today.as_deref()),
        Commands::Schema => commands::schema::run(),
    };

    match result {
        Ok(()) => {}
        // Not an error: the operator just has nothing due right now.
        Err(ChamadosError::NothingToExport) => {
            eprintln!("{}", ChamadosError::NothingToExport);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
