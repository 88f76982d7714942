//! Triples CLI: query, export and validate the target triple table.

mod commands;

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "triples", version, about = "Target triples for prebuilt native binaries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List platforms, or the architectures of one platform
    List {
        /// Platform to list architectures for (e.g., linux, win32)
        #[arg(long)]
        platform: Option<String>,
    },
    /// Show the variants for a platform/architecture pair
    Lookup {
        /// Platform key (e.g., linux)
        platform: String,
        /// Architecture key (e.g., x64)
        arch: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Derive record fields from a target triple
    Parse {
        /// Target triple (e.g., armv7-unknown-linux-gnueabihf)
        triple: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show the table key and variants of this machine
    Host,
    /// Write the whole table as a document
    Export {
        #[arg(long, value_enum, default_value_t = DocumentFormat::Json)]
        format: DocumentFormat,
    },
    /// Validate a JSON or TOML table document
    Validate {
        /// Path to a .json or .toml document
        path: PathBuf,
    },
}

/// Output format for single lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Serialization format for whole-table export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    Json,
    Toml,
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Initialize the logger. `RUST_LOG` overrides the default `warn` filter.
fn init_logger() {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{}: {}",
                record.level().to_string().to_lowercase(),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::List { platform } => commands::table::list(platform.as_deref()),
        Commands::Lookup {
            platform,
            arch,
            format,
        } => commands::table::lookup(&platform, &arch, format),
        Commands::Parse { triple, format } => commands::triple::parse(&triple, format),
        Commands::Host => commands::table::host(),
        Commands::Export { format } => commands::table::export(format),
        Commands::Validate { path } => commands::validate::run(&path),
    }
}
