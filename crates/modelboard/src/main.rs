//! modelboard - terminal console for an ML model library.
//!
//! Seeds the library, then either runs the interactive TUI or, with
//! `--print`, writes the visible page as JSON and exits.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

use modelboard_core::columns::ColumnKey;
use modelboard_core::form::{DraftModel, ModelSink};
use modelboard_core::seed::{DEFAULT_SEED_COUNT, generate_models};
use modelboard_core::table::{DEFAULT_PAGE_SIZE, TableViewModel};
use modelboard_core::tui::App;

/// Terminal console for an ML model library.
#[derive(Parser, Debug)]
#[command(name = "modelboard", about = "ML model library console", version)]
struct Args {
    /// Number of seed records.
    #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
    records: usize,

    /// Rows per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Print the visible page as JSON and exit instead of starting the TUI.
    #[arg(long)]
    print: bool,

    /// Initial search term (matches name or id).
    #[arg(long)]
    search: Option<String>,

    /// Initial sort column key (e.g. modelName, status).
    #[arg(long, value_name = "KEY")]
    sort: Option<ColumnKey>,

    /// With --sort: sort descending.
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Initial page; ignored if out of range.
    #[arg(long)]
    page: Option<usize>,

    /// Write log output to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Accepted drafts are logged as JSON.
struct LogSink;

impl ModelSink for LogSink {
    fn create(&mut self, draft: &DraftModel) {
        match serde_json::to_string(draft) {
            Ok(json) => info!("model created: {}", json),
            Err(e) => info!("model created: {:?} ({})", draft, e),
        }
    }
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Logs go to `log_file` if given, otherwise to stderr when `stderr` is set.
fn init_logging(
    verbose: u8,
    quiet: bool,
    log_file: Option<&PathBuf>,
    stderr: bool,
) -> io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["modelboard", "modelboard_core"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if stderr => builder.with_writer(io::stderr).init(),
        // The TUI owns the terminal.
        None => {}
    }
    Ok(())
}

/// Builds the seeded table and applies the initial search, sort and page.
fn build_table(args: &Args) -> Result<TableViewModel, String> {
    let mut table = TableViewModel::with_page_size(generate_models(args.records), args.page_size)
        .map_err(|e| format!("--page-size: {}", e))?;

    if let Some(term) = &args.search {
        table.set_search_term(term.as_str());
    }
    if let Some(column) = args.sort {
        if !column.is_sortable() {
            return Err(format!("--sort: column '{}' is not sortable", column));
        }
        table.sort_by(column);
        if args.desc {
            table.sort_by(column);
        }
    }
    if let Some(page) = args.page {
        table.go_to_page(page);
        if table.current_page() != page {
            debug!("ignoring out-of-range page {}", page);
        }
    }
    Ok(table)
}

/// Serializes the visible page as pretty JSON.
fn page_json(table: &TableViewModel) -> Result<String, String> {
    serde_json::to_string_pretty(&table.page()).map_err(|e| e.to_string())
}

fn run(args: Args) -> Result<(), String> {
    init_logging(args.verbose, args.quiet, args.log_file.as_ref(), args.print)
        .map_err(|e| format!("log file: {}", e))?;

    let table = build_table(&args)?;

    if args.print {
        let json = page_json(&table)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", json).map_err(|e| e.to_string())?;
        return Ok(());
    }

    App::new(table, Box::new(LogSink))
        .run(Duration::from_millis(250))
        .map_err(|e| format!("terminal: {}", e))
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
