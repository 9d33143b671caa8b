use anyhow::{Context, Result};
use ayusandhi::{
    ApiConfig, HistoryStore, HttpScanClient, HttpTerminologyClient, InteractiveSearch,
    ScanHistoryEntry, ScanService, TerminologyService,
    api::scan::display_file_name,
    config::{DEFAULT_SCAN_BASE_URL, DEFAULT_TERMINOLOGY_BASE_URL, DEFAULT_TIMEOUT_SECS,
        default_log_path},
    format_detail, format_history_entry, format_scan_result,
    formatters::format_suggestion_line,
    logging,
};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "ayusandhi",
    version,
    about = "Search NAMASTE Ayurvedic terminology and scan medical documents",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Terminology service base URL
    #[arg(long, env = "AYUSANDHI_API_URL", default_value = DEFAULT_TERMINOLOGY_BASE_URL, global = true)]
    api_url: String,

    /// Document scan service base URL
    #[arg(long, env = "AYUSANDHI_SCAN_URL", default_value = DEFAULT_SCAN_BASE_URL, global = true)]
    scan_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "AYUSANDHI_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout: u64,

    /// Scan history file (default: <data dir>/ayusandhi/scan_history.json)
    #[arg(long, env = "AYUSANDHI_HISTORY_FILE", global = true)]
    history_file: Option<PathBuf>,

    /// Log file used by the interactive UI
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal UI (default)
    Tui,

    /// Search terminology, falling back to a code lookup
    Search {
        query: String,

        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show one record by NAMASTE code
    Lookup {
        code: String,

        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Upload a document (PDF, DOC, DOCX or image) for scanning
    Scan {
        file: PathBuf,

        /// Save the processed report into this directory
        #[arg(short, long)]
        download: Option<PathBuf>,
    },

    /// Show recent scans
    History {
        /// Remove all stored scans
        #[arg(long)]
        clear: bool,

        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a shell completion script
    Completions { shell: Shell },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config = ApiConfig::default()
        .with_terminology_base_url(cli.api_url.as_str())
        .with_scan_base_url(cli.scan_url.as_str())
        .with_timeout(Duration::from_secs(cli.timeout));
    if let Some(path) = &cli.history_file {
        config = config.with_history_path(path);
    }
    let use_color = !cli.no_color;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let log_path = cli.log_file.unwrap_or_else(default_log_path);
            logging::init_file_tracing(&log_path)?;
            info!(api = %config.terminology_base_url, "starting interactive session");

            let mut app = InteractiveSearch::new(&config)?;
            app.run()
        }
        Commands::Search { query, format } => {
            logging::init_tracing();
            run_search(&config, &query, format)
        }
        Commands::Lookup { code, format } => {
            logging::init_tracing();
            run_lookup(&config, &code, format, use_color)
        }
        Commands::Scan { file, download } => {
            logging::init_tracing();
            run_scan(&config, file, download, use_color)
        }
        Commands::History { clear, format } => {
            logging::init_tracing();
            run_history(&config, clear, format, use_color)
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "ayusandhi", &mut io::stdout());
            Ok(())
        }
    }
}

fn run_search(config: &ApiConfig, query: &str, format: OutputFormat) -> Result<()> {
    let client = HttpTerminologyClient::new(config)?;
    let results = client
        .enhanced_search(query.trim())
        .context("Unable to connect to the terminology database")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            if results.is_empty() {
                writeln!(handle, "No results found.")?;
            } else {
                writeln!(handle, "Found {} results:\n", results.len())?;
                for record in &results {
                    writeln!(handle, "{}", format_suggestion_line(record))?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &results)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

fn run_lookup(config: &ApiConfig, code: &str, format: OutputFormat, use_color: bool) -> Result<()> {
    let client = HttpTerminologyClient::new(config)?;
    let record = client
        .lookup(code.trim())
        .with_context(|| format!("Failed to load terminology details for {code}"))?;

    match format {
        OutputFormat::Text => println!("{}", format_detail(&record, use_color)),
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &record)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

fn run_scan(
    config: &ApiConfig,
    file: PathBuf,
    download: Option<PathBuf>,
    use_color: bool,
) -> Result<()> {
    let client = HttpScanClient::new(config)?;
    let file_name = display_file_name(&file);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message(format!("Scanning {file_name}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.upload(&file);
    spinner.finish_and_clear();
    let result = result.with_context(|| format!("Failed to scan {}", file.display()))?;

    println!("{}", format_scan_result(&result, use_color));

    let entry = ScanHistoryEntry::new(&file_name, result);
    let store = HistoryStore::new(config.history_path.clone());
    let mut history = store.load();
    history.push(entry.clone());
    if let Err(e) = store.save(&history) {
        warn!(error = %e, "failed to persist scan history");
    }

    if let Some(dir) = download {
        let destination = dir.join(&entry.file_name);
        let saved = client
            .download(&entry.download_url, &destination)
            .context("Failed to download file")?;
        println!("Saved {}", saved.display());
    }
    Ok(())
}

fn run_history(
    config: &ApiConfig,
    clear: bool,
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let store = HistoryStore::new(config.history_path.clone());

    if clear {
        store.clear()?;
        println!("Scan history cleared");
        return Ok(());
    }

    let history = store.load();
    match format {
        OutputFormat::Text => {
            if history.is_empty() {
                println!("No scans yet.");
            }
            for entry in history.entries() {
                println!("{}", format_history_entry(entry, use_color));
            }
        }
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, history.entries())?;
            writeln!(handle)?;
        }
    }
    Ok(())
}
