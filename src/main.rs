use anyhow::Context;
use clap::{Parser, Subcommand};
use everybot_helpers::app::{handle_fatal_error, init_logging, AppConfig};
use everybot_helpers::archive::create_zip;
use everybot_helpers::empty::empty;
use everybot_helpers::fs::ensure_dir;
use everybot_helpers::http::HttpGetter;
use everybot_helpers::random::{random_digits, random_string};
use everybot_helpers::upload::{UploadStore, UploadedFile};
use everybot_helpers::Error;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Everyday helpers for the everybot web application
#[derive(Parser)]
#[command(name = "everybot-helpers")]
#[command(about = "Identifiers, emptiness checks, zip, uploads and proxied HTTP", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file (defaults to EVERYBOT_* env vars)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random string of decimal digits
    Digits {
        /// Number of digits
        length: usize,
    },
    /// Print a random string of ASCII letters
    Alpha {
        /// Number of letters
        length: usize,
    },
    /// Report whether a JSON value is empty
    Empty {
        /// JSON value, e.g. '""', '0', '[]', '{"a":1}'
        value: String,
    },
    /// Fetch a URL and write the body to stdout
    Get {
        /// Target URL
        url: String,
        /// Proxy URL (defaults to the configured proxy, else direct)
        #[arg(long)]
        proxy: Option<String>,
    },
    /// Create a zip archive holding the given files
    Zip {
        /// Archive to create
        archive: PathBuf,
        /// Files to add, stored under their base names
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Create a directory if it does not exist
    Mkdir {
        /// Directory to ensure
        dir: PathBuf,
    },
    /// Store a local file in the upload directory
    Upload {
        /// File to store
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::new(cli.verbose, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e, cli.verbose),
    };
    init_logging(&config);

    if let Err(e) = run(cli.command, &config).await {
        handle_fatal_error(e, config.verbose);
    }
}

async fn run(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Commands::Digits { length } => println!("{}", random_digits(length)),
        Commands::Alpha { length } => println!("{}", random_string(length)),
        Commands::Empty { value } => {
            let value: serde_json::Value = serde_json::from_str(&value)
                .map_err(|e| Error::Config(format!("Value is not valid JSON: {e}")))?;
            println!("{}", empty(&value));
        }
        Commands::Get { url, proxy } => {
            let proxy = proxy.or_else(|| config.helpers.proxy.clone());
            debug!("Using proxy: {:?}", proxy);

            let getter = HttpGetter::new(proxy.as_deref(), config.helpers.http_timeout)?;
            let body = getter
                .get(&url)
                .await
                .with_context(|| format!("Failed to fetch {url}"))?;
            std::io::stdout().write_all(&body)?;
        }
        Commands::Zip { archive, files } => {
            create_zip(&archive, &files)
                .with_context(|| format!("Failed to create {}", archive.display()))?;
            println!("{}", archive.display());
        }
        Commands::Mkdir { dir } => {
            ensure_dir(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        Commands::Upload { file } => {
            let store = UploadStore::from_config(&config.helpers)?;
            let upload = UploadedFile::from_path(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let stored = store.save(&upload).await?;
            println!("{}", stored.display());
        }
    }

    Ok(())
}
