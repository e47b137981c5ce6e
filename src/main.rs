use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use myprompt_cli::prefs::{FilePrefs, MemoryPrefs, PreferenceStore};
use myprompt_cli::{App, Config};

#[derive(Parser)]
#[command(name = "myprompt")]
#[command(about = "My.Prompt terminal chat client", long_about = None)]
struct Cli {
    /// Chat backend endpoint (defaults to the config file, then http://localhost:5000)
    #[arg(long)]
    endpoint: Option<String>,

    /// Keep preferences in memory only
    #[arg(long)]
    no_persist: bool,

    /// Run in verbose mode
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load();
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    if cli.verbose {
        println!("Connecting to {}", config.endpoint);
    }

    let prefs: Box<dyn PreferenceStore> = if cli.no_persist {
        Box::new(MemoryPrefs::new())
    } else {
        Box::new(FilePrefs::open())
    };

    let mut app = App::new(&config, prefs)?;
    app.initialize();
    app.run().await
}
