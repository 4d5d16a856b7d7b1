use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::EnvFilter;

use prompt_forge::api_server::ApiServer;
use prompt_forge::backend::OllamaClient;
use prompt_forge::config::Config;
use prompt_forge::history::{HistoryQueue, HistoryStore};
use prompt_forge::orchestrator::Orchestrator;
use prompt_forge::templates::TemplateKey;

/// Turn a theme into a model-ready prompt with a local Ollama server
#[derive(Parser)]
#[command(name = "prompt-forge", version)]
#[command(about = "Template-driven prompt generation over a local Ollama server", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default command)
    Serve(ServeArgs),
    /// List the available template keys
    Templates,
    /// Print the instruction a template renders for a theme
    Render {
        /// Template key, e.g. "realistic"
        key: String,
        /// Free-text theme
        theme: String,
    },
}

#[derive(clap::Args, Default)]
struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Base URL of the Ollama server
    #[arg(long)]
    backend_url: Option<String>,

    /// Model used when a request does not name one
    #[arg(long)]
    default_model: Option<String>,

    /// JSON file that stores generation history
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Directory of static UI files to serve
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl ServeArgs {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(url) = self.backend_url {
            config.backend_url = url;
        }
        if let Some(model) = self.default_model {
            config.default_model = model;
        }
        if let Some(file) = self.history_file {
            config.history_file = file;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = Some(dir);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(cli.verbose >= 2)
        .init();

    debug!("prompt-forge started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Some(Commands::Serve(args)) => run_serve(cli.config, args).await,
        Some(Commands::Templates) => {
            for key in TemplateKey::ALL {
                println!("{key}");
            }
            Ok(())
        }
        Some(Commands::Render { key, theme }) => match key.parse::<TemplateKey>() {
            Ok(key) => {
                println!("{}", key.render(&theme));
                Ok(())
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
        },
        None => run_serve(cli.config, ServeArgs::default()).await,
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_serve(config_path: Option<PathBuf>, args: ServeArgs) -> anyhow::Result<()> {
    let mut config = Config::load(config_path.as_deref())?;
    args.apply(&mut config);
    debug!("Effective configuration: {:?}", config);

    info!(
        "Using Ollama at {} (default model {})",
        config.backend_url, config.default_model
    );
    info!("History file: {}", config.history_file.display());

    let backend = Arc::new(OllamaClient::new(config.backend_url.clone()));
    let history = HistoryQueue::new(HistoryStore::new(config.history_file.clone()));
    let orchestrator = Arc::new(
        Orchestrator::new(backend, history.clone())
            .with_default_model(config.default_model.clone()),
    );

    let served = ApiServer::new(orchestrator)
        .with_static_dir(config.static_dir.clone())
        .start(&config.bind_addr())
        .await;

    // Appends queued by the last requests must reach disk before the runtime stops.
    if let Err(e) = history.shutdown().await {
        warn!("History writes may be incomplete: {}", e);
    }

    served
}
