use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pcb_design::api::{create_router_with_config, AppState};
use pcb_design::assistant::SuggestionEngine;
use pcb_design::check::{load_design, CheckReport};
use pcb_design::config::ServerConfig;
use pcb_design::drc::DrcEngine;
use pcb_design::store::DesignStore;

#[derive(Parser)]
#[command(name = "pcb-design")]
#[command(about = "Beginner-friendly PCB design backend with design rule checks")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Address to bind (overrides PCB_DESIGN_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port for HTTP API (overrides PCB_DESIGN_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run the design rule check and assistant on a design JSON file
    Check {
        /// Path to the design file
        path: PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Initialize tracing with output to stderr (for check mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "pcb_design=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Check mode prints its report on stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router_with_config(AppState::new(DesignStore::new()), &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("PCB design server listening on http://{}", config.bind_addr());

    axum::serve(listener, app).await?;
    Ok(())
}

fn check(path: PathBuf, json: bool) -> anyhow::Result<ExitCode> {
    let design = load_design(&path)?;
    let report = CheckReport::run(
        &design,
        &DrcEngine::with_default_checks(),
        &SuggestionEngine::with_default_rules(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Check { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            let mut config = ServerConfig::from_env();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
        Some(Commands::Check { path, json }) => return check(path, json),
        None => {
            // Default: start server
            serve(ServerConfig::from_env()).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
