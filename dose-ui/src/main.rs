use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use dose_core::db::StoreConfig;
use dose_ui::app;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Dosage calculator for homemade herb infusions.
///
/// Opens the configured store, runs the age verification gate, and starts
/// an interactive calculator session.
#[derive(Debug, Parser)]
struct Cli {
    /// Storage backend to use.
    #[arg(long, default_value = "json")]
    backend: String,

    /// Store path. For the JSON backend this is a file path
    /// (e.g. `dosage.json`); it is created on the first save.
    #[arg(long, default_value = "dosage.json")]
    store: String,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let store_config = StoreConfig {
        backend: cli.backend,
        path: cli.store,
    };

    debug!("opening {} store", store_config.backend);
    let registry = app::build_registry();
    let repo = registry.create(&store_config).await?;

    app::run(repo).await
}
