//! Party and shop management game client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Content (catalogs and shops) via ContentFactory
//! 2. The starting party built against that content
//! 3. Frontend (UI) - CLI, GUI, etc.
//!
//! All components are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Bundled content
//! cargo run -p trpg-client
//!
//! # Custom content directory, dialog revealed instantly
//! TRPG_DATA_DIR=./my-data TRPG_SKIP_DIALOG=1 cargo run -p trpg-client
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use game_content::ContentFactory;
    use trpg_client::Client;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let log_path = logging::setup_logging(cli_config.session.session_id.as_deref())?;

    tracing::info!("Starting client");
    tracing::info!("Log file: {}", log_path.display());

    // 3. Load content and the starting party
    let factory = match &cli_config.session.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    tracing::debug!(data_dir = %factory.data_dir().display(), "loading content");
    let registry = factory.load_registry()?;
    let party = factory.load_party(&registry)?;

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(cli_config);

    // 5. Build and run
    let client = Client::builder()
        .content(registry)
        .party(party)
        .config(frontend_config)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
