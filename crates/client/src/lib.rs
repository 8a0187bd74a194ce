//! Top-level client wiring content, the starting party, and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Content (catalogs, shops, rules configuration)
//!   ├─→ Party (starting lineup, inventory, gold)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The client owns nothing the frontend cannot reach: [`Client::run`] moves
//! content and party into a [`GameContext`] and lends it to the frontend
//! until the user quits.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_frontend_core::{FrontendConfig, GameContext};
use game_core::{ContentOracle, Party};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects content, party, and frontend
/// 2. `Client::run()` assembles the shared [`GameContext`]
/// 3. `Client::run()` transfers control to the frontend (blocking)
pub struct Client {
    content: Box<dyn ContentOracle>,
    party: Party,
    config: FrontendConfig,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails.
    pub fn run(self) -> Result<()> {
        let Self {
            content,
            party,
            config,
            mut frontend,
        } = self;

        let mut ctx = GameContext::new(party, content, config);
        tracing::info!(
            members = ctx.party.members().len(),
            gold = ctx.party.gold(),
            "game context ready"
        );

        let result = frontend.run(&mut ctx);

        tracing::info!(
            frames = ctx.clock.frame(),
            gold = ctx.party.gold(),
            "session finished"
        );
        result
    }
}
