//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use client_frontend_core::FrontendConfig;
use game_core::{ContentOracle, Party};

/// Builder for constructing a Client with proper validation.
///
/// Content, party, and frontend are required; the frontend configuration
/// falls back to its defaults.
#[derive(Default)]
pub struct ClientBuilder {
    content: Option<Box<dyn ContentOracle>>,
    party: Option<Party>,
    config: Option<FrontendConfig>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content catalogs (required).
    pub fn content(mut self, content: impl ContentOracle + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    /// Set the starting party (required).
    ///
    /// Build it against the same content passed to [`Self::content`].
    pub fn party(mut self, party: Party) -> Self {
        self.party = Some(party);
        self
    }

    /// Set the frontend configuration shared by every screen.
    pub fn config(mut self, config: FrontendConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first required part that was not set.
    pub fn build(self) -> Result<Client> {
        let content = self
            .content
            .context("Content is required. Use .content() to set it.")?;

        let party = self
            .party
            .context("Party is required. Use .party() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            content,
            party,
            config: self.config.unwrap_or_default(),
            frontend,
        })
    }
}
