//! Terminal UI frontend for the RPG menu shell.
//!
//! Provides the menu screens driven by the core state machine and a ratatui
//! presentation of their canvas. [`CliFrontend`] implements the
//! [`client_frontend_core::Frontend`] trait; the binary hands it a prepared
//! [`GameContext`](client_frontend_core::GameContext) and the frontend runs
//! until the player quits.

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;
pub mod screens;

pub use app::CliFrontend;
pub use config::{CliConfig, SessionConfig, UiConfig};
pub use input::InputHandler;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
