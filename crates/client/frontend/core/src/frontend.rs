//! Trait describing a runnable client front-end.
use anyhow::Result;

use crate::context::GameContext;

/// Frontend abstraction for UI layers.
///
/// A frontend owns its presentation surface and input source, and drives the
/// screen stack against the context it is handed until the player quits.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Example Implementation
///
/// ```no_run
/// use anyhow::Result;
/// use client_frontend_core::{Frontend, GameContext};
///
/// struct Headless;
///
/// impl Frontend for Headless {
///     fn run(&mut self, ctx: &mut GameContext) -> Result<()> {
///         ctx.notify("nothing to show");
///         Ok(())
///     }
/// }
/// ```
pub trait Frontend: Send {
    /// Run the frontend loop. Blocks until the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    fn run(&mut self, ctx: &mut GameContext) -> Result<()>;
}
