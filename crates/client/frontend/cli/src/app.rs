//! Terminal frontend: owns the terminal for the duration of a session.
use anyhow::Result;

use crate::config::CliConfig;
use crate::presentation::{
    event_loop::EventLoop,
    terminal::{self, TerminalGuard},
};
use crate::screens::MainScreen;
use client_frontend_core::{Frontend, GameContext, StateMachine};

pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    fn initial_states(&self, ctx: &GameContext) -> StateMachine<GameContext> {
        let mut machine = StateMachine::new();
        machine.push_state(Box::new(MainScreen::new(
            self.config.session.default_shop.clone(),
            &ctx.config.dialog,
        )));
        machine
    }
}

impl Frontend for CliFrontend {
    fn run(&mut self, ctx: &mut GameContext) -> Result<()> {
        let machine = self.initial_states(ctx);
        let event_loop = EventLoop::new(machine, &self.config, ctx.config.canvas);

        let _guard = TerminalGuard;
        let mut terminal = terminal::init()?;
        terminal.clear()?;

        tracing::info!(
            width = ctx.config.canvas.width,
            height = ctx.config.canvas.height,
            "terminal ready"
        );
        event_loop.run(&mut terminal, ctx)
    }
}
