//! Frame loop: poll input, drive the active screen, present the canvas.
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::CliConfig;
use crate::input::InputHandler;
use crate::presentation::{
    terminal::Tui,
    ui::{self, RenderContext},
};
use client_frontend_core::{
    CanvasConfig, GameContext, Keyboard, StateError, StateMachine, TextBuffer,
};

pub struct EventLoop {
    machine: StateMachine<GameContext>,
    keyboard: Keyboard,
    input: InputHandler,
    canvas: TextBuffer,
    frame_interval: Duration,
    message_panel_height: u16,
}

impl EventLoop {
    pub fn new(
        machine: StateMachine<GameContext>,
        config: &CliConfig,
        canvas: CanvasConfig,
    ) -> Self {
        Self {
            machine,
            keyboard: Keyboard::new(),
            input: InputHandler::new(),
            canvas: TextBuffer::new(canvas.width, canvas.height),
            frame_interval: config.ui.frame_interval,
            message_panel_height: config.ui.message_panel_height,
        }
    }

    /// Run frames until the state stack empties or the user interrupts.
    pub fn run(mut self, terminal: &mut Tui, ctx: &mut GameContext) -> Result<()> {
        let mut last_frame = Instant::now();

        loop {
            let events = self.poll_events()?;
            if events.iter().any(is_interrupt) {
                tracing::info!("interrupted");
                break;
            }

            let now = Instant::now();
            let running = self.step(&events, ctx, now - last_frame);
            last_frame = now;
            if !running {
                break;
            }

            ui::render(
                terminal,
                &RenderContext {
                    canvas: &self.canvas,
                    messages: &ctx.messages,
                    message_panel_height: self.message_panel_height,
                },
            )?;
        }

        tracing::info!(frames = ctx.clock.frame(), "frame loop finished");
        Ok(())
    }

    /// Drive one frame with the key events read during it.
    ///
    /// Returns `false` once there is no screen left to drive.
    fn step(&mut self, events: &[KeyEvent], ctx: &mut GameContext, delta: Duration) -> bool {
        let transitions = self.input.frame_transitions(events);
        self.keyboard.update(&transitions);
        ctx.clock.tick(delta);

        match self.machine.run_frame(&self.keyboard, ctx, &mut self.canvas) {
            Ok(()) => true,
            Err(StateError::EmptyStack) => {
                tracing::info!("state stack empty, stopping");
                false
            }
        }
    }

    /// Wait up to one frame interval for input, then drain whatever queued.
    fn poll_events(&self) -> Result<Vec<KeyEvent>> {
        let mut events = Vec::new();
        if !event::poll(self.frame_interval)? {
            return Ok(events);
        }
        loop {
            if let Event::Key(key) = event::read()? {
                events.push(key);
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(events)
    }
}

fn is_interrupt(event: &KeyEvent) -> bool {
    event.kind == KeyEventKind::Press
        && event.code == KeyCode::Char('c')
        && event.modifiers.contains(KeyModifiers::CONTROL)
}
