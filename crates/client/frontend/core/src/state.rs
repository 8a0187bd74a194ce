//! Stack of modal screens.
//!
//! Only the top screen is driven each frame. A pushed screen's `on_enter`
//! runs at the start of its first frame; `on_exit` runs when it is popped.
//! Screens ask for pushes and pops through [`Transitions`], which the machine
//! applies after the frame completes.

use std::fmt;

use game_core::{ErrorSeverity, GameError};

use crate::input::Keyboard;
use crate::render::{Canvas, RenderError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("the state stack is empty")]
    EmptyStack,
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyStack => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyStack => "STATE_EMPTY_STACK",
        }
    }
}

/// A modal screen driven by the [`StateMachine`].
///
/// `C` is the game context passed explicitly into every call.
pub trait Screen<C> {
    /// Name used in logs.
    fn name(&self) -> &str;

    fn on_enter(&mut self, _ctx: &mut C) {}

    fn on_exit(&mut self, _ctx: &mut C) {}

    fn process_inputs(&mut self, keyboard: &Keyboard, ctx: &mut C, transitions: &mut Transitions<C>);

    fn update(&mut self, _ctx: &mut C, _transitions: &mut Transitions<C>) {}

    fn draw(&self, ctx: &C, canvas: &mut dyn Canvas) -> Result<(), RenderError>;

    /// Whether the screen wants to be popped at the end of this frame.
    fn exit(&self) -> bool;
}

pub enum Transition<C> {
    Push(Box<dyn Screen<C>>),
    Pop,
}

impl<C> fmt::Debug for Transition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(screen) => f.debug_tuple("Push").field(&screen.name()).finish(),
            Self::Pop => f.write_str("Pop"),
        }
    }
}

/// Transitions requested during one frame, applied in order afterwards.
pub struct Transitions<C> {
    queue: Vec<Transition<C>>,
}

impl<C> Default for Transitions<C> {
    fn default() -> Self {
        Self { queue: Vec::new() }
    }
}

impl<C> fmt::Debug for Transitions<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.queue).finish()
    }
}

impl<C> Transitions<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, screen: impl Screen<C> + 'static) {
        self.queue.push(Transition::Push(Box::new(screen)));
    }

    pub fn push_boxed(&mut self, screen: Box<dyn Screen<C>>) {
        self.queue.push(Transition::Push(screen));
    }

    pub fn pop(&mut self) {
        self.queue.push(Transition::Pop);
    }

    pub fn has_pop(&self) -> bool {
        self.queue.iter().any(|t| matches!(t, Transition::Pop))
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transition<C>> {
        self.queue.iter()
    }

    fn drain(&mut self) -> std::vec::Drain<'_, Transition<C>> {
        self.queue.drain(..)
    }
}

struct Entry<C> {
    screen: Box<dyn Screen<C>>,
    entered: bool,
}

/// Ordered stack of screens; the last element is active.
pub struct StateMachine<C> {
    stack: Vec<Entry<C>>,
    transitions: Transitions<C>,
}

impl<C> Default for StateMachine<C> {
    fn default() -> Self {
        Self {
            stack: Vec::new(),
            transitions: Transitions::new(),
        }
    }
}

impl<C> StateMachine<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `screen` the new top. Its `on_enter` runs on its next frame.
    pub fn push_state(&mut self, screen: Box<dyn Screen<C>>) {
        tracing::debug!(screen = screen.name(), depth = self.stack.len() + 1, "push state");
        self.stack.push(Entry {
            screen,
            entered: false,
        });
    }

    /// Run `on_exit` on the top screen and remove it.
    pub fn pop_state(&mut self, ctx: &mut C) -> Result<(), StateError> {
        let mut entry = self.stack.pop().ok_or(StateError::EmptyStack)?;
        tracing::debug!(screen = entry.screen.name(), depth = self.stack.len(), "pop state");
        entry.screen.on_exit(ctx);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn active_name(&self) -> Option<&str> {
        self.stack.last().map(|entry| entry.screen.name())
    }

    /// Drive the active screen through one frame.
    ///
    /// Order: pending `on_enter`, `process_inputs`, `update`, `draw`, then
    /// the self-requested pop and queued transitions. An empty stack is an
    /// error and no screen is touched.
    pub fn run_frame(
        &mut self,
        keyboard: &Keyboard,
        ctx: &mut C,
        canvas: &mut dyn Canvas,
    ) -> Result<(), StateError> {
        let entry = self.stack.last_mut().ok_or(StateError::EmptyStack)?;

        if !entry.entered {
            entry.entered = true;
            entry.screen.on_enter(ctx);
        }
        entry.screen.process_inputs(keyboard, ctx, &mut self.transitions);
        entry.screen.update(ctx, &mut self.transitions);

        canvas.clear();
        if let Err(error) = entry.screen.draw(ctx, canvas) {
            tracing::error!(screen = entry.screen.name(), %error, "draw failed");
        }

        if entry.screen.exit() && !self.transitions.has_pop() {
            self.pop_state(ctx)?;
        }
        self.apply_transitions(ctx);
        Ok(())
    }

    fn apply_transitions(&mut self, ctx: &mut C) {
        let queued: Vec<Transition<C>> = self.transitions.drain().collect();
        for transition in queued {
            match transition {
                Transition::Push(screen) => self.push_state(screen),
                Transition::Pop => {
                    if let Err(error) = self.pop_state(ctx) {
                        tracing::warn!(%error, "queued pop ignored");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::render::{Colour, TextBuffer};

    /// Records every call into the shared log.
    struct Probe {
        name: &'static str,
        exit_after_input: bool,
        exiting: bool,
        push_on_space: Option<&'static str>,
        pop_on_enter: bool,
    }

    impl Probe {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                exit_after_input: false,
                exiting: false,
                push_on_space: None,
                pop_on_enter: false,
            }
        }
    }

    impl Screen<Vec<String>> for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn on_enter(&mut self, log: &mut Vec<String>) {
            log.push(format!("{}:enter", self.name));
        }

        fn on_exit(&mut self, log: &mut Vec<String>) {
            log.push(format!("{}:exit", self.name));
        }

        fn process_inputs(
            &mut self,
            keyboard: &Keyboard,
            log: &mut Vec<String>,
            transitions: &mut Transitions<Vec<String>>,
        ) {
            log.push(format!("{}:input", self.name));
            if keyboard.is_key_just_pressed(Key::Space) {
                if let Some(name) = self.push_on_space {
                    transitions.push(Probe::new(name));
                }
            }
            if keyboard.is_key_just_pressed(Key::Enter) && self.pop_on_enter {
                transitions.pop();
            }
            if self.exit_after_input {
                self.exiting = true;
            }
        }

        fn update(&mut self, log: &mut Vec<String>, _: &mut Transitions<Vec<String>>) {
            log.push(format!("{}:update", self.name));
        }

        fn draw(&self, _: &Vec<String>, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
            canvas.write(0, 0, self.name, Colour::White)
        }

        fn exit(&self) -> bool {
            self.exiting
        }
    }

    fn frame(
        machine: &mut StateMachine<Vec<String>>,
        keys: &[Key],
        log: &mut Vec<String>,
    ) -> Result<TextBuffer, StateError> {
        let mut buffer = TextBuffer::new(10, 1);
        machine.run_frame(&Keyboard::pressed(keys), log, &mut buffer)?;
        Ok(buffer)
    }

    #[test]
    fn frame_runs_lifecycle_in_order() {
        let mut machine: StateMachine<Vec<String>> = StateMachine::new();
        machine.push_state(Box::new(Probe::new("main")));
        let mut log = Vec::new();

        let buffer = frame(&mut machine, &[], &mut log).unwrap();
        assert_eq!(log, ["main:enter", "main:input", "main:update"]);
        assert_eq!(buffer.row_text(0), "main");

        log.clear();
        frame(&mut machine, &[], &mut log).unwrap();
        assert_eq!(log, ["main:input", "main:update"]);
    }

    #[test]
    fn only_the_top_screen_is_driven() {
        let mut machine: StateMachine<Vec<String>> = StateMachine::new();
        let mut main = Probe::new("main");
        main.push_on_space = Some("shop");
        machine.push_state(Box::new(main));
        let mut log = Vec::new();

        frame(&mut machine, &[Key::Space], &mut log).unwrap();
        assert_eq!(machine.len(), 2);
        assert_eq!(machine.active_name(), Some("shop"));
        assert!(!log.contains(&"shop:enter".to_owned()));

        log.clear();
        let buffer = frame(&mut machine, &[], &mut log).unwrap();
        assert_eq!(log, ["shop:enter", "shop:input", "shop:update"]);
        assert_eq!(buffer.row_text(0), "shop");
    }

    #[test]
    fn exit_flag_pops_after_the_frame() {
        let mut machine: StateMachine<Vec<String>> = StateMachine::new();
        machine.push_state(Box::new(Probe::new("main")));
        let mut menu = Probe::new("menu");
        menu.exit_after_input = true;
        machine.push_state(Box::new(menu));
        let mut log = Vec::new();

        frame(&mut machine, &[], &mut log).unwrap();
        assert_eq!(log, ["menu:enter", "menu:input", "menu:update", "menu:exit"]);
        assert_eq!(machine.active_name(), Some("main"));
    }

    #[test]
    fn queued_pop_is_not_doubled_by_exit_flag() {
        let mut machine: StateMachine<Vec<String>> = StateMachine::new();
        machine.push_state(Box::new(Probe::new("main")));
        let mut menu = Probe::new("menu");
        menu.exit_after_input = true;
        menu.pop_on_enter = true;
        machine.push_state(Box::new(menu));
        let mut log = Vec::new();

        frame(&mut machine, &[Key::Enter], &mut log).unwrap();
        assert_eq!(machine.len(), 1);
    }

    #[test]
    fn empty_stack_halts_without_screen_calls() {
        let mut machine: StateMachine<Vec<String>> = StateMachine::new();
        let mut main = Probe::new("main");
        main.exit_after_input = true;
        machine.push_state(Box::new(main));
        let mut log = Vec::new();

        frame(&mut machine, &[], &mut log).unwrap();
        assert!(machine.is_empty());

        log.clear();
        assert_eq!(frame(&mut machine, &[], &mut log).unwrap_err(), StateError::EmptyStack);
        assert!(log.is_empty());
    }

    #[test]
    fn popping_empty_stack_is_an_error() {
        let mut machine: StateMachine<Vec<String>> = StateMachine::new();
        assert_eq!(machine.pop_state(&mut Vec::new()), Err(StateError::EmptyStack));
        assert_eq!(StateError::EmptyStack.severity(), ErrorSeverity::Fatal);
    }
}
