//! Cross-frontend primitives for presenting the game.
//!
//! Houses the grid selector, the screen state machine, the render and input
//! collaborator contracts, and the explicit [`GameContext`] every screen is
//! driven with. Nothing here knows about a terminal; concrete frontends
//! present a [`TextBuffer`] and feed a [`Keyboard`].
pub mod config;
pub mod context;
pub mod frontend;
pub mod input;
pub mod message;
pub mod render;
pub mod selector;
pub mod state;
pub mod typewriter;

pub use config::{CanvasConfig, DialogConfig, FrontendConfig, MessageConfig};
pub use context::{FrameClock, GameContext};
pub use frontend::Frontend;
pub use input::{Key, KeyState, KeyTransition, Keyboard};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use render::{Canvas, Cell, Colour, RenderError, TextBuffer};
pub use selector::{CellRenderer, SelectionHandler, Selector, SelectorLayout};
pub use state::{Screen, StateError, StateMachine, Transition, Transitions};
pub use typewriter::{Typewriter, wrap_text};
