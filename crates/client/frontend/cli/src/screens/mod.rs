//! Menu screens driven by the state machine.
//!
//! Every screen draws only into the canvas it is handed and reads input only
//! through the keyboard. Backspace steps back one focus level; on a screen's
//! top level it leaves the screen.

mod common;
mod equipment_menu;
mod game_menu;
mod item_menu;
mod main_menu;
mod shop;
mod status;

pub use common::{MemberSummary, member_rows};
pub use equipment_menu::EquipmentMenuScreen;
pub use game_menu::GameMenuScreen;
pub use item_menu::ItemMenuScreen;
pub use main_menu::MainScreen;
pub use shop::ShopScreen;
pub use status::StatusScreen;

#[cfg(test)]
pub(crate) mod test_support {
    use client_frontend_core::{
        FrontendConfig, GameContext, Key, Keyboard, Screen, TextBuffer, Transition, Transitions,
    };
    use game_content::ContentFactory;

    /// Context over the bundled content and starting party.
    pub fn context() -> GameContext {
        let factory = ContentFactory::bundled();
        let registry = factory.load_registry().unwrap();
        let party = factory.load_party(&registry).unwrap();
        GameContext::new(party, Box::new(registry), FrontendConfig::default())
    }

    /// Result of driving a screen through one frame outside the machine.
    pub struct Frame {
        pub transitions: Transitions<GameContext>,
        pub canvas: TextBuffer,
    }

    impl Frame {
        pub fn pushed(&self) -> Vec<String> {
            self.transitions
                .iter()
                .filter_map(|transition| match transition {
                    Transition::Push(screen) => Some(screen.name().to_owned()),
                    Transition::Pop => None,
                })
                .collect()
        }
    }

    /// Inputs, update and draw for one frame with `keys` just pressed.
    pub fn frame(screen: &mut dyn Screen<GameContext>, ctx: &mut GameContext, keys: &[Key]) -> Frame {
        let mut transitions = Transitions::new();
        screen.process_inputs(&Keyboard::pressed(keys), ctx, &mut transitions);
        screen.update(ctx, &mut transitions);

        let config = ctx.config.canvas;
        let mut canvas = TextBuffer::new(config.width, config.height);
        screen.draw(ctx, &mut canvas).unwrap();
        Frame {
            transitions,
            canvas,
        }
    }

    /// One frame per key, returning the last.
    pub fn press_each(
        screen: &mut dyn Screen<GameContext>,
        ctx: &mut GameContext,
        keys: &[Key],
    ) -> Frame {
        let mut last = frame(screen, ctx, &[]);
        for key in keys {
            last = frame(screen, ctx, &[*key]);
        }
        last
    }
}
