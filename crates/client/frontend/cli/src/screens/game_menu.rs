//! Party menu: pick an action, then the member it applies to.

use client_frontend_core::{
    Canvas, Colour, GameContext, Key, Keyboard, RenderError, Screen, Selector, SelectorLayout,
    Transitions,
};

use super::common::{self, MemberSummary};
use super::{EquipmentMenuScreen, ItemMenuScreen, StatusScreen};

const MENU: [&str; 7] = ["Items", "Magic", "Equipment", "Stats", "Order", "Save", "Exit"];

#[derive(Clone, Debug, PartialEq, Eq)]
enum Action {
    Items,
    Equipment,
    Stats,
    /// Swap positions; holds the first member once chosen.
    Order(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Focus {
    Menu,
    Members(Action),
}

pub struct GameMenuScreen {
    menu: Selector<&'static str>,
    members: Selector<MemberSummary>,
    focus: Focus,
    exiting: bool,
}

impl Default for GameMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GameMenuScreen {
    pub fn new() -> Self {
        let mut members = Selector::new(
            Vec::new(),
            SelectorLayout::list(26, 3).with_columns(2).with_spacing(24, 6),
        )
        .with_cell_renderer(|canvas, x, y, member: &MemberSummary| {
            common::draw_member_card(canvas, x, y, member)
        });
        members.hide_cursor();

        Self {
            menu: Selector::new(MENU.to_vec(), SelectorLayout::list(4, 3)),
            members,
            focus: Focus::Menu,
            exiting: false,
        }
    }

    fn focus_members(&mut self, action: Action) {
        self.focus = Focus::Members(action);
        self.menu.hide_cursor();
        self.members.reset_cursor();
        self.members.show_cursor();
    }

    fn focus_menu(&mut self) {
        self.focus = Focus::Menu;
        self.members.hide_cursor();
        self.menu.show_cursor();
    }

    fn choose_entry(&mut self, index: usize, ctx: &mut GameContext) {
        match MENU.get(index).copied() {
            Some("Items") => self.focus_members(Action::Items),
            Some("Equipment") => self.focus_members(Action::Equipment),
            Some("Stats") => self.focus_members(Action::Stats),
            Some("Order") => self.focus_members(Action::Order(None)),
            Some("Exit") => self.exiting = true,
            Some(entry) => ctx.messages.warn(format!("{entry} is not available.")),
            None => {}
        }
    }

    fn choose_member(
        &mut self,
        action: Action,
        member: MemberSummary,
        ctx: &mut GameContext,
        transitions: &mut Transitions<GameContext>,
    ) {
        match action {
            Action::Items => transitions.push(ItemMenuScreen::new(member.id)),
            Action::Equipment => transitions.push(EquipmentMenuScreen::new(member.id)),
            Action::Stats => transitions.push(StatusScreen::new(member.id)),
            Action::Order(None) => {
                ctx.notify(format!("Swap {} with whom?", member.name));
                self.focus = Focus::Members(Action::Order(Some(member.id)));
                return;
            }
            Action::Order(Some(first)) => {
                if first != member.id {
                    match ctx.party.swap_positions(&first, &member.id) {
                        Ok(()) => {
                            let first_name = ctx
                                .party
                                .member(&first)
                                .map_or_else(|| first.clone(), |actor| actor.name().to_owned());
                            ctx.notify(format!("{first_name} and {} swap places.", member.name));
                        }
                        Err(error) => ctx.report("Order", &error),
                    }
                }
            }
        }
        self.focus_menu();
    }
}

impl Screen<GameContext> for GameMenuScreen {
    fn name(&self) -> &str {
        "game_menu"
    }

    fn on_enter(&mut self, ctx: &mut GameContext) {
        self.members.set_data(common::member_rows(&ctx.party));
    }

    fn process_inputs(
        &mut self,
        keyboard: &Keyboard,
        ctx: &mut GameContext,
        transitions: &mut Transitions<GameContext>,
    ) {
        let back = keyboard.is_key_just_pressed(Key::Backspace);
        match self.focus.clone() {
            Focus::Menu => {
                if back {
                    self.exiting = true;
                } else if let Some(index) = self.menu.process_inputs(keyboard, &mut ()) {
                    self.choose_entry(index, ctx);
                }
            }
            Focus::Members(action) => {
                if back {
                    self.focus_menu();
                    return;
                }
                let chosen = self
                    .members
                    .process_inputs(keyboard, &mut ())
                    .and_then(|index| self.members.data().get(index).cloned());
                if let Some(member) = chosen {
                    self.choose_member(action, member, ctx, transitions);
                }
            }
        }
    }

    fn update(&mut self, ctx: &mut GameContext, _transitions: &mut Transitions<GameContext>) {
        self.members.set_data(common::member_rows(&ctx.party));
    }

    fn draw(&self, ctx: &GameContext, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        common::draw_frame(canvas, ctx, "Party")?;
        self.menu.draw(canvas)?;
        common::draw_gold(canvas, 4, 12, ctx.party.gold())?;
        canvas.write(
            4,
            13,
            &format!("Time {}", ctx.clock.readout()),
            Colour::White,
        )?;
        self.members.draw(canvas)?;

        let hint = match &self.focus {
            Focus::Menu => "[W/S] Move  [Space] Select  [Backspace] Close",
            Focus::Members(Action::Order(Some(_))) => {
                "Choose the second member  [Backspace] Cancel"
            }
            Focus::Members(_) => "[W/A/S/D] Member  [Space] Select  [Backspace] Back",
        };
        canvas.write(4, canvas.height().saturating_sub(3), hint, Colour::Grey)
    }

    fn exit(&self) -> bool {
        self.exiting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{context, frame, press_each};
    use client_frontend_core::MessageLevel;
    use game_core::Actor;

    fn screen(ctx: &mut GameContext) -> GameMenuScreen {
        let mut screen = GameMenuScreen::new();
        screen.on_enter(ctx);
        screen
    }

    #[test]
    fn shows_members_and_gold() {
        let mut ctx = context();
        let mut menu = screen(&mut ctx);
        let frame = frame(&mut menu, &mut ctx, &[]);

        for name in ["Player", "Sophia", "Garrick", "Nyx"] {
            assert!(frame.canvas.contains(name), "{name} missing");
        }
        assert!(frame.canvas.contains("Gold: 500"));
        assert!(frame.canvas.contains("Time 00:00:00"));
    }

    #[test]
    fn actions_push_member_screens() {
        let mut ctx = context();
        let mut menu = screen(&mut ctx);

        let items = press_each(&mut menu, &mut ctx, &[Key::Space, Key::Space]);
        assert_eq!(items.pushed(), ["item_menu"]);

        let keys = [Key::S, Key::S, Key::Space, Key::D, Key::Space];
        let equipment = press_each(&mut menu, &mut ctx, &keys);
        assert_eq!(equipment.pushed(), ["equipment_menu"]);

        let stats = press_each(&mut menu, &mut ctx, &[Key::S, Key::Space, Key::Space]);
        assert_eq!(stats.pushed(), ["status"]);
    }

    #[test]
    fn order_swaps_two_members() {
        let mut ctx = context();
        let mut menu = screen(&mut ctx);

        let keys = [Key::S, Key::S, Key::S, Key::S, Key::Space, Key::Space, Key::D, Key::Space];
        press_each(&mut menu, &mut ctx, &keys);

        let lineup: Vec<&str> = ctx.party.active_members().into_iter().map(Actor::id).collect();
        assert_eq!(lineup, ["sophia", "player", "garrick", "nyx"]);
        assert_eq!(
            ctx.messages.latest().map(|m| m.text.as_str()),
            Some("Player and Sophia swap places.")
        );
    }

    #[test]
    fn magic_and_save_are_unavailable() {
        let mut ctx = context();
        let mut menu = screen(&mut ctx);

        press_each(&mut menu, &mut ctx, &[Key::S, Key::Space]);
        let message = ctx.messages.latest().unwrap();
        assert_eq!(message.text, "Magic is not available.");
        assert_eq!(message.level, MessageLevel::Warning);
        assert!(!menu.exit());
    }

    #[test]
    fn backspace_and_exit_entry() {
        let mut ctx = context();
        let mut menu = screen(&mut ctx);

        press_each(&mut menu, &mut ctx, &[Key::Space, Key::Backspace]);
        assert!(!menu.exit());
        frame(&mut menu, &mut ctx, &[Key::Backspace]);
        assert!(menu.exit());

        let mut menu = screen(&mut ctx);
        let keys = [Key::S, Key::S, Key::S, Key::S, Key::S, Key::S, Key::Space];
        press_each(&mut menu, &mut ctx, &keys);
        assert!(menu.exit());
    }
}
