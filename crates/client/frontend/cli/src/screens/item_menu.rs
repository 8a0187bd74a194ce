//! Use consumables on one party member.

use client_frontend_core::{
    Canvas, Colour, GameContext, Key, Keyboard, RenderError, Screen, Selector, SelectorLayout,
    Transitions,
};
use game_core::{ItemEffect, Party};

use super::common::{self, MemberSummary};

const MENU: [&str; 2] = ["Items", "Key Items"];

/// One inventory stack as listed by the item screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRow {
    /// Position in the party inventory.
    pub index: usize,
    pub name: String,
    pub description: String,
    pub count: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Menu,
    List,
}

pub struct ItemMenuScreen {
    member: String,
    menu: Selector<&'static str>,
    items: Selector<ItemRow, GameContext>,
    focus: Focus,
    key_items: bool,
    exiting: bool,
}

impl ItemMenuScreen {
    pub fn new(member: impl Into<String>) -> Self {
        let member = member.into();
        let target = member.clone();

        let mut items = Selector::new(
            Vec::new(),
            SelectorLayout::list(6, 9).with_columns(2).with_spacing(32, 1),
        )
        .with_cell_renderer(|canvas, x, y, row: &ItemRow| {
            canvas.write(
                x,
                y,
                &format!("{:<22}x{:>2}", common::fit(&row.name, 22), row.count),
                Colour::White,
            )
        })
        .with_selection_handler(move |index, rows: &[ItemRow], ctx: &mut GameContext| {
            if let Some(row) = rows.get(index) {
                use_on_member(&target, row, ctx);
            }
        });
        items.hide_cursor();

        Self {
            member,
            menu: Selector::new(MENU.to_vec(), SelectorLayout::list(6, 3)),
            items,
            focus: Focus::Menu,
            key_items: false,
            exiting: false,
        }
    }

    fn refresh(&mut self, party: &Party) {
        let rows = party
            .inventory()
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.kind().is_key_item() == self.key_items)
            .map(|(index, item)| ItemRow {
                index,
                name: item.name().to_owned(),
                description: item.description().to_owned(),
                count: item.count(),
            })
            .collect();
        self.items.set_data(rows);
    }

    fn open_list(&mut self, key_items: bool, ctx: &mut GameContext) {
        self.key_items = key_items;
        self.refresh(&ctx.party);
        if self.items.data().is_empty() {
            ctx.notify(if key_items {
                "You have no key items."
            } else {
                "You have no items."
            });
            return;
        }
        self.items.reset_cursor();
        self.focus = Focus::List;
        self.menu.hide_cursor();
        self.items.show_cursor();
    }

    fn close_list(&mut self) {
        self.focus = Focus::Menu;
        self.items.hide_cursor();
        self.menu.show_cursor();
    }
}

fn use_on_member(member: &str, row: &ItemRow, ctx: &mut GameContext) {
    match ctx.party.use_item(row.index, member) {
        Ok(effect) => {
            let name = ctx
                .party
                .member(member)
                .map_or_else(|| member.to_owned(), |actor| actor.name().to_owned());
            let text = match effect {
                ItemEffect::Healed(amount) => format!("{name} recovers {amount} HP."),
                ItemEffect::Revived(hp) => format!("{name} is revived with {hp} HP."),
            };
            ctx.notify(text);
        }
        Err(error) => ctx.report(&format!("Use {}", row.name), &error),
    }
}

impl Screen<GameContext> for ItemMenuScreen {
    fn name(&self) -> &str {
        "item_menu"
    }

    fn on_enter(&mut self, ctx: &mut GameContext) {
        self.refresh(&ctx.party);
    }

    fn process_inputs(
        &mut self,
        keyboard: &Keyboard,
        ctx: &mut GameContext,
        _transitions: &mut Transitions<GameContext>,
    ) {
        match self.focus {
            Focus::Menu => {
                if keyboard.is_key_just_pressed(Key::Backspace) {
                    self.exiting = true;
                    return;
                }
                match self.menu.process_inputs(keyboard, &mut ()) {
                    Some(0) => self.open_list(false, ctx),
                    Some(1) => self.open_list(true, ctx),
                    _ => {}
                }
            }
            Focus::List => {
                if keyboard.is_key_just_pressed(Key::Backspace) {
                    self.close_list();
                    return;
                }
                self.items.process_inputs(keyboard, ctx);
            }
        }
    }

    fn update(&mut self, ctx: &mut GameContext, _transitions: &mut Transitions<GameContext>) {
        self.refresh(&ctx.party);
        if self.focus == Focus::List && self.items.data().is_empty() {
            self.close_list();
        }
    }

    fn draw(&self, ctx: &GameContext, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        common::draw_frame(canvas, ctx, "Items")?;
        self.menu.draw(canvas)?;

        if let Some(actor) = ctx.party.member(&self.member) {
            canvas.write(50, 2, "Target", Colour::Grey)?;
            common::draw_member_card(canvas, 50, 3, &MemberSummary::from(actor))?;
        }

        let heading = if self.key_items { "Key Items" } else { "Items" };
        canvas.write(4, 8, heading, Colour::Yellow)?;
        let rows = common::list_rows(canvas, 9);
        self.items.draw_rows(canvas, rows)?;

        if self.focus == Focus::List {
            if let Some(row) = self.items.selected() {
                let width = usize::from(canvas.width().saturating_sub(8));
                canvas.write(
                    4,
                    canvas.height().saturating_sub(4),
                    &common::fit(&row.description, width),
                    Colour::Cyan,
                )?;
            }
        }
        canvas.write(
            4,
            canvas.height().saturating_sub(3),
            "[W/A/S/D] Move  [Space] Use  [Backspace] Back",
            Colour::Grey,
        )
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
    use game_core::{Item, ItemKind};

    fn potion_count(ctx: &GameContext) -> Option<u16> {
        let inventory = ctx.party.inventory();
        inventory
            .find_item("Potion")
            .and_then(|index| inventory.item(index))
            .map(|item| item.count())
    }

    #[test]
    fn potion_heals_the_chosen_member() {
        let mut ctx = context();
        ctx.party.member_mut("player").unwrap().take_damage(30);
        let mut screen = ItemMenuScreen::new("player");
        screen.on_enter(&mut ctx);

        let frame = press_each(&mut screen, &mut ctx, &[Key::Space, Key::Space]);
        assert_eq!(ctx.party.member("player").unwrap().hp(), 95);
        assert_eq!(potion_count(&ctx), Some(4));
        assert_eq!(
            ctx.messages.latest().map(|m| m.text.as_str()),
            Some("Player recovers 25 HP.")
        );
        assert!(frame.canvas.contains("Potion                x 4"));
    }

    #[test]
    fn failed_use_consumes_nothing() {
        let mut ctx = context();
        let mut screen = ItemMenuScreen::new("sophia");
        screen.on_enter(&mut ctx);

        press_each(&mut screen, &mut ctx, &[Key::Space, Key::Space]);
        assert_eq!(potion_count(&ctx), Some(5));
        let message = ctx.messages.latest().unwrap();
        assert_eq!(message.level, MessageLevel::Warning);
        assert!(message.text.contains("full health"));
    }

    #[test]
    fn key_items_are_listed_but_not_usable() {
        let mut ctx = context();
        let mut screen = ItemMenuScreen::new("player");
        screen.on_enter(&mut ctx);

        let shown = press_each(&mut screen, &mut ctx, &[Key::S, Key::Space]);
        assert!(shown.canvas.contains("Rusty Key"));
        assert!(!shown.canvas.contains("Potion"));

        frame(&mut screen, &mut ctx, &[Key::Space]);
        assert!(ctx.party.inventory().find_item("Rusty Key").is_some());
        assert!(ctx.messages.latest().unwrap().text.contains("cannot be used"));
    }

    #[test]
    fn long_lists_scroll_above_the_description() {
        let mut ctx = context();
        for n in 0..60 {
            let tonic = Item::new(
                format!("Tonic {n:02}"),
                format!("Tonic batch {n:02}."),
                ItemKind::Health,
                10,
                4,
            );
            ctx.party.inventory_mut().add_item(tonic).unwrap();
        }
        let mut screen = ItemMenuScreen::new("player");
        screen.on_enter(&mut ctx);

        let mut keys = vec![Key::Space];
        keys.extend([Key::S; 30]);
        let shown = press_each(&mut screen, &mut ctx, &keys);

        let selected = screen.items.selected().unwrap().clone();
        assert!(shown.canvas.contains(&selected.name));
        let height = ctx.config.canvas.height;
        assert_eq!(shown.canvas.row_text(height - 4).trim(), selected.description);
        assert!(shown.canvas.row_text(height - 3).contains("[Backspace] Back"));
    }

    #[test]
    fn backspace_steps_back_then_exits() {
        let mut ctx = context();
        let mut screen = ItemMenuScreen::new("player");
        screen.on_enter(&mut ctx);

        press_each(&mut screen, &mut ctx, &[Key::Space, Key::Backspace]);
        assert!(!screen.exit());
        frame(&mut screen, &mut ctx, &[Key::Backspace]);
        assert!(screen.exit());
    }
}
