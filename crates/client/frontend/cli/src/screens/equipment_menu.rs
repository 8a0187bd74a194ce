//! Equip and remove gear on one party member, with a stat preview.

use client_frontend_core::{
    Canvas, Colour, GameContext, Key, Keyboard, RenderError, Screen, Selector, SelectorLayout,
    Transitions,
};
use game_core::{EquipSlot, EquipmentId, Party, StatKey};

use super::common::{self, MemberSummary};

const MENU: [&str; 2] = ["Equip", "Remove"];

#[derive(Clone, Debug, PartialEq, Eq)]
struct SlotRow {
    slot: EquipSlot,
    worn: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct GearRow {
    id: EquipmentId,
    name: String,
    description: String,
    power: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Equip,
    Remove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Menu,
    Slots(Mode),
    Gear(EquipSlot),
}

pub struct EquipmentMenuScreen {
    member: String,
    menu: Selector<&'static str>,
    slots: Selector<SlotRow>,
    gear: Selector<GearRow>,
    focus: Focus,
    exiting: bool,
}

impl EquipmentMenuScreen {
    pub fn new(member: impl Into<String>) -> Self {
        let mut slots = Selector::new(Vec::new(), SelectorLayout::list(6, 9)).with_cell_renderer(
            |canvas, x, y, row: &SlotRow| {
                let worn = row.worn.as_deref().unwrap_or("-");
                canvas.write(
                    x,
                    y,
                    &format!("{:<7}{}", row.slot.label(), common::fit(worn, 24)),
                    Colour::White,
                )
            },
        );
        slots.hide_cursor();

        let mut gear = Selector::new(
            Vec::new(),
            SelectorLayout::list(6, 17).with_columns(2).with_spacing(32, 1),
        )
        .with_cell_renderer(|canvas, x, y, row: &GearRow| {
            canvas.write(
                x,
                y,
                &format!("{:<22}{:>4}", common::fit(&row.name, 22), row.power),
                Colour::White,
            )
        });
        gear.hide_cursor();

        Self {
            member: member.into(),
            menu: Selector::new(MENU.to_vec(), SelectorLayout::list(6, 3)),
            slots,
            gear,
            focus: Focus::Menu,
            exiting: false,
        }
    }

    fn refresh(&mut self, party: &Party) {
        let Some(actor) = party.member(&self.member) else {
            self.slots.set_data(Vec::new());
            self.gear.set_data(Vec::new());
            return;
        };
        let inventory = party.inventory();
        let rows = actor
            .loadout()
            .iter()
            .map(|(slot, occupant)| SlotRow {
                slot,
                worn: occupant
                    .and_then(|id| inventory.equipment(id))
                    .map(|equipment| equipment.name().to_owned()),
            })
            .collect();
        self.slots.set_data(rows);

        if let Focus::Gear(slot) = self.focus {
            self.gear.set_data(gear_rows(party, slot));
        }
    }

    fn focus_menu(&mut self) {
        self.focus = Focus::Menu;
        self.slots.hide_cursor();
        self.gear.hide_cursor();
        self.menu.show_cursor();
    }

    fn focus_slots(&mut self, mode: Mode) {
        self.focus = Focus::Slots(mode);
        self.menu.hide_cursor();
        self.gear.hide_cursor();
        self.gear.set_data(Vec::new());
        self.slots.show_cursor();
    }

    fn choose_slot(&mut self, mode: Mode, slot: EquipSlot, ctx: &mut GameContext) {
        match mode {
            Mode::Equip => {
                let rows = gear_rows(&ctx.party, slot);
                if rows.is_empty() {
                    ctx.notify(format!("Nothing in the inventory fits the {} slot.", slot.label()));
                    return;
                }
                self.gear.set_data(rows);
                self.gear.reset_cursor();
                self.focus = Focus::Gear(slot);
                self.slots.hide_cursor();
                self.gear.show_cursor();
            }
            Mode::Remove => match ctx.party.unequip(&self.member, slot) {
                Ok(id) => {
                    let gear = ctx
                        .party
                        .inventory()
                        .equipment(id)
                        .map_or_else(String::new, |equipment| equipment.name().to_owned());
                    let text = format!("{} removes {gear}.", self.display_name(ctx));
                    ctx.notify(text);
                }
                Err(error) => ctx.report(&format!("Remove {}", slot.label()), &error),
            },
        }
    }

    fn choose_gear(&mut self, row: GearRow, ctx: &mut GameContext) {
        match ctx.party.equip(&self.member, row.id) {
            Ok(_) => {
                let text = format!("{} equips {}.", self.display_name(ctx), row.name);
                ctx.notify(text);
                self.focus_slots(Mode::Equip);
            }
            Err(error) => ctx.report(&format!("Equip {}", row.name), &error),
        }
    }

    fn display_name(&self, ctx: &GameContext) -> String {
        ctx.party
            .member(&self.member)
            .map_or_else(|| self.member.clone(), |actor| actor.name().to_owned())
    }

    fn draw_stats(&self, ctx: &GameContext, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        let Some(actor) = ctx.party.member(&self.member) else {
            return Ok(());
        };
        common::draw_member_card(canvas, 50, 2, &MemberSummary::from(actor))?;

        let stats = actor.stats();
        let current = [
            ("Attack", stats.stat(StatKey::Attack)),
            ("Defense", stats.stat(StatKey::Defense)),
        ];
        let predicted = match (self.focus, self.gear.selected()) {
            (Focus::Gear(_), Some(row)) => ctx.party.predict_equip(&self.member, row.id).ok(),
            _ => None,
        };

        for (y, (index, (label, value))) in (7..).zip(current.into_iter().enumerate()) {
            canvas.write(50, y, &format!("{label:<8}{value:>4}"), Colour::White)?;
            let Some(prediction) = predicted else {
                continue;
            };
            let next = if index == 0 {
                prediction.attack
            } else {
                prediction.defense
            };
            let (marker, colour) = common::change_marker(value, next);
            canvas.write(62, y, &format!(" -> {next:>4} {marker}"), colour)?;
        }
        Ok(())
    }
}

/// Unworn inventory records that fit `slot`.
fn gear_rows(party: &Party, slot: EquipSlot) -> Vec<GearRow> {
    party
        .inventory()
        .equipment_iter()
        .filter(|(_, equipment)| !equipment.is_equipped() && equipment.slot() == Some(slot))
        .map(|(id, equipment)| GearRow {
            id,
            name: equipment.name().to_owned(),
            description: equipment.description().to_owned(),
            power: equipment.power(),
        })
        .collect()
}

impl Screen<GameContext> for EquipmentMenuScreen {
    fn name(&self) -> &str {
        "equipment_menu"
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
        let back = keyboard.is_key_just_pressed(Key::Backspace);
        match self.focus {
            Focus::Menu => {
                if back {
                    self.exiting = true;
                    return;
                }
                match self.menu.process_inputs(keyboard, &mut ()) {
                    Some(0) => self.focus_slots(Mode::Equip),
                    Some(1) => self.focus_slots(Mode::Remove),
                    _ => {}
                }
            }
            Focus::Slots(mode) => {
                if back {
                    self.focus_menu();
                    return;
                }
                let chosen = self
                    .slots
                    .process_inputs(keyboard, &mut ())
                    .and_then(|index| self.slots.data().get(index))
                    .map(|row| row.slot);
                if let Some(slot) = chosen {
                    self.choose_slot(mode, slot, ctx);
                }
            }
            Focus::Gear(_) => {
                if back {
                    self.focus_slots(Mode::Equip);
                    return;
                }
                let chosen = self
                    .gear
                    .process_inputs(keyboard, &mut ())
                    .and_then(|index| self.gear.data().get(index).cloned());
                if let Some(row) = chosen {
                    self.choose_gear(row, ctx);
                }
            }
        }
    }

    fn update(&mut self, ctx: &mut GameContext, _transitions: &mut Transitions<GameContext>) {
        self.refresh(&ctx.party);
    }

    fn draw(&self, ctx: &GameContext, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        common::draw_frame(canvas, ctx, "Equipment")?;
        self.menu.draw(canvas)?;
        self.draw_stats(ctx, canvas)?;

        canvas.write(4, 8, "Slots", Colour::Yellow)?;
        self.slots.draw(canvas)?;

        if let Focus::Gear(slot) = self.focus {
            canvas.write(4, 16, &format!("Fits {}", slot.label()), Colour::Yellow)?;
            let rows = common::list_rows(canvas, 17);
            self.gear.draw_rows(canvas, rows)?;
            if let Some(row) = self.gear.selected() {
                let width = usize::from(canvas.width().saturating_sub(8));
                canvas.write(
                    4,
                    canvas.height().saturating_sub(4),
                    &common::fit(&row.description, width),
                    Colour::Cyan,
                )?;
            }
        }

        let hint = match self.focus {
            Focus::Slots(Mode::Remove) => "[W/S] Slot  [Space] Remove  [Backspace] Back",
            _ => "[W/A/S/D] Move  [Space] Select  [Backspace] Back",
        };
        canvas.write(4, canvas.height().saturating_sub(3), hint, Colour::Grey)
    }

    fn exit(&self) -> bool {
        self.exiting
    }
}
