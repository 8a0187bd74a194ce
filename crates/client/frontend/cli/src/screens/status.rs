//! Read-only character sheet.

use client_frontend_core::{
    Canvas, Colour, GameContext, Key, Keyboard, RenderError, Screen, Transitions,
};
use game_core::{Actor, ModifierKey, Party, StatKey};

use super::common::{self, MemberSummary};

const ATTRIBUTES: [ModifierKey; 5] = [
    ModifierKey::Strength,
    ModifierKey::Speed,
    ModifierKey::Intelligence,
    ModifierKey::WillPower,
    ModifierKey::Stamina,
];

#[derive(Debug)]
pub struct StatusScreen {
    member: String,
    exiting: bool,
}

impl StatusScreen {
    pub fn new(member: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            exiting: false,
        }
    }

    pub fn member(&self) -> &str {
        &self.member
    }

    /// Step through the active lineup, wrapping at either end.
    fn cycle(&mut self, party: &Party, forward: bool) {
        let ids: Vec<&str> = party.active_members().into_iter().map(Actor::id).collect();
        let Some(current) = ids.iter().position(|id| *id == self.member) else {
            return;
        };
        let next = if forward {
            (current + 1) % ids.len()
        } else {
            (current + ids.len() - 1) % ids.len()
        };
        self.member = ids[next].to_owned();
    }

    fn draw_sheet(
        &self,
        ctx: &GameContext,
        actor: &Actor,
        canvas: &mut dyn Canvas,
    ) -> Result<(), RenderError> {
        let summary = MemberSummary::from(actor);
        common::draw_member_card(canvas, 4, 2, &summary)?;
        canvas.write(
            4,
            6,
            &format!("XP {}/{}", actor.xp(), actor.xp_to_next_level()),
            Colour::White,
        )?;

        canvas.write(4, 9, "Equipment", Colour::Yellow)?;
        for (row, (slot, occupant)) in (10..).zip(actor.loadout().iter()) {
            let name = occupant
                .and_then(|id| ctx.party.inventory().equipment(id))
                .map_or("-", |equipment| equipment.name());
            canvas.write(4, row, &format!("{:<7}{}", slot.label(), name), Colour::White)?;
        }

        let stats = actor.stats();
        canvas.write(44, 2, "Combat", Colour::Yellow)?;
        for (row, key) in (3..).zip([StatKey::Attack, StatKey::Defense, StatKey::Magic]) {
            canvas.write(
                44,
                row,
                &format!("{:<14}{:>4}", key.to_string(), stats.stat(key)),
                Colour::White,
            )?;
        }

        canvas.write(44, 9, "Attributes", Colour::Yellow)?;
        for (row, key) in (10..).zip(ATTRIBUTES) {
            let modifier = stats.modifier(key);
            canvas.write(
                44,
                row,
                &format!("{:<14}{:>4}", key.to_string(), stats.stat(key.stat())),
                Colour::White,
            )?;
            if modifier != 0 {
                let colour = if modifier > 0 {
                    Colour::Green
                } else {
                    Colour::Red
                };
                canvas.write(63, row, &format!("{modifier:+}"), colour)?;
            }
        }
        Ok(())
    }
}

impl Screen<GameContext> for StatusScreen {
    fn name(&self) -> &str {
        "status"
    }

    fn process_inputs(
        &mut self,
        keyboard: &Keyboard,
        ctx: &mut GameContext,
        _transitions: &mut Transitions<GameContext>,
    ) {
        if keyboard.is_key_just_pressed(Key::Backspace) {
            self.exiting = true;
        } else if keyboard.is_key_just_pressed(Key::D) {
            self.cycle(&ctx.party, true);
        } else if keyboard.is_key_just_pressed(Key::A) {
            self.cycle(&ctx.party, false);
        }
    }

    fn draw(&self, ctx: &GameContext, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        common::draw_frame(canvas, ctx, "Status")?;
        match ctx.party.member(&self.member) {
            Some(actor) => self.draw_sheet(ctx, actor, canvas)?,
            None => canvas.write(4, 2, "No such party member.", Colour::Red)?,
        }
        canvas.write(
            4,
            canvas.height().saturating_sub(3),
            "[A/D] Member  [Backspace] Back",
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
    use crate::screens::test_support::{context, frame};

    #[test]
    fn sheet_shows_gear_and_stats() {
        let mut ctx = context();
        let mut screen = StatusScreen::new("player");
        let frame = frame(&mut screen, &mut ctx, &[]);

        assert!(frame.canvas.contains("Player"));
        assert!(frame.canvas.contains("Weapon Short Sword"));
        assert!(frame.canvas.contains("Head   Leather Cap"));
        assert!(frame.canvas.contains("Chest  -"));
        assert!(frame.canvas.contains("Attack          29"));
        assert!(frame.canvas.contains("Strength        10 +3"));
        assert!(frame.canvas.contains("XP 0/200"));
    }

    #[test]
    fn cycles_through_lineup_and_exits() {
        let mut ctx = context();
        let mut screen = StatusScreen::new("player");
        frame(&mut screen, &mut ctx, &[Key::A]);
        assert_eq!(screen.member(), "nyx");
        frame(&mut screen, &mut ctx, &[Key::D]);
        assert_eq!(screen.member(), "player");

        assert!(!screen.exit());
        frame(&mut screen, &mut ctx, &[Key::Backspace]);
        assert!(screen.exit());
    }
}
