//! Drawing helpers shared by the menu screens.

use client_frontend_core::{Canvas, Colour, GameContext, RenderError};
use game_core::{Actor, ActorKind, Party};

/// Snapshot of an active member for selectors and cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberSummary {
    pub id: String,
    pub name: String,
    pub kind: ActorKind,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub dead: bool,
}

impl From<&Actor> for MemberSummary {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id().to_owned(),
            name: actor.name().to_owned(),
            kind: actor.kind(),
            level: actor.level(),
            hp: actor.hp(),
            max_hp: actor.max_hp(),
            mp: actor.mp(),
            max_mp: actor.max_mp(),
            dead: actor.is_dead(),
        }
    }
}

/// Active members in lineup order.
pub fn member_rows(party: &Party) -> Vec<MemberSummary> {
    party
        .active_members()
        .into_iter()
        .map(MemberSummary::from)
        .collect()
}

/// Cut `text` to at most `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Rows a one-line list starting at `top` may use before the description
/// line at `height - 4`.
pub fn list_rows(canvas: &dyn Canvas, top: u16) -> u16 {
    canvas.height().saturating_sub(4).saturating_sub(top)
}

pub fn health_colour(hp: u32, max_hp: u32, dead: bool) -> Colour {
    if dead || max_hp == 0 {
        return Colour::Red;
    }
    match hp * 100 / max_hp {
        50..=100 => Colour::Green,
        25..=49 => Colour::Yellow,
        _ => Colour::Red,
    }
}

/// Four-line member card: name, class and level, HP, MP.
pub fn draw_member_card(
    canvas: &mut dyn Canvas,
    x: u16,
    y: u16,
    member: &MemberSummary,
) -> Result<(), RenderError> {
    canvas.write(x, y, &fit(&member.name, 16), Colour::Yellow)?;
    canvas.write(
        x,
        y + 1,
        &format!("Lv {:<3} {}", member.level, member.kind),
        Colour::White,
    )?;
    let hp = if member.dead {
        "HP  DEAD".to_owned()
    } else {
        format!("HP {}/{}", member.hp, member.max_hp)
    };
    canvas.write(
        x,
        y + 2,
        &hp,
        health_colour(member.hp, member.max_hp, member.dead),
    )?;
    canvas.write(
        x,
        y + 3,
        &format!("MP {}/{}", member.mp, member.max_mp),
        Colour::Cyan,
    )
}

/// Outer border with `title` set into the top edge and the newest message
/// on the bottom inner row.
pub fn draw_frame(
    canvas: &mut dyn Canvas,
    ctx: &GameContext,
    title: &str,
) -> Result<(), RenderError> {
    let width = canvas.width();
    let height = canvas.height();
    canvas.draw_panel(0, 0, width, height, Colour::White)?;
    canvas.write(
        2,
        0,
        &format!(" {} ", fit(title, usize::from(width.saturating_sub(6)))),
        Colour::Yellow,
    )?;

    if let Some(entry) = ctx.messages.latest() {
        let text = fit(&entry.text, usize::from(width.saturating_sub(4)));
        canvas.write(2, height.saturating_sub(2), &text, entry.level.colour())?;
    }
    Ok(())
}

pub fn draw_gold(canvas: &mut dyn Canvas, x: u16, y: u16, gold: u32) -> Result<(), RenderError> {
    canvas.write(x, y, &format!("Gold: {gold}"), Colour::Yellow)
}

/// `+`, `-` or `=` comparing a predicted value with the current one.
pub fn change_marker(current: i32, predicted: i32) -> (char, Colour) {
    match predicted.cmp(&current) {
        std::cmp::Ordering::Greater => ('+', Colour::Green),
        std::cmp::Ordering::Less => ('-', Colour::Red),
        std::cmp::Ordering::Equal => ('=', Colour::White),
    }
}
