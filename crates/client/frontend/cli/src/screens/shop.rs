//! Buy from a shop's stock and sell from the party inventory.
//!
//! The flow is menu → list → quantity box. Buy quantities are bounded by gold
//! and by the room left in the party's stack; sell quantities by the units
//! that may leave the inventory (a worn unit never does).

use client_frontend_core::{
    Canvas, Colour, GameContext, Key, Keyboard, RenderError, Screen, Selector, SelectorLayout,
    Transitions,
};
use game_core::{EquipmentId, GameConfig, Party, Shop, shop};

use super::common;

const MENU: [&str; 3] = ["Buy", "Sell", "Exit"];
const CONFIRM: [&str; 2] = ["OK", "Cancel"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deal {
    Buy,
    Sell,
}

impl Deal {
    fn verb(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

/// Where a listed ware lives: shop stock when buying, party inventory when
/// selling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ware {
    Item(usize),
    Equipment(EquipmentId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct WareRow {
    ware: Ware,
    name: String,
    description: String,
    /// Unit price for this deal.
    price: u32,
    /// Units owned when buying; units that may be sold when selling.
    count: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Quantity {
    row: WareRow,
    amount: u16,
    max: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Focus {
    Menu,
    List(Deal),
    Quantity(Deal, Quantity),
}

pub struct ShopScreen {
    shop: Shop,
    menu: Selector<&'static str>,
    wares: Selector<WareRow>,
    confirm: Selector<&'static str>,
    focus: Focus,
    exiting: bool,
}

impl ShopScreen {
    pub fn new(shop: Shop) -> Self {
        let mut wares = Selector::new(
            Vec::new(),
            SelectorLayout::list(6, 11).with_columns(2).with_spacing(38, 1),
        )
        .with_cell_renderer(|canvas, x, y, row: &WareRow| {
            canvas.write(
                x,
                y,
                &format!(
                    "{:<18}{:>6}G x{:>2}",
                    common::fit(&row.name, 17),
                    row.price,
                    row.count
                ),
                Colour::White,
            )
        });
        wares.hide_cursor();

        let mut confirm = Selector::new(
            CONFIRM.to_vec(),
            SelectorLayout::list(56, 8).with_columns(2).with_spacing(10, 1),
        );
        confirm.hide_cursor();

        Self {
            shop,
            menu: Selector::new(MENU.to_vec(), SelectorLayout::list(6, 3)),
            wares,
            confirm,
            focus: Focus::Menu,
            exiting: false,
        }
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    fn rows(&self, deal: Deal, party: &Party) -> Vec<WareRow> {
        match deal {
            Deal::Buy => buy_rows(&self.shop, party),
            Deal::Sell => sell_rows(&self.shop, party),
        }
    }

    fn open_list(&mut self, deal: Deal, ctx: &mut GameContext) {
        let rows = self.rows(deal, &ctx.party);
        if rows.is_empty() {
            let text = match deal {
                Deal::Buy => format!("{} has nothing for sale.", self.shop.name()),
                Deal::Sell => format!("You have nothing {} will buy.", self.shop.name()),
            };
            ctx.notify(text);
            return;
        }
        self.wares.set_data(rows);
        self.wares.reset_cursor();
        self.focus = Focus::List(deal);
        self.menu.hide_cursor();
        self.confirm.hide_cursor();
        self.wares.show_cursor();
    }

    fn close_list(&mut self) {
        self.focus = Focus::Menu;
        self.wares.hide_cursor();
        self.wares.set_data(Vec::new());
        self.menu.show_cursor();
    }

    fn back_to_list(&mut self, deal: Deal) {
        self.focus = Focus::List(deal);
        self.confirm.hide_cursor();
        self.wares.show_cursor();
    }

    fn open_quantity(&mut self, deal: Deal, row: WareRow, ctx: &mut GameContext) {
        let max = match deal {
            Deal::Buy => {
                let limit = self.stack_limit(row.ware);
                let max = shop::max_purchase(row.price, ctx.party.gold(), row.count, limit);
                if max == 0 {
                    if row.count >= limit {
                        ctx.messages.warn(format!("You cannot carry more {}.", row.name));
                    } else {
                        ctx.messages.warn(format!("You cannot afford {}.", row.name));
                    }
                    return;
                }
                max
            }
            Deal::Sell => {
                if row.count == 0 {
                    ctx.messages
                        .warn(format!("{} is equipped and cannot be sold.", row.name));
                    return;
                }
                row.count
            }
        };

        self.focus = Focus::Quantity(
            deal,
            Quantity {
                row,
                amount: 1,
                max,
            },
        );
        self.wares.hide_cursor();
        self.confirm.reset_cursor();
        self.confirm.show_cursor();
    }

    fn stack_limit(&self, ware: Ware) -> u16 {
        match ware {
            Ware::Item(index) => self
                .shop
                .stock()
                .item(index)
                .map_or(GameConfig::MAX_ITEM_COUNT, |item| item.max_count()),
            Ware::Equipment(id) => self
                .shop
                .stock()
                .equipment(id)
                .map_or(GameConfig::MAX_EQUIPMENT_COUNT, |equipment| {
                    equipment.max_count()
                }),
        }
    }

    fn settle(&self, deal: Deal, quantity: &Quantity, ctx: &mut GameContext) {
        let row = &quantity.row;
        let amount = quantity.amount;
        let result = match (deal, row.ware) {
            (Deal::Buy, ware) => {
                let total = row.price.saturating_mul(u32::from(amount));
                let bought = match ware {
                    Ware::Item(index) => self.shop.stock().item(index).map(|item| {
                        ctx.party.buy_item(total, item.with_count(amount))
                    }),
                    Ware::Equipment(id) => self.shop.stock().equipment(id).map(|equipment| {
                        ctx.party.buy_equipment(total, equipment.with_count(amount))
                    }),
                };
                match bought {
                    Some(result) => result.map(|()| total),
                    None => {
                        tracing::error!(shop = self.shop.name(), ?ware, "stock entry vanished");
                        return;
                    }
                }
            }
            (Deal::Sell, Ware::Item(index)) => ctx.party.sell_item(index, amount),
            (Deal::Sell, Ware::Equipment(id)) => ctx.party.sell_equipment(id, amount),
        };

        match result {
            Ok(gold) => {
                let verb = match deal {
                    Deal::Buy => "Bought",
                    Deal::Sell => "Sold",
                };
                tracing::info!(
                    shop = self.shop.name(),
                    deal = verb,
                    ware = %row.name,
                    amount,
                    gold,
                    "deal settled"
                );
                ctx.notify(format!("{verb} {amount} x {} for {gold} gold.", row.name));
            }
            Err(error) => ctx.report(&format!("{} {}", deal.verb(), row.name), &error),
        }
    }

    fn process_quantity(
        &mut self,
        deal: Deal,
        mut quantity: Quantity,
        keyboard: &Keyboard,
        ctx: &mut GameContext,
    ) {
        if keyboard.is_key_just_pressed(Key::Backspace) {
            self.back_to_list(deal);
            return;
        }
        if keyboard.is_key_just_pressed(Key::W) {
            quantity.amount = (quantity.amount + 1).min(quantity.max);
        } else if keyboard.is_key_just_pressed(Key::S) {
            quantity.amount = quantity.amount.saturating_sub(1).max(1);
        } else if let Some(choice) = self.confirm.process_inputs(keyboard, &mut ()) {
            if choice == 0 {
                self.settle(deal, &quantity, ctx);
            }
            self.back_to_list(deal);
            return;
        }
        self.focus = Focus::Quantity(deal, quantity);
    }

    fn draw_quantity(
        &self,
        quantity: &Quantity,
        canvas: &mut dyn Canvas,
    ) -> Result<(), RenderError> {
        canvas.draw_panel(50, 3, 28, 7, Colour::Cyan)?;
        canvas.write(52, 4, &common::fit(&quantity.row.name, 24), Colour::Yellow)?;
        canvas.write(
            52,
            5,
            &format!("Quantity {:>2} / {}", quantity.amount, quantity.max),
            Colour::White,
        )?;
        let total = quantity
            .row
            .price
            .saturating_mul(u32::from(quantity.amount));
        canvas.write(52, 6, &format!("Total {total}G"), Colour::White)?;
        self.confirm.draw(canvas)
    }
}

/// Shop stock with the number of units the party already owns.
fn buy_rows(shop: &Shop, party: &Party) -> Vec<WareRow> {
    let stock = shop.stock();
    let owned = party.inventory();
    let items = stock.items().iter().enumerate().map(|(index, item)| WareRow {
        ware: Ware::Item(index),
        name: item.name().to_owned(),
        description: item.description().to_owned(),
        price: item.buy_price(),
        count: owned
            .find_item(item.name())
            .and_then(|index| owned.item(index))
            .map_or(0, |item| item.count()),
    });
    let equipment = stock.equipment_iter().map(|(id, equipment)| WareRow {
        ware: Ware::Equipment(id),
        name: equipment.name().to_owned(),
        description: equipment.description().to_owned(),
        price: equipment.buy_price(),
        count: owned
            .find_equipment(equipment.name())
            .and_then(|id| owned.equipment(id))
            .map_or(0, |equipment| equipment.count()),
    });
    items.chain(equipment).collect()
}

/// Party wares this shop deals in, with the units that may be sold.
fn sell_rows(shop: &Shop, party: &Party) -> Vec<WareRow> {
    let kind = shop.kind();
    let inventory = party.inventory();
    let items = inventory
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| kind.accepts_item(item))
        .map(|(index, item)| WareRow {
            ware: Ware::Item(index),
            name: item.name().to_owned(),
            description: item.description().to_owned(),
            price: item.sell_price(),
            count: item.count(),
        });
    let equipment = inventory
        .equipment_iter()
        .filter(|(_, equipment)| kind.accepts_equipment(equipment))
        .map(|(id, equipment)| WareRow {
            ware: Ware::Equipment(id),
            name: equipment.name().to_owned(),
            description: equipment.description().to_owned(),
            price: equipment.sell_price(),
            count: equipment.available_count(),
        });
    items.chain(equipment).collect()
}

impl Screen<GameContext> for ShopScreen {
    fn name(&self) -> &str {
        "shop"
    }

    fn on_enter(&mut self, ctx: &mut GameContext) {
        tracing::info!(shop = self.shop.name(), kind = %self.shop.kind(), "entered shop");
        ctx.notify(format!("Welcome to the {}!", self.shop.name()));
    }

    fn on_exit(&mut self, _ctx: &mut GameContext) {
        tracing::info!(shop = self.shop.name(), "left shop");
    }

    fn process_inputs(
        &mut self,
        keyboard: &Keyboard,
        ctx: &mut GameContext,
        _transitions: &mut Transitions<GameContext>,
    ) {
        let back = keyboard.is_key_just_pressed(Key::Backspace);
        match self.focus.clone() {
            Focus::Menu => {
                if back {
                    self.exiting = true;
                    return;
                }
                match self.menu.process_inputs(keyboard, &mut ()) {
                    Some(0) => self.open_list(Deal::Buy, ctx),
                    Some(1) => self.open_list(Deal::Sell, ctx),
                    Some(2) => self.exiting = true,
                    _ => {}
                }
            }
            Focus::List(deal) => {
                if back {
                    self.close_list();
                    return;
                }
                let chosen = self
                    .wares
                    .process_inputs(keyboard, &mut ())
                    .and_then(|index| self.wares.data().get(index).cloned());
                if let Some(row) = chosen {
                    self.open_quantity(deal, row, ctx);
                }
            }
            Focus::Quantity(deal, quantity) => {
                self.process_quantity(deal, quantity, keyboard, ctx);
            }
        }
    }

    fn update(&mut self, ctx: &mut GameContext, _transitions: &mut Transitions<GameContext>) {
        if let Focus::List(deal) = self.focus {
            let rows = self.rows(deal, &ctx.party);
            if rows.is_empty() {
                self.close_list();
            } else {
                self.wares.set_data(rows);
            }
        }
    }

    fn draw(&self, ctx: &GameContext, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        common::draw_frame(canvas, ctx, self.shop.name())?;
        self.menu.draw(canvas)?;
        common::draw_gold(canvas, 6, 7, ctx.party.gold())?;

        let deal = match &self.focus {
            Focus::Menu => None,
            Focus::List(deal) | Focus::Quantity(deal, _) => Some(*deal),
        };
        if let Some(deal) = deal {
            let heading = match deal {
                Deal::Buy => "For sale          Price  Owned",
                Deal::Sell => "Yours             Offer  Spare",
            };
            canvas.write(6, 10, heading, Colour::Yellow)?;
            let rows = common::list_rows(canvas, 11);
            self.wares.draw_rows(canvas, rows)?;
            if let Some(row) = self.wares.selected() {
                let width = usize::from(canvas.width().saturating_sub(8));
                canvas.write(
                    4,
                    canvas.height().saturating_sub(4),
                    &common::fit(&row.description, width),
                    Colour::Cyan,
                )?;
            }
        }
        if let Focus::Quantity(_, quantity) = &self.focus {
            self.draw_quantity(quantity, canvas)?;
        }

        let hint = match &self.focus {
            Focus::Quantity(..) => "[W/S] Quantity  [A/D] OK/Cancel  [Space] Confirm",
            _ => "[W/A/S/D] Move  [Space] Select  [Backspace] Back",
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

    fn open(ctx: &mut GameContext, name: &str) -> ShopScreen {
        let definition = ctx.content.shop(name).unwrap();
        let shop = Shop::from_definition(&definition, ctx.content.as_ref()).unwrap();
        let mut screen = ShopScreen::new(shop);
        screen.on_enter(ctx);
        screen
    }

    fn item_count(ctx: &GameContext, name: &str) -> u16 {
        let inventory = ctx.party.inventory();
        inventory
            .find_item(name)
            .and_then(|index| inventory.item(index))
            .map_or(0, |item| item.count())
    }

    fn equipment_count(ctx: &GameContext, name: &str) -> u16 {
        let inventory = ctx.party.inventory();
        inventory
            .find_equipment(name)
            .and_then(|id| inventory.equipment(id))
            .map_or(0, |equipment| equipment.count())
    }

    #[test]
    fn greets_and_lists_stock() {
        let mut ctx = context();
        let mut screen = open(&mut ctx, "Item Shop");
        assert_eq!(
            ctx.messages.latest().map(|m| m.text.as_str()),
            Some("Welcome to the Item Shop!")
        );

        let frame = press_each(&mut screen, &mut ctx, &[Key::Space]);
        assert!(frame.canvas.contains("Potion                20G x 5"));
        assert!(frame.canvas.contains("Phoenix Down         150G x 1"));
        assert!(frame.canvas.contains("Gold: 500"));
    }

    #[test]
    fn buy_then_sell_round_trip() {
        let mut ctx = context();
        let mut screen = open(&mut ctx, "Item Shop");

        let keys = [Key::Space, Key::Space, Key::W, Key::W];
        let quantity = press_each(&mut screen, &mut ctx, &keys);
        assert!(quantity.canvas.contains("Quantity  3 / 25"));
        assert!(quantity.canvas.contains("Total 60G"));

        frame(&mut screen, &mut ctx, &[Key::Space]);
        assert_eq!(ctx.party.gold(), 440);
        assert_eq!(item_count(&ctx, "Potion"), 8);
        assert_eq!(
            ctx.messages.latest().map(|m| m.text.as_str()),
            Some("Bought 3 x Potion for 60 gold.")
        );

        // Back to the menu, then sell two potions.
        let keys = [Key::Backspace, Key::S, Key::Space, Key::Space, Key::W, Key::Space];
        press_each(&mut screen, &mut ctx, &keys);
        assert_eq!(ctx.party.gold(), 460);
        assert_eq!(item_count(&ctx, "Potion"), 6);
        assert_eq!(
            ctx.messages.latest().map(|m| m.text.as_str()),
            Some("Sold 2 x Potion for 20 gold.")
        );
    }

    #[test]
    fn quantity_is_clamped_and_cancel_keeps_everything() {
        let mut ctx = context();
        let mut screen = open(&mut ctx, "Item Shop");

        // Phoenix Down at 150G: 500 gold buys at most three.
        let keys = [Key::Space, Key::S, Key::Space, Key::W, Key::W, Key::W, Key::W];
        let frame_shown = press_each(&mut screen, &mut ctx, &keys);
        assert!(frame_shown.canvas.contains("Quantity  3 / 3"));

        press_each(&mut screen, &mut ctx, &[Key::D, Key::Space]);
        assert_eq!(ctx.party.gold(), 500);
        assert_eq!(item_count(&ctx, "Phoenix Down"), 1);
    }

    #[test]
    fn unaffordable_ware_is_refused() {
        let mut ctx = context();
        let mut screen = open(&mut ctx, "Relic Shop");

        press_each(&mut screen, &mut ctx, &[Key::Space, Key::Space]);
        let message = ctx.messages.latest().unwrap();
        assert_eq!(message.text, "You cannot afford Flame Tongue.");
        assert_eq!(message.level, MessageLevel::Warning);
        assert_eq!(ctx.party.gold(), 500);
        assert_eq!(equipment_count(&ctx, "Flame Tongue"), 0);
    }

    #[test]
    fn worn_unit_is_never_sold() {
        let mut ctx = context();
        let mut screen = open(&mut ctx, "Weapon Shop");

        press_each(&mut screen, &mut ctx, &[Key::S, Key::Space, Key::Space]);
        assert_eq!(
            ctx.messages.latest().map(|m| m.text.as_str()),
            Some("Short Sword is equipped and cannot be sold.")
        );

        // A second sword may be sold, but only that one.
        let keys = [Key::Backspace, Key::W, Key::Space, Key::Space];
        press_each(&mut screen, &mut ctx, &keys);
        frame(&mut screen, &mut ctx, &[Key::Space]);
        assert_eq!(equipment_count(&ctx, "Short Sword"), 2);
        assert_eq!(ctx.party.gold(), 399);

        let keys = [Key::Backspace, Key::S, Key::Space, Key::Space, Key::W, Key::W];
        let shown = press_each(&mut screen, &mut ctx, &keys);
        assert!(shown.canvas.contains("Quantity  1 / 1"));
        frame(&mut screen, &mut ctx, &[Key::Space]);
        assert_eq!(equipment_count(&ctx, "Short Sword"), 1);
        assert_eq!(ctx.party.gold(), 449);

        let inventory = ctx.party.inventory();
        let sword = inventory.find_equipment("Short Sword").unwrap();
        assert!(inventory.equipment(sword).unwrap().is_equipped());
    }

    #[test]
    fn exit_entry_and_backspace_leave() {
        let mut ctx = context();
        let mut screen = open(&mut ctx, "Armour Shop");
        press_each(&mut screen, &mut ctx, &[Key::S, Key::S, Key::Space]);
        assert!(screen.exit());

        let mut screen = open(&mut ctx, "Armour Shop");
        frame(&mut screen, &mut ctx, &[Key::Backspace]);
        assert!(screen.exit());
    }
}
