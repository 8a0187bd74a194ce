//! Title screen and hub: greeting dialog, clock, party menu and shops.

use client_frontend_core::{
    Canvas, Colour, DialogConfig, GameContext, Key, Keyboard, RenderError, Screen, Selector,
    SelectorLayout, Transitions, Typewriter,
};
use game_core::Shop;

use super::common;
use super::{GameMenuScreen, ShopScreen};

const TITLE: &str = "Turn-Based RPG";
const GREETING: &str = "Welcome back, traveller! The market is open and your party is rested. \
Press M for the party menu or Enter to visit a shop.";
const PARTY_MENU: &str = "Party Menu";
const QUIT: &str = "Quit";

pub struct MainScreen {
    default_shop: Option<String>,
    dialog: Typewriter,
    entries: Selector<String>,
    exiting: bool,
}

impl MainScreen {
    pub fn new(default_shop: Option<String>, config: &DialogConfig) -> Self {
        let mut dialog = Typewriter::new(6, 7, GREETING, 44, config.typewriter_speed);
        if config.instant {
            dialog.skip();
        }
        Self {
            default_shop,
            dialog,
            entries: Selector::new(
                vec![PARTY_MENU.to_owned(), QUIT.to_owned()],
                SelectorLayout::list(6, 14),
            ),
            exiting: false,
        }
    }

    fn open_shop(
        &self,
        name: &str,
        ctx: &mut GameContext,
        transitions: &mut Transitions<GameContext>,
    ) {
        let Some(definition) = ctx.content.shop(name) else {
            tracing::error!(shop = name, "unknown shop");
            ctx.messages.error(format!("Unknown shop {name}."));
            return;
        };
        match Shop::from_definition(&definition, ctx.content.as_ref()) {
            Ok(shop) => transitions.push(ShopScreen::new(shop)),
            Err(error) => ctx.report(&format!("Open {name}"), &error),
        }
    }

    fn choose(
        &mut self,
        index: usize,
        ctx: &mut GameContext,
        transitions: &mut Transitions<GameContext>,
    ) {
        let Some(entry) = self.entries.data().get(index).cloned() else {
            return;
        };
        match entry.as_str() {
            PARTY_MENU => transitions.push(GameMenuScreen::new()),
            QUIT => self.exiting = true,
            shop => self.open_shop(shop, ctx, transitions),
        }
    }
}

impl Screen<GameContext> for MainScreen {
    fn name(&self) -> &str {
        "main"
    }

    fn on_enter(&mut self, ctx: &mut GameContext) {
        let mut entries = vec![PARTY_MENU.to_owned()];
        entries.extend(ctx.content.shop_names());
        entries.push(QUIT.to_owned());
        self.entries.set_data(entries);
        tracing::info!(shops = self.entries.data().len() - 2, "main screen ready");
    }

    fn process_inputs(
        &mut self,
        keyboard: &Keyboard,
        ctx: &mut GameContext,
        transitions: &mut Transitions<GameContext>,
    ) {
        if keyboard.is_key_just_pressed(Key::Escape) {
            self.exiting = true;
            return;
        }
        if keyboard.is_key_just_pressed(Key::M) {
            transitions.push(GameMenuScreen::new());
            return;
        }
        if keyboard.is_key_just_pressed(Key::Enter) {
            let shop = self
                .default_shop
                .clone()
                .or_else(|| ctx.content.shop_names().into_iter().next());
            match shop {
                Some(name) => self.open_shop(&name, ctx, transitions),
                None => ctx.messages.warn("There are no shops."),
            }
            return;
        }
        if keyboard.is_key_just_pressed(Key::Space) && !self.dialog.finished() {
            self.dialog.skip();
            return;
        }
        if let Some(index) = self.entries.process_inputs(keyboard, &mut ()) {
            self.choose(index, ctx, transitions);
        }
    }

    fn update(&mut self, _ctx: &mut GameContext, _transitions: &mut Transitions<GameContext>) {
        self.dialog.update();
    }

    fn draw(&self, ctx: &GameContext, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        common::draw_frame(canvas, ctx, TITLE)?;
        canvas.write(4, 2, TITLE, Colour::Yellow)?;
        canvas.write(4, 3, &format!("Time {}", ctx.clock.readout()), Colour::White)?;
        common::draw_gold(canvas, 24, 3, ctx.party.gold())?;

        self.dialog.draw(canvas)?;
        self.entries.draw(canvas)?;
        canvas.write(
            4,
            canvas.height().saturating_sub(3),
            "[Space] Select  [M] Party  [Enter] Shop  [Esc] Quit",
            Colour::Grey,
        )
    }

    fn exit(&self) -> bool {
        self.exiting
    }
}
