use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Task, Theme};

mod catalog;
mod state;
mod ui;

use catalog::data::WatchId;
use catalog::store::Catalog;
use state::market::MarketState;

/// Main application state
struct WatchMarket {
    /// Favorites and the live name filter over the catalog
    market: MarketState,
    /// Decoded product images by watch id; absent entries render as
    /// placeholders
    images: HashMap<WatchId, Handle>,
    /// Which screen is showing
    screen: Screen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Market,
    Favorites,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User edited the search field
    SearchChanged(String),
    /// User pressed a heart button
    ToggleFavorite(WatchId),
    /// User pressed "Market" in the bottom bar
    ShowMarket,
    /// User pressed "Favorites" in the bottom bar
    ShowFavorites,
    /// Background image decoding completed
    ImagesLoaded(HashMap<WatchId, Handle>),
}

impl WatchMarket {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // An optional CLI argument names a catalog JSON file; otherwise the
        // builtin demo storefront is used.
        let catalog = match std::env::args().nth(1) {
            Some(path) => match Catalog::from_json_file(Path::new(&path)) {
                Ok(catalog) => catalog,
                Err(e) => {
                    eprintln!("⚠️  Could not load catalog from {path}: {e}");
                    eprintln!("   Falling back to the builtin catalog.");
                    Catalog::builtin()
                }
            },
            None => Catalog::builtin(),
        };

        let catalog = Arc::new(catalog);
        println!("⌚ Watch Market initialized with {} watches", catalog.len());

        let mut market = MarketState::new(Arc::clone(&catalog));
        market.subscribe(|change| println!("🔔 State changed: {change:?}"));

        (
            WatchMarket {
                market,
                images: HashMap::new(),
                screen: Screen::Market,
            },
            // Decode product images off the UI thread.
            Task::perform(
                catalog::images::load_catalog_images(catalog),
                Message::ImagesLoaded,
            ),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.market.set_search_query(query);
                Task::none()
            }
            Message::ToggleFavorite(id) => {
                self.market.toggle_favorite(id);
                Task::none()
            }
            Message::ShowMarket => {
                if self.screen == Screen::Market {
                    // Already on the market: jump the grid back to the top.
                    return scrollable::scroll_to(
                        ui::grid::market_scroll_id(),
                        scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
                    );
                }

                self.screen = Screen::Market;
                Task::none()
            }
            Message::ShowFavorites => {
                self.screen = Screen::Favorites;
                Task::none()
            }
            Message::ImagesLoaded(images) => {
                self.images = images;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body: Element<Message> = match self.screen {
            Screen::Market => {
                let search = text_input("Search watches...", self.market.search_query())
                    .on_input(Message::SearchChanged)
                    .padding(10);

                let grid = ui::grid::market_grid(
                    self.market.filtered(),
                    |id| self.market.is_favorite(id),
                    &self.images,
                );

                column![container(search).padding([10.0, 20.0]), grid].into()
            }
            Screen::Favorites => ui::favorites::favorites_view(&self.market, &self.images),
        };

        let favorites_label = format!("Favorites ({})", self.market.favorite_count());
        let bottom_bar = row![
            bar_button("Market".to_string(), Message::ShowMarket),
            bar_button(favorites_label, Message::ShowFavorites),
        ]
        .height(40);

        column![body, bottom_bar]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// A full-width bottom bar button.
fn bar_button(label: String, press: Message) -> Element<'static, Message> {
    button(
        text(label)
            .size(16)
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_press(press)
    .style(button::primary)
    .width(Length::Fill)
    .into()
}

fn main() -> iced::Result {
    iced::application("Watch Market", WatchMarket::update, WatchMarket::view)
        .theme(WatchMarket::theme)
        .centered()
        .run_with(WatchMarket::new)
}
