use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::scrollable;
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::catalog::data::{Watch, WatchId};
use crate::ui::cell::{watch_cell, CellStyle};
use crate::Message;

/// Scrollable id of the market grid, used for scroll-to-top.
pub fn market_scroll_id() -> scrollable::Id {
    scrollable::Id::new("market-grid")
}

/// A wrapped grid of watch cells.
pub fn watch_grid<'a>(
    watches: Vec<&'a Watch>,
    is_favorite: impl Fn(WatchId) -> bool,
    images: &HashMap<WatchId, Handle>,
    style: CellStyle,
) -> Element<'a, Message> {
    let cells: Vec<Element<'a, Message>> = watches
        .into_iter()
        .map(|watch| watch_cell(watch, is_favorite(watch.id), images.get(&watch.id), style))
        .collect();

    Wrap::with_elements(cells)
        .spacing(20.0)
        .line_spacing(20.0)
        .padding(20.0)
        .into()
}

/// The main market screen body: the grid, scrollable, behind a stable id.
pub fn market_grid<'a>(
    watches: Vec<&'a Watch>,
    is_favorite: impl Fn(WatchId) -> bool,
    images: &HashMap<WatchId, Handle>,
) -> Element<'a, Message> {
    scrollable(watch_grid(watches, is_favorite, images, CellStyle::MARKET))
        .id(market_scroll_id())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
