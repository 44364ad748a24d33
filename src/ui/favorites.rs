use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{container, scrollable, text};
use iced::{Element, Length};

use crate::catalog::data::WatchId;
use crate::state::market::MarketState;
use crate::ui::cell::CellStyle;
use crate::ui::grid::watch_grid;
use crate::Message;

/// The favorites screen: the favorited watches in catalog order, or an
/// empty-state message when nothing is favorited yet.
pub fn favorites_view<'a>(
    market: &'a MarketState,
    images: &HashMap<WatchId, Handle>,
) -> Element<'a, Message> {
    let favorited = market.favorited();

    if favorited.is_empty() {
        return container(
            text("You do not have favorite watches")
                .size(20)
                .style(text::secondary),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into();
    }

    scrollable(watch_grid(
        favorited,
        |id| market.is_favorite(id),
        images,
        CellStyle::FAVORITES,
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
