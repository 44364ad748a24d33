use iced::widget::image::Handle;
use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length};

use crate::catalog::data::Watch;
use crate::Message;

/// Layout parameters for a watch cell.
///
/// The market grid and the favorites view render the same cell with
/// different sizing; the differences live here as data, not as separate
/// view code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    /// Fixed cell width
    pub width: f32,
    /// Side length of the (square) image region
    pub image_size: f32,
    /// Vertical spacing between cell rows
    pub spacing: f32,
    /// Inner padding of the cell
    pub padding: f32,
}

impl CellStyle {
    /// Cells in the main market grid.
    pub const MARKET: Self = Self {
        width: 220.0,
        image_size: 100.0,
        spacing: 16.0,
        padding: 16.0,
    };

    /// Slightly tighter cells in the favorites view.
    pub const FAVORITES: Self = Self {
        width: 190.0,
        image_size: 80.0,
        spacing: 12.0,
        padding: 12.0,
    };
}

/// One watch cell: image (or placeholder), name, price, heart toggle.
pub fn watch_cell<'a>(
    watch: &'a Watch,
    is_favorite: bool,
    image: Option<&Handle>,
    style: CellStyle,
) -> Element<'a, Message> {
    // Missing image and failed-to-resolve image both land here with no
    // handle: the cell reserves the same blank region either way.
    let picture: Element<'a, Message> = match image {
        Some(handle) => iced::widget::image(handle.clone())
            .width(Length::Fixed(style.image_size))
            .height(Length::Fixed(style.image_size))
            .into(),
        None => Space::new(
            Length::Fixed(style.image_size),
            Length::Fixed(style.image_size),
        )
        .into(),
    };

    let heart = button(text(if is_favorite { "♥" } else { "♡" }).size(22))
        .on_press(Message::ToggleFavorite(watch.id))
        .style(if is_favorite {
            button::danger
        } else {
            button::text
        });

    let content = column![
        picture,
        text(&watch.name).size(18),
        text(watch.price_label()).size(14),
        heart,
    ]
    .spacing(style.spacing)
    .align_x(Alignment::Center)
    .width(Length::Fixed(style.width));

    container(content)
        .padding(style.padding)
        .style(container::rounded_box)
        .into()
}
