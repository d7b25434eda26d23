/// The image grid
///
/// Cards for every record matching the active filter, laid out in a
/// wrapping grid. Until a source is confirmed loaded the card shows a
/// placeholder: "Loading…" while the preload pass is in flight, and
/// "Unavailable" for sources that failed to load this run.

use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, text};
use iced::{ContentFit, Element};
use iced_aw::Wrap;

use crate::state::data::ImageRecord;
use crate::state::gallery::Gallery;
use crate::Message;

/// Edge size of one grid card (cards are square)
const CARD_SIZE: f32 = 220.0;

/// Build the wrapped grid of image cards for the current filter
pub fn image_grid<'a>(
    gallery: &'a Gallery,
    handles: &'a HashMap<String, Handle>,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = gallery
        .filtered_images()
        .into_iter()
        .map(|record| card(gallery, handles, record))
        .collect();

    if cards.is_empty() {
        return container(text("No images in this category").size(16))
            .padding(40)
            .into();
    }

    Wrap::with_elements(cards)
        .spacing(12.0)
        .line_spacing(12.0)
        .into()
}

/// One clickable card: preview (or placeholder) plus caption
fn card<'a>(
    gallery: &'a Gallery,
    handles: &'a HashMap<String, Handle>,
    record: &'a ImageRecord,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match handles.get(&record.src) {
        Some(handle) if gallery.is_loaded(&record.src) => image(handle.clone())
            .width(CARD_SIZE)
            .height(CARD_SIZE)
            .content_fit(ContentFit::Cover)
            .into(),
        _ if gallery.is_preloading() => placeholder("Loading…"),
        _ => placeholder("Unavailable"),
    };

    let caption = column![
        text(record.category.as_str()).size(12),
        text(record.alt_text.as_str()).size(14),
    ]
    .spacing(2);

    button(column![preview, caption].spacing(6))
        .style(button::text)
        .padding(4)
        .on_press(Message::ImageClicked(record.id))
        .into()
}

/// Square placeholder shown while an image is not displayable
fn placeholder(label: &str) -> Element<'_, Message> {
    container(text(label).size(14))
        .center_x(CARD_SIZE)
        .center_y(CARD_SIZE)
        .style(container::rounded_box)
        .into()
}
