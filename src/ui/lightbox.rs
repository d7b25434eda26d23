/// Lightbox modal
///
/// Stacks a dimmed, click-to-dismiss backdrop over the gallery page
/// with the selected image enlarged in a centered panel.

use iced::widget::image::Handle;
use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, opaque, row, stack,
    text,
};
use iced::{Alignment, Color, Element, Length};

use crate::state::data::ImageRecord;
use crate::Message;

/// Stack the lightbox for `record` over the base page.
///
/// Clicking the backdrop or the close button dismisses it; clicks on
/// the panel itself are swallowed so they don't fall through to the
/// grid underneath.
pub fn lightbox_over<'a>(
    base: Element<'a, Message>,
    record: &'a ImageRecord,
    handle: Option<&Handle>,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone()).width(Length::Fill).into(),
        // Selected before its preload resolved; keep the caption visible
        None => container(text("Still loading…").size(16)).padding(60).into(),
    };

    let panel = container(
        column![
            row![
                horizontal_space(),
                button(text("Close").size(14))
                    .style(button::secondary)
                    .on_press(Message::CloseLightbox),
            ],
            preview,
            text(record.category.as_str()).size(14),
            text(record.alt_text.as_str()).size(20),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .max_width(900)
    .padding(16)
    .style(|_theme| container::Style {
        background: Some(Color { a: 0.95, ..Color::BLACK }.into()),
        ..container::Style::default()
    });

    stack![
        base,
        opaque(
            mouse_area(center(opaque(panel)).style(|_theme| {
                container::Style {
                    background: Some(Color { a: 0.8, ..Color::BLACK }.into()),
                    ..container::Style::default()
                }
            }))
            .on_press(Message::CloseLightbox)
        )
    ]
    .into()
}
