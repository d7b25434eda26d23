/// Category filter bar
///
/// One button per derived category; the active one is highlighted.
/// Pressing a button switches the gallery filter.

use iced::widget::{button, text};
use iced::Element;
use iced_aw::Wrap;

use crate::Message;

/// Build the row of category filter buttons
pub fn filter_bar<'a>(categories: &'a [String], active: &str) -> Element<'a, Message> {
    let buttons: Vec<Element<'a, Message>> = categories
        .iter()
        .map(|category| {
            let is_active = category.as_str() == active;

            button(text(category.as_str()).size(14))
                .padding([6.0, 14.0])
                .style(move |theme, status| {
                    if is_active {
                        button::primary(theme, status)
                    } else {
                        button::secondary(theme, status)
                    }
                })
                .on_press(Message::FilterSelected(category.clone()))
                .into()
        })
        .collect();

    Wrap::with_elements(buttons)
        .spacing(8.0)
        .line_spacing(8.0)
        .into()
}
