/// Full-window lightbox overlay
///
/// The whole overlay is a click target that closes the lightbox. The image
/// and its controls sit inside an `opaque` layer so clicks there never reach
/// the backdrop, and the overlay itself is opaque so nothing underneath
/// (including the page scrollable) sees pointer input while it is shown.
use iced::widget::{button, column, container, mouse_area, opaque, row, stack, text, Space};
use iced::{Alignment, Background, Color, ContentFit, Element, Length, Theme};
use std::time::Instant;

use super::carousel::indicators;
use super::slide::slide;
use crate::gallery::lightbox::Session;
use crate::gallery::GalleryMessage;
use crate::media::ImageSlots;
use crate::state::i18n::Labels;
use crate::Message;

pub fn view<'a>(
    session: &'a Session,
    slots: &'a ImageSlots,
    labels: &'static Labels,
    now: Instant,
) -> Element<'a, Message> {
    let sequence = session.sequence();
    let active = slots.get(session.active_image());

    let slides: Element<'a, Message> = match session
        .fade()
        .filter(|f| f.is_running(now))
        .and_then(|f| sequence.get(f.from).map(|r| (f.progress(now), slots.get(r))))
    {
        Some((progress, outgoing)) => stack![
            slide(outgoing, labels, ContentFit::Contain, 1.0 - progress),
            slide(active, labels, ContentFit::Contain, progress),
        ]
        .into(),
        None => slide(active, labels, ContentFit::Contain, 1.0),
    };

    let mut stage = column![container(slides).width(Length::Fill).height(Length::Fill)]
        .spacing(16)
        .align_x(Alignment::Center);

    if sequence.len() > 1 {
        stage = stage.push(
            row![
                button(text("‹").size(24))
                    .on_press(Message::Gallery(GalleryMessage::LightboxPrevious))
                    .padding([4, 14])
                    .style(button::secondary),
                indicators(sequence.len(), session.active_index(), |index| {
                    Message::Gallery(GalleryMessage::LightboxGoTo(index))
                }),
                button(text("›").size(24))
                    .on_press(Message::Gallery(GalleryMessage::LightboxNext))
                    .padding([4, 14])
                    .style(button::secondary),
            ]
            .spacing(16)
            .align_y(Alignment::Center),
        );
    }

    let header = row![
        text(session.title()).size(20),
        Space::with_width(Length::Fill),
        button(text(format!("✕ {}", labels.close)).size(14))
            .on_press(Message::Gallery(GalleryMessage::Close))
            .padding([6, 12])
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    let panel = column![
        header,
        opaque(container(stage).width(Length::Fill).height(Length::Fill)),
    ]
    .spacing(16)
    .padding(32);

    let backdrop = mouse_area(
        container(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.95))),
                text_color: Some(Color::WHITE),
                ..container::Style::default()
            }),
    )
    .on_press(Message::Gallery(GalleryMessage::Close));

    opaque(backdrop)
}
