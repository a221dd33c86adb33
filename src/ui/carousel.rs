/// Inline carousel view for one project card
use iced::widget::{button, column, mouse_area, row, stack, text, Row, Space};
use iced::{Alignment, ContentFit, Element, Length};
use std::time::Instant;

use super::slide::slide;
use crate::gallery::{Carousel, GalleryMessage};
use crate::media::ImageSlots;
use crate::state::i18n::Labels;
use crate::Message;

/// Height of the preview strip in pixels
const PREVIEW_HEIGHT: f32 = 280.0;

pub fn view<'a>(
    project: usize,
    carousel: &'a Carousel,
    slots: &'a ImageSlots,
    labels: &'static Labels,
    now: Instant,
) -> Element<'a, Message> {
    let sequence = carousel.sequence();
    let active = slots.get(carousel.active_image());

    // Cross-fade: outgoing slide underneath, incoming slide on top
    let slides: Element<'a, Message> = match carousel.fade().filter(|f| f.is_running(now)) {
        Some(fade) => {
            let progress = fade.progress(now);
            let outgoing = sequence.get(fade.from).map(|r| slots.get(r));
            match outgoing {
                Some(outgoing) => stack![
                    slide(outgoing, labels, ContentFit::Cover, 1.0 - progress),
                    slide(active, labels, ContentFit::Cover, progress),
                ]
                .into(),
                None => slide(active, labels, ContentFit::Cover, 1.0),
            }
        }
        None => slide(active, labels, ContentFit::Cover, 1.0),
    };

    let preview = mouse_area(
        iced::widget::container(slides)
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT)),
    )
    .on_press(Message::Gallery(GalleryMessage::Activate(project)));

    if sequence.len() == 1 {
        return preview.into();
    }

    let dots = indicators(sequence.len(), carousel.active_index(), move |index| {
        Message::Gallery(GalleryMessage::CarouselGoTo { project, index })
    });

    let controls = row![
        button(text("‹").size(18))
            .on_press(Message::Gallery(GalleryMessage::CarouselPrevious(project)))
            .padding([2, 10])
            .style(button::secondary),
        Space::with_width(Length::Fill),
        dots,
        Space::with_width(Length::Fill),
        text(format!("{} / {}", carousel.active_index() + 1, sequence.len())).size(12),
        button(text("›").size(18))
            .on_press(Message::Gallery(GalleryMessage::CarouselNext(project)))
            .padding([2, 10])
            .style(button::secondary),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    column![preview, controls].spacing(8).into()
}

/// Indicator dots; the active one is drawn wider
pub fn indicators<'a>(
    count: usize,
    active: usize,
    on_select: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let dots = (0..count).map(|index| {
        let width = if index == active { 24.0 } else { 8.0 };
        button(Space::new(Length::Fixed(width), Length::Fixed(8.0)))
            .on_press(on_select(index))
            .padding(0)
            .style(if index == active {
                button::primary
            } else {
                button::secondary
            })
            .into()
    });

    Row::with_children(dots)
        .spacing(6)
        .align_y(Alignment::Center)
        .into()
}
