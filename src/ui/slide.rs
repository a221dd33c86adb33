/// One slide: the decoded image, a loading note, or a failure placeholder
use iced::widget::{container, image, text};
use iced::{Background, Color, ContentFit, Element, Length, Theme};

use crate::media::Slot;
use crate::state::i18n::Labels;
use crate::Message;

pub fn slide<'a>(slot: &Slot, labels: &'static Labels, fit: ContentFit, opacity: f32) -> Element<'a, Message> {
    match slot {
        Slot::Ready(handle) => image(handle.clone())
            .content_fit(fit)
            .opacity(opacity)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Slot::Loading => placeholder(labels.loading, opacity),
        Slot::Failed(_) => placeholder(labels.image_failed, opacity),
    }
}

fn placeholder<'a>(label: &'static str, opacity: f32) -> Element<'a, Message> {
    container(text(label).size(14))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.25 * opacity))),
            text_color: Some(Color::from_rgba(0.6, 0.6, 0.6, opacity)),
            ..container::Style::default()
        })
        .into()
}
