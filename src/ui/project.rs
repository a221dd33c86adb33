/// Project card: carousel on one side, description on the other
use iced::widget::{column, container, row, text, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;
use std::time::Instant;

use super::carousel;
use crate::gallery::ProjectEntry;
use crate::media::ImageSlots;
use crate::state::i18n::{Labels, Language};
use crate::Message;

pub fn view<'a>(
    index: usize,
    entry: &'a ProjectEntry,
    slots: &'a ImageSlots,
    language: Language,
    labels: &'static Labels,
    now: Instant,
) -> Element<'a, Message> {
    let project = &entry.project;

    let tags: Vec<Element<'a, Message>> = project
        .tags
        .iter()
        .map(|tag| {
            container(text(tag.as_str()).size(12))
                .padding([2, 8])
                .style(container::rounded_box)
                .into()
        })
        .collect();

    let mut links = row![].spacing(16);
    if let Some(url) = &project.live_demo {
        links = links.push(text(format!("↗ {}: {}", labels.live_demo, url)).size(13));
    }
    if let Some(url) = &project.github {
        links = links.push(text(format!("GitHub: {}", url)).size(13));
    }

    let details: Column<'a, Message> = column![
        text(project.title.resolve(language)).size(24),
        text(project.description.resolve(language)).size(15),
        Wrap::with_elements(tags).spacing(6.0).line_spacing(6.0),
        links,
    ]
    .spacing(12)
    .width(Length::FillPortion(1));

    let preview = container(carousel::view(index, &entry.carousel, slots, labels, now))
        .width(Length::FillPortion(1));

    // Alternate sides down the page
    let card = if index % 2 == 1 {
        row![details, preview]
    } else {
        row![preview, details]
    };

    card.spacing(32).align_y(Alignment::Center).into()
}
