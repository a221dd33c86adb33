/// Greeting, bio, about text and the services grid
use iced::widget::{column, container, text, Column};
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::state::catalog::{Profile, Service};
use crate::state::i18n::{Labels, Language};
use crate::Message;

/// Width of one service card
const SERVICE_CARD_WIDTH: f32 = 320.0;

pub fn view<'a>(
    profile: Option<&'a Profile>,
    services: &'a [Service],
    language: Language,
    labels: &'static Labels,
) -> Element<'a, Message> {
    let mut sections = Column::new().spacing(40);

    if let Some(profile) = profile {
        let mut hero = column![
            text(format!(
                "{} {}.",
                profile.greeting.resolve(language),
                profile.name.resolve(language)
            ))
            .size(40),
            text(profile.role.resolve(language)).size(20),
        ]
        .spacing(12);
        for paragraph in &profile.bio {
            hero = hero.push(text(paragraph.resolve(language)).size(16));
        }
        sections = sections.push(hero);

        if !profile.about.en.is_empty() || !profile.principles.is_empty() {
            let mut about = column![
                text(labels.about).size(28),
                text(profile.about.resolve(language)).size(15),
            ]
            .spacing(12);
            for principle in &profile.principles {
                about = about.push(text(format!("• {}", principle.resolve(language))).size(15));
            }
            sections = sections.push(about);
        }
    }

    if !services.is_empty() {
        let cards: Vec<Element<'a, Message>> = services
            .iter()
            .map(|service| {
                container(
                    column![
                        text(service.title.resolve(language)).size(18),
                        text(service.description.resolve(language)).size(14),
                    ]
                    .spacing(8),
                )
                .padding(16)
                .width(Length::Fixed(SERVICE_CARD_WIDTH))
                .style(container::rounded_box)
                .into()
            })
            .collect();

        sections = sections.push(
            column![
                text(labels.services).size(28),
                Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0),
            ]
            .spacing(16),
        );
    }

    sections.into()
}
