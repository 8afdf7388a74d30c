// SPDX-License-Identifier: MPL-2.0
//! Demo application: a caller-side notice stack.
//!
//! The gallery owns the list of live notices (the role the widget leaves to
//! its surrounding controller): it pushes notices with different
//! configurations, routes messages by key, removes entries on `Closed`, and
//! bumps the retrigger token to restart pending timers.

use iced::widget::{button, text, Column, Row};
use iced::{Element, Subscription};
use iced_notice::{Closable, CloseDescriptor, Event, Notice, NoticeConfig, NoticeKey};
use std::time::Instant;

fn main() -> iced::Result {
    iced::application(Gallery::default, Gallery::update, Gallery::view)
        .title("iced_notice gallery")
        .subscription(Gallery::subscription)
        .run()
}

struct Item {
    notice: Notice,
    body: String,
}

#[derive(Default)]
struct Gallery {
    items: Vec<Item>,
    next_key: u64,
    bumps: u64,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    PushDefault,
    PushClosable,
    PushSticky,
    BumpAll,
    Notice(NoticeKey, iced_notice::Message),
}

impl Gallery {
    fn push(&mut self, config: NoticeConfig, body: impl Into<String>) {
        let key = NoticeKey::from(format!("notice-{}", self.next_key));
        self.next_key += 1;
        self.items.push(Item {
            notice: Notice::new(key, config, Instant::now()),
            body: body.into(),
        });
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::PushDefault => {
                self.push(NoticeConfig::new(), "Auto-dismisses after 4.5 s");
            }
            Message::PushClosable => {
                self.push(
                    NoticeConfig::new().duration(8.0).closable(Closable::Enabled),
                    "Closable, 8 s timeout",
                );
            }
            Message::PushSticky => {
                let closable = Closable::Custom(
                    CloseDescriptor::new()
                        .icon("X")
                        .attr("aria-label", "Dismiss"),
                );
                self.push(
                    NoticeConfig::new().sticky().closable(closable),
                    "Sticky until dismissed",
                );
            }
            Message::BumpAll => {
                self.bumps += 1;
                let now = Instant::now();
                for item in &mut self.items {
                    item.notice.retrigger(self.bumps, now);
                }
            }
            Message::Notice(key, message) => {
                let now = Instant::now();
                let event = self
                    .items
                    .iter_mut()
                    .find(|item| item.notice.key() == &key)
                    .map(|item| item.notice.update(message, now));

                match event {
                    Some(Event::Closed(key)) => {
                        self.status = format!("closed {key}");
                        self.items.retain(|item| item.notice.key() != &key);
                    }
                    Some(Event::Clicked) => {
                        self.status = format!("clicked {key}");
                    }
                    Some(Event::None) | None => {}
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Row::new()
            .spacing(8)
            .push(button("Push default").on_press(Message::PushDefault))
            .push(button("Push closable").on_press(Message::PushClosable))
            .push(button("Push sticky").on_press(Message::PushSticky))
            .push(button("Bump timers").on_press(Message::BumpAll));

        let notices = self
            .items
            .iter()
            .fold(Column::new().spacing(8), |column, item| {
                let key = item.notice.key().clone();
                column.push(
                    item.notice
                        .view(text(item.body.as_str()))
                        .map(move |message| Message::Notice(key.clone(), message)),
                )
            });

        Column::new()
            .spacing(16)
            .padding(16)
            .push(controls)
            .push(text(self.status.as_str()))
            .push(notices)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(self.items.iter().map(|item| {
            item.notice
                .subscription()
                .with(item.notice.key().clone())
                .map(|(key, message)| Message::Notice(key, message))
        }))
    }
}
