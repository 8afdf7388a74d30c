// SPDX-License-Identifier: MPL-2.0
//! `iced_notice` is a dismissible toast notice widget for the Iced GUI
//! framework.
//!
//! One [`Notice`] is one transient toast: it shows caller-supplied content,
//! optionally auto-dismisses after a timeout (suspended while hovered),
//! optionally shows a close affordance, and reports its lifecycle back to
//! the controller that owns it. Stacking, positioning, and queueing of
//! multiple notices stay with that controller; this crate only handles the
//! single item.
//!
//! # Components
//!
//! - [`notice`] - The `Notice` state machine with its `Message`/`Event`
//!   types and the `Notice::view` widget composition
//! - [`config`] - Declarative `NoticeConfig` description
//! - [`closable`] - Close affordance configuration and resolution
//! - [`timer`] - Auto-dismiss deadline tracking
//! - [`tokens`] - Design tokens for the default look
//!
//! # Usage
//!
//! ```ignore
//! use iced_notice::{Closable, Event, Notice, NoticeConfig};
//! use std::time::Instant;
//!
//! // Create a closable notice that auto-dismisses after one second.
//! let config = NoticeConfig::new().duration(1.0).closable(Closable::Enabled);
//! let mut notice = Notice::new("save-ok", config, Instant::now());
//!
//! // In update, feed messages back and react to the events:
//! // match notice.update(message, Instant::now()) {
//! //     Event::Closed(key) => remove_from_list(key),
//! //     Event::Clicked => focus_related_item(),
//! //     Event::None => {}
//! // }
//!
//! // In view:
//! // notice.view(text("Saved")).map(Message::Notice)
//! //
//! // In subscription:
//! // notice.subscription().map(Message::Notice)
//! ```
//!
//! # Design Considerations
//!
//! - Auto-dismiss defaults to 4.5 s and restarts from zero when hover ends
//! - The close signal is at-most-once, whatever the trigger
//! - Accessibility attributes from the closability descriptor are filtered
//!   and exposed as data for embedders with an accessibility bridge

#![doc(html_root_url = "https://docs.rs/iced_notice/0.1.0")]

pub mod closable;
pub mod config;
pub mod key;
pub mod notice;
pub mod timer;
pub mod tokens;
mod view;

pub use closable::{Closable, CloseDescriptor, ResolvedClose, DEFAULT_CLOSE_LABEL};
pub use config::{NoticeConfig, DEFAULT_CLOSE_ICON, DEFAULT_DURATION_SECS};
pub use key::NoticeKey;
pub use notice::{Event, Message, Notice};
