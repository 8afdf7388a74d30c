// SPDX-License-Identifier: MPL-2.0
//! Declarative notice description.
//!
//! A [`NoticeConfig`] is a bag of render-time hints: every field has a safe
//! default and malformed values degrade instead of failing. The body content
//! is not part of the config; it is an opaque element handed to
//! [`Notice::view`](crate::notice::Notice::view) at render time.

use crate::closable::Closable;
use iced::widget::container;
use std::time::Duration;

/// Auto-dismiss delay applied when the caller does not set one, in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 4.5;

/// Glyph shown by the close affordance when nothing overrides it.
pub const DEFAULT_CLOSE_ICON: &str = "x";

/// Declarative description of one notice.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct NoticeConfig {
    /// Auto-dismiss delay in seconds. `None`, non-positive, or non-finite
    /// values disable auto-dismiss (manual close only).
    pub duration: Option<f64>,
    /// Close affordance configuration.
    pub closable: Closable,
    /// Default glyph for the close affordance. A
    /// [`CloseDescriptor`](crate::closable::CloseDescriptor) icon wins over
    /// this.
    pub close_icon: String,
    /// Fixed container width override, in logical pixels.
    pub width: Option<f32>,
    /// Container appearance override, drawn instead of the built-in toast
    /// style.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub style: Option<container::Style>,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            duration: Some(DEFAULT_DURATION_SECS),
            closable: Closable::Disabled,
            close_icon: DEFAULT_CLOSE_ICON.to_owned(),
            width: None,
            style: None,
        }
    }
}

impl NoticeConfig {
    /// Creates a config with the default auto-dismiss delay and no close
    /// affordance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the auto-dismiss delay in seconds.
    #[must_use]
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = Some(secs);
        self
    }

    /// Disables auto-dismiss; the notice stays until closed explicitly.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.duration = None;
        self
    }

    /// Sets the close affordance configuration.
    #[must_use]
    pub fn closable(mut self, closable: Closable) -> Self {
        self.closable = closable;
        self
    }

    /// Sets the default close affordance glyph.
    #[must_use]
    pub fn close_icon(mut self, icon: impl Into<String>) -> Self {
        self.close_icon = icon.into();
        self
    }

    /// Sets a fixed container width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Overrides the container appearance.
    #[must_use]
    pub fn style(mut self, style: container::Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Returns the sanitized dismiss delay.
    ///
    /// `Some` iff the configured duration is a positive finite number of
    /// seconds; everything else means "never auto-dismiss".
    #[must_use]
    pub fn dismiss_delay(&self) -> Option<Duration> {
        match self.duration {
            Some(secs) if secs.is_finite() && secs > 0.0 => Some(Duration::from_secs_f64(secs)),
            _ => None,
        }
    }
}
