// SPDX-License-Identifier: MPL-2.0
//! Notice state machine: hover tracking, dismiss timing, close reporting.
//!
//! This module follows a "state down, messages up" pattern: the surrounding
//! controller owns a [`Notice`] per live toast, feeds it [`Message`]s from
//! the widgets and the tick subscription, and reacts to the [`Event`]s
//! `update` returns. The notice never removes itself from any list; it only
//! reports that it should be removed.

use crate::closable::ResolvedClose;
use crate::config::NoticeConfig;
use crate::key::NoticeKey;
use crate::timer::DismissTimer;
use iced::{time, Subscription};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Tick cadence while a dismiss deadline is pending.
///
/// Bounds how late after its deadline a notice can close.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Messages consumed by [`Notice::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer entered the notice body.
    Entered,
    /// Pointer left the notice body.
    Exited,
    /// Pointer activation of the notice body.
    Pressed,
    /// Activation of the close affordance.
    ClosePressed,
    /// Periodic check of the dismiss deadline.
    Tick,
}

/// Events emitted to the surrounding controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Nothing for the controller to do.
    None,
    /// The notice should be removed; carries the caller-assigned key.
    ///
    /// Emitted at most once per notice, whether the trigger was the timer
    /// or the close affordance.
    Closed(NoticeKey),
    /// The notice body was activated.
    Clicked,
}

/// A single dismissible notice.
#[derive(Debug, Clone)]
pub struct Notice {
    key: NoticeKey,
    config: NoticeConfig,
    /// Memoized resolution of `config.closable` against `config.close_icon`;
    /// recomputed only when one of those two inputs is replaced.
    resolved: Option<ResolvedClose>,
    /// True while the pointer is over the notice body.
    hovering: bool,
    timer: DismissTimer,
    /// Retrigger token last seen from the caller.
    times: u64,
    /// Set once [`Event::Closed`] has been emitted. A close press and a
    /// tick can be queued in the same message batch; this keeps the close
    /// signal at-most-once.
    closed: bool,
}

impl Notice {
    /// Creates a notice and arms its dismiss deadline when the config calls
    /// for one.
    ///
    /// `now` is the creation instant; callers pass [`Instant::now()`].
    pub fn new(key: impl Into<NoticeKey>, config: NoticeConfig, now: Instant) -> Self {
        let resolved = config.closable.resolve(&config.close_icon);
        let mut notice = Self {
            key: key.into(),
            config,
            resolved,
            hovering: false,
            timer: DismissTimer::idle(),
            times: 0,
            closed: false,
        };
        notice.rearm(now);
        notice
    }

    /// The caller-assigned key.
    #[must_use]
    pub fn key(&self) -> &NoticeKey {
        &self.key
    }

    /// The current declarative description.
    #[must_use]
    pub fn config(&self) -> &NoticeConfig {
        &self.config
    }

    /// Whether the pointer is currently over the notice body.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether the close signal has already been emitted.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether an auto-dismiss deadline is pending.
    #[must_use]
    pub fn has_pending_dismiss(&self) -> bool {
        self.timer.is_armed()
    }

    /// The pending dismiss deadline, if any.
    #[must_use]
    pub fn dismiss_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// The resolved close affordance, if one is rendered.
    #[must_use]
    pub fn resolved_close(&self) -> Option<&ResolvedClose> {
        self.resolved.as_ref()
    }

    /// Accessible label of the close affordance, if one is rendered.
    #[must_use]
    pub fn close_label(&self) -> Option<&str> {
        self.resolved.as_ref().map(ResolvedClose::label)
    }

    /// Filtered accessibility attributes of the close affordance, if one is
    /// rendered. For embedders that bridge to an accessibility tree.
    #[must_use]
    pub fn close_attrs(&self) -> Option<&BTreeMap<String, String>> {
        self.resolved.as_ref().map(ResolvedClose::attrs)
    }

    /// Replaces the declarative description.
    ///
    /// The closability resolution is recomputed only when the closable
    /// configuration or the default icon changed; the dismiss deadline is
    /// reset only when the duration changed.
    pub fn set_config(&mut self, config: NoticeConfig, now: Instant) {
        let closable_changed = config.closable != self.config.closable
            || config.close_icon != self.config.close_icon;
        let duration_changed = config.duration != self.config.duration;

        if closable_changed {
            self.resolved = config.closable.resolve(&config.close_icon);
        }
        self.config = config;
        if duration_changed {
            self.rearm(now);
        }
    }

    /// Applies the caller's retrigger token.
    ///
    /// A changed value cancels any pending deadline and arms a fresh
    /// full-length one, letting the caller "bump" a re-shown notice without
    /// recreating it. Re-sending the current value is a no-op.
    pub fn retrigger(&mut self, times: u64, now: Instant) {
        if times != self.times {
            self.times = times;
            self.rearm(now);
        }
    }

    /// Updates the state and returns an [`Event`] for the controller.
    ///
    /// `now` is the dispatch instant; callers pass [`Instant::now()`].
    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Entered => {
                self.hovering = true;
                self.rearm(now);
                Event::None
            }
            Message::Exited => {
                self.hovering = false;
                self.rearm(now);
                Event::None
            }
            Message::Pressed => Event::Clicked,
            Message::ClosePressed => self.close(),
            Message::Tick => {
                if self.timer.fire(now) {
                    self.close()
                } else {
                    Event::None
                }
            }
        }
    }

    /// Returns the tick subscription needed to detect deadline elapse.
    ///
    /// Active only while a deadline is pending, so an idle or hovered
    /// notice costs nothing.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.timer.is_armed() {
            time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Reconciles the dismiss deadline with the current inputs: cancel
    /// unconditionally, then arm a fresh full-length deadline iff the
    /// notice is not hovered, not closed, and has a usable duration.
    fn rearm(&mut self, now: Instant) {
        self.timer.cancel();
        if self.closed || self.hovering {
            return;
        }
        if let Some(delay) = self.config.dismiss_delay() {
            self.timer.arm(delay, now);
        }
    }

    fn close(&mut self) -> Event {
        if self.closed {
            return Event::None;
        }
        self.closed = true;
        self.timer.cancel();
        Event::Closed(self.key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closable::{Closable, CloseDescriptor};

    fn notice(config: NoticeConfig, now: Instant) -> Notice {
        Notice::new("test", config, now)
    }

    #[test]
    fn new_notice_arms_the_default_deadline() {
        let base = Instant::now();
        let notice = notice(NoticeConfig::new(), base);

        assert_eq!(
            notice.dismiss_deadline(),
            Some(base + Duration::from_millis(4500))
        );
    }

    #[test]
    fn sticky_notice_never_arms() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new().sticky(), base);

        assert!(!notice.has_pending_dismiss());
        let event = notice.update(Message::Tick, base + Duration::from_secs(3600));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn zero_duration_notice_never_arms() {
        let base = Instant::now();
        let notice = notice(NoticeConfig::new().duration(0.0), base);
        assert!(!notice.has_pending_dismiss());
    }

    #[test]
    fn tick_at_deadline_closes_once() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new().duration(1.0), base);

        let deadline = base + Duration::from_secs(1);
        assert_eq!(notice.update(Message::Tick, base), Event::None);
        assert_eq!(
            notice.update(Message::Tick, deadline),
            Event::Closed(NoticeKey::from("test"))
        );
        assert_eq!(
            notice.update(Message::Tick, deadline + Duration::from_secs(1)),
            Event::None
        );
    }

    #[test]
    fn hover_cancels_the_pending_deadline() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new().duration(1.0), base);

        notice.update(Message::Entered, base + Duration::from_millis(500));
        assert!(!notice.has_pending_dismiss());
        assert_eq!(
            notice.update(Message::Tick, base + Duration::from_secs(5)),
            Event::None
        );
    }

    #[test]
    fn unhover_restarts_a_full_interval() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new().duration(2.0), base);

        notice.update(Message::Entered, base + Duration::from_secs(1));
        let exit = base + Duration::from_secs(10);
        notice.update(Message::Exited, exit);

        // Fresh interval from the disengage moment, not resumed remainder.
        assert_eq!(
            notice.dismiss_deadline(),
            Some(exit + Duration::from_secs(2))
        );
    }

    #[test]
    fn unhover_with_disabled_duration_stays_idle() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new().sticky(), base);

        notice.update(Message::Entered, base);
        notice.update(Message::Exited, base + Duration::from_secs(1));
        assert!(!notice.has_pending_dismiss());
    }

    #[test]
    fn retrigger_restarts_the_full_deadline() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new().duration(3.0), base);

        let bump = base + Duration::from_secs(2);
        notice.retrigger(1, bump);
        assert_eq!(
            notice.dismiss_deadline(),
            Some(bump + Duration::from_secs(3))
        );
    }

    #[test]
    fn retrigger_with_unchanged_token_is_a_noop() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new().duration(3.0), base);

        notice.retrigger(0, base + Duration::from_secs(2));
        assert_eq!(
            notice.dismiss_deadline(),
            Some(base + Duration::from_secs(3))
        );
    }

    #[test]
    fn close_press_emits_closed_with_the_key() {
        let base = Instant::now();
        let mut notice = Notice::new("n1", NoticeConfig::new().closable(Closable::Enabled), base);

        assert_eq!(
            notice.update(Message::ClosePressed, base),
            Event::Closed(NoticeKey::from("n1"))
        );
        assert!(notice.is_closed());
    }

    #[test]
    fn racing_close_triggers_emit_a_single_event() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new().duration(1.0), base);

        // Timer elapse and close press land in the same batch.
        let deadline = base + Duration::from_secs(1);
        assert_eq!(
            notice.update(Message::Tick, deadline),
            Event::Closed(NoticeKey::from("test"))
        );
        assert_eq!(notice.update(Message::ClosePressed, deadline), Event::None);
    }

    #[test]
    fn closed_notice_does_not_rearm_on_retrigger() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new().duration(1.0), base);

        notice.update(Message::ClosePressed, base);
        notice.retrigger(7, base);
        assert!(!notice.has_pending_dismiss());
    }

    #[test]
    fn body_press_forwards_as_clicked() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new(), base);
        assert_eq!(notice.update(Message::Pressed, base), Event::Clicked);
    }

    #[test]
    fn duration_change_resets_the_deadline() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new().duration(5.0), base);

        let edit = base + Duration::from_secs(1);
        notice.set_config(NoticeConfig::new().duration(1.0), edit);
        assert_eq!(
            notice.dismiss_deadline(),
            Some(edit + Duration::from_secs(1))
        );
    }

    #[test]
    fn closable_change_leaves_the_deadline_alone() {
        let base = Instant::now();
        let mut notice = notice(NoticeConfig::new().duration(5.0), base);
        let deadline = notice.dismiss_deadline();

        notice.set_config(
            NoticeConfig::new().duration(5.0).closable(Closable::Enabled),
            base + Duration::from_secs(2),
        );
        assert_eq!(notice.dismiss_deadline(), deadline);
        assert!(notice.resolved_close().is_some());
    }

    #[test]
    fn closability_resolution_is_memoized_per_inputs() {
        let base = Instant::now();
        let closable = Closable::Custom(CloseDescriptor::new().icon("X"));
        let mut notice = notice(NoticeConfig::new().closable(closable.clone()), base);
        let before = notice.resolved_close().cloned();

        // Unrelated update: resolution must not change.
        notice.set_config(
            NoticeConfig::new().closable(closable).width(280.0),
            base + Duration::from_secs(1),
        );
        assert_eq!(notice.resolved_close().cloned(), before);

        // Replacing the closable input does change it.
        notice.set_config(
            NoticeConfig::new().closable(Closable::Enabled).width(280.0),
            base + Duration::from_secs(2),
        );
        assert_eq!(
            notice.resolved_close().and_then(ResolvedClose::icon),
            Some("x")
        );
    }

    #[test]
    fn tick_gate_follows_the_pending_deadline() {
        let base = Instant::now();
        let mut armed = notice(NoticeConfig::new(), base);
        assert!(armed.has_pending_dismiss());

        armed.update(Message::Entered, base);
        assert!(!armed.has_pending_dismiss());

        let sticky = Notice::new("s", NoticeConfig::new().sticky(), base);
        assert!(!sticky.has_pending_dismiss());
    }
}
