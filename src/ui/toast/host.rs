// SPDX-License-Identifier: MPL-2.0
//! The page-level slot holding the single live toast.
//!
//! The host owns the toast together with a timer guard `G`. In the
//! application `G` is an abort-on-drop task handle for the stream returned by
//! [`countdown`](super::timers::countdown); dropping it cancels both timers.
//! The guard is dropped on every exit path: expiry, manual dismissal,
//! replacement by a newer toast, and host teardown.

use super::state::{CloseReason, Closed, Toast, ToastId};
use super::timers::ToastEvent;

struct Active<G> {
    toast: Toast,
    _timers: G,
}

/// Holds at most one visible toast. A new toast replaces the current one.
pub struct ToastHost<G> {
    active: Option<Active<G>>,
}

impl<G> Default for ToastHost<G> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<G> std::fmt::Debug for ToastHost<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastHost")
            .field("current", &self.current())
            .finish()
    }
}

impl<G> ToastHost<G> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `toast`, replacing any visible one.
    ///
    /// The replaced toast is disposed without a close notification. Returns
    /// its ID, if any.
    pub fn show(&mut self, toast: Toast, timers: G) -> Option<ToastId> {
        let replaced = self.active.take().map(|active| active.toast.id());
        if let Some(id) = replaced {
            log::debug!("toast {:?} replaced by {:?}", id, toast.id());
        }
        self.active = Some(Active {
            toast,
            _timers: timers,
        });
        replaced
    }

    /// Applies a timer event. Events for any toast other than the current
    /// one are ignored.
    pub fn handle(&mut self, event: ToastEvent) -> Option<Closed> {
        match event {
            ToastEvent::Tick(id) => {
                if let Some(active) = self.active.as_mut().filter(|a| a.toast.id() == id) {
                    active.toast.tick();
                }
                None
            }
            ToastEvent::Expired(id) => self.close(id, CloseReason::Expired),
        }
    }

    /// Manual dismissal from the backdrop or the close button.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Closed> {
        self.close(id, CloseReason::Dismissed)
    }

    /// Drops the current toast and its timers without notification.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Returns the visible toast, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.active.as_ref().map(|active| &active.toast)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    fn close(&mut self, id: ToastId, reason: CloseReason) -> Option<Closed> {
        let active = self.active.as_mut().filter(|a| a.toast.id() == id)?;
        let closed = active.toast.close(reason);
        self.active = None;
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Guard counting how many times it was dropped.
    struct DropCounter(Arc<AtomicUsize>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counting_guard() -> (DropCounter, Arc<AtomicUsize>) {
        let drops = Arc::new(AtomicUsize::new(0));
        (DropCounter(Arc::clone(&drops)), drops)
    }

    #[test]
    fn new_host_is_empty() {
        let host: ToastHost<()> = ToastHost::new();
        assert!(!host.is_visible());
        assert!(host.current().is_none());
    }

    #[test]
    fn expiry_closes_once_and_releases_timers() {
        let mut host = ToastHost::new();
        let toast = Toast::success("sent");
        let id = toast.id();
        let (guard, drops) = counting_guard();
        host.show(toast, guard);

        let closed = host.handle(ToastEvent::Expired(id));
        assert_eq!(
            closed,
            Some(Closed {
                id,
                reason: CloseReason::Expired
            })
        );
        assert_eq!(drops.load(Ordering::SeqCst), 1);
        assert!(!host.is_visible());

        assert_eq!(host.handle(ToastEvent::Expired(id)), None);
        assert_eq!(host.dismiss(id), None);
    }

    #[test]
    fn dismissal_before_expiry_closes_once() {
        let mut host = ToastHost::new();
        let toast = Toast::error("oops");
        let id = toast.id();
        let (guard, drops) = counting_guard();
        host.show(toast, guard);

        host.handle(ToastEvent::Tick(id));
        host.handle(ToastEvent::Tick(id));
        let closed = host.dismiss(id);

        assert_eq!(closed.map(|c| c.reason), Some(CloseReason::Dismissed));
        assert_eq!(drops.load(Ordering::SeqCst), 1);

        // A late expiry from the cancelled timer must not close twice.
        assert_eq!(host.handle(ToastEvent::Expired(id)), None);
    }

    #[test]
    fn ticks_update_progress_of_current_toast() {
        let mut host = ToastHost::new();
        let toast = Toast::info("hello");
        let id = toast.id();
        host.show(toast, ());

        host.handle(ToastEvent::Tick(id));

        let progress = host.current().map(Toast::progress).unwrap();
        assert!(progress < 100.0);
    }

    #[test]
    fn stale_events_are_ignored() {
        let mut host = ToastHost::new();
        let old = Toast::info("old");
        let old_id = old.id();
        host.show(old, ());

        let new = Toast::info("new");
        let new_id = new.id();
        host.show(new, ());

        host.handle(ToastEvent::Tick(old_id));
        assert_eq!(host.current().map(Toast::progress), Some(100.0));

        assert_eq!(host.handle(ToastEvent::Expired(old_id)), None);
        assert_eq!(host.current().map(Toast::id), Some(new_id));
    }

    #[test]
    fn replacement_releases_previous_timers_silently() {
        let mut host = ToastHost::new();
        let first = Toast::error("first");
        let first_id = first.id();
        let (first_guard, first_drops) = counting_guard();
        host.show(first, first_guard);

        let (second_guard, second_drops) = counting_guard();
        let replaced = host.show(Toast::success("second"), second_guard);

        assert_eq!(replaced, Some(first_id));
        assert_eq!(first_drops.load(Ordering::SeqCst), 1);
        assert_eq!(second_drops.load(Ordering::SeqCst), 0);
        assert_eq!(host.current().map(Toast::message_key), Some("second"));
    }

    #[test]
    fn new_toast_restarts_progress() {
        let mut host = ToastHost::new();
        let first = Toast::info("first");
        let first_id = first.id();
        host.show(first, ());
        for _ in 0..10 {
            host.handle(ToastEvent::Tick(first_id));
        }

        host.show(Toast::info("second"), ());
        assert_eq!(host.current().map(Toast::progress), Some(100.0));
    }

    #[test]
    fn clear_releases_timers_without_notification() {
        let mut host = ToastHost::new();
        let (guard, drops) = counting_guard();
        host.show(Toast::info("bye"), guard);

        host.clear();

        assert_eq!(drops.load(Ordering::SeqCst), 1);
        assert!(!host.is_visible());
    }

    #[test]
    fn dropping_host_releases_timers() {
        let (guard, drops) = counting_guard();
        {
            let mut host = ToastHost::new();
            host.show(Toast::info("scoped"), guard);
        }
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }
}
