// SPDX-License-Identifier: MPL-2.0
//! The timer pair driving a toast: one completion timer and one recurring tick.
//!
//! Both timers live inside a single stream. Dropping the stream (or aborting
//! the task that polls it) releases them together, so neither can fire
//! against a toast that is already gone.

use super::state::{ToastId, TICK_INTERVAL};
use futures_util::stream::{self, Stream};
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, Sleep};

/// Events produced by a toast's timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEvent {
    /// One countdown tick elapsed.
    Tick(ToastId),
    /// The toast lifetime elapsed.
    Expired(ToastId),
}

impl ToastEvent {
    /// Returns the toast this event belongs to.
    #[must_use]
    pub fn id(&self) -> ToastId {
        match self {
            ToastEvent::Tick(id) | ToastEvent::Expired(id) => *id,
        }
    }
}

struct Timers {
    deadline: Pin<Box<Sleep>>,
    ticker: Interval,
}

enum Phase {
    /// Timers are armed on first poll so they start inside the runtime.
    Armed(Duration),
    Running(Timers),
    Done,
}

/// Returns the event stream for a toast living `duration`.
///
/// Emits `Tick` every [`TICK_INTERVAL`], then `Expired` exactly once, then
/// ends. When a tick and the deadline fall on the same instant, the tick is
/// delivered first so the progress reaches zero before expiry.
pub fn countdown(id: ToastId, duration: Duration) -> impl Stream<Item = ToastEvent> + Send + 'static {
    stream::unfold(Phase::Armed(duration), move |phase| async move {
        let mut timers = match phase {
            Phase::Armed(duration) => start(duration),
            Phase::Running(timers) => timers,
            Phase::Done => return None,
        };

        tokio::select! {
            biased;
            _ = timers.ticker.tick() => Some((ToastEvent::Tick(id), Phase::Running(timers))),
            () = timers.deadline.as_mut() => Some((ToastEvent::Expired(id), Phase::Done)),
        }
    })
}

fn start(duration: Duration) -> Timers {
    let now = Instant::now();

    let mut ticker = tokio::time::interval_at(now + TICK_INTERVAL, TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    Timers {
        deadline: Box::pin(tokio::time::sleep_until(now + duration)),
        ticker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::state::Toast;
    use futures_util::StreamExt;

    fn count_ticks(events: &[ToastEvent]) -> usize {
        events
            .iter()
            .filter(|event| matches!(event, ToastEvent::Tick(_)))
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_then_expires_exactly_once() {
        let id = Toast::info("x").id();
        let started = Instant::now();

        let events: Vec<ToastEvent> = countdown(id, Duration::from_millis(3000)).collect().await;

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(3000));
        assert!(elapsed < Duration::from_millis(3000) + TICK_INTERVAL);

        let ticks = count_ticks(&events);
        assert!((59..=60).contains(&ticks), "unexpected tick count {ticks}");

        let expirations: Vec<_> = events
            .iter()
            .filter(|event| matches!(event, ToastEvent::Expired(_)))
            .collect();
        assert_eq!(expirations, vec![&ToastEvent::Expired(id)]);
        assert_eq!(events.last(), Some(&ToastEvent::Expired(id)));
    }

    #[tokio::test(start_paused = true)]
    async fn every_event_carries_the_toast_id() {
        let id = Toast::info("x").id();
        let events: Vec<ToastEvent> = countdown(id, Duration::from_millis(500)).collect().await;
        assert!(events.iter().all(|event| event.id() == id));
    }

    #[tokio::test(start_paused = true)]
    async fn driving_a_toast_empties_progress_before_expiry() {
        let mut toast = Toast::info("x").with_duration(Duration::from_millis(1000));
        let mut events = Box::pin(countdown(toast.id(), toast.duration()));
        let mut previous = toast.progress();

        while let Some(event) = events.next().await {
            match event {
                ToastEvent::Tick(_) => {
                    toast.tick();
                    assert!(toast.progress() <= previous);
                    previous = toast.progress();
                }
                ToastEvent::Expired(_) => {
                    // At most one tick short of empty when the deadline fires.
                    let decrement = 100.0 / 20.0;
                    assert!(toast.progress() <= decrement + f32::EPSILON);
                }
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_expires_without_ticking() {
        let id = Toast::info("x").id();
        let events: Vec<ToastEvent> = countdown(id, Duration::ZERO).collect().await;
        assert_eq!(events, vec![ToastEvent::Expired(id)]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_stream_stops_before_expiry() {
        let id = Toast::info("x").id();
        let started = Instant::now();

        let first: Vec<ToastEvent> = countdown(id, Duration::from_millis(3000))
            .take(3)
            .collect()
            .await;

        assert_eq!(first, vec![ToastEvent::Tick(id); 3]);
        assert_eq!(started.elapsed(), TICK_INTERVAL * 3);
    }
}
