// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures and the countdown arithmetic.

use crate::config::{DEFAULT_TOAST_DURATION_MS, TOAST_TICK_INTERVAL_MS};
use std::time::Duration;

/// Interval between two countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(TOAST_TICK_INTERVAL_MS);

/// Progress value of a freshly created toast.
pub const FULL_PROGRESS: f32 = 100.0;

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Semantic category of a toast. Affects presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

/// Why a toast went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The lifetime elapsed.
    Expired,
    /// The user clicked the backdrop or the close button.
    Dismissed,
}

/// Close notification handed to the host. Produced at most once per toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closed {
    pub id: ToastId,
    pub reason: CloseReason,
}

/// Linear countdown from 100 to 0 over a fixed duration, advanced in ticks.
///
/// Progress is derived from the tick count rather than accumulated, so it is
/// exactly 0 once `ticks * TICK_INTERVAL >= duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    duration: Duration,
    ticks: u32,
    finished: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ticks: 0,
            finished: false,
        }
    }

    /// Advances by one tick.
    pub fn advance(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    /// Forces the countdown to zero.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Number of ticks applied so far.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Remaining lifetime as a percentage in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f32 {
        if self.finished || self.duration.is_zero() {
            return 0.0;
        }

        let total = self.duration.as_micros();
        let elapsed = TICK_INTERVAL.as_micros() * u128::from(self.ticks);
        if elapsed >= total {
            return 0.0;
        }

        let remaining = (total - elapsed) as f64 / total as f64;
        (remaining * f64::from(FULL_PROGRESS)) as f32
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    kind: ToastKind,
    /// The i18n key for the toast message.
    message_key: String,
    duration: Duration,
    countdown: Countdown,
    closed: bool,
}

impl Toast {
    /// Creates a visible toast with the default lifetime.
    pub fn new(kind: ToastKind, message_key: impl Into<String>) -> Self {
        let duration = Duration::from_millis(DEFAULT_TOAST_DURATION_MS);
        Self {
            id: ToastId::new(),
            kind,
            message_key: message_key.into(),
            duration,
            countdown: Countdown::new(duration),
            closed: false,
        }
    }

    /// Creates a success toast.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message_key)
    }

    /// Creates an error toast.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message_key)
    }

    /// Creates an info toast.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message_key)
    }

    /// Sets the lifetime. Progress restarts at 100.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self.countdown = Countdown::new(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Remaining lifetime in percent.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.countdown.percent()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.closed
    }

    /// Applies one countdown tick. Ignored once the toast is closed.
    pub fn tick(&mut self) {
        if !self.closed {
            self.countdown.advance();
        }
    }

    /// Closes the toast. Returns the close notification the first time only.
    pub fn close(&mut self, reason: CloseReason) -> Option<Closed> {
        if self.closed {
            return None;
        }
        self.closed = true;
        self.countdown.finish();
        Some(Closed {
            id: self.id,
            reason,
        })
    }
}
