// SPDX-License-Identifier: MPL-2.0
//! Self-dismissing notification overlay with a visual countdown.
//!
//! A toast lives for a fixed duration (3 seconds by default) while a progress
//! bar drains in 50 ms ticks. It closes when the duration elapses or when the
//! user clicks the backdrop or the close button, whichever comes first. The
//! close notification ([`Closed`]) is produced exactly once per toast.
//!
//! # Components
//!
//! - [`Toast`]: state of one toast (kind, message key, progress)
//! - [`countdown`]: the timer pair, as a stream of [`ToastEvent`]s
//! - [`ToastHost`]: the single-slot owner of the live toast and its timers
//! - [`view`]: the overlay widget
//!
//! # Example
//!
//! ```ignore
//! let toast = Toast::success("contact-send-success");
//! let (task, handle) = Task::run(countdown(toast.id(), toast.duration()), Message::Toast)
//!     .abortable();
//! host.show(toast, handle.abort_on_drop());
//! ```

mod host;
mod state;
mod timers;
mod view;

pub use host::ToastHost;
pub use state::{CloseReason, Closed, Countdown, Toast, ToastId, ToastKind, FULL_PROGRESS, TICK_INTERVAL};
pub use timers::{countdown, ToastEvent};
pub use view::{accent, message_text, view, Message};
