// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::contact::SendResult;
use crate::content::Content;
use crate::ui::navbar;
use crate::ui::sections::Section;
use crate::ui::sections::contact;
use crate::ui::toast;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Contact(contact::Message),
    /// Timer event of the visible toast.
    Toast(toast::ToastEvent),
    /// Interaction with the toast overlay.
    ToastView(toast::Message),
    /// The email relay answered (or failed to).
    SendFinished(SendResult),
    /// Escape pressed while a toast is visible.
    EscapePressed,
    /// Scroll the page to a section.
    ScrollTo(Section),
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. `th`).
    pub lang: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Page content, loaded by the launcher.
    pub content: Content,
}
