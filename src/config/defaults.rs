// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast**: Notification lifetime and countdown tick
//! - **Email**: Relay service identifiers and request timeout
//! - **Sitemap**: Build-time sitemap generation

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default toast lifetime in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Minimum configurable toast lifetime in milliseconds.
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Maximum configurable toast lifetime in milliseconds.
pub const MAX_TOAST_DURATION_MS: u64 = 30_000;

/// Interval between two countdown ticks in milliseconds.
pub const TOAST_TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Email Relay Defaults
// ==========================================================================

/// EmailJS REST endpoint.
pub const DEFAULT_EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS service identifier.
pub const DEFAULT_EMAIL_SERVICE_ID: &str = "service_e94dlab";

/// EmailJS template identifier.
pub const DEFAULT_EMAIL_TEMPLATE_ID: &str = "template_dj1nbz3";

/// Request timeout for the relay call, in seconds.
pub const DEFAULT_EMAIL_TIMEOUT_SECS: u64 = 10;

// ==========================================================================
// Sitemap Defaults
// ==========================================================================

/// Public URL of the site, without trailing slash.
pub const DEFAULT_SITE_URL: &str = "https://import-mark-from.space";

/// Where the sitemap is written, relative to the working directory.
pub const DEFAULT_SITEMAP_OUTPUT: &str = "public/sitemap.xml";

/// Directory scanned for additional pages.
pub const DEFAULT_PAGES_DIR: &str = "src/pages";

/// File extensions treated as page sources during discovery.
pub const DEFAULT_PAGE_EXTENSIONS: &[&str] = &["rs"];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DURATION_MS > 0);
    assert!(MAX_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(TOAST_TICK_INTERVAL_MS > 0);
    assert!(TOAST_TICK_INTERVAL_MS < MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_EMAIL_TIMEOUT_SECS > 0);
};
