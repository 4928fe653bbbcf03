//! Driver abstraction over the browser page handle.
//!
//! Page objects are written against [`HubDriver`], never against a concrete
//! browser. Two implementations exist: `CdpDriver` drives a real Chromium
//! over the DevTools protocol (feature `browser`), and
//! [`crate::mock::MockHub`] runs the suite against an in-memory model of the
//! application for deterministic, browser-free execution.
//!
//! Mutating operations take `&mut self`: one driver is exclusively owned by
//! one page object for the duration of one test, and nothing in this crate
//! shares it across concurrent work.

use crate::result::HubResult;
use crate::selector::Selector;
use crate::wait::WaitOptions;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Snapshot of one located element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Driver-assigned identifier
    pub id: String,
    /// Element tag name
    pub tag_name: String,
    /// Trimmed text content, if any
    pub text_content: Option<String>,
    /// Current input value, for form controls
    pub value: Option<String>,
}

impl ElementHandle {
    /// Handle with no text or value
    #[must_use]
    pub fn new(id: impl Into<String>, tag_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag_name: tag_name.into(),
            text_content: None,
            value: None,
        }
    }

    /// Attach text content
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Text content, empty string when none
    #[must_use]
    pub fn text(&self) -> &str {
        self.text_content.as_deref().unwrap_or("")
    }
}

/// Driver configuration
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Run the browser headless
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Budget for page loads and the post-navigation heading wait
    pub navigation_timeout: Duration,
    /// Budget for element appearance/disappearance waits
    pub element_timeout: Duration,
    /// Polling cadence for bounded waits
    pub poll_interval: Duration,
    /// Browser executable override
    pub executable_path: Option<String>,
    /// Chromium sandbox; disable in containers and CI
    pub sandbox: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1280,
            viewport_height: 800,
            navigation_timeout: Duration::from_secs(30),
            element_timeout: Duration::from_secs(5),
            poll_interval: Duration::from_millis(50),
            executable_path: None,
            sandbox: true,
        }
    }
}

impl DriverConfig {
    /// Config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set headless mode
    #[must_use]
    pub const fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set viewport dimensions
    #[must_use]
    pub const fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set the navigation timeout
    #[must_use]
    pub const fn navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    /// Set the element wait timeout
    #[must_use]
    pub const fn element_timeout(mut self, timeout: Duration) -> Self {
        self.element_timeout = timeout;
        self
    }

    /// Set the polling interval for waits
    #[must_use]
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the browser executable path
    #[must_use]
    pub fn executable_path(mut self, path: impl Into<String>) -> Self {
        self.executable_path = Some(path.into());
        self
    }

    /// Disable the Chromium sandbox (containers, CI)
    #[must_use]
    pub const fn no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    /// Element-wait options derived from this config
    #[must_use]
    pub fn element_wait(&self) -> WaitOptions {
        WaitOptions::new()
            .with_timeout(self.element_timeout.as_millis() as u64)
            .with_poll_interval(self.poll_interval.as_millis() as u64)
    }

    /// Navigation-wait options derived from this config
    #[must_use]
    pub fn navigation_wait(&self) -> WaitOptions {
        WaitOptions::new()
            .with_timeout(self.navigation_timeout.as_millis() as u64)
            .with_poll_interval(self.poll_interval.as_millis() as u64)
    }
}

/// The capabilities page objects consume from the automation layer.
///
/// Semantics shared by all implementations:
///
/// - [`find`](Self::find) resolves to exactly one element; zero matches is
///   `ElementNotFound`.
/// - [`click`](Self::click) and [`fill`](Self::fill) fail with
///   `ElementNotFound` rather than silently doing nothing.
/// - [`wait_for`](Self::wait_for) and
///   [`wait_for_absent`](Self::wait_for_absent) are bounded by the supplied
///   options and fail with `Timeout` when the budget elapses.
#[async_trait]
pub trait HubDriver: Send + Sync {
    /// Navigate to a URL or app route
    async fn goto(&mut self, url: &str) -> HubResult<()>;

    /// Currently loaded URL
    async fn current_url(&self) -> HubResult<String>;

    /// Resolve a selector to its first matching element
    async fn find(&self, selector: &Selector) -> HubResult<ElementHandle>;

    /// Trimmed text of every match, in document order
    async fn texts(&self, selector: &Selector) -> HubResult<Vec<String>>;

    /// Number of matches
    async fn count(&self, selector: &Selector) -> HubResult<usize>;

    /// Trimmed text of the first match
    async fn text(&self, selector: &Selector) -> HubResult<String>;

    /// Whether at least one element matches right now
    async fn is_present(&self, selector: &Selector) -> HubResult<bool>;

    /// Click the first match
    async fn click(&mut self, selector: &Selector) -> HubResult<()>;

    /// Replace the value of the first matching form control
    async fn fill(&mut self, selector: &Selector, value: &str) -> HubResult<()>;

    /// Choose an option (by visible label) in the first matching select
    async fn select_option(&mut self, selector: &Selector, label: &str) -> HubResult<()>;

    /// Wait until the selector matches, returning the element
    async fn wait_for(
        &mut self,
        selector: &Selector,
        options: WaitOptions,
    ) -> HubResult<ElementHandle>;

    /// Wait until the selector no longer matches
    async fn wait_for_absent(&mut self, selector: &Selector, options: WaitOptions)
        -> HubResult<()>;

    /// Release the underlying page/browser
    async fn close(&mut self) -> HubResult<()>;
}
