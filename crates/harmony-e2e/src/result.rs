//! Result and error types for the Harmony Hub suite.
//!
//! Every failure a page-object operation can surface is a variant here.
//! Errors propagate to the calling test unmodified: no operation recovers
//! locally, retries, or degrades into a fake success value.

use thiserror::Error;

/// Result type for suite operations
pub type HubResult<T> = Result<T, HubError>;

/// Errors surfaced by drivers, page objects, and the date utilities
#[derive(Debug, Error)]
pub enum HubError {
    /// Page or its primary heading failed to appear in time
    #[error("Navigation to {url} timed out after {ms}ms")]
    NavigationTimeout {
        /// URL that was being loaded
        url: String,
        /// Configured navigation timeout in milliseconds
        ms: u64,
    },

    /// Navigation failed outright (driver-level, not a timeout)
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Driver error message
        message: String,
    },

    /// A lookup matched zero elements, or a unique lookup matched several
    #[error("Element not found: {selector}")]
    ElementNotFound {
        /// Description of the selector or lookup that failed
        selector: String,
    },

    /// The application refused a create/update due to a business rule
    #[error("Validation rejected: {message}")]
    ValidationRejected {
        /// Validation message rendered by the application
        message: String,
    },

    /// Observed state did not match expected state
    #[error("Assertion failed: {check} (expected {expected:?}, got {actual:?})")]
    AssertionFailed {
        /// What was being checked
        check: String,
        /// Expected value
        expected: String,
        /// Actual value observed in the DOM
        actual: String,
    },

    /// A bounded wait elapsed
    #[error("Timed out after {ms}ms waiting for {waiting_for}")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
        /// Description of the awaited condition
        waiting_for: String,
    },

    /// Hour or minute outside the valid 24-hour range
    #[error("Invalid time: {hours:02}:{minutes:02} is out of range")]
    InvalidTime {
        /// Hours value supplied
        hours: u32,
        /// Minutes value supplied
        minutes: u32,
    },

    /// Browser executable not found
    #[error("Browser not found. Install Chromium or set CHROMIUM_PATH")]
    BrowserNotFound,

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page-level driver error
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HubError {
    /// Build an `AssertionFailed` with expected/actual context.
    pub fn assertion(
        check: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::AssertionFailed {
            check: check.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Build an `ElementNotFound` from any selector description.
    pub fn not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound {
            selector: selector.into(),
        }
    }
}
