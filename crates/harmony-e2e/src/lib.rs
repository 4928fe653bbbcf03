//! End-to-end test suite for the K12 Harmony Hub web application.
//!
//! The suite scripts the student management and class schedule screens
//! through page objects, with date handling factored into a small utility
//! layer so calendar-driven tests stay deterministic.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      harmony-e2e                             │
//! ├──────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐     ┌─────────────┐     ┌───────────────┐   │
//! │   │ Test        │    │ Page        │     │ HubDriver     │   │
//! │   │ scenarios   │───►│ objects     │────►│  ├ CdpDriver  │   │
//! │   │ (tests/)    │    │ (pages::*)  │     │  └ MockHub    │   │
//! │   └────────────┘     └─────────────┘     └───────────────┘   │
//! │          │                  │                                │
//! │          └──────────────────┴──► DateFormatter / Clock       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Page objects talk to [`HubDriver`] only. With the `browser` feature the
//! suite drives a real Chromium over the DevTools protocol; without it the
//! same scenarios run against [`MockHub`], an in-memory model of the app.
//!
//! Failures are never absorbed: every operation returns [`HubResult`] and
//! propagates its error to the calling test unchanged.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod clock;
mod dates;
mod driver;
mod mock;
mod records;
mod result;
mod selector;
mod wait;

/// Canned records and patches shared across scenarios
pub mod fixtures;

/// Page objects for the two screens under test
pub mod pages;

/// Pinned DOM contract: routes, headings, and test ids the app renders
pub mod ui;

/// Chromium driver over the DevTools protocol
#[cfg(feature = "browser")]
mod cdp;

#[cfg(feature = "browser")]
pub use cdp::CdpDriver;
pub use clock::{Clock, ClockHandle, FixedClock, SystemClock};
pub use dates::{format_time, DateFormatter};
pub use driver::{DriverConfig, ElementHandle, HubDriver};
pub use mock::MockHub;
pub use pages::{hub_base_url, EventCard, SchedulePage, StudentPage, DEFAULT_HUB_URL};
pub use records::{EventPatch, EventRecord, EventType, StudentRecord};
pub use result::{HubError, HubResult};
pub use selector::{test_id_css, Selector};
pub use wait::{WaitOptions, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS};

/// Single import for test files
pub mod prelude {
    #[cfg(feature = "browser")]
    pub use super::cdp::CdpDriver;
    pub use super::clock::{Clock, ClockHandle, FixedClock, SystemClock};
    pub use super::dates::{format_time, DateFormatter};
    pub use super::driver::{DriverConfig, ElementHandle, HubDriver};
    pub use super::fixtures;
    pub use super::mock::MockHub;
    pub use super::pages::{hub_base_url, EventCard, SchedulePage, StudentPage};
    pub use super::records::{EventPatch, EventRecord, EventType, StudentRecord};
    pub use super::result::{HubError, HubResult};
    pub use super::selector::Selector;
    pub use super::ui;
    pub use super::wait::WaitOptions;
}
