//! Page objects for the Harmony Hub screens.
//!
//! Each page owns its driver exclusively for the duration of a test and
//! exposes the user-level operations the suite scripts against. Pages never
//! retry and never degrade a failure into a partial success: every fault
//! maps onto one [`HubError`](crate::result::HubError) variant and
//! propagates to the caller unchanged.

pub mod schedule;
pub mod students;

pub use schedule::{EventCard, SchedulePage};
pub use students::StudentPage;

use crate::driver::HubDriver;
use crate::result::{HubError, HubResult};
use crate::selector::Selector;
use crate::wait::WaitOptions;
use tracing::info;

/// Hub origin used when `HARMONY_HUB_URL` is unset
pub const DEFAULT_HUB_URL: &str = "http://localhost:5173";

/// Base URL of the app under test, from `HARMONY_HUB_URL` or the default
#[must_use]
pub fn hub_base_url() -> String {
    std::env::var("HARMONY_HUB_URL").unwrap_or_else(|_| DEFAULT_HUB_URL.to_string())
}

/// Join the base origin and a route path
fn page_url(base: &str, route: &str) -> String {
    format!("{}{route}", base.trim_end_matches('/'))
}

/// Navigate and block until the page heading renders.
///
/// A heading that never appears within the budget is a navigation failure,
/// not a generic timeout.
async fn enter_route<D: HubDriver>(
    driver: &mut D,
    url: &str,
    heading: &Selector,
    wait: WaitOptions,
) -> HubResult<()> {
    info!(url, "navigating");
    driver.goto(url).await?;
    match driver.wait_for(heading, wait).await {
        Ok(_) => Ok(()),
        Err(HubError::Timeout { ms, .. }) => Err(HubError::NavigationTimeout {
            url: url.to_string(),
            ms,
        }),
        Err(other) => Err(other),
    }
}

/// Compare one rendered copy element against its expected fixed string
async fn verify_copy<D: HubDriver>(
    driver: &D,
    selector: &Selector,
    check: &str,
    expected: &str,
) -> HubResult<()> {
    let actual = driver.text(selector).await?;
    if actual == expected {
        Ok(())
    } else {
        Err(HubError::assertion(check, expected, actual))
    }
}

/// Submit an open dialog and block until it closes.
///
/// A dialog that stays open with an error message means the app rejected
/// the submission; the message surfaces as `ValidationRejected`. A dialog
/// that stays open without one keeps the original timeout.
async fn submit_dialog<D: HubDriver>(
    driver: &mut D,
    submit: &Selector,
    dialog: &Selector,
    error: &Selector,
    wait: WaitOptions,
) -> HubResult<()> {
    driver.click(submit).await?;
    match driver.wait_for_absent(dialog, wait).await {
        Ok(()) => Ok(()),
        Err(HubError::Timeout { ms, waiting_for }) => {
            if driver.is_present(error).await? {
                let message = driver.text(error).await?;
                Err(HubError::ValidationRejected { message })
            } else {
                Err(HubError::Timeout { ms, waiting_for })
            }
        }
        Err(other) => Err(other),
    }
}

/// Indices of entries equal to `wanted`, in document order
fn positions_of(texts: &[String], wanted: &str) -> Vec<usize> {
    texts
        .iter()
        .enumerate()
        .filter(|(_, text)| text.as_str() == wanted)
        .map(|(index, _)| index)
        .collect()
}
