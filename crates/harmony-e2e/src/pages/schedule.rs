//! Class schedule page.

use super::{enter_route, hub_base_url, page_url, positions_of, submit_dialog, verify_copy};
use crate::dates::DateFormatter;
use crate::driver::HubDriver;
use crate::records::{EventPatch, EventRecord};
use crate::result::{HubError, HubResult};
use crate::selector::Selector;
use crate::ui::schedule as ui;
use crate::wait::WaitOptions;
use tracing::debug;

/// Handle on one rendered event card.
///
/// Carries the card's full visible text as captured at lookup time; the
/// handle does not track later changes to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    title: String,
    text: String,
}

impl EventCard {
    /// The title the card was looked up by
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The card's full visible text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the card's text contains the fragment
    #[must_use]
    pub fn contains_text(&self, fragment: &str) -> bool {
        self.text.contains(fragment)
    }

    /// Check the card's text contains the fragment
    pub fn verify_contains_text(&self, fragment: &str) -> HubResult<()> {
        if self.contains_text(fragment) {
            Ok(())
        } else {
            Err(HubError::assertion(
                format!("card {:?} contains", self.title),
                fragment,
                self.text.clone(),
            ))
        }
    }
}

/// Page object for the class schedule screen.
///
/// "Today" comes from the page's [`DateFormatter`]; tests pin it to a fixed
/// clock so calendar math stays deterministic, and against a live browser
/// the default system-clock formatter applies.
#[derive(Debug)]
pub struct SchedulePage<D: HubDriver> {
    driver: D,
    base_url: String,
    wait: WaitOptions,
    dates: DateFormatter,
}

impl<D: HubDriver> SchedulePage<D> {
    /// Page over the given driver, targeting the configured hub URL
    pub fn new(driver: D) -> Self {
        Self::with_base_url(driver, hub_base_url())
    }

    /// Page over the given driver and an explicit base URL
    pub fn with_base_url(driver: D, base_url: impl Into<String>) -> Self {
        Self {
            driver,
            base_url: base_url.into(),
            wait: WaitOptions::default(),
            dates: DateFormatter::new(),
        }
    }

    /// Use this formatter for "today", e.g. one pinned to a fixed clock
    #[must_use]
    pub fn with_date_formatter(mut self, dates: DateFormatter) -> Self {
        self.dates = dates;
        self
    }

    /// Override the wait budget for this page's operations
    #[must_use]
    pub const fn with_wait_options(mut self, wait: WaitOptions) -> Self {
        self.wait = wait;
        self
    }

    /// Full URL of the schedule route
    #[must_use]
    pub fn url(&self) -> String {
        page_url(&self.base_url, ui::ROUTE)
    }

    /// Open the page and block until its heading renders
    pub async fn navigate(&mut self) -> HubResult<()> {
        let url = self.url();
        enter_route(&mut self.driver, &url, &Self::heading(), self.wait).await
    }

    /// Check the heading reads "Class Schedule" and the subtitle its
    /// expected copy
    pub async fn verify_page_title(&self) -> HubResult<()> {
        verify_copy(&self.driver, &Self::heading(), "page title", ui::HEADING_TEXT).await?;
        verify_copy(
            &self.driver,
            &Selector::test_id(ui::SUBTITLE),
            "page subtitle",
            ui::SUBTITLE_TEXT,
        )
        .await
    }

    /// Click the calendar cell for the current day of month.
    ///
    /// Cells are matched on exact text: on the 3rd, the day-30 cell must
    /// not match. A calendar without today's cell is `ElementNotFound`.
    pub async fn click_today(&mut self) -> HubResult<()> {
        let day = self.dates.current_day_of_month().to_string();
        debug!(day, "selecting today's calendar cell");
        self.driver
            .click(&Selector::test_id_with_exact_text(ui::CALENDAR_DAY, day))
            .await
    }

    /// Text of the selected-day header, e.g. "Schedule for Tuesday, ..."
    pub async fn get_schedule_header_text(&self) -> HubResult<String> {
        self.driver
            .text(&Selector::test_id(ui::SCHEDULE_HEADER))
            .await
    }

    /// Check the selected-day header carries today's long-form date
    pub async fn verify_todays_date(&self) -> HubResult<()> {
        let expected = self.dates.formatted_long_date();
        let header = self.get_schedule_header_text().await?;
        if header.contains(&expected) {
            Ok(())
        } else {
            Err(HubError::assertion(
                "schedule header date",
                expected,
                header,
            ))
        }
    }

    /// Create an event through the add-event dialog.
    ///
    /// The app enforces its own rules on submit (a title, and an end time
    /// after the start time); a rejection surfaces as `ValidationRejected`
    /// with the dialog's message.
    pub async fn add_event(&mut self, record: &EventRecord) -> HubResult<()> {
        debug!(title = %record.title, "adding event");
        self.driver
            .click(&Selector::test_id(ui::ADD_BUTTON))
            .await?;
        self.driver
            .wait_for(&Selector::test_id(ui::DIALOG), self.wait)
            .await?;

        self.fill_field(ui::TITLE_INPUT, &record.title).await?;
        self.driver
            .select_option(
                &Selector::test_id(ui::TYPE_SELECT),
                record.event_type.as_str(),
            )
            .await?;
        self.fill_field(ui::SUBJECT_INPUT, &record.subject).await?;
        self.fill_field(ui::START_INPUT, &record.start_time).await?;
        self.fill_field(ui::END_INPUT, &record.end_time).await?;
        self.fill_field(ui::LOCATION_INPUT, &record.location)
            .await?;
        self.fill_field(ui::ATTENDEES_INPUT, &record.attendees.to_string())
            .await?;
        self.fill_field(ui::DESCRIPTION_INPUT, &record.description)
            .await?;

        self.submit().await
    }

    /// Update the event whose title is exactly `original_title`.
    ///
    /// Only the patch's populated fields are rewritten; everything else
    /// keeps its current value. Zero matches and multiple matches are both
    /// refusals: without a unique card there is no well-defined target, so
    /// the edit never starts.
    pub async fn edit_event(&mut self, original_title: &str, patch: &EventPatch) -> HubResult<()> {
        let titles = self.event_titles().await?;
        let matches = positions_of(&titles, original_title);
        let [index] = matches.as_slice() else {
            debug!(
                title = original_title,
                count = matches.len(),
                "no unique event to edit"
            );
            return Err(HubError::not_found(format!(
                "event card titled {original_title:?} ({} matches)",
                matches.len()
            )));
        };
        let index = *index;

        debug!(title = original_title, index, "editing event");
        self.driver
            .click(&Selector::nth_test_id(ui::EVENT_EDIT, index))
            .await?;
        self.driver
            .wait_for(&Selector::test_id(ui::DIALOG), self.wait)
            .await?;

        if let Some(title) = &patch.title {
            self.fill_field(ui::TITLE_INPUT, title).await?;
        }
        if let Some(event_type) = patch.event_type {
            self.driver
                .select_option(&Selector::test_id(ui::TYPE_SELECT), event_type.as_str())
                .await?;
        }
        if let Some(subject) = &patch.subject {
            self.fill_field(ui::SUBJECT_INPUT, subject).await?;
        }
        if let Some(start_time) = &patch.start_time {
            self.fill_field(ui::START_INPUT, start_time).await?;
        }
        if let Some(end_time) = &patch.end_time {
            self.fill_field(ui::END_INPUT, end_time).await?;
        }
        if let Some(location) = &patch.location {
            self.fill_field(ui::LOCATION_INPUT, location).await?;
        }
        if let Some(attendees) = patch.attendees {
            self.fill_field(ui::ATTENDEES_INPUT, &attendees.to_string())
                .await?;
        }
        if let Some(description) = &patch.description {
            self.fill_field(ui::DESCRIPTION_INPUT, description).await?;
        }

        self.submit().await
    }

    /// All event titles for the selected day, in document order
    pub async fn event_titles(&self) -> HubResult<Vec<String>> {
        self.driver.texts(&Selector::test_id(ui::EVENT_TITLE)).await
    }

    /// Check an event with exactly this title is on the schedule
    pub async fn verify_event_present(&self, title: &str) -> HubResult<()> {
        let titles = self.event_titles().await?;
        if positions_of(&titles, title).is_empty() {
            Err(HubError::assertion(
                "event present",
                title,
                format!("schedule: {titles:?}"),
            ))
        } else {
            Ok(())
        }
    }

    /// Handle on the first card whose title is exactly `title`.
    ///
    /// Cards and titles render pairwise in document order, so the nth
    /// title's card is the nth card.
    pub async fn get_event_card_by_title(&self, title: &str) -> HubResult<EventCard> {
        let titles = self.event_titles().await?;
        let Some(index) = positions_of(&titles, title).first().copied() else {
            return Err(HubError::not_found(format!("event card titled {title:?}")));
        };
        let cards = self.driver.texts(&Selector::test_id(ui::EVENT_CARD)).await?;
        cards.get(index).map_or_else(
            || Err(HubError::not_found(format!("event card titled {title:?}"))),
            |text| {
                Ok(EventCard {
                    title: title.to_string(),
                    text: text.clone(),
                })
            },
        )
    }

    /// Shut the underlying driver down
    pub async fn close(&mut self) -> HubResult<()> {
        self.driver.close().await
    }

    /// Borrow the underlying driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Recover the driver, e.g. to hand it to another page
    pub fn into_driver(self) -> D {
        self.driver
    }

    fn heading() -> Selector {
        Selector::test_id(ui::HEADING)
    }

    async fn fill_field(&mut self, testid: &str, value: &str) -> HubResult<()> {
        self.driver.fill(&Selector::test_id(testid), value).await
    }

    async fn submit(&mut self) -> HubResult<()> {
        submit_dialog(
            &mut self.driver,
            &Selector::test_id(ui::SUBMIT),
            &Selector::test_id(ui::DIALOG),
            &Selector::test_id(ui::DIALOG_ERROR),
            self.wait,
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::fixtures;
    use crate::mock::MockHub;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    /// Page and hub sharing one fixed clock, both rendering dates at UTC
    fn page_at(y: i32, mo: u32, d: u32) -> SchedulePage<MockHub> {
        page_with_events(y, mo, d, &[])
    }

    fn page_with_events(y: i32, mo: u32, d: u32, events: &[EventRecord]) -> SchedulePage<MockHub> {
        let instant = Utc.with_ymd_and_hms(y, mo, d, 9, 0, 0).single().unwrap();
        let clock: Arc<FixedClock> = Arc::new(FixedClock::at(instant));
        let hub = MockHub::new().with_clock(clock.clone()).with_events(events);
        SchedulePage::new(hub).with_date_formatter(DateFormatter::utc().with_clock(clock))
    }

    mod navigation_tests {
        use super::*;

        #[tokio::test]
        async fn test_navigate_and_verify_title() {
            let mut page = page_at(2025, 12, 30);
            page.navigate().await.unwrap();
            page.verify_page_title().await.unwrap();
        }

        #[tokio::test]
        async fn test_navigate_times_out_against_unresponsive_app() {
            let mut page = SchedulePage::new(MockHub::new().unresponsive());
            let err = page.navigate().await.unwrap_err();
            assert!(matches!(err, HubError::NavigationTimeout { .. }));
        }
    }

    mod calendar_tests {
        use super::*;

        #[tokio::test]
        async fn test_click_today_then_header_shows_long_date() {
            let mut page = page_at(2025, 12, 30);
            page.navigate().await.unwrap();
            page.click_today().await.unwrap();

            let header = page.get_schedule_header_text().await.unwrap();
            assert_eq!(header, "Schedule for Tuesday, December 30, 2025");
            page.verify_todays_date().await.unwrap();
        }

        #[tokio::test]
        async fn test_click_today_on_empty_calendar_is_element_not_found() {
            let clock = Arc::new(FixedClock::at(
                Utc.with_ymd_and_hms(2025, 12, 30, 9, 0, 0).single().unwrap(),
            ));
            let hub = MockHub::new().with_clock(clock.clone()).with_empty_calendar();
            let mut page = SchedulePage::new(hub)
                .with_date_formatter(DateFormatter::utc().with_clock(clock));
            page.navigate().await.unwrap();

            let err = page.click_today().await.unwrap_err();
            assert!(matches!(err, HubError::ElementNotFound { .. }));
        }

        #[tokio::test]
        async fn test_verify_todays_date_reports_header_on_mismatch() {
            let mut page = page_at(2025, 12, 30);
            page.navigate().await.unwrap();
            page.click_today().await.unwrap();

            // Move the formatter's clock a day ahead of the rendered header
            let ahead = Arc::new(FixedClock::at(
                Utc.with_ymd_and_hms(2025, 12, 31, 9, 0, 0).single().unwrap(),
            ));
            page = page.with_date_formatter(DateFormatter::utc().with_clock(ahead));
            let err = page.verify_todays_date().await.unwrap_err();
            match err {
                HubError::AssertionFailed {
                    expected, actual, ..
                } => {
                    assert_eq!(expected, "Wednesday, December 31, 2025");
                    assert!(actual.contains("December 30, 2025"), "got: {actual}");
                }
                other => panic!("expected AssertionFailed, got {other}"),
            }
        }
    }

    mod event_tests {
        use super::*;

        #[tokio::test]
        async fn test_add_event_then_card_is_queryable() {
            let mut page = page_at(2025, 6, 12);
            page.navigate().await.unwrap();
            page.click_today().await.unwrap();
            page.add_event(&fixtures::chemistry_lab()).await.unwrap();

            page.verify_event_present("Chemistry Lab Session")
                .await
                .unwrap();
            let card = page
                .get_event_card_by_title("Chemistry Lab Session")
                .await
                .unwrap();
            assert!(card.contains_text("Science Lab 1"));
            assert!(card.contains_text("13:00"));
            card.verify_contains_text("24 attendees").unwrap();
        }

        #[tokio::test]
        async fn test_add_event_with_inverted_times_is_rejected() {
            let mut page = page_at(2025, 6, 12);
            page.navigate().await.unwrap();
            page.click_today().await.unwrap();

            let bad = fixtures::chemistry_lab().with_times("15:00", "14:00");
            let err = page.add_event(&bad).await.unwrap_err();
            match err {
                HubError::ValidationRejected { message } => {
                    assert_eq!(message, "End time must be after start time");
                }
                other => panic!("expected ValidationRejected, got {other}"),
            }
            assert!(page.event_titles().await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_edit_event_rewrites_only_patch_fields() {
            let mut page = page_with_events(2025, 6, 12, &[fixtures::advanced_mathematics()]);
            page.navigate().await.unwrap();
            page.click_today().await.unwrap();

            page.edit_event("Advanced Mathematics", &fixtures::math_review_patch())
                .await
                .unwrap();

            page.verify_event_present("Advanced Mathematics - Review Session")
                .await
                .unwrap();
            let err = page
                .verify_event_present("Advanced Mathematics")
                .await
                .unwrap_err();
            assert!(matches!(err, HubError::AssertionFailed { .. }));

            let card = page
                .get_event_card_by_title("Advanced Mathematics - Review Session")
                .await
                .unwrap();
            assert!(card.contains_text("Room B-205"));
            // Fields outside the patch kept their values
            assert!(card.contains_text("10:00"));
        }

        #[tokio::test]
        async fn test_edit_event_with_no_match_is_element_not_found() {
            let mut page = page_at(2025, 6, 12);
            page.navigate().await.unwrap();
            page.click_today().await.unwrap();

            let err = page
                .edit_event("Nonexistent Event", &fixtures::math_review_patch())
                .await
                .unwrap_err();
            assert!(matches!(err, HubError::ElementNotFound { .. }));
        }

        #[tokio::test]
        async fn test_edit_event_with_duplicate_titles_is_element_not_found() {
            let duplicate = fixtures::advanced_mathematics();
            let mut page = page_with_events(2025, 6, 12, &[duplicate.clone(), duplicate]);
            page.navigate().await.unwrap();
            page.click_today().await.unwrap();

            let err = page
                .edit_event("Advanced Mathematics", &fixtures::math_review_patch())
                .await
                .unwrap_err();
            match err {
                HubError::ElementNotFound { selector } => {
                    assert!(selector.contains("2 matches"), "got: {selector}");
                }
                other => panic!("expected ElementNotFound, got {other}"),
            }
        }

        #[tokio::test]
        async fn test_get_event_card_missing_title_is_element_not_found() {
            let mut page = page_at(2025, 6, 12);
            page.navigate().await.unwrap();
            page.click_today().await.unwrap();

            let err = page
                .get_event_card_by_title("Chemistry Lab Session")
                .await
                .unwrap_err();
            assert!(matches!(err, HubError::ElementNotFound { .. }));
        }
    }
}
