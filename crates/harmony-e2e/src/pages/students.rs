//! Student management page.

use super::{enter_route, hub_base_url, page_url, positions_of, submit_dialog, verify_copy};
use crate::driver::HubDriver;
use crate::records::StudentRecord;
use crate::result::{HubError, HubResult};
use crate::selector::Selector;
use crate::ui::students as ui;
use crate::wait::WaitOptions;
use tracing::debug;

/// Page object for the student management screen.
///
/// Owns its driver for the lifetime of the page; recover it with
/// [`into_driver`](Self::into_driver) to drive another screen.
#[derive(Debug)]
pub struct StudentPage<D: HubDriver> {
    driver: D,
    base_url: String,
    wait: WaitOptions,
}

impl<D: HubDriver> StudentPage<D> {
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
        }
    }

    /// Override the wait budget for this page's operations
    #[must_use]
    pub const fn with_wait_options(mut self, wait: WaitOptions) -> Self {
        self.wait = wait;
        self
    }

    /// Full URL of the students route
    #[must_use]
    pub fn url(&self) -> String {
        page_url(&self.base_url, ui::ROUTE)
    }

    /// Open the page and block until its heading renders
    pub async fn navigate(&mut self) -> HubResult<()> {
        let url = self.url();
        enter_route(&mut self.driver, &url, &Self::heading(), self.wait).await
    }

    /// Check the heading reads "Student Management" and the subtitle its
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

    /// Number of student cards rendered right now; queried fresh every call
    pub async fn get_student_count(&self) -> HubResult<usize> {
        self.driver
            .count(&Selector::test_id(ui::STUDENT_CARD))
            .await
    }

    /// All student names on the roster, in document order
    pub async fn student_names(&self) -> HubResult<Vec<String>> {
        self.driver
            .texts(&Selector::test_id(ui::STUDENT_NAME))
            .await
    }

    /// Check a student with exactly this name is on the roster.
    ///
    /// "Alex" does not count as present when the roster shows
    /// "Alex Thompson".
    pub async fn verify_student_present(&self, name: &str) -> HubResult<()> {
        let names = self.student_names().await?;
        if positions_of(&names, name).is_empty() {
            Err(HubError::assertion(
                "student present",
                name,
                format!("roster: {names:?}"),
            ))
        } else {
            Ok(())
        }
    }

    /// Create a student through the add-student dialog.
    ///
    /// The parent email field is touched only when the record carries a
    /// non-empty value. A rejected submission surfaces the dialog's error
    /// message as `ValidationRejected`; nothing is retried, and duplicates
    /// of an existing name are left to the app, which accepts them.
    pub async fn add_student(&mut self, record: &StudentRecord) -> HubResult<()> {
        debug!(name = %record.name, "adding student");
        self.driver
            .click(&Selector::test_id(ui::ADD_BUTTON))
            .await?;
        self.driver
            .wait_for(&Selector::test_id(ui::DIALOG), self.wait)
            .await?;

        self.fill_field(ui::NAME_INPUT, &record.name).await?;
        self.driver
            .select_option(&Selector::test_id(ui::GRADE_SELECT), &record.grade)
            .await?;
        self.fill_field(ui::EMAIL_INPUT, &record.email).await?;
        self.fill_field(ui::PHONE_INPUT, &record.phone).await?;
        self.fill_field(ui::ADDRESS_INPUT, &record.address).await?;
        self.fill_field(ui::PARENT_NAME_INPUT, &record.parent_name)
            .await?;
        if let Some(parent_email) = record.parent_email.as_deref().filter(|e| !e.is_empty()) {
            self.fill_field(ui::PARENT_EMAIL_INPUT, parent_email)
                .await?;
        }

        submit_dialog(
            &mut self.driver,
            &Selector::test_id(ui::SUBMIT),
            &Selector::test_id(ui::DIALOG),
            &Selector::test_id(ui::DIALOG_ERROR),
            self.wait,
        )
        .await
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
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::mock::MockHub;

    fn page(hub: MockHub) -> StudentPage<MockHub> {
        StudentPage::new(hub)
    }

    mod navigation_tests {
        use super::*;

        #[tokio::test]
        async fn test_navigate_succeeds_when_heading_renders() {
            let mut page = page(MockHub::new());
            page.navigate().await.unwrap();
            page.verify_page_title().await.unwrap();
        }

        #[tokio::test]
        async fn test_navigate_times_out_against_unresponsive_app() {
            let mut page = page(MockHub::new().unresponsive());
            let err = page.navigate().await.unwrap_err();
            match err {
                HubError::NavigationTimeout { url, .. } => {
                    assert!(url.ends_with("/students"), "got: {url}");
                }
                other => panic!("expected NavigationTimeout, got {other}"),
            }
        }

        #[tokio::test]
        async fn test_verify_page_title_reports_expected_and_actual() {
            let mut page = page(MockHub::new().with_students_heading("Pupil Management"));
            page.navigate().await.unwrap();
            let err = page.verify_page_title().await.unwrap_err();
            match err {
                HubError::AssertionFailed {
                    expected, actual, ..
                } => {
                    assert_eq!(expected, "Student Management");
                    assert_eq!(actual, "Pupil Management");
                }
                other => panic!("expected AssertionFailed, got {other}"),
            }
        }

        #[tokio::test]
        async fn test_verify_page_title_checks_the_subtitle_too() {
            let mut page = page(MockHub::new().with_students_subtitle("Manage rosters"));
            page.navigate().await.unwrap();
            let err = page.verify_page_title().await.unwrap_err();
            match err {
                HubError::AssertionFailed {
                    expected, actual, ..
                } => {
                    assert_eq!(expected, ui::SUBTITLE_TEXT);
                    assert_eq!(actual, "Manage rosters");
                }
                other => panic!("expected AssertionFailed, got {other}"),
            }
        }
    }

    mod roster_tests {
        use super::*;

        #[tokio::test]
        async fn test_student_count_queried_fresh_each_call() {
            let hub = MockHub::new().with_students(&fixtures::roster());
            let mut page = page(hub);
            page.navigate().await.unwrap();

            assert_eq!(page.get_student_count().await.unwrap(), 3);
            page.add_student(&fixtures::alex_thompson()).await.unwrap();
            assert_eq!(page.get_student_count().await.unwrap(), 4);
        }

        #[tokio::test]
        async fn test_verify_student_present_requires_exact_name() {
            let hub = MockHub::new().with_students(&[fixtures::alex_thompson()]);
            let mut page = page(hub);
            page.navigate().await.unwrap();

            page.verify_student_present("Alex Thompson").await.unwrap();
            let err = page.verify_student_present("Alex").await.unwrap_err();
            assert!(matches!(err, HubError::AssertionFailed { .. }));
        }

        #[tokio::test]
        async fn test_duplicate_names_are_accepted() {
            let mut page = page(MockHub::new());
            page.navigate().await.unwrap();

            page.add_student(&fixtures::alex_thompson()).await.unwrap();
            page.add_student(&fixtures::alex_thompson()).await.unwrap();

            assert_eq!(page.get_student_count().await.unwrap(), 2);
            let names = page.student_names().await.unwrap();
            assert_eq!(names, vec!["Alex Thompson", "Alex Thompson"]);
        }
    }

    mod dialog_tests {
        use super::*;

        #[tokio::test]
        async fn test_add_student_without_parent_email_skips_the_field() {
            let mut page = page(MockHub::new());
            page.navigate().await.unwrap();
            page.add_student(&fixtures::alex_thompson()).await.unwrap();

            let hub = page.into_driver();
            assert!(!hub
                .history()
                .iter()
                .any(|call| call.contains(ui::PARENT_EMAIL_INPUT)));
        }

        #[tokio::test]
        async fn test_add_student_with_parent_email_fills_the_field() {
            let mut page = page(MockHub::new());
            page.navigate().await.unwrap();
            page.add_student(&fixtures::maya_chen()).await.unwrap();

            let hub = page.into_driver();
            assert!(hub
                .history()
                .iter()
                .any(|call| call.contains(ui::PARENT_EMAIL_INPUT)));
        }

        #[tokio::test]
        async fn test_rejected_submission_surfaces_validation_message() {
            let mut page = page(MockHub::new());
            page.navigate().await.unwrap();

            let mut record = fixtures::alex_thompson();
            record.email = String::new();
            let err = page.add_student(&record).await.unwrap_err();
            match err {
                HubError::ValidationRejected { message } => {
                    assert!(message.contains("Email"), "got: {message}");
                }
                other => panic!("expected ValidationRejected, got {other}"),
            }
            // The rejected record must not have been created
            assert_eq!(page.get_student_count().await.unwrap(), 0);
        }
    }
}
