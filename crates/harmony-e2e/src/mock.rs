//! In-memory model of the Harmony Hub application.
//!
//! [`MockHub`] implements [`HubDriver`] over a small state machine of the
//! real app's UI: the student and schedule routes, their dialogs, and the
//! business rules the app enforces on submit. The suite's integration tests
//! run against it deterministically, with "today" supplied by an injected
//! clock; the same page-object code drives a real browser when the `browser`
//! feature is enabled.
//!
//! Rendering happens on every query, so reads always reflect current state.
//! Waits return immediately: mock state only changes through driver calls,
//! so polling could never observe anything new.
//!
//! Dates are rendered at UTC. Pair the mock with
//! `DateFormatter::utc().with_clock(...)` sharing the same clock handle.

use crate::clock::{ClockHandle, SystemClock};
use crate::dates::LONG_DATE_FORMAT;
use crate::driver::{ElementHandle, HubDriver};
use crate::records::{EventRecord, StudentRecord};
use crate::result::{HubError, HubResult};
use crate::selector::Selector;
use crate::ui::{schedule, students};
use crate::wait::WaitOptions;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// The two screens the suite exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Students,
    Schedule,
}

/// One rendered student row
#[derive(Debug, Clone)]
struct StudentEntry {
    name: String,
    grade: String,
    email: String,
    enrolled_date: String,
}

/// One stored schedule event, pinned to a day of the current month
#[derive(Debug, Clone)]
struct EventEntry {
    day: u32,
    title: String,
    type_label: String,
    subject: String,
    start_time: String,
    end_time: String,
    location: String,
    attendees: String,
    description: String,
}

impl EventEntry {
    fn from_record(day: u32, record: &EventRecord) -> Self {
        Self {
            day,
            title: record.title.clone(),
            type_label: record.event_type.as_str().to_string(),
            subject: record.subject.clone(),
            start_time: record.start_time.clone(),
            end_time: record.end_time.clone(),
            location: record.location.clone(),
            attendees: record.attendees.to_string(),
            description: record.description.clone(),
        }
    }

    /// Concatenated text the way `textContent` flattens a card
    fn card_text(&self) -> String {
        format!(
            "{} {} {} {} - {} {} {} attendees {}",
            self.title,
            self.type_label,
            self.subject,
            self.start_time,
            self.end_time,
            self.location,
            self.attendees,
            self.description
        )
    }
}

/// Which dialog is open and what it will do on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogKind {
    StudentCreate,
    EventCreate,
    EventEdit { index: usize },
}

/// Open modal dialog: field values keyed by input test id
#[derive(Debug, Clone)]
struct Dialog {
    kind: DialogKind,
    fields: HashMap<String, String>,
    error: Option<String>,
}

impl Dialog {
    fn student_create() -> Self {
        Self {
            kind: DialogKind::StudentCreate,
            fields: HashMap::new(),
            error: None,
        }
    }

    fn event_create() -> Self {
        let mut fields = HashMap::new();
        // The type selector has a default option preselected
        fields.insert(schedule::TYPE_SELECT.to_string(), "Class".to_string());
        Self {
            kind: DialogKind::EventCreate,
            fields,
            error: None,
        }
    }

    fn event_edit(index: usize, entry: &EventEntry) -> Self {
        let mut fields = HashMap::new();
        fields.insert(schedule::TITLE_INPUT.to_string(), entry.title.clone());
        fields.insert(schedule::TYPE_SELECT.to_string(), entry.type_label.clone());
        fields.insert(schedule::SUBJECT_INPUT.to_string(), entry.subject.clone());
        fields.insert(schedule::START_INPUT.to_string(), entry.start_time.clone());
        fields.insert(schedule::END_INPUT.to_string(), entry.end_time.clone());
        fields.insert(schedule::LOCATION_INPUT.to_string(), entry.location.clone());
        fields.insert(
            schedule::ATTENDEES_INPUT.to_string(),
            entry.attendees.clone(),
        );
        fields.insert(
            schedule::DESCRIPTION_INPUT.to_string(),
            entry.description.clone(),
        );
        Self {
            kind: DialogKind::EventEdit { index },
            fields,
            error: None,
        }
    }

    fn field(&self, key: &str) -> String {
        self.fields.get(key).cloned().unwrap_or_default()
    }
}

/// What clicking a node does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    OpenStudentDialog,
    SubmitStudentDialog,
    OpenEventDialog,
    SubmitEventDialog,
    SelectDay(u32),
    EditEvent(usize),
}

/// One element of the rendered screen
#[derive(Debug, Clone)]
struct Node {
    testid: &'static str,
    tag: &'static str,
    text: String,
    value: Option<String>,
    /// For form controls: the dialog field this node writes to
    field: Option<&'static str>,
    action: Option<Action>,
}

impl Node {
    fn stat(testid: &'static str, tag: &'static str, text: impl Into<String>) -> Self {
        Self {
            testid,
            tag,
            text: text.into(),
            value: None,
            field: None,
            action: None,
        }
    }

    fn button(testid: &'static str, text: impl Into<String>, action: Action) -> Self {
        Self {
            testid,
            tag: "button",
            text: text.into(),
            value: None,
            field: None,
            action: Some(action),
        }
    }

    fn input(testid: &'static str, tag: &'static str, value: String) -> Self {
        Self {
            testid,
            tag,
            text: String::new(),
            value: Some(value),
            field: Some(testid),
            action: None,
        }
    }
}

/// In-memory Harmony Hub implementing the driver trait
#[derive(Debug)]
pub struct MockHub {
    clock: ClockHandle,
    url: String,
    route: Option<Route>,
    students: Vec<StudentEntry>,
    events: Vec<EventEntry>,
    selected_day: Option<u32>,
    calendar_loaded: bool,
    unresponsive: bool,
    students_heading: String,
    students_subtitle: String,
    dialog: Option<Dialog>,
    call_log: Vec<String>,
}

impl Default for MockHub {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHub {
    /// Empty application on the system clock
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            url: "about:blank".to_string(),
            route: None,
            students: Vec::new(),
            events: Vec::new(),
            selected_day: None,
            calendar_loaded: true,
            unresponsive: false,
            students_heading: students::HEADING_TEXT.to_string(),
            students_subtitle: students::SUBTITLE_TEXT.to_string(),
            dialog: None,
            call_log: Vec::new(),
        }
    }

    /// Use the given clock for "today" and enrollment dates
    #[must_use]
    pub fn with_clock(mut self, clock: ClockHandle) -> Self {
        self.clock = clock;
        self
    }

    /// Pre-seed the roster, as if the records already existed server-side
    #[must_use]
    pub fn with_students(mut self, records: &[StudentRecord]) -> Self {
        let enrolled = self.today_iso();
        for record in records {
            self.students.push(StudentEntry {
                name: record.name.clone(),
                grade: record.grade.clone(),
                email: record.email.clone(),
                enrolled_date: record
                    .enrolled_date
                    .clone()
                    .unwrap_or_else(|| enrolled.clone()),
            });
        }
        self
    }

    /// Pre-seed events under today's calendar day
    #[must_use]
    pub fn with_events(mut self, records: &[EventRecord]) -> Self {
        let today = self.today_day();
        for record in records {
            self.events.push(EventEntry::from_record(today, record));
        }
        self
    }

    /// Render the schedule with no day cells, as if the month never loaded
    #[must_use]
    pub const fn with_empty_calendar(mut self) -> Self {
        self.calendar_loaded = false;
        self
    }

    /// Render nothing for any route, as if the app never came up
    #[must_use]
    pub const fn unresponsive(mut self) -> Self {
        self.unresponsive = true;
        self
    }

    /// Override the students heading, mimicking drifted page copy
    #[must_use]
    pub fn with_students_heading(mut self, text: impl Into<String>) -> Self {
        self.students_heading = text.into();
        self
    }

    /// Override the students subtitle, mimicking drifted page copy
    #[must_use]
    pub fn with_students_subtitle(mut self, text: impl Into<String>) -> Self {
        self.students_subtitle = text.into();
        self
    }

    /// Calls recorded so far, in order
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.call_log
    }

    /// Whether a driver method was invoked
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.call_log.iter().any(|c| c.starts_with(method))
    }

    fn log(&mut self, entry: String) {
        self.call_log.push(entry);
    }

    fn today_day(&self) -> u32 {
        self.clock.now().day()
    }

    fn today_iso(&self) -> String {
        self.clock.now().format("%Y-%m-%d").to_string()
    }

    fn days_in_current_month(&self) -> u32 {
        let now = self.clock.now();
        let (year, month) = (now.year(), now.month());
        let first_of_next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        first_of_next
            .and_then(|d| d.pred_opt())
            .map_or(31, |d| d.day())
    }

    fn long_date_of_day(&self, day: u32) -> String {
        let now = self.clock.now();
        NaiveDate::from_ymd_opt(now.year(), now.month(), day)
            .map(|d| d.format(LONG_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Render the current screen as a flat node list in document order
    fn nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::new();
        match self.route {
            Some(Route::Students) => self.render_students(&mut nodes),
            Some(Route::Schedule) => self.render_schedule(&mut nodes),
            None => {}
        }
        nodes
    }

    fn render_students(&self, nodes: &mut Vec<Node>) {
        nodes.push(Node::stat(
            students::HEADING,
            "h1",
            self.students_heading.clone(),
        ));
        nodes.push(Node::stat(
            students::SUBTITLE,
            "p",
            self.students_subtitle.clone(),
        ));
        nodes.push(Node::button(
            students::ADD_BUTTON,
            "Add Student",
            Action::OpenStudentDialog,
        ));

        for entry in &self.students {
            nodes.push(Node::stat(
                students::STUDENT_CARD,
                "article",
                format!(
                    "{} {} {} Enrolled {}",
                    entry.name, entry.grade, entry.email, entry.enrolled_date
                ),
            ));
            nodes.push(Node::stat(students::STUDENT_NAME, "h3", entry.name.clone()));
        }

        if let Some(dialog) = &self.dialog {
            if dialog.kind == DialogKind::StudentCreate {
                nodes.push(Node::stat(students::DIALOG, "dialog", "Add Student"));
                for (testid, tag) in [
                    (students::NAME_INPUT, "input"),
                    (students::GRADE_SELECT, "select"),
                    (students::EMAIL_INPUT, "input"),
                    (students::PHONE_INPUT, "input"),
                    (students::ADDRESS_INPUT, "input"),
                    (students::PARENT_NAME_INPUT, "input"),
                    (students::PARENT_EMAIL_INPUT, "input"),
                ] {
                    nodes.push(Node::input(testid, tag, dialog.field(testid)));
                }
                nodes.push(Node::button(
                    students::SUBMIT,
                    "Save Student",
                    Action::SubmitStudentDialog,
                ));
                if let Some(error) = &dialog.error {
                    nodes.push(Node::stat(students::DIALOG_ERROR, "p", error.clone()));
                }
            }
        }
    }

    fn render_schedule(&self, nodes: &mut Vec<Node>) {
        nodes.push(Node::stat(schedule::HEADING, "h1", schedule::HEADING_TEXT));
        nodes.push(Node::stat(schedule::SUBTITLE, "p", schedule::SUBTITLE_TEXT));
        nodes.push(Node::button(
            schedule::ADD_BUTTON,
            "Add Event",
            Action::OpenEventDialog,
        ));

        if self.calendar_loaded {
            for day in 1..=self.days_in_current_month() {
                nodes.push(Node {
                    testid: schedule::CALENDAR_DAY,
                    tag: "td",
                    text: day.to_string(),
                    value: None,
                    field: None,
                    action: Some(Action::SelectDay(day)),
                });
            }
        }

        if let Some(day) = self.selected_day {
            nodes.push(Node::stat(
                schedule::SCHEDULE_HEADER,
                "h2",
                format!("Schedule for {}", self.long_date_of_day(day)),
            ));
            for (index, entry) in self
                .events
                .iter()
                .enumerate()
                .filter(|(_, e)| e.day == day)
            {
                nodes.push(Node::stat(schedule::EVENT_CARD, "article", entry.card_text()));
                nodes.push(Node::stat(schedule::EVENT_TITLE, "h3", entry.title.clone()));
                nodes.push(Node::button(
                    schedule::EVENT_EDIT,
                    "Edit",
                    Action::EditEvent(index),
                ));
            }
        }

        if let Some(dialog) = &self.dialog {
            if matches!(
                dialog.kind,
                DialogKind::EventCreate | DialogKind::EventEdit { .. }
            ) {
                let title = match dialog.kind {
                    DialogKind::EventEdit { .. } => "Edit Event",
                    _ => "Add Event",
                };
                nodes.push(Node::stat(schedule::DIALOG, "dialog", title));
                for (testid, tag) in [
                    (schedule::TITLE_INPUT, "input"),
                    (schedule::TYPE_SELECT, "select"),
                    (schedule::SUBJECT_INPUT, "input"),
                    (schedule::START_INPUT, "input"),
                    (schedule::END_INPUT, "input"),
                    (schedule::LOCATION_INPUT, "input"),
                    (schedule::ATTENDEES_INPUT, "input"),
                    (schedule::DESCRIPTION_INPUT, "textarea"),
                ] {
                    nodes.push(Node::input(testid, tag, dialog.field(testid)));
                }
                nodes.push(Node::button(
                    schedule::SUBMIT,
                    "Save Event",
                    Action::SubmitEventDialog,
                ));
                if let Some(error) = &dialog.error {
                    nodes.push(Node::stat(schedule::DIALOG_ERROR, "p", error.clone()));
                }
            }
        }
    }

    /// Selector matching over the rendered node list.
    ///
    /// CSS selectors are supported in the `[data-testid="..."]` form the
    /// page objects emit; anything else matches nothing.
    fn select<'a>(&self, nodes: &'a [Node], selector: &Selector) -> Vec<&'a Node> {
        fn by_testid<'b>(nodes: &'b [Node], id: &str) -> Vec<&'b Node> {
            nodes.iter().filter(|n| n.testid == id).collect()
        }
        fn by_css<'b>(nodes: &'b [Node], css: &str) -> Vec<&'b Node> {
            testid_of_css(css).map_or_else(Vec::new, |id| by_testid(nodes, id))
        }

        match selector {
            Selector::TestId(id) => by_testid(nodes, id),
            Selector::Css(css) => by_css(nodes, css),
            Selector::CssWithText { css, text } => by_css(nodes, css)
                .into_iter()
                .filter(|n| n.text.contains(text.as_str()))
                .collect(),
            Selector::CssWithExactText { css, text } => by_css(nodes, css)
                .into_iter()
                .filter(|n| n.text.trim() == text.as_str())
                .collect(),
            Selector::Nth { css, index } => {
                by_css(nodes, css).into_iter().skip(*index).take(1).collect()
            }
        }
    }

    fn handle_of(node: &Node, index: usize) -> ElementHandle {
        ElementHandle {
            id: format!("{}-{index}", node.testid),
            tag_name: node.tag.to_string(),
            text_content: Some(node.text.trim().to_string()),
            value: node.value.clone(),
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::OpenStudentDialog => self.dialog = Some(Dialog::student_create()),
            Action::OpenEventDialog => self.dialog = Some(Dialog::event_create()),
            Action::SelectDay(day) => self.selected_day = Some(day),
            Action::EditEvent(index) => {
                if let Some(entry) = self.events.get(index) {
                    self.dialog = Some(Dialog::event_edit(index, entry));
                }
            }
            Action::SubmitStudentDialog => self.submit_student_dialog(),
            Action::SubmitEventDialog => self.submit_event_dialog(),
        }
    }

    fn submit_student_dialog(&mut self) {
        let Some(mut dialog) = self.dialog.take() else {
            return;
        };
        match validate_student(&dialog.fields) {
            Err(message) => {
                debug!(%message, "student submit rejected");
                dialog.error = Some(message);
                self.dialog = Some(dialog);
            }
            Ok(()) => {
                let entry = StudentEntry {
                    name: dialog.field(students::NAME_INPUT),
                    grade: dialog.field(students::GRADE_SELECT),
                    email: dialog.field(students::EMAIL_INPUT),
                    enrolled_date: self.today_iso(),
                };
                debug!(name = %entry.name, "student created");
                self.students.push(entry);
            }
        }
    }

    fn submit_event_dialog(&mut self) {
        let Some(mut dialog) = self.dialog.take() else {
            return;
        };
        match validate_event(&dialog.fields) {
            Err(message) => {
                debug!(%message, "event submit rejected");
                dialog.error = Some(message);
                self.dialog = Some(dialog);
            }
            Ok(()) => match dialog.kind {
                DialogKind::EventEdit { index } => {
                    if let Some(entry) = self.events.get_mut(index) {
                        entry.title = dialog.field(schedule::TITLE_INPUT);
                        entry.type_label = dialog.field(schedule::TYPE_SELECT);
                        entry.subject = dialog.field(schedule::SUBJECT_INPUT);
                        entry.start_time = dialog.field(schedule::START_INPUT);
                        entry.end_time = dialog.field(schedule::END_INPUT);
                        entry.location = dialog.field(schedule::LOCATION_INPUT);
                        entry.attendees = dialog.field(schedule::ATTENDEES_INPUT);
                        entry.description = dialog.field(schedule::DESCRIPTION_INPUT);
                        debug!(title = %entry.title, "event updated");
                    }
                }
                _ => {
                    // Events created while nothing is selected land on today
                    let day = self.selected_day.unwrap_or_else(|| self.today_day());
                    let entry = EventEntry {
                        day,
                        title: dialog.field(schedule::TITLE_INPUT),
                        type_label: dialog.field(schedule::TYPE_SELECT),
                        subject: dialog.field(schedule::SUBJECT_INPUT),
                        start_time: dialog.field(schedule::START_INPUT),
                        end_time: dialog.field(schedule::END_INPUT),
                        location: dialog.field(schedule::LOCATION_INPUT),
                        attendees: dialog.field(schedule::ATTENDEES_INPUT),
                        description: dialog.field(schedule::DESCRIPTION_INPUT),
                    };
                    debug!(title = %entry.title, day, "event created");
                    self.events.push(entry);
                }
            },
        }
    }
}

fn field(fields: &HashMap<String, String>, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

/// Extract the id from a `[data-testid="..."]` attribute selector
fn testid_of_css(css: &str) -> Option<&str> {
    css.strip_prefix("[data-testid=\"")
        .and_then(|rest| rest.strip_suffix("\"]"))
}

/// The application's student business rules
fn validate_student(fields: &HashMap<String, String>) -> Result<(), String> {
    let required = [
        (students::NAME_INPUT, "Name is required"),
        (students::GRADE_SELECT, "Grade is required"),
        (students::EMAIL_INPUT, "Email is required"),
        (students::PHONE_INPUT, "Phone is required"),
        (students::ADDRESS_INPUT, "Address is required"),
        (students::PARENT_NAME_INPUT, "Parent name is required"),
    ];
    for (key, message) in required {
        if field(fields, key).trim().is_empty() {
            return Err(message.to_string());
        }
    }
    if !field(fields, students::EMAIL_INPUT).contains('@') {
        return Err("Email address is invalid".to_string());
    }
    let grade = field(fields, students::GRADE_SELECT);
    if !students::GRADES.contains(&grade.as_str()) {
        return Err(format!("Unknown grade: {grade}"));
    }
    let parent_email = field(fields, students::PARENT_EMAIL_INPUT);
    if !parent_email.is_empty() && !parent_email.contains('@') {
        return Err("Parent email address is invalid".to_string());
    }
    Ok(())
}

/// The application's event business rules
fn validate_event(fields: &HashMap<String, String>) -> Result<(), String> {
    if field(fields, schedule::TITLE_INPUT).trim().is_empty() {
        return Err("Title is required".to_string());
    }
    let start = field(fields, schedule::START_INPUT);
    let end = field(fields, schedule::END_INPUT);
    if start.is_empty() || end.is_empty() {
        return Err("Start and end times are required".to_string());
    }
    // Same-day 24h "HH:MM" strings order lexicographically
    if start >= end {
        return Err("End time must be after start time".to_string());
    }
    let attendees = field(fields, schedule::ATTENDEES_INPUT);
    if !attendees.is_empty() && attendees.parse::<u32>().is_err() {
        return Err("Attendees must be a non-negative number".to_string());
    }
    Ok(())
}

#[async_trait]
impl HubDriver for MockHub {
    async fn goto(&mut self, url: &str) -> HubResult<()> {
        self.log(format!("goto:{url}"));
        debug!(url, "mock navigation");
        self.url = url.to_string();
        self.route = if self.unresponsive {
            None
        } else if url.ends_with(students::ROUTE) {
            Some(Route::Students)
        } else if url.ends_with(schedule::ROUTE) {
            Some(Route::Schedule)
        } else {
            None
        };
        // Navigation closes any open dialog and drops the day selection
        self.dialog = None;
        self.selected_day = None;
        Ok(())
    }

    async fn current_url(&self) -> HubResult<String> {
        Ok(self.url.clone())
    }

    async fn find(&self, selector: &Selector) -> HubResult<ElementHandle> {
        let nodes = self.nodes();
        self.select(&nodes, selector)
            .first()
            .map(|n| Self::handle_of(n, 0))
            .ok_or_else(|| HubError::not_found(selector.to_string()))
    }

    async fn texts(&self, selector: &Selector) -> HubResult<Vec<String>> {
        let nodes = self.nodes();
        Ok(self
            .select(&nodes, selector)
            .into_iter()
            .map(|n| n.text.trim().to_string())
            .collect())
    }

    async fn count(&self, selector: &Selector) -> HubResult<usize> {
        let nodes = self.nodes();
        Ok(self.select(&nodes, selector).len())
    }

    async fn text(&self, selector: &Selector) -> HubResult<String> {
        self.find(selector).await.map(|h| h.text().to_string())
    }

    async fn is_present(&self, selector: &Selector) -> HubResult<bool> {
        Ok(self.count(selector).await? > 0)
    }

    async fn click(&mut self, selector: &Selector) -> HubResult<()> {
        self.log(format!("click:{selector}"));
        let nodes = self.nodes();
        let action = {
            let matches = self.select(&nodes, selector);
            let node = matches
                .first()
                .ok_or_else(|| HubError::not_found(selector.to_string()))?;
            node.action
        };
        debug!(%selector, "mock click");
        if let Some(action) = action {
            self.apply(action);
        }
        Ok(())
    }

    async fn fill(&mut self, selector: &Selector, value: &str) -> HubResult<()> {
        self.log(format!("fill:{selector}={value}"));
        let nodes = self.nodes();
        let key = {
            let matches = self.select(&nodes, selector);
            let node = matches
                .first()
                .ok_or_else(|| HubError::not_found(selector.to_string()))?;
            node.field.ok_or_else(|| HubError::Page {
                message: format!("{selector} is not a form control"),
            })?
        };
        if let Some(dialog) = &mut self.dialog {
            dialog.fields.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    async fn select_option(&mut self, selector: &Selector, label: &str) -> HubResult<()> {
        // Selects store the chosen option's visible label as their value
        self.fill(selector, label).await
    }

    async fn wait_for(
        &mut self,
        selector: &Selector,
        options: WaitOptions,
    ) -> HubResult<ElementHandle> {
        // State cannot change while we wait, so one check decides
        match self.find(selector).await {
            Ok(handle) => Ok(handle),
            Err(_) => Err(HubError::Timeout {
                ms: options.timeout_ms,
                waiting_for: selector.to_string(),
            }),
        }
    }

    async fn wait_for_absent(
        &mut self,
        selector: &Selector,
        options: WaitOptions,
    ) -> HubResult<()> {
        if self.is_present(selector).await? {
            return Err(HubError::Timeout {
                ms: options.timeout_ms,
                waiting_for: format!("{selector} to disappear"),
            });
        }
        Ok(())
    }

    async fn close(&mut self) -> HubResult<()> {
        self.log("close".to_string());
        Ok(())
    }
}
