//! Test-data record types for students and schedule events.
//!
//! These are inputs to the page-object layer only. The application under
//! test owns the real entities; this suite submits create/update requests
//! built from these records and re-reads rendered state to verify them.
//! `name` (students) and `title` (events) are the lookup keys the page
//! objects use, so they must be unique among concurrently visible entries.

use serde::{Deserialize, Serialize};

/// One student as entered through the creation dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Display name, the lookup key for presence checks
    pub name: String,
    /// Grade label as the UI shows it, e.g. "Grade 9"
    pub grade: String,
    /// Student email (validated by the application, not by this suite)
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Street address
    pub address: String,
    /// Parent or guardian name
    pub parent_name: String,
    /// Parent email; filled into the dialog only when present and non-empty
    pub parent_email: Option<String>,
    /// Display-only, set by the application on creation; never filled
    pub enrolled_date: Option<String>,
}

impl StudentRecord {
    /// Record with all required fields and no optional ones
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        grade: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        parent_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            parent_name: parent_name.into(),
            parent_email: None,
            enrolled_date: None,
        }
    }

    /// Attach a parent email
    #[must_use]
    pub fn with_parent_email(mut self, parent_email: impl Into<String>) -> Self {
        self.parent_email = Some(parent_email.into());
        self
    }
}

/// Event category as offered by the event dialog's type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Regular class session
    Class,
    /// Laboratory session
    Lab,
    /// Staff or parent meeting
    Meeting,
    /// General school event
    Event,
    /// Examination
    Exam,
    /// Extracurricular activity
    Activity,
}

impl EventType {
    /// The exact option label the UI renders
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Lab => "Lab",
            Self::Meeting => "Meeting",
            Self::Event => "Event",
            Self::Exam => "Exam",
            Self::Activity => "Activity",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One schedule event as entered through the event dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event title, the lookup key for card queries
    pub title: String,
    /// Event category
    pub event_type: EventType,
    /// Subject label, free-form
    pub subject: String,
    /// Start time, "HH:MM" 24-hour
    pub start_time: String,
    /// End time, "HH:MM" 24-hour; the application requires start < end
    pub end_time: String,
    /// Room or venue
    pub location: String,
    /// Expected attendee count
    pub attendees: u32,
    /// Free-form description
    pub description: String,
}

impl EventRecord {
    /// Event with the given title and type, defaulting to a 09:00-10:00
    /// slot and empty optional text fields
    #[must_use]
    pub fn new(title: impl Into<String>, event_type: EventType) -> Self {
        Self {
            title: title.into(),
            event_type,
            subject: String::new(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            location: String::new(),
            attendees: 0,
            description: String::new(),
        }
    }

    /// Set the subject label
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set start and end times ("HH:MM" 24-hour)
    #[must_use]
    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Set the room or venue
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the attendee count
    #[must_use]
    pub const fn with_attendees(mut self, attendees: u32) -> Self {
        self.attendees = attendees;
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial event update: only populated fields are written into the edit
/// dialog, everything else keeps its current value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    /// Replacement title
    pub title: Option<String>,
    /// Replacement category
    pub event_type: Option<EventType>,
    /// Replacement subject
    pub subject: Option<String>,
    /// Replacement start time
    pub start_time: Option<String>,
    /// Replacement end time
    pub end_time: Option<String>,
    /// Replacement location
    pub location: Option<String>,
    /// Replacement attendee count
    pub attendees: Option<u32>,
    /// Replacement description
    pub description: Option<String>,
}

impl EventPatch {
    /// Empty patch; an edit submitted with it re-saves the current values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the category
    #[must_use]
    pub const fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    /// Replace the subject
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Replace the start time
    #[must_use]
    pub fn with_start_time(mut self, start: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self
    }

    /// Replace the end time
    #[must_use]
    pub fn with_end_time(mut self, end: impl Into<String>) -> Self {
        self.end_time = Some(end.into());
        self
    }

    /// Replace the location
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Replace the attendee count
    #[must_use]
    pub const fn with_attendees(mut self, attendees: u32) -> Self {
        self.attendees = Some(attendees);
        self
    }

    /// Replace the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
