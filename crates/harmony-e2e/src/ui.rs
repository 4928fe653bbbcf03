//! The rendered UI contract the suite pins against the application.
//!
//! Routes, heading copy, and `data-testid` hooks live here once; page
//! objects locate by them and the in-memory mock renders them. When the
//! application's copy or markup hooks change, this is the only module to
//! update.

/// Student management screen
pub mod students {
    /// App route for the screen
    pub const ROUTE: &str = "/students";
    /// Test id of the primary heading
    pub const HEADING: &str = "students-heading";
    /// Expected heading copy
    pub const HEADING_TEXT: &str = "Student Management";
    /// Test id of the subtitle
    pub const SUBTITLE: &str = "students-subtitle";
    /// Expected subtitle copy
    pub const SUBTITLE_TEXT: &str = "Manage student records and enrollment";
    /// Button opening the creation dialog
    pub const ADD_BUTTON: &str = "add-student-button";
    /// The creation dialog container
    pub const DIALOG: &str = "student-dialog";
    /// Name input inside the dialog
    pub const NAME_INPUT: &str = "student-name-input";
    /// Grade selector inside the dialog
    pub const GRADE_SELECT: &str = "student-grade-select";
    /// Email input inside the dialog
    pub const EMAIL_INPUT: &str = "student-email-input";
    /// Phone input inside the dialog
    pub const PHONE_INPUT: &str = "student-phone-input";
    /// Address input inside the dialog
    pub const ADDRESS_INPUT: &str = "student-address-input";
    /// Parent name input inside the dialog
    pub const PARENT_NAME_INPUT: &str = "parent-name-input";
    /// Parent email input inside the dialog (optional field)
    pub const PARENT_EMAIL_INPUT: &str = "parent-email-input";
    /// Dialog submit button
    pub const SUBMIT: &str = "student-dialog-submit";
    /// Validation message element rendered on a rejected submit
    pub const DIALOG_ERROR: &str = "dialog-error";
    /// One rendered student entry
    pub const STUDENT_CARD: &str = "student-card";
    /// The name element inside a student entry
    pub const STUDENT_NAME: &str = "student-name";
    /// Grade options the application offers
    pub const GRADES: [&str; 4] = ["Grade 9", "Grade 10", "Grade 11", "Grade 12"];
}

/// Class schedule screen
pub mod schedule {
    /// App route for the screen
    pub const ROUTE: &str = "/schedule";
    /// Test id of the primary heading
    pub const HEADING: &str = "schedule-heading";
    /// Expected heading copy
    pub const HEADING_TEXT: &str = "Class Schedule";
    /// Test id of the subtitle
    pub const SUBTITLE: &str = "schedule-subtitle";
    /// Expected subtitle copy
    pub const SUBTITLE_TEXT: &str = "View and manage class schedules and events";
    /// One calendar day cell; its text is the day number
    pub const CALENDAR_DAY: &str = "calendar-day";
    /// Header above the selected day's event list
    pub const SCHEDULE_HEADER: &str = "schedule-header";
    /// Button opening the event-creation dialog
    pub const ADD_BUTTON: &str = "add-event-button";
    /// The event create/edit dialog container
    pub const DIALOG: &str = "event-dialog";
    /// Title input inside the dialog
    pub const TITLE_INPUT: &str = "event-title-input";
    /// Type selector inside the dialog
    pub const TYPE_SELECT: &str = "event-type-select";
    /// Subject input inside the dialog
    pub const SUBJECT_INPUT: &str = "event-subject-input";
    /// Start time input inside the dialog
    pub const START_INPUT: &str = "event-start-input";
    /// End time input inside the dialog
    pub const END_INPUT: &str = "event-end-input";
    /// Location input inside the dialog
    pub const LOCATION_INPUT: &str = "event-location-input";
    /// Attendees input inside the dialog
    pub const ATTENDEES_INPUT: &str = "event-attendees-input";
    /// Description input inside the dialog
    pub const DESCRIPTION_INPUT: &str = "event-description-input";
    /// Dialog submit button
    pub const SUBMIT: &str = "event-dialog-submit";
    /// Validation message element rendered on a rejected submit
    pub const DIALOG_ERROR: &str = "dialog-error";
    /// One rendered event card under the selected day
    pub const EVENT_CARD: &str = "event-card";
    /// The title element inside an event card
    pub const EVENT_TITLE: &str = "event-title";
    /// The edit button inside an event card
    pub const EVENT_EDIT: &str = "event-edit";
}
