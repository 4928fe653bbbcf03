//! Canonical test-data records.
//!
//! Static literals, constructed fresh per call so tests can clone and adjust
//! them freely. Names and titles double as lookup keys in the UI, so every
//! record here carries a distinct one.

use crate::records::{EventPatch, EventRecord, EventType, StudentRecord};

/// Grade 9 student with no optional fields, used by the creation flow
#[must_use]
pub fn alex_thompson() -> StudentRecord {
    StudentRecord::new(
        "Alex Thompson",
        "Grade 9",
        "alex.thompson@harmonyk12.example",
        "555-0142",
        "12 Maple Street",
        "Jordan Thompson",
    )
}

/// Grade 11 student with a parent email, exercising the optional-field path
#[must_use]
pub fn maya_chen() -> StudentRecord {
    StudentRecord::new(
        "Maya Chen",
        "Grade 11",
        "maya.chen@harmonyk12.example",
        "555-0178",
        "44 Birchwood Avenue",
        "Lin Chen",
    )
    .with_parent_email("lin.chen@example.com")
}

/// Three students a test can pre-seed the roster with
#[must_use]
pub fn roster() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(
            "Jamie Rivera",
            "Grade 10",
            "jamie.rivera@harmonyk12.example",
            "555-0115",
            "7 Oak Lane",
            "Sam Rivera",
        ),
        StudentRecord::new(
            "Priya Patel",
            "Grade 11",
            "priya.patel@harmonyk12.example",
            "555-0126",
            "89 Cedar Court",
            "Anita Patel",
        ),
        StudentRecord::new(
            "Marcus Lee",
            "Grade 12",
            "marcus.lee@harmonyk12.example",
            "555-0131",
            "230 Elm Drive",
            "Grace Lee",
        ),
    ]
}

/// Afternoon lab session in Science Lab 1
#[must_use]
pub fn chemistry_lab() -> EventRecord {
    EventRecord::new("Chemistry Lab Session", EventType::Lab)
        .with_subject("Chemistry")
        .with_times("13:00", "14:30")
        .with_location("Science Lab 1")
        .with_attendees(24)
        .with_description("Acid-base titration practice, goggles required")
}

/// Morning math class, the edit-flow starting point
#[must_use]
pub fn advanced_mathematics() -> EventRecord {
    EventRecord::new("Advanced Mathematics", EventType::Class)
        .with_subject("Mathematics")
        .with_times("10:00", "11:00")
        .with_location("Room B-101")
        .with_attendees(28)
        .with_description("Differential calculus, chapter 4")
}

/// Retitles the math class as a review session and moves it to Room B-205
#[must_use]
pub fn math_review_patch() -> EventPatch {
    EventPatch::new()
        .with_title("Advanced Mathematics - Review Session")
        .with_location("Room B-205")
}

/// Whole-school assembly, useful as unrelated schedule noise
#[must_use]
pub fn morning_assembly() -> EventRecord {
    EventRecord::new("Morning Assembly", EventType::Event)
        .with_subject("General")
        .with_times("08:00", "08:30")
        .with_location("Main Hall")
        .with_attendees(450)
        .with_description("Weekly announcements")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_student_fixtures_have_required_fields() {
        for record in [alex_thompson(), maya_chen()].iter().chain(&roster()) {
            assert!(!record.name.is_empty());
            assert!(!record.grade.is_empty());
            assert!(record.email.contains('@'), "{} email", record.name);
            assert!(!record.phone.is_empty());
            assert!(!record.address.is_empty());
            assert!(!record.parent_name.is_empty());
        }
    }

    #[test]
    fn test_roster_names_are_unique_lookup_keys() {
        let mut names: Vec<String> = roster().into_iter().map(|r| r.name).collect();
        names.push(alex_thompson().name);
        names.push(maya_chen().name);
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_event_fixtures_have_valid_time_ranges() {
        for event in [chemistry_lab(), advanced_mathematics(), morning_assembly()] {
            assert!(
                event.start_time < event.end_time,
                "{}: {} >= {}",
                event.title,
                event.start_time,
                event.end_time
            );
        }
    }

    #[test]
    fn test_chemistry_lab_matches_lookup_expectations() {
        let event = chemistry_lab();
        assert_eq!(event.title, "Chemistry Lab Session");
        assert_eq!(event.location, "Science Lab 1");
        assert_eq!(event.event_type, EventType::Lab);
    }

    #[test]
    fn test_math_review_patch_only_touches_title_and_location() {
        let patch = math_review_patch();
        assert_eq!(
            patch.title.as_deref(),
            Some("Advanced Mathematics - Review Session")
        );
        assert_eq!(patch.location.as_deref(), Some("Room B-205"));
        assert!(patch.event_type.is_none());
        assert!(patch.start_time.is_none());
        assert!(patch.end_time.is_none());
        assert!(patch.attendees.is_none());
        assert!(patch.description.is_none());
    }
}
