//! Dataset diagnostics.
//!
//! Structural checks on the merged dataset before scheduling. Detects:
//! - Duplicate natural keys (course codes, lecturer ids and names, room
//!   ids, group ids)
//! - Courses referencing unknown lecturers or student groups
//!
//! Findings are advisory: the caller reports them and the run proceeds.
//! The scheduler itself enforces the fatal unknown-lecturer precondition
//! at the point a candidate is actually checked, and silently skips
//! unknown group ids.

use std::collections::HashSet;

use crate::dataset::Dataset;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same natural key.
    DuplicateId,
    /// A course names a lecturer absent from the lecturer table.
    UnknownLecturer,
    /// A course lists a group id absent from the group table.
    UnknownStudentGroup,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the merged dataset.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_dataset(dataset: &Dataset) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_codes = HashSet::new();
    for c in &dataset.courses {
        if !course_codes.insert(c.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate course code: {}", c.code),
            ));
        }
    }

    let mut lecturer_ids = HashSet::new();
    let mut lecturer_names = HashSet::new();
    for l in &dataset.lecturers {
        if !lecturer_ids.insert(l.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate lecturer id: {}", l.id),
            ));
        }
        if !lecturer_names.insert(l.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!(
                    "duplicate lecturer name: {} (name is the course join key; the first record wins)",
                    l.name
                ),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in &dataset.rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate room id: {}", r.id),
            ));
        }
    }

    let mut group_ids = HashSet::new();
    for g in &dataset.student_groups {
        if !group_ids.insert(g.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate student group id: {}", g.id),
            ));
        }
    }

    for c in &dataset.courses {
        if !lecturer_names.contains(c.lecturer.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLecturer,
                format!(
                    "course '{}' references unknown lecturer '{}'",
                    c.code, c.lecturer
                ),
            ));
        }
        for group_id in &c.student_groups {
            if !group_ids.contains(group_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownStudentGroup,
                    format!(
                        "course '{}' references unknown student group '{}' (skipped at scheduling time)",
                        c.code, group_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
