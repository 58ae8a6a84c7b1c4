//! Grade-to-chip conversion. The tiers reward only strong grades; anything
//! below 90 earns nothing.

use crate::wallet::{GradeEntry, Profile};
use thiserror::Error;
use time::OffsetDateTime;

#[derive(Debug, Error, PartialEq)]
pub enum RewardsError {
    #[error("grade must be between 0 and 100, got {0}")]
    InvalidGrade(f64),
    #[error("assignment name cannot be empty")]
    EmptyAssignment,
}

pub fn chips_for_grade(grade: f64) -> u64 {
    if grade >= 100.0 {
        10
    } else if grade >= 98.0 {
        7
    } else if grade >= 95.0 {
        5
    } else if grade >= 90.0 {
        2
    } else {
        0
    }
}

/// Log a grade: validates it, appends a timestamped entry, credits the
/// earned chips, and returns how many were earned (possibly zero).
pub fn add_grade(profile: &mut Profile, assignment: &str, grade: f64) -> Result<u64, RewardsError> {
    if !grade.is_finite() || !(0.0..=100.0).contains(&grade) {
        return Err(RewardsError::InvalidGrade(grade));
    }
    let assignment = assignment.trim();
    if assignment.is_empty() {
        return Err(RewardsError::EmptyAssignment);
    }

    let chips_earned = chips_for_grade(grade);
    profile.grades.push(GradeEntry {
        assignment: assignment.to_string(),
        grade,
        chips_earned,
        date: OffsetDateTime::now_utc(),
    });
    profile.chips += chips_earned;
    Ok(chips_earned)
}
