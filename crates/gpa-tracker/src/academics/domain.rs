use serde::{Deserialize, Serialize};

/// Identifier wrapper for semesters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemesterId(pub String);

/// Identifier wrapper for courses within a semester.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

/// Letter grades on the five-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    pub const fn symbol(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }
}

/// A graded course as recorded on the transcript.
///
/// `grade_point` is resolved from the scale when the course is created and
/// stored redundantly alongside the letter grade; it is not recomputed on
/// later reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub code: String,
    pub title: String,
    pub credit_units: u32,
    pub grade: Grade,
    pub grade_point: f64,
}

/// Client-submitted course payload before grade resolution and validation.
///
/// The grade arrives as a raw symbol so that unknown letters are rejected at
/// the boundary rather than during computation. Missing ids are filled with a
/// millisecond timestamp, matching what the web clients generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub code: String,
    pub title: String,
    pub credit_units: u32,
    pub grade: String,
}

/// A named semester holding its courses in insertion order.
///
/// `gpa` is the credit-weighted mean of the course grade points and is
/// recomputed whenever the course list changes; an empty semester carries 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    pub id: SemesterId,
    pub name: String,
    pub courses: Vec<Course>,
    pub gpa: f64,
}

impl Semester {
    pub fn new(id: SemesterId, name: String) -> Self {
        Self {
            id,
            name,
            courses: Vec::new(),
            gpa: 0.0,
        }
    }
}

/// Client-submitted semester payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// Raised when a course carries zero credit units.
///
/// Negative and fractional unit counts are unrepresentable in the wire type,
/// so zero is the only value left to reject.
#[derive(Debug, thiserror::Error)]
#[error("credit units must be a positive integer, got {0}")]
pub struct InvalidCreditUnitsError(pub u32);

pub fn validate_credit_units(credit_units: u32) -> Result<u32, InvalidCreditUnitsError> {
    if credit_units == 0 {
        return Err(InvalidCreditUnitsError(credit_units));
    }
    Ok(credit_units)
}
