//! Transcript recording and academic performance computation.
//!
//! The engine itself is pure: it consumes semester groupings of already
//! graded courses and produces GPA, CGPA, rank estimate, degree class, and
//! advisory text. Persistence sits behind [`SemesterRepository`] and grade
//! symbols are resolved through [`scale`] before any arithmetic runs.

pub mod domain;
pub mod engine;
pub mod importer;
pub mod repository;
pub mod router;
pub mod scale;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Course, CourseDraft, CourseId, Grade, InvalidCreditUnitsError, Semester, SemesterDraft,
    SemesterId,
};
pub use engine::{
    AcademicResultsView, DegreeClass, InvalidClassSizeError, PerformanceEngine, PerformanceResult,
    SemesterStanding, StandingView,
};
pub use importer::{TranscriptCsvImporter, TranscriptImportError};
pub use repository::{RepositoryError, SemesterRepository};
pub use router::transcript_router;
pub use scale::UnknownGradeError;
pub use service::{CourseOutcome, TranscriptService, TranscriptServiceError};
