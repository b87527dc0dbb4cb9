use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{
    validate_credit_units, Course, CourseDraft, CourseId, InvalidCreditUnitsError, Semester,
    SemesterDraft, SemesterId,
};
use super::engine::{InvalidClassSizeError, PerformanceEngine, PerformanceResult};
use super::repository::{RepositoryError, SemesterRepository};
use super::scale::{self, UnknownGradeError};

/// Service composing the repository, grade scale, and performance engine.
pub struct TranscriptService<R> {
    repository: Arc<R>,
    engine: PerformanceEngine,
    default_class_size: u32,
}

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Time-based identifier matching what the web clients generate. The
/// sequence suffix keeps same-millisecond inserts from colliding.
fn next_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{seq:04}")
}

impl<R> TranscriptService<R>
where
    R: SemesterRepository + 'static,
{
    pub fn new(repository: Arc<R>, default_class_size: u32) -> Self {
        Self {
            repository,
            engine: PerformanceEngine::new(),
            default_class_size,
        }
    }

    /// Register a new, empty semester.
    pub fn create_semester(
        &self,
        draft: SemesterDraft,
    ) -> Result<Semester, TranscriptServiceError> {
        let id = SemesterId(draft.id.unwrap_or_else(next_id));
        let semester = Semester::new(id, draft.name);
        let stored = self.repository.insert(semester)?;
        Ok(stored)
    }

    pub fn remove_semester(&self, id: &SemesterId) -> Result<(), TranscriptServiceError> {
        self.repository.remove(id)?;
        Ok(())
    }

    pub fn list_semesters(&self) -> Result<Vec<Semester>, TranscriptServiceError> {
        let semesters = self.repository.list()?;
        Ok(semesters)
    }

    /// Validate and record a course, recomputing the owning semester's GPA
    /// in the same write.
    pub fn add_course(
        &self,
        semester_id: &SemesterId,
        draft: CourseDraft,
    ) -> Result<CourseOutcome, TranscriptServiceError> {
        let grade = scale::resolve(&draft.grade)?;
        let credit_units = validate_credit_units(draft.credit_units)?;

        let mut semester = self
            .repository
            .fetch(semester_id)?
            .ok_or(RepositoryError::NotFound)?;

        let course = Course {
            id: CourseId(draft.id.unwrap_or_else(next_id)),
            code: draft.code,
            title: draft.title,
            credit_units,
            grade,
            grade_point: scale::points_for(grade),
        };

        semester.courses.push(course.clone());
        semester.gpa = self.engine.semester_gpa(&semester.courses);
        let gpa = semester.gpa;
        self.repository.update(semester)?;

        Ok(CourseOutcome { course, gpa })
    }

    /// Drop a course and return the semester's recomputed GPA.
    pub fn remove_course(
        &self,
        semester_id: &SemesterId,
        course_id: &CourseId,
    ) -> Result<f64, TranscriptServiceError> {
        let mut semester = self
            .repository
            .fetch(semester_id)?
            .ok_or(RepositoryError::NotFound)?;

        let before = semester.courses.len();
        semester.courses.retain(|course| &course.id != course_id);
        if semester.courses.len() == before {
            return Err(RepositoryError::NotFound.into());
        }

        semester.gpa = self.engine.semester_gpa(&semester.courses);
        let gpa = semester.gpa;
        self.repository.update(semester)?;

        Ok(gpa)
    }

    /// Compute the full performance result over the stored transcript.
    pub fn results(
        &self,
        class_size: Option<u32>,
    ) -> Result<PerformanceResult, TranscriptServiceError> {
        let semesters = self.repository.list()?;
        let class_size = class_size.unwrap_or(self.default_class_size);
        let result = self.engine.score(&semesters, class_size)?;
        Ok(result)
    }
}

/// Response record for a course write: the stored course plus the updated
/// semester GPA, as the original API returned them together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOutcome {
    pub course: Course,
    pub gpa: f64,
}

/// Error raised by the transcript service.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptServiceError {
    #[error(transparent)]
    Grade(#[from] UnknownGradeError),
    #[error(transparent)]
    CreditUnits(#[from] InvalidCreditUnitsError),
    #[error(transparent)]
    ClassSize(#[from] InvalidClassSizeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
