use std::sync::{Arc, Mutex};

use crate::academics::domain::{
    Course, CourseDraft, CourseId, Grade, Semester, SemesterDraft, SemesterId,
};
use crate::academics::repository::{RepositoryError, SemesterRepository};
use crate::academics::scale;
use crate::academics::service::TranscriptService;

pub(super) const DEFAULT_CLASS_SIZE: u32 = 65;

pub(super) fn course(code: &str, grade: Grade, credit_units: u32) -> Course {
    Course {
        id: CourseId(format!("course-{code}")),
        code: code.to_string(),
        title: format!("{code} title"),
        credit_units,
        grade,
        grade_point: scale::points_for(grade),
    }
}

pub(super) fn semester(name: &str, courses: Vec<Course>) -> Semester {
    let gpa = crate::academics::engine::PerformanceEngine::new().semester_gpa(&courses);
    Semester {
        id: SemesterId(format!("sem-{name}")),
        name: name.to_string(),
        courses,
        gpa,
    }
}

pub(super) fn course_draft(code: &str, grade: &str, credit_units: u32) -> CourseDraft {
    CourseDraft {
        id: None,
        code: code.to_string(),
        title: format!("{code} title"),
        credit_units,
        grade: grade.to_string(),
    }
}

pub(super) fn semester_draft(name: &str) -> SemesterDraft {
    SemesterDraft {
        id: None,
        name: name.to_string(),
    }
}

/// Order-preserving in-memory store for exercising the service and router.
#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    semesters: Arc<Mutex<Vec<Semester>>>,
}

impl SemesterRepository for MemoryRepository {
    fn insert(&self, semester: Semester) -> Result<Semester, RepositoryError> {
        let mut guard = self.semesters.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == semester.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(semester.clone());
        Ok(semester)
    }

    fn update(&self, semester: Semester) -> Result<(), RepositoryError> {
        let mut guard = self.semesters.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == semester.id) {
            Some(existing) => {
                *existing = semester;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn remove(&self, id: &SemesterId) -> Result<(), RepositoryError> {
        let mut guard = self.semesters.lock().expect("repository mutex poisoned");
        let before = guard.len();
        guard.retain(|existing| &existing.id != id);
        if guard.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn fetch(&self, id: &SemesterId) -> Result<Option<Semester>, RepositoryError> {
        let guard = self.semesters.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|existing| &existing.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Semester>, RepositoryError> {
        let guard = self.semesters.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }
}

/// Repository that rejects every call, for failure-path assertions.
pub(super) struct UnavailableRepository;

impl SemesterRepository for UnavailableRepository {
    fn insert(&self, _semester: Semester) -> Result<Semester, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn update(&self, _semester: Semester) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn remove(&self, _id: &SemesterId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &SemesterId) -> Result<Option<Semester>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Semester>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<TranscriptService<MemoryRepository>>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = Arc::new(TranscriptService::new(
        Arc::new(repository.clone()),
        DEFAULT_CLASS_SIZE,
    ));
    (service, repository)
}
