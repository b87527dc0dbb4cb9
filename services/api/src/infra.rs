use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use gpa_tracker::academics::{RepositoryError, Semester, SemesterId, SemesterRepository};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory semester store. A Vec keeps the insertion order the GPA trend
/// display depends on.
#[derive(Default, Clone)]
pub(crate) struct InMemorySemesterRepository {
    semesters: Arc<Mutex<Vec<Semester>>>,
}

impl SemesterRepository for InMemorySemesterRepository {
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
