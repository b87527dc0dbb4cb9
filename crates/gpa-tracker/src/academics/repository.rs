use super::domain::{Semester, SemesterId};

/// Storage abstraction so the transcript service can be exercised in
/// isolation. Implementations own the write serialization; the service
/// recomputes dependent GPA fields before handing a semester back.
pub trait SemesterRepository: Send + Sync {
    fn insert(&self, semester: Semester) -> Result<Semester, RepositoryError>;
    fn update(&self, semester: Semester) -> Result<(), RepositoryError>;
    fn remove(&self, id: &SemesterId) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SemesterId) -> Result<Option<Semester>, RepositoryError>;
    /// All semesters in insertion order.
    fn list(&self) -> Result<Vec<Semester>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
