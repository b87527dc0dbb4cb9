mod policy;
mod rules;
pub mod views;

pub use policy::DegreeClass;
pub use views::{AcademicResultsView, StandingView};

use super::domain::{Course, Semester};
use serde::{Deserialize, Serialize};

/// Raised when a rank estimate is requested against an empty cohort.
#[derive(Debug, thiserror::Error)]
#[error("class size must be a positive integer, got {0}")]
pub struct InvalidClassSizeError(pub u32);

/// Stateless calculator turning semester groupings into academic metrics.
///
/// The engine owns no records and performs no I/O; every call computes a
/// fresh result from the snapshot it is handed.
#[derive(Debug, Default, Clone, Copy)]
pub struct PerformanceEngine;

impl PerformanceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Credit-weighted GPA for one semester's course list.
    pub fn semester_gpa(&self, courses: &[Course]) -> f64 {
        rules::semester_gpa(courses)
    }

    /// Credit-weighted CGPA over all courses flattened across semesters.
    pub fn cumulative_gpa(&self, semesters: &[Semester]) -> f64 {
        rules::cumulative_gpa(semesters)
    }

    /// Unweighted mean of per-semester GPAs, the alternate cumulative
    /// formula. See [`views`] for which one feeds the result record.
    pub fn semester_average_gpa(&self, semesters: &[Semester]) -> f64 {
        rules::semester_average_gpa(semesters)
    }

    /// Synthetic class rank in `[1, class_size]`.
    pub fn rank_estimate(
        &self,
        cgpa: f64,
        class_size: u32,
    ) -> Result<u32, InvalidClassSizeError> {
        if class_size == 0 {
            return Err(InvalidClassSizeError(class_size));
        }
        Ok(rules::rank_estimate(cgpa, class_size))
    }

    /// Projected honors tier for a cumulative GPA.
    pub fn degree_class(&self, cgpa: f64) -> DegreeClass {
        policy::classify(cgpa)
    }

    /// Advisory strings for a cumulative GPA.
    pub fn recommendations(&self, cgpa: f64) -> Vec<String> {
        policy::recommendations(cgpa)
    }

    /// Compute the full result record for a transcript snapshot.
    ///
    /// Uses the credit-weighted cumulative formula; each semester entry
    /// carries its own recomputed GPA in input order.
    pub fn score(
        &self,
        semesters: &[Semester],
        class_size: u32,
    ) -> Result<PerformanceResult, InvalidClassSizeError> {
        let cgpa = rules::cumulative_gpa(semesters);
        let rank = self.rank_estimate(cgpa, class_size)?;
        let top_percent = rules::top_percent(rank, class_size);

        let performance = semesters
            .iter()
            .map(|semester| SemesterStanding {
                semester: semester.name.clone(),
                gpa: rules::semester_gpa(&semester.courses),
            })
            .collect();

        Ok(PerformanceResult {
            cgpa,
            rank,
            class_size,
            top_percent,
            degree_class: policy::classify(cgpa),
            performance,
            recommendations: policy::recommendations(cgpa),
        })
    }
}

/// One semester's contribution to the performance trend, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterStanding {
    pub semester: String,
    pub gpa: f64,
}

/// Complete set of computed metrics for one calculation request.
///
/// Ephemeral: built fresh per request, never mutated or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    pub cgpa: f64,
    pub rank: u32,
    pub class_size: u32,
    pub top_percent: u32,
    pub degree_class: DegreeClass,
    pub performance: Vec<SemesterStanding>,
    pub recommendations: Vec<String>,
}
