use super::{PerformanceResult, SemesterStanding};
use serde::{Deserialize, Serialize};

/// Wire representation of [`PerformanceResult`] matching the JSON contract
/// the web clients already consume: two-decimal string GPAs, a `"k/n"` rank,
/// a rounded percentage, and the human-readable degree class label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicResultsView {
    pub cgpa: String,
    pub rank: String,
    pub top_percent: u32,
    pub degree_class: String,
    pub performance: Vec<StandingView>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingView {
    pub semester: String,
    pub gpa: String,
}

impl From<&PerformanceResult> for AcademicResultsView {
    fn from(result: &PerformanceResult) -> Self {
        Self {
            cgpa: format!("{:.2}", result.cgpa),
            rank: format!("{}/{}", result.rank, result.class_size),
            top_percent: result.top_percent,
            degree_class: result.degree_class.label().to_string(),
            performance: result.performance.iter().map(StandingView::from).collect(),
            recommendations: result.recommendations.clone(),
        }
    }
}

impl From<&SemesterStanding> for StandingView {
    fn from(standing: &SemesterStanding) -> Self {
        Self {
            semester: standing.semester.clone(),
            gpa: format!("{:.2}", standing.gpa),
        }
    }
}

impl PerformanceResult {
    pub fn results_view(&self) -> AcademicResultsView {
        AcademicResultsView::from(self)
    }
}
