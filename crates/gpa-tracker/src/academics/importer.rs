use std::io::Read;

use serde::Deserialize;

use super::domain::{
    validate_credit_units, Course, CourseId, InvalidCreditUnitsError, Semester, SemesterId,
};
use super::engine::PerformanceEngine;
use super::scale::{self, UnknownGradeError};

/// Builds a semester grouping from a CSV transcript export.
///
/// Expected columns: `Semester,Course Code,Title,Credit Units,Grade`.
/// Semesters appear in the output in first-seen row order, with courses in
/// row order inside each one.
pub struct TranscriptCsvImporter;

impl TranscriptCsvImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Semester>, TranscriptImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let engine = PerformanceEngine::new();
        let mut semesters: Vec<Semester> = Vec::new();

        for (row_index, record) in csv_reader.deserialize::<TranscriptRow>().enumerate() {
            let row = record?;
            let grade = scale::resolve(&row.grade)?;
            let credit_units = validate_credit_units(row.credit_units)?;

            let position = match semesters
                .iter()
                .position(|semester| semester.name == row.semester)
            {
                Some(position) => position,
                None => {
                    let id = SemesterId(format!("import-{:03}", semesters.len() + 1));
                    semesters.push(Semester::new(id, row.semester.clone()));
                    semesters.len() - 1
                }
            };

            let semester = &mut semesters[position];
            semester.courses.push(Course {
                id: CourseId(format!("import-{:03}-{:03}", position + 1, row_index + 1)),
                code: row.code,
                title: row.title,
                credit_units,
                grade,
                grade_point: scale::points_for(grade),
            });
            semester.gpa = engine.semester_gpa(&semester.courses);
        }

        Ok(semesters)
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptRow {
    #[serde(rename = "Semester")]
    semester: String,
    #[serde(rename = "Course Code")]
    code: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Credit Units")]
    credit_units: u32,
    #[serde(rename = "Grade")]
    grade: String,
}

/// Error raised while turning a CSV transcript into semester records.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptImportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Grade(#[from] UnknownGradeError),
    #[error(transparent)]
    CreditUnits(#[from] InvalidCreditUnitsError),
}
