use crate::infra::InMemorySemesterRepository;
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use gpa_tracker::academics::{
    CourseDraft, PerformanceEngine, Semester, SemesterDraft, TranscriptCsvImporter,
    TranscriptService,
};
use gpa_tracker::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ResultsArgs {
    /// CSV transcript (Semester,Course Code,Title,Credit Units,Grade).
    /// Falls back to a built-in sample transcript.
    #[arg(long)]
    pub(crate) transcript: Option<PathBuf>,
    /// Cohort size for the rank estimate
    #[arg(long, default_value_t = 65)]
    pub(crate) class_size: u32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Cohort size for the rank estimate (defaults to the service setting)
    #[arg(long)]
    pub(crate) class_size: Option<u32>,
}

pub(crate) fn run_results(args: ResultsArgs) -> Result<(), AppError> {
    let ResultsArgs {
        transcript,
        class_size,
    } = args;

    let semesters = match transcript {
        Some(path) => {
            let file = File::open(path)?;
            TranscriptCsvImporter::from_reader(file)?
        }
        None => sample_semesters()?,
    };

    let engine = PerformanceEngine::new();
    let result = engine
        .score(&semesters, class_size)
        .map_err(gpa_tracker::academics::TranscriptServiceError::from)?;

    println!("Academic results ({} semesters)", semesters.len());
    render_results_view(&result.results_view())?;

    // The unweighted alternate figure, for transcripts with uneven loads.
    println!(
        "\nSemester-average CGPA (unweighted): {:.2}",
        engine.semester_average_gpa(&semesters)
    );

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let class_size = args.class_size;

    println!("GPA tracker demo");

    let repository = Arc::new(InMemorySemesterRepository::default());
    let service = TranscriptService::new(repository, 65);

    for semester in sample_semesters()? {
        let stored = service.create_semester(SemesterDraft {
            id: Some(semester.id.0.clone()),
            name: semester.name.clone(),
        })?;

        for course in &semester.courses {
            let outcome = service.add_course(
                &stored.id,
                CourseDraft {
                    id: Some(course.id.0.clone()),
                    code: course.code.clone(),
                    title: course.title.clone(),
                    credit_units: course.credit_units,
                    grade: course.grade.symbol().to_string(),
                },
            )?;
            println!(
                "  {} | {} {} ({} units, {}) -> semester GPA {:.2}",
                semester.name,
                outcome.course.code,
                outcome.course.title,
                outcome.course.credit_units,
                outcome.course.grade.symbol(),
                outcome.gpa
            );
        }
    }

    let result = service.results(class_size)?;
    println!("\nComputed academic results");
    render_results_view(&result.results_view())?;

    Ok(())
}

fn render_results_view(
    view: &gpa_tracker::academics::AcademicResultsView,
) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(view)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    println!("{rendered}");
    Ok(())
}

const SAMPLE_TRANSCRIPT: &str = "\
Semester,Course Code,Title,Credit Units,Grade
Semester 1,MTH101,General Mathematics I,3,A
Semester 1,PHY101,General Physics I,3,B
Semester 1,GST101,Use of English,2,A
Semester 2,MTH201,Mathematical Methods,4,B
Semester 2,PHY201,Electromagnetism,3,C
Semester 2,CSC201,Computer Programming I,3,A
";

fn sample_semesters() -> Result<Vec<Semester>, AppError> {
    let semesters = TranscriptCsvImporter::from_reader(SAMPLE_TRANSCRIPT.as_bytes())?;
    Ok(semesters)
}
