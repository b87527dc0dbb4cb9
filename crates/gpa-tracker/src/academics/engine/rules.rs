use super::super::domain::{Course, Semester};

/// Credit-weighted mean grade point for a single semester.
///
/// An empty course list or a zero credit total yields 0.0 rather than an
/// error; both show up routinely while a student is still filling in a
/// semester form.
pub(crate) fn semester_gpa(courses: &[Course]) -> f64 {
    let mut quality_points = 0.0;
    let mut credit_units = 0u32;

    for course in courses {
        quality_points += course.grade_point * f64::from(course.credit_units);
        credit_units += course.credit_units;
    }

    if credit_units == 0 {
        return 0.0;
    }

    quality_points / f64::from(credit_units)
}

/// Credit-weighted CGPA over every course across all semesters.
///
/// This is the canonical cumulative figure: semesters with heavier credit
/// loads pull the average proportionally harder.
pub(crate) fn cumulative_gpa(semesters: &[Semester]) -> f64 {
    let mut quality_points = 0.0;
    let mut credit_units = 0u32;

    for semester in semesters {
        for course in &semester.courses {
            quality_points += course.grade_point * f64::from(course.credit_units);
            credit_units += course.credit_units;
        }
    }

    if credit_units == 0 {
        return 0.0;
    }

    quality_points / f64::from(credit_units)
}

/// Unweighted mean of per-semester GPAs.
///
/// Diverges from [`cumulative_gpa`] whenever credit loads differ between
/// semesters. Kept as a separately named operation so callers choose a
/// formula deliberately instead of inheriting whichever one a handler
/// happened to use.
pub(crate) fn semester_average_gpa(semesters: &[Semester]) -> f64 {
    if semesters.is_empty() {
        return 0.0;
    }

    let total: f64 = semesters
        .iter()
        .map(|semester| semester_gpa(&semester.courses))
        .sum();

    total / semesters.len() as f64
}

/// Deterministic rank placeholder proportional to the distance below the
/// 5.0 ceiling. Not a percentile over real peer data; no peer dataset exists.
pub(crate) fn rank_estimate(cgpa: f64, class_size: u32) -> u32 {
    let raw = ((1.0 - cgpa / 5.0) * f64::from(class_size)).floor() as i64;
    raw.clamp(1, i64::from(class_size)) as u32
}

pub(crate) fn top_percent(rank: u32, class_size: u32) -> u32 {
    (f64::from(rank) / f64::from(class_size) * 100.0).round() as u32
}
