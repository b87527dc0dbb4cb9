use super::common::*;
use crate::academics::domain::Grade;
use crate::academics::engine::{DegreeClass, PerformanceEngine};

#[test]
fn semester_gpa_of_empty_course_list_is_zero() {
    let engine = PerformanceEngine::new();
    assert_eq!(engine.semester_gpa(&[]), 0.0);
}

#[test]
fn semester_gpa_matches_single_course_grade_point() {
    let engine = PerformanceEngine::new();
    let courses = vec![course("MTH101", Grade::B, 4)];
    assert_eq!(engine.semester_gpa(&courses), 4.0);
}

#[test]
fn semester_gpa_weights_by_credit_units() {
    let engine = PerformanceEngine::new();
    let courses = vec![
        course("MTH101", Grade::A, 3),
        course("PHY101", Grade::B, 3),
        course("CHM101", Grade::C, 3),
    ];
    assert_eq!(engine.semester_gpa(&courses), 4.0);
}

#[test]
fn semester_gpa_is_order_independent() {
    let engine = PerformanceEngine::new();
    let mut courses = vec![
        course("MTH101", Grade::A, 2),
        course("PHY101", Grade::D, 5),
        course("GST101", Grade::B, 1),
    ];
    let forward = engine.semester_gpa(&courses);
    courses.reverse();
    let reversed = engine.semester_gpa(&courses);
    assert_eq!(forward, reversed);
}

#[test]
fn cumulative_gpa_flattens_courses_across_semesters() {
    let engine = PerformanceEngine::new();
    let semesters = vec![
        semester("Semester 1", vec![course("MTH101", Grade::A, 3)]),
        semester("Semester 2", vec![course("MTH201", Grade::F, 3)]),
    ];
    assert_eq!(engine.cumulative_gpa(&semesters), 2.5);
}

#[test]
fn cumulative_formulas_diverge_for_uneven_credit_loads() {
    let engine = PerformanceEngine::new();
    let semesters = vec![
        semester("Semester 1", vec![course("MTH101", Grade::A, 5)]),
        semester("Semester 2", vec![course("MTH201", Grade::F, 1)]),
    ];

    // 25 quality points over 6 units versus a plain mean of 5.0 and 0.0.
    let weighted = engine.cumulative_gpa(&semesters);
    let averaged = engine.semester_average_gpa(&semesters);
    assert!((weighted - 25.0 / 6.0).abs() < 1e-9);
    assert_eq!(averaged, 2.5);
    assert!(weighted > averaged);
}

#[test]
fn cumulative_gpa_of_empty_transcript_is_zero() {
    let engine = PerformanceEngine::new();
    assert_eq!(engine.cumulative_gpa(&[]), 0.0);
    assert_eq!(engine.semester_average_gpa(&[]), 0.0);
}

#[test]
fn rank_estimate_pins_perfect_cgpa_to_first() {
    let engine = PerformanceEngine::new();
    assert_eq!(engine.rank_estimate(5.0, 65).expect("valid cohort"), 1);
}

#[test]
fn rank_estimate_pins_zero_cgpa_to_last() {
    let engine = PerformanceEngine::new();
    assert_eq!(engine.rank_estimate(0.0, 65).expect("valid cohort"), 65);
}

#[test]
fn rank_estimate_stays_within_cohort_bounds() {
    let engine = PerformanceEngine::new();
    for tenths in 0..=50 {
        let cgpa = f64::from(tenths) / 10.0;
        let rank = engine.rank_estimate(cgpa, 65).expect("valid cohort");
        assert!((1..=65).contains(&rank), "cgpa {cgpa} produced rank {rank}");
    }
}

#[test]
fn rank_estimate_rejects_empty_cohort() {
    let engine = PerformanceEngine::new();
    let err = engine.rank_estimate(3.2, 0).expect_err("empty cohort");
    assert_eq!(err.0, 0);
}

#[test]
fn degree_class_boundaries_resolve_to_lower_inclusive_tier() {
    let engine = PerformanceEngine::new();
    assert_eq!(engine.degree_class(4.5), DegreeClass::FirstClassHonours);
    assert_eq!(engine.degree_class(4.49), DegreeClass::SecondClassUpper);
    assert_eq!(engine.degree_class(3.5), DegreeClass::SecondClassUpper);
    assert_eq!(engine.degree_class(2.5), DegreeClass::SecondClassLower);
    assert_eq!(engine.degree_class(1.5), DegreeClass::ThirdClass);
    assert_eq!(engine.degree_class(1.0), DegreeClass::Pass);
    assert_eq!(engine.degree_class(0.99), DegreeClass::Fail);
}

#[test]
fn recommendations_cover_each_band() {
    let engine = PerformanceEngine::new();

    let failing = engine.recommendations(1.4);
    assert!(failing[0].contains("below 2.0"));

    let low = engine.recommendations(2.4);
    assert!(low[0].contains("core courses"));

    let mid = engine.recommendations(3.4);
    assert!(mid[0].contains("aiming for higher grades"));

    let high = engine.recommendations(4.6);
    assert!(high[0].contains("Maintain your current study habits"));
}

#[test]
fn recommendations_always_include_the_two_fixed_tips() {
    let engine = PerformanceEngine::new();
    for cgpa in [0.0, 2.5, 4.8] {
        let advice = engine.recommendations(cgpa);
        assert_eq!(advice.len(), 3);
        assert!(advice[1].contains("aim for at least"));
        assert!(advice[2].contains("balancing difficult courses"));
    }
}

#[test]
fn recommendation_target_caps_at_the_scale_ceiling() {
    let engine = PerformanceEngine::new();
    let advice = engine.recommendations(4.8);
    assert!(advice[1].contains("5.00"), "got: {}", advice[1]);
}

#[test]
fn score_composes_all_metrics_in_semester_order() {
    let engine = PerformanceEngine::new();
    let semesters = vec![
        semester("Semester 1", vec![course("MTH101", Grade::A, 3)]),
        semester("Semester 2", vec![course("MTH201", Grade::F, 3)]),
    ];

    let result = engine.score(&semesters, 65).expect("valid cohort");

    assert_eq!(result.cgpa, 2.5);
    assert_eq!(result.degree_class, DegreeClass::SecondClassLower);
    assert_eq!(result.rank, 32);
    assert_eq!(result.class_size, 65);
    assert_eq!(result.top_percent, 49);
    assert_eq!(result.performance.len(), 2);
    assert_eq!(result.performance[0].semester, "Semester 1");
    assert_eq!(result.performance[0].gpa, 5.0);
    assert_eq!(result.performance[1].gpa, 0.0);
    assert_eq!(result.recommendations.len(), 3);
}

#[test]
fn score_of_empty_transcript_lands_at_the_bottom_of_the_cohort() {
    let engine = PerformanceEngine::new();
    let result = engine.score(&[], 65).expect("valid cohort");
    assert_eq!(result.cgpa, 0.0);
    assert_eq!(result.rank, 65);
    assert_eq!(result.degree_class, DegreeClass::Fail);
    assert!(result.performance.is_empty());
}

#[test]
fn results_view_round_trips_through_json() {
    let engine = PerformanceEngine::new();
    let semesters = vec![
        semester("Semester 1", vec![course("MTH101", Grade::A, 3)]),
        semester("Semester 2", vec![course("MTH201", Grade::B, 3)]),
    ];

    let view = engine
        .score(&semesters, 65)
        .expect("valid cohort")
        .results_view();

    let json = serde_json::to_string(&view).expect("serializes");
    let decoded: crate::academics::AcademicResultsView =
        serde_json::from_str(&json).expect("deserializes");
    assert_eq!(view, decoded);
}

#[test]
fn results_view_uses_the_wire_contract_field_shapes() {
    let engine = PerformanceEngine::new();
    let semesters = vec![semester("Semester 1", vec![course("MTH101", Grade::A, 3)])];

    let view = engine
        .score(&semesters, 65)
        .expect("valid cohort")
        .results_view();

    assert_eq!(view.cgpa, "5.00");
    assert_eq!(view.rank, "1/65");
    assert_eq!(view.top_percent, 2);
    assert_eq!(view.degree_class, "First Class Honours");
    assert_eq!(view.performance[0].gpa, "5.00");

    let value: serde_json::Value =
        serde_json::to_value(&view).expect("serializes to a json object");
    assert!(value.get("topPercent").is_some());
    assert!(value.get("degreeClass").is_some());
}
