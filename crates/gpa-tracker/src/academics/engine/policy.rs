use serde::{Deserialize, Serialize};

/// Academic honors tier projected from the cumulative GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeClass {
    FirstClassHonours,
    SecondClassUpper,
    SecondClassLower,
    ThirdClass,
    Pass,
    Fail,
}

impl DegreeClass {
    pub const fn label(self) -> &'static str {
        match self {
            DegreeClass::FirstClassHonours => "First Class Honours",
            DegreeClass::SecondClassUpper => "Second Class Upper",
            DegreeClass::SecondClassLower => "Second Class Lower",
            DegreeClass::ThirdClass => "Third Class",
            DegreeClass::Pass => "Pass",
            DegreeClass::Fail => "Fail",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "First Class Honours" => Some(DegreeClass::FirstClassHonours),
            "Second Class Upper" => Some(DegreeClass::SecondClassUpper),
            "Second Class Lower" => Some(DegreeClass::SecondClassLower),
            "Third Class" => Some(DegreeClass::ThirdClass),
            "Pass" => Some(DegreeClass::Pass),
            "Fail" => Some(DegreeClass::Fail),
            _ => None,
        }
    }
}

/// Six-tier ladder, highest threshold first, first match wins. Boundary
/// values resolve into the tier they open: 4.5 is first class, 4.49 is not.
pub(crate) fn classify(cgpa: f64) -> DegreeClass {
    if cgpa >= 4.5 {
        DegreeClass::FirstClassHonours
    } else if cgpa >= 3.5 {
        DegreeClass::SecondClassUpper
    } else if cgpa >= 2.5 {
        DegreeClass::SecondClassLower
    } else if cgpa >= 1.5 {
        DegreeClass::ThirdClass
    } else if cgpa >= 1.0 {
        DegreeClass::Pass
    } else {
        DegreeClass::Fail
    }
}

/// Advisory messages for the current CGPA band plus two fixed study tips.
/// Pure function of the CGPA; no randomness.
pub(crate) fn recommendations(cgpa: f64) -> Vec<String> {
    let mut advice = Vec::with_capacity(3);

    if cgpa < 2.0 {
        advice.push("Warning: Your CGPA is below 2.0. Consider academic counseling.".to_string());
    } else if cgpa < 3.0 {
        advice.push(
            "Focus on improving your grades in core courses to boost your CGPA.".to_string(),
        );
    } else if cgpa < 4.0 {
        advice.push(
            "You're doing well! Consider aiming for higher grades in your remaining courses."
                .to_string(),
        );
    } else {
        advice.push("Excellent work! Maintain your current study habits.".to_string());
    }

    let target = (cgpa + 0.5).min(5.0);
    advice.push(format!(
        "To improve your class rank, aim for at least {target:.2} CGPA in your next semester."
    ));
    advice.push("Consider balancing difficult courses with easier ones each semester.".to_string());

    advice
}
