use super::domain::Grade;

/// Raised when a grade symbol falls outside the fixed A–F alphabet.
#[derive(Debug, thiserror::Error)]
#[error("unknown grade symbol '{symbol}', expected one of A, B, C, D, E, F")]
pub struct UnknownGradeError {
    pub symbol: String,
}

/// Numeric grade point for a letter grade. The table is fixed: A earns the
/// 5.0 ceiling and each step down loses a full point.
pub const fn points_for(grade: Grade) -> f64 {
    match grade {
        Grade::A => 5.0,
        Grade::B => 4.0,
        Grade::C => 3.0,
        Grade::D => 2.0,
        Grade::E => 1.0,
        Grade::F => 0.0,
    }
}

/// Parse a raw grade symbol as submitted by a client form.
pub fn resolve(symbol: &str) -> Result<Grade, UnknownGradeError> {
    match symbol.trim().to_ascii_uppercase().as_str() {
        "A" => Ok(Grade::A),
        "B" => Ok(Grade::B),
        "C" => Ok(Grade::C),
        "D" => Ok(Grade::D),
        "E" => Ok(Grade::E),
        "F" => Ok(Grade::F),
        _ => Err(UnknownGradeError {
            symbol: symbol.trim().to_string(),
        }),
    }
}
