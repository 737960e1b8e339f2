use super::super::domain::AffordabilityTier;
use super::views::{AffordabilityGrade, Grade};

struct GradeRule {
    grade: Grade,
    applies: fn(AffordabilityTier, u8, f64) -> bool,
}

// First matching row wins; anything left over is an E.
static GRADE_TABLE: [GradeRule; 4] = [
    GradeRule {
        grade: Grade::A,
        applies: |tier, confidence, dti| {
            tier == AffordabilityTier::High && confidence >= 80 && dti < 30.0
        },
    },
    GradeRule {
        grade: Grade::B,
        applies: |tier, confidence, dti| {
            tier == AffordabilityTier::High
                || (tier == AffordabilityTier::Medium && confidence >= 70 && dti < 35.0)
        },
    },
    GradeRule {
        grade: Grade::C,
        applies: |tier, confidence, dti| {
            tier == AffordabilityTier::Medium
                || (tier == AffordabilityTier::Low && confidence >= 60 && dti < 40.0)
        },
    },
    GradeRule {
        grade: Grade::D,
        applies: |tier, confidence, _| tier == AffordabilityTier::Low && confidence >= 40,
    },
];

pub(crate) fn grade_for(
    tier: AffordabilityTier,
    confidence: u8,
    debt_to_income: f64,
) -> AffordabilityGrade {
    GRADE_TABLE
        .iter()
        .find(|rule| (rule.applies)(tier, confidence, debt_to_income))
        .map_or(Grade::E, |rule| rule.grade)
        .into()
}
