use serde::Serialize;

use super::super::domain::{AffordabilityResult, Cents};

/// Missing input worth collecting, with the confidence it would add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyBooster {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accuracy_gain: u8,
    pub priority: u8,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Excellent",
            Self::B => "Strong",
            Self::C => "Fair",
            Self::D => "Limited",
            Self::E => "Getting Started",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::A => "Lenders are likely to view your application very favourably.",
            Self::B => "You are well placed to qualify for a home loan.",
            Self::C => "You can qualify, but improving your finances will widen your options.",
            Self::D => "Qualifying may be difficult; a few changes could make a big difference.",
            Self::E => "Share more about your finances so we can build a reliable estimate.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityGrade {
    pub grade: Grade,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<Grade> for AffordabilityGrade {
    fn from(grade: Grade) -> Self {
        Self {
            grade,
            label: grade.label(),
            description: grade.description(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Positive,
    Warning,
    Tip,
    Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightAction {
    pub action: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actionable: Option<InsightAction>,
}

impl Insight {
    pub(crate) fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            actionable: None,
        }
    }

    pub(crate) fn with_action(mut self, action: String, impact: String) -> Self {
        self.actionable = Some(InsightAction { action, impact });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    IncreaseIncome,
    ReduceExpenses,
    IncreaseDeposit,
}

impl ScenarioKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::IncreaseIncome => "Increase your income",
            Self::ReduceExpenses => "Reduce monthly expenses",
            Self::IncreaseDeposit => "Increase your deposit",
        }
    }
}

/// Repayment on the baseline maximum price before and after a bigger deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentComparison {
    pub baseline: Cents,
    pub scenario: Cents,
    pub reduction: Cents,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: ScenarioKind,
    pub label: &'static str,
    pub description: String,
    pub affordability_max: Cents,
    /// Change against the baseline maximum, in cents.
    pub affordability_delta: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_repayment: Option<RepaymentComparison>,
}

/// Base result decorated with the gamified read-outs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionResult {
    #[serde(flatten)]
    pub result: AffordabilityResult,
    pub accuracy_score: u8,
    pub profile_completeness: u8,
    pub accuracy_boosters: Vec<AccuracyBooster>,
    pub affordability_grade: AffordabilityGrade,
    pub insights: Vec<Insight>,
    pub quick_wins: Vec<String>,
    pub scenarios: Vec<Scenario>,
}

impl CompanionResult {
    pub fn scenario(&self, kind: ScenarioKind) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.id == kind)
    }
}
