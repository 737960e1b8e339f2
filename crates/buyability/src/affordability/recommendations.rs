use super::domain::{AffordabilityTier, Cents};

/// Facts the recommendation rules are allowed to look at.
pub(crate) struct RecommendationContext {
    pub tier: AffordabilityTier,
    pub confidence: u8,
    pub has_income: bool,
    pub deposit: Cents,
    pub recommended_down_payment: Cents,
}

struct RecommendationRule {
    applies: fn(&RecommendationContext) -> bool,
    render: fn(&RecommendationContext) -> String,
}

// Evaluated in order; every matching rule contributes one line.
static RULES: &[RecommendationRule] = &[
    RecommendationRule {
        applies: |ctx| !ctx.has_income,
        render: |_| "Add your monthly income to see what you can afford.".to_string(),
    },
    RecommendationRule {
        applies: |ctx| ctx.tier == AffordabilityTier::High,
        render: |_| "You are in a strong position to apply for a home loan.".to_string(),
    },
    RecommendationRule {
        applies: |ctx| ctx.tier == AffordabilityTier::High,
        render: |_| {
            "Get pre-approved with a bond originator to strengthen your offers.".to_string()
        },
    },
    RecommendationRule {
        applies: |ctx| ctx.tier == AffordabilityTier::Medium,
        render: |_| {
            "You qualify for a moderate home loan; reducing existing debt could unlock a better rate."
                .to_string()
        },
    },
    RecommendationRule {
        applies: |ctx| ctx.tier == AffordabilityTier::Medium,
        render: |_| {
            "Look at properties toward the lower end of your range to keep repayments comfortable."
                .to_string()
        },
    },
    RecommendationRule {
        applies: |ctx| ctx.tier == AffordabilityTier::Low && ctx.has_income,
        render: |_| {
            "Focus on reducing existing debt before applying for a home loan.".to_string()
        },
    },
    RecommendationRule {
        applies: |ctx| ctx.tier == AffordabilityTier::Low,
        render: |_| {
            "Build up your savings deposit to improve your chances of approval.".to_string()
        },
    },
    RecommendationRule {
        applies: |ctx| {
            !ctx.recommended_down_payment.is_zero() && ctx.deposit < ctx.recommended_down_payment
        },
        render: |ctx| {
            format!(
                "Save at least {} for a 10% deposit on a home at the top of your range.",
                ctx.recommended_down_payment
            )
        },
    },
    RecommendationRule {
        applies: |ctx| ctx.confidence < 60,
        render: |_| {
            "Complete more of your financial profile for a more accurate estimate.".to_string()
        },
    },
];

pub(crate) fn recommend(ctx: &RecommendationContext) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| (rule.render)(ctx))
        .collect()
}
