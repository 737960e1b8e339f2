use super::super::calculator::AffordabilityCalculator;
use super::super::config::CompanionConfig;
use super::super::domain::{AffordabilityResult, AffordabilityTier, Cents, FinancialProfile};
use super::views::{Insight, InsightKind};

pub(crate) struct InsightContext<'a> {
    pub calculator: &'a AffordabilityCalculator,
    pub profile: &'a FinancialProfile,
    pub result: &'a AffordabilityResult,
}

impl InsightContext<'_> {
    fn config(&self) -> &CompanionConfig {
        &self.calculator.config().companion
    }

    fn debt_to_income(&self) -> f64 {
        self.result.factors.debt_to_income_ratio
    }

    fn deposit_share_of_max(&self) -> Option<f64> {
        if self.result.affordability_max.is_zero() {
            None
        } else {
            Some(self.profile.deposit().as_f64() / self.result.affordability_max.as_f64())
        }
    }
}

type InsightRule = fn(&InsightContext<'_>) -> Option<Insight>;

// Each rule contributes at most one insight, in this order.
static INSIGHT_RULES: [InsightRule; 7] = [
    healthy_debt_ratio,
    strong_deposit,
    high_debt_ratio,
    thin_deposit,
    co_applicant_tip,
    incomplete_profile_tip,
    low_tier_focus,
];

pub(crate) fn generate_insights(ctx: &InsightContext<'_>) -> Vec<Insight> {
    INSIGHT_RULES.iter().filter_map(|rule| rule(ctx)).collect()
}

fn healthy_debt_ratio(ctx: &InsightContext<'_>) -> Option<Insight> {
    let dti = ctx.debt_to_income();
    if ctx.profile.monthly_income().is_zero() || dti >= ctx.config().healthy_debt_to_income {
        return None;
    }

    Some(Insight::new(
        InsightKind::Positive,
        format!("Your debt-to-income ratio of {dti:.1}% is comfortably within lender limits."),
    ))
}

fn strong_deposit(ctx: &InsightContext<'_>) -> Option<Insight> {
    let share = ctx.deposit_share_of_max()?;
    if share <= ctx.config().strong_deposit_ratio {
        return None;
    }

    Some(Insight::new(
        InsightKind::Positive,
        format!(
            "Your deposit covers {:.0}% of your maximum price, which lenders reward with better rates.",
            share * 100.0
        ),
    ))
}

fn high_debt_ratio(ctx: &InsightContext<'_>) -> Option<Insight> {
    let dti = ctx.debt_to_income();
    let config = ctx.config();
    if dti <= config.high_debt_to_income {
        return None;
    }

    let income = ctx.profile.monthly_income();
    let target_debts =
        Cents::from_f64(income.as_f64() * config.target_debt_to_income / 100.0);
    let reduction = ctx.profile.monthly_debts().saturating_sub(target_debts);

    let mut improved = ctx.profile.clone();
    improved.monthly_debts = Some(target_debts);
    let impact = ctx
        .calculator
        .calculate(&improved)
        .affordability_max
        .saturating_sub(ctx.result.affordability_max);

    Some(
        Insight::new(
            InsightKind::Warning,
            format!(
                "Your debt-to-income ratio of {dti:.1}% is above the {:.0}% most lenders accept.",
                config.high_debt_to_income
            ),
        )
        .with_action(
            format!("Reduce your monthly debt repayments by {reduction}"),
            format!("Could increase your affordability by about {impact}"),
        ),
    )
}

fn thin_deposit(ctx: &InsightContext<'_>) -> Option<Insight> {
    let share = ctx.deposit_share_of_max()?;
    let minimum = ctx.config().minimum_deposit_ratio;
    if share >= minimum {
        return None;
    }

    let target = Cents::from_f64(ctx.result.affordability_max.as_f64() * minimum);
    let shortfall = target.saturating_sub(ctx.profile.deposit());

    Some(
        Insight::new(
            InsightKind::Warning,
            format!(
                "Your deposit is below {:.0}% of your maximum price.",
                minimum * 100.0
            ),
        )
        .with_action(
            format!("Save an additional {shortfall}"),
            format!("Reaching a {target} deposit improves approval odds and your interest rate"),
        ),
    )
}

fn co_applicant_tip(ctx: &InsightContext<'_>) -> Option<Insight> {
    let income = ctx.profile.income.unwrap_or_default();
    if ctx.profile.has_partner_income() || income >= ctx.config().co_applicant_income_threshold {
        return None;
    }

    Some(Insight::new(
        InsightKind::Tip,
        "Applying with a partner or co-applicant could substantially increase your buying power.",
    ))
}

fn incomplete_profile_tip(ctx: &InsightContext<'_>) -> Option<Insight> {
    if ctx.result.confidence >= ctx.config().complete_profile_confidence {
        return None;
    }

    Some(Insight::new(
        InsightKind::Tip,
        format!(
            "Your estimate is {}% accurate. Complete your profile for a sharper figure.",
            ctx.result.confidence
        ),
    ))
}

fn low_tier_focus(ctx: &InsightContext<'_>) -> Option<Insight> {
    if ctx.result.tier != AffordabilityTier::Low {
        return None;
    }

    Some(
        Insight::new(
            InsightKind::Action,
            "Three areas will move your buying power the most.",
        )
        .with_action(
            "Focus on paying down debt, growing your deposit, and trimming monthly expenses"
                .to_string(),
            "Each step raises your qualification score and your price range".to_string(),
        ),
    )
}
