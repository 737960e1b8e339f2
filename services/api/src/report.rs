use crate::infra::{load_inventory, load_inventory_file, rands, rands_payload};
use buyability::affordability::{
    acquisition_costs, AcquisitionCosts, AffordabilityCompanion, AffordabilityService,
    CompanionResult, FinancialProfile, MatchUnitsRequest, MatchUnitsResponse,
};
use buyability::config::AppConfig;
use buyability::error::AppError;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct QuoteArgs {
    /// Gross monthly income in rand
    #[arg(long)]
    pub(crate) income: Option<u64>,
    /// Partner's gross monthly income in rand
    #[arg(long)]
    pub(crate) partner_income: Option<u64>,
    /// Monthly living expenses in rand
    #[arg(long)]
    pub(crate) expenses: Option<u64>,
    /// Monthly debt repayments in rand
    #[arg(long)]
    pub(crate) debts: Option<u64>,
    /// Savings available for a deposit, in rand
    #[arg(long)]
    pub(crate) deposit: Option<u64>,
    /// Number of financial dependents
    #[arg(long)]
    pub(crate) dependents: Option<u32>,
    /// Credit bureau score (300-850)
    #[arg(long, value_parser = clap::value_parser!(u16).range(300..=850))]
    pub(crate) credit_score: Option<u16>,
    /// Price in rand for the acquisition cost breakdown (defaults to the maximum affordable)
    #[arg(long)]
    pub(crate) price: Option<u64>,
    /// Emit the full JSON payload instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl QuoteArgs {
    fn profile(&self) -> FinancialProfile {
        FinancialProfile {
            income: self.income.map(rands),
            combined_income: self.partner_income.map(rands),
            monthly_expenses: self.expenses.map(rands),
            monthly_debts: self.debts.map(rands),
            savings_deposit: self.deposit.map(rands),
            income_range: None,
            dependents: self.dependents,
            credit_score: self.credit_score,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Development identifier as listed in the inventory
    #[arg(long)]
    pub(crate) development: String,
    /// Unit inventory CSV (defaults to APP_UNIT_INVENTORY, then the demo inventory)
    #[arg(long)]
    pub(crate) inventory: Option<PathBuf>,
    /// Maximum affordable price in rand
    #[arg(long)]
    pub(crate) affordability_max: u64,
    /// Monthly repayment the buyer can carry, in rand
    #[arg(long, default_value_t = 0)]
    pub(crate) capacity: u64,
    /// Deposit available, in rand
    #[arg(long, default_value_t = 0)]
    pub(crate) deposit: u64,
    /// Emit the full JSON payload instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let acquisition = config.engine.acquisition.clone();
    let companion = AffordabilityCompanion::new(config.engine);

    let quote = companion.enrich(&args.profile());
    let price = args
        .price
        .map(rands)
        .unwrap_or(quote.result.affordability_max);
    let costs = acquisition_costs(price, &acquisition);

    if args.json {
        print_json(&serde_json::json!({ "quote": quote, "acquisitionCosts": costs }));
    } else {
        render_quote(&quote, &costs);
    }
    Ok(())
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let inventory = match args.inventory.as_deref() {
        Some(path) => load_inventory_file(path)?,
        None => load_inventory(&config.inventory)?,
    };
    let service = AffordabilityService::new(Arc::new(inventory), config.engine);

    let response = service.match_units(MatchUnitsRequest {
        development_id: args.development,
        affordability_max: rands_payload(args.affordability_max),
        monthly_payment_capacity: rands_payload(args.capacity),
        deposit: rands_payload(args.deposit),
    })?;

    if args.json {
        print_json(&response);
    } else {
        render_matches(&response);
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("JSON output unavailable: {err}"),
    }
}

pub(crate) fn render_quote(quote: &CompanionResult, costs: &AcquisitionCosts) {
    for line in quote_lines(quote, costs) {
        println!("{line}");
    }
}

pub(crate) fn quote_lines(quote: &CompanionResult, costs: &AcquisitionCosts) -> Vec<String> {
    let result = &quote.result;
    let grade = &quote.affordability_grade;
    let mut lines = vec![
        "Affordability quote".to_string(),
        format!(
            "  Range: {} to {} ({} tier)",
            result.affordability_min,
            result.affordability_max,
            result.tier.label()
        ),
        format!(
            "  Monthly repayment capacity: {} at {:.2}% over {} months",
            result.monthly_payment_capacity, result.interest_rate, result.loan_term_months
        ),
        format!("  Grade {:?}: {} ({})", grade.grade, grade.label, grade.description),
        format!(
            "  Accuracy: {}% with {}% of your profile complete",
            quote.accuracy_score, quote.profile_completeness
        ),
    ];

    if !quote.accuracy_boosters.is_empty() {
        lines.push("\nBoost your accuracy".to_string());
        for booster in &quote.accuracy_boosters {
            lines.push(format!("  +{}% {}", booster.accuracy_gain, booster.title));
        }
    }

    if !quote.insights.is_empty() {
        lines.push("\nInsights".to_string());
        for insight in &quote.insights {
            lines.push(format!("  [{:?}] {}", insight.kind, insight.message));
            if let Some(action) = &insight.actionable {
                lines.push(format!("    -> {} ({})", action.action, action.impact));
            }
        }
    }

    if !quote.quick_wins.is_empty() {
        lines.push("\nQuick wins".to_string());
        lines.extend(quote.quick_wins.iter().map(|win| format!("  - {win}")));
    }

    lines.push("\nWhat if".to_string());
    for scenario in &quote.scenarios {
        lines.push(format!(
            "  {}: {} ({:+} cents)",
            scenario.label, scenario.affordability_max, scenario.affordability_delta
        ));
    }

    lines.push(format!("\nAcquisition costs on {}", costs.purchase_price));
    lines.push(format!("  Transfer duty: {}", costs.transfer_duty));
    lines.push(format!("  Bond registration: {}", costs.bond_registration));
    lines.push(format!("  Legal fees: {}", costs.legal_fees));
    lines.push(format!("  Total: {}", costs.total));

    if !result.recommendations.is_empty() {
        lines.push("\nRecommendations".to_string());
        lines.extend(
            result
                .recommendations
                .iter()
                .map(|line| format!("  - {line}")),
        );
    }

    lines
}

pub(crate) fn render_matches(response: &MatchUnitsResponse) {
    for line in match_lines(response) {
        println!("{line}");
    }
}

pub(crate) fn match_lines(response: &MatchUnitsResponse) -> Vec<String> {
    let summary = &response.summary;
    let mut lines = vec![format!(
        "Units at {} ({} affordable of {})",
        response.development_id,
        summary.affordable(),
        summary.total
    )];

    for unit in &response.units {
        let price = unit
            .unit
            .price
            .map_or_else(|| "unpriced".to_string(), |price| price.to_string());
        match &unit.matched {
            Some(matched) => lines.push(format!(
                "  {:<8} {:<18} {:>12}  {:<12} repayment {}{}",
                unit.unit.id,
                unit.unit.unit_type,
                price,
                matched.match_level.label(),
                matched.monthly_payment,
                if matched.within_monthly_budget {
                    ""
                } else {
                    " (over budget)"
                }
            )),
            None => lines.push(format!(
                "  {:<8} {:<18} {:>12}  not yet priced",
                unit.unit.id, unit.unit.unit_type, price
            )),
        }
    }

    lines.push(format!(
        "  perfect {} / good {} / stretch {} / out of reach {} / unpriced {}",
        summary.perfect, summary.good, summary.stretch, summary.out_of_reach, summary.unpriced
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::DEMO_INVENTORY;
    use buyability::affordability::{AffordabilityConfig, UnitInventory};
    use std::io::Cursor;

    fn starter_args() -> QuoteArgs {
        QuoteArgs {
            income: Some(30_000),
            expenses: Some(8_000),
            deposit: Some(50_000),
            ..QuoteArgs::default()
        }
    }

    #[test]
    fn quote_args_convert_rands_to_cents() {
        let profile = starter_args().profile();
        assert_eq!(profile.income.map(|cents| cents.value()), Some(3_000_000));
        assert_eq!(profile.savings_deposit.map(|cents| cents.value()), Some(5_000_000));
        assert!(profile.monthly_debts.is_none());
    }

    #[test]
    fn quote_lines_cover_every_section() {
        let config = AffordabilityConfig::default();
        let quote = AffordabilityCompanion::new(config.clone()).enrich(&starter_args().profile());
        let costs = acquisition_costs(quote.result.affordability_max, &config.acquisition);

        let lines = quote_lines(&quote, &costs);

        assert_eq!(lines[0], "Affordability quote");
        assert!(lines.iter().any(|line| line.contains("High tier")));
        assert!(lines.iter().any(|line| line.starts_with("  Grade B")));
        assert!(lines.iter().any(|line| line.contains("Increase your deposit")));
        assert!(lines.iter().any(|line| line == "  Transfer duty: R0"));
    }

    #[test]
    fn match_lines_flag_unpriced_units() {
        let inventory =
            UnitInventory::from_reader(Cursor::new(DEMO_INVENTORY)).expect("demo parses");
        let service =
            AffordabilityService::new(Arc::new(inventory), AffordabilityConfig::default());
        let response = service
            .match_units(MatchUnitsRequest {
                development_id: "harbour-view".to_string(),
                affordability_max: rands_payload(1_800_000),
                monthly_payment_capacity: rands_payload(18_000),
                deposit: rands_payload(150_000),
            })
            .expect("development exists");

        let lines = match_lines(&response);

        assert_eq!(lines[0], "Units at harbour-view (2 affordable of 4)");
        assert!(lines.iter().any(|line| line.contains("not yet priced")));
        assert!(lines
            .last()
            .is_some_and(|line| line.contains("unpriced 1")));
    }
}
