// cost.rs — Token-usage cost calculation.
//
// Cost is `input/1000 * input_rate + output/1000 * output_rate`, rounded to
// six decimal places. Unknown models are an explicit error — there is no
// fallback rate. Token counts are unsigned, so negative inputs are
// unrepresentable at the call boundary.

use tracing::debug;

use crate::error::CostError;
use crate::pricing::{ModelRate, PricingTable};

/// Calculator for AI invocation costs over a pricing table.
pub struct CostCalculator {
    table: PricingTable,
}

impl CostCalculator {
    /// Create a calculator over the default pricing table.
    pub fn new() -> Self {
        Self {
            table: PricingTable::new(),
        }
    }

    /// Create a calculator over a caller-supplied pricing table.
    pub fn with_table(table: PricingTable) -> Self {
        Self { table }
    }

    /// The underlying pricing table.
    pub fn table(&self) -> &PricingTable {
        &self.table
    }

    /// Calculate the cost in USD of one invocation.
    ///
    /// Returns [`CostError::UnknownModel`] when the model has no registered
    /// rate.
    pub fn cost(
        &self,
        model: &str,
        input_tokens: u64,
        output_tokens: u64,
    ) -> Result<f64, CostError> {
        let rate = self
            .table
            .get(model)
            .ok_or_else(|| CostError::UnknownModel(model.to_string()))?;

        let cost = apply_rate(rate, input_tokens, output_tokens);

        debug!(
            model = %model,
            input_tokens,
            output_tokens,
            cost_usd = cost,
            "calculated invocation cost"
        );

        Ok(cost)
    }
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate an invocation cost against the default pricing table.
///
/// # Example
///
/// ```
/// let cost = keel_common::calculate_cost(1000, 500, "gpt-4o-mini").unwrap();
/// assert_eq!(cost, 0.00045);
/// ```
pub fn calculate_cost(
    input_tokens: u64,
    output_tokens: u64,
    model: &str,
) -> Result<f64, CostError> {
    CostCalculator::new().cost(model, input_tokens, output_tokens)
}

fn apply_rate(rate: ModelRate, input_tokens: u64, output_tokens: u64) -> f64 {
    let input_cost = input_tokens as f64 / 1000.0 * rate.input_per_1k;
    let output_cost = output_tokens as f64 / 1000.0 * rate.output_per_1k;
    round_to_micros(input_cost + output_cost)
}

/// Round to six decimal places (micro-dollar precision).
fn round_to_micros(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpt_4o_mini_cost_matches_table() {
        // 1000 input at 0.00015/1K + 500 output at 0.0006/1K = 0.00045
        assert_eq!(calculate_cost(1000, 500, "gpt-4o-mini").unwrap(), 0.00045);
    }

    #[test]
    fn gpt_4o_cost_matches_table() {
        // 1000 input at 0.005/1K + 1000 output at 0.015/1K = 0.02
        assert_eq!(calculate_cost(1000, 1000, "gpt-4o").unwrap(), 0.02);
    }

    #[test]
    fn unknown_model_is_an_error() {
        let err = calculate_cost(1000, 1000, "unknown-model").unwrap_err();
        assert!(matches!(err, CostError::UnknownModel(ref m) if m == "unknown-model"));
    }

    #[test]
    fn zero_tokens_cost_nothing() {
        assert_eq!(calculate_cost(0, 0, "gpt-4o-mini").unwrap(), 0.0);
    }

    #[test]
    fn result_is_rounded_to_six_decimals() {
        // 1 input token of gpt-4o-mini is 0.00000015 USD, which rounds away.
        assert_eq!(calculate_cost(1, 0, "gpt-4o-mini").unwrap(), 0.0);
    }

    #[test]
    fn all_default_models_produce_non_negative_costs() {
        let calc = CostCalculator::new();
        let models: Vec<String> = calc.table().models().map(String::from).collect();
        assert!(!models.is_empty());
        for model in models {
            let cost = calc.cost(&model, 1000, 1000).unwrap();
            assert!(cost >= 0.0);
        }
    }

    #[test]
    fn custom_table_overrides_default() {
        let mut table = PricingTable::empty();
        table.insert(
            "in-house-llm",
            ModelRate {
                input_per_1k: 0.001,
                output_per_1k: 0.002,
            },
        );
        let calc = CostCalculator::with_table(table);

        assert_eq!(calc.cost("in-house-llm", 2000, 1000).unwrap(), 0.004);
        assert!(calc.cost("gpt-4o", 1, 1).is_err());
    }
}
