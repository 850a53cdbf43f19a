// pricing.rs — Per-model token pricing table.
//
// Rates are USD per 1,000 tokens, split into an input (prompt) rate and an
// output (completion) rate. The table is a plain value that hosts own and
// extend — adding a model is a data change, not a call-site change.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Token pricing for one model, in USD per 1K tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelRate {
    /// Cost per 1K input/prompt tokens.
    pub input_per_1k: f64,
    /// Cost per 1K output/completion tokens.
    pub output_per_1k: f64,
}

/// Model name → rate lookup table.
#[derive(Debug, Clone)]
pub struct PricingTable {
    rates: HashMap<String, ModelRate>,
}

impl PricingTable {
    /// Build the default table covering the models the downstream
    /// applications bill for.
    pub fn new() -> Self {
        let mut table = Self::empty();

        table.insert(
            "gpt-4o-mini",
            ModelRate {
                input_per_1k: 0.00015,
                output_per_1k: 0.0006,
            },
        );
        table.insert(
            "gpt-4o",
            ModelRate {
                input_per_1k: 0.005,
                output_per_1k: 0.015,
            },
        );
        table.insert(
            "gpt-4-turbo",
            ModelRate {
                input_per_1k: 0.01,
                output_per_1k: 0.03,
            },
        );
        table.insert(
            "gpt-4",
            ModelRate {
                input_per_1k: 0.03,
                output_per_1k: 0.06,
            },
        );
        table.insert(
            "gpt-3.5-turbo",
            ModelRate {
                input_per_1k: 0.0005,
                output_per_1k: 0.0015,
            },
        );

        table
    }

    /// Create a table with no entries.
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Look up the rate for a model.
    pub fn get(&self, model: &str) -> Option<ModelRate> {
        self.rates.get(model).copied()
    }

    /// Check whether a model has a registered rate.
    pub fn contains(&self, model: &str) -> bool {
        self.rates.contains_key(model)
    }

    /// Register or replace the rate for a model.
    pub fn insert(&mut self, model: impl Into<String>, rate: ModelRate) {
        self.rates.insert(model.into(), rate);
    }

    /// Iterate over the registered model names.
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::new()
    }
}
