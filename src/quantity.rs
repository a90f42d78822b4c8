//! Amount-with-unit value type and fluent conversion chain
//!
//! Pure sugar over [`convert`](crate::global::convert); no conversion logic
//! of its own.

use serde::{Deserialize, Serialize};

use crate::converter::ConversionResult;
use crate::global;
use crate::registry::ConversionRegistry;

/// An amount paired with its unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: f64,
    pub unit: String,
}

impl Quantity {
    /// Create a quantity from an amount and a unit identifier
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }

    /// Convert to the target unit using the shared registry
    pub fn to(&self, target_unit: &str) -> ConversionResult<f64> {
        global::convert(self.amount, &self.unit, target_unit, None)
    }

    /// Convert to the target unit for a specific ingredient
    pub fn to_for(&self, target_unit: &str, ingredient: &str) -> ConversionResult<f64> {
        global::convert(self.amount, &self.unit, target_unit, Some(ingredient))
    }

    /// Convert against an explicit registry
    pub fn convert_in(
        &self,
        registry: &ConversionRegistry,
        target_unit: &str,
        ingredient: Option<&str>,
    ) -> ConversionResult<f64> {
        registry.convert(self.amount, &self.unit, target_unit, ingredient)
    }
}

/// Start a fluent conversion chain: `amount(5.0).from("gallons").to("liters")`
pub fn amount(value: f64) -> AmountBuilder {
    AmountBuilder { amount: value }
}

/// Intermediate state of the fluent chain, waiting for a source unit
#[derive(Debug, Clone, Copy)]
pub struct AmountBuilder {
    amount: f64,
}

impl AmountBuilder {
    /// Attach the source unit, producing a [`Quantity`]
    pub fn from(self, unit: &str) -> Quantity {
        Quantity::new(self.amount, unit)
    }
}
