//! Conversion algorithm
//!
//! Implements quantity conversion over a [`ConversionRegistry`]: within the
//! volume domain, within the mass domain, and across the two via ingredient
//! density. Intermediate arithmetic is decimal; the result narrows to `f64`
//! only at the return boundary.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::registry::ConversionRegistry;

/// Conversion error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("unsupported conversion from '{from}' to '{to}'")]
    UnsupportedConversion { from: String, to: String },

    #[error("amount {0} has no decimal representation")]
    InvalidAmount(f64),

    #[error("converting amount {0} overflows the decimal range")]
    OutOfRange(f64),
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

impl ConversionRegistry {
    /// Convert an amount between two units
    ///
    /// Units are resolved through [`normalize_unit`](Self::normalize_unit)
    /// first. Path resolution order, first match wins:
    ///
    /// 1. volume → volume
    /// 2. mass → mass
    /// 3. volume → mass, via ingredient density
    /// 4. mass → volume, via ingredient density
    ///
    /// A symbol registered in both unit tables therefore converts as volume
    /// whenever the other side allows it. Cross-domain conversions use the
    /// given ingredient's density; an absent or unknown ingredient falls
    /// back to water (1.0 g/mL).
    pub fn convert(
        &self,
        amount: f64,
        from_unit: &str,
        to_unit: &str,
        ingredient: Option<&str>,
    ) -> ConversionResult<f64> {
        let amt = Decimal::from_f64(amount).ok_or(ConversionError::InvalidAmount(amount))?;
        let from = self.normalize_unit(from_unit);
        let to = self.normalize_unit(to_unit);

        // Checked arithmetic throughout: a finite amount can still overflow
        // the decimal range once scaled by a large factor.
        let result = match (
            self.volume_units.get(&from),
            self.volume_units.get(&to),
            self.mass_units.get(&from),
            self.mass_units.get(&to),
        ) {
            // volume → volume
            (Some(from_ml), Some(to_ml), _, _) => amt
                .checked_mul(*from_ml)
                .and_then(|ml| ml.checked_div(*to_ml)),
            // mass → mass
            (_, _, Some(from_g), Some(to_g)) => amt
                .checked_mul(*from_g)
                .and_then(|g| g.checked_div(*to_g)),
            // volume → mass via density
            (Some(from_ml), _, _, Some(to_g)) => amt
                .checked_mul(*from_ml)
                .and_then(|ml| ml.checked_mul(self.resolve_density(ingredient)))
                .and_then(|grams| grams.checked_div(*to_g)),
            // mass → volume via density
            (_, Some(to_ml), Some(from_g), _) => amt
                .checked_mul(*from_g)
                .and_then(|g| g.checked_div(self.resolve_density(ingredient)))
                .and_then(|milliliters| milliliters.checked_div(*to_ml)),
            _ => return Err(ConversionError::UnsupportedConversion { from, to }),
        };

        result
            .ok_or(ConversionError::OutOfRange(amount))?
            .to_f64()
            .ok_or(ConversionError::OutOfRange(amount))
    }

    /// Density used for a cross-domain conversion
    ///
    /// The named ingredient's density when registered, otherwise the live
    /// water entry, otherwise 1.0 g/mL.
    fn resolve_density(&self, ingredient: Option<&str>) -> Decimal {
        if let Some(name) = ingredient {
            let key = name.trim().to_lowercase();
            match self.densities.get(&key) {
                Some(density) => return *density,
                None => {
                    tracing::warn!("no density registered for '{}', using water", key);
                }
            }
        }
        self.densities.get("water").copied().unwrap_or(Decimal::ONE)
    }
}
