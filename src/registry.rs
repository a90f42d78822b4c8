//! Unit and density registries
//!
//! `ConversionRegistry` owns the volume-unit, mass-unit, alias, and density
//! tables and exposes the admin operations that mutate them. Conversion
//! itself lives in [`crate::converter`].

use std::collections::HashMap;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::builtin;

/// Registry of unit factors, aliases, and ingredient densities
///
/// Volume factors are stored in milliliters, mass factors in grams,
/// densities in grams per milliliter. All keys are lower-case canonical
/// symbols. Construct with [`ConversionRegistry::default`] for the built-in
/// tables or [`ConversionRegistry::new`] for an empty registry.
#[derive(Debug, Clone)]
pub struct ConversionRegistry {
    pub(crate) volume_units: HashMap<String, Decimal>,
    pub(crate) mass_units: HashMap<String, Decimal>,
    pub(crate) aliases: HashMap<String, String>,
    pub(crate) densities: HashMap<String, Decimal>,
}

impl Default for ConversionRegistry {
    fn default() -> Self {
        Self {
            volume_units: builtin::volume_units(),
            mass_units: builtin::mass_units(),
            aliases: builtin::aliases(),
            densities: builtin::densities(),
        }
    }
}

impl ConversionRegistry {
    /// Create an empty registry with no units, aliases, or densities
    pub fn new() -> Self {
        Self {
            volume_units: HashMap::new(),
            mass_units: HashMap::new(),
            aliases: HashMap::new(),
            densities: HashMap::new(),
        }
    }

    /// Resolve a unit identifier to its canonical symbol
    ///
    /// Lower-cases and trims, then performs a single alias lookup. Unknown
    /// names pass through unchanged; whether they name a real unit is
    /// decided at conversion time. Resolution is exactly one hop, so an
    /// accidental alias chain cannot loop.
    pub fn normalize_unit(&self, unit: &str) -> String {
        let symbol = unit.trim().to_lowercase();
        match self.aliases.get(&symbol) {
            Some(canonical) => canonical.clone(),
            None => symbol,
        }
    }

    /// Sorted, deduplicated union of volume and mass unit symbols
    pub fn supported_units(&self) -> Vec<String> {
        let mut units: Vec<String> = self
            .volume_units
            .keys()
            .chain(self.mass_units.keys())
            .cloned()
            .collect();
        units.sort();
        units.dedup();
        units
    }

    /// Copy of the alias table
    ///
    /// Mutating the returned map does not affect the registry.
    pub fn unit_aliases(&self) -> HashMap<String, String> {
        self.aliases.clone()
    }

    /// Density in g/mL for an ingredient, if one is registered
    ///
    /// Absence is not an error; conversion treats a missing ingredient as
    /// water.
    pub fn density_for(&self, ingredient: &str) -> Option<f64> {
        self.densities
            .get(&ingredient.trim().to_lowercase())
            .and_then(|d| d.to_f64())
    }

    /// Insert or overwrite an ingredient density in g/mL
    ///
    /// Non-positive or non-finite values are rejected and leave the table
    /// unchanged.
    pub fn set_density(&mut self, ingredient: &str, density: f64) {
        let key = ingredient.trim().to_lowercase();
        let Some(value) = positive_decimal(density) else {
            tracing::warn!("ignoring density {} for '{}': not a positive finite number", density, key);
            return;
        };
        tracing::debug!("density of '{}' set to {}", key, value);
        self.densities.insert(key, value);
    }

    /// Register a custom unit
    ///
    /// `to_ml` registers `name` as a volume unit, `to_g` as a mass unit;
    /// both may be given, placing the symbol in both registries (conversion
    /// path order then resolves it as volume whenever both sides allow it).
    /// `alias` registers an alternate name, overwriting any existing alias.
    /// Non-positive or non-finite factors are rejected. Calling with
    /// neither factor registers no conversion target for the name.
    pub fn add_unit(&mut self, name: &str, alias: Option<&str>, to_ml: Option<f64>, to_g: Option<f64>) {
        let key = name.trim().to_lowercase();

        if to_ml.is_none() && to_g.is_none() {
            tracing::warn!("add_unit('{}') given no volume or mass factor", key);
        }

        if let Some(ml) = to_ml {
            match positive_decimal(ml) {
                Some(factor) => {
                    tracing::debug!("volume unit '{}' registered at {} mL", key, factor);
                    self.volume_units.insert(key.clone(), factor);
                }
                None => tracing::warn!("ignoring volume factor {} for '{}': not a positive finite number", ml, key),
            }
        }

        if let Some(g) = to_g {
            match positive_decimal(g) {
                Some(factor) => {
                    tracing::debug!("mass unit '{}' registered at {} g", key, factor);
                    self.mass_units.insert(key.clone(), factor);
                }
                None => tracing::warn!("ignoring mass factor {} for '{}': not a positive finite number", g, key),
            }
        }

        if let Some(alias_name) = alias {
            self.aliases.insert(alias_name.trim().to_lowercase(), key);
        }
    }
}

/// Convert a factor or density to a decimal, requiring it to be positive
/// and finite
fn positive_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value).filter(|d| d.is_sign_positive() && !d.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_canonical_passthrough() {
        let registry = ConversionRegistry::default();
        assert_eq!(registry.normalize_unit("teaspoon"), "teaspoon");
        assert_eq!(registry.normalize_unit("gram"), "gram");
    }

    #[test]
    fn test_normalize_alias_resolution() {
        let registry = ConversionRegistry::default();
        assert_eq!(registry.normalize_unit("tbsp"), "tablespoon");
        assert_eq!(registry.normalize_unit("lbs"), "pound");
        assert_eq!(registry.normalize_unit("cups"), "cup");
    }

    #[test]
    fn test_normalize_case_and_whitespace() {
        let registry = ConversionRegistry::default();
        assert_eq!(registry.normalize_unit("TBSP"), "tablespoon");
        assert_eq!(registry.normalize_unit("  Cups "), "cup");
    }

    #[test]
    fn test_normalize_unknown_passthrough() {
        let registry = ConversionRegistry::default();
        assert_eq!(registry.normalize_unit("smidgen"), "smidgen");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let registry = ConversionRegistry::default();
        for unit in registry.supported_units() {
            assert_eq!(registry.normalize_unit(&unit), unit);
        }
    }

    #[test]
    fn test_supported_units_sorted_and_deduplicated() {
        let mut registry = ConversionRegistry::default();
        registry.add_unit("splash", None, Some(3.0), Some(3.0));

        let units = registry.supported_units();
        let mut sorted = units.clone();
        sorted.sort();
        assert_eq!(units, sorted);
        assert_eq!(units.iter().filter(|u| *u == "splash").count(), 1);
        assert!(units.contains(&"teaspoon".to_string()));
        assert!(units.contains(&"gram".to_string()));
    }

    #[test]
    fn test_unit_aliases_is_defensive_copy() {
        let registry = ConversionRegistry::default();
        let mut aliases = registry.unit_aliases();
        aliases.insert("tbsp".to_string(), "gallon".to_string());
        assert_eq!(registry.normalize_unit("tbsp"), "tablespoon");
    }

    #[test]
    fn test_density_lookup_and_overwrite() {
        let mut registry = ConversionRegistry::default();
        assert_eq!(registry.density_for("oil"), Some(0.92));
        assert_eq!(registry.density_for("plutonium"), None);

        registry.set_density("oil", 0.95);
        assert_eq!(registry.density_for("oil"), Some(0.95));

        registry.set_density("nutella", 1.2);
        assert_eq!(registry.density_for("nutella"), Some(1.2));
    }

    #[test]
    fn test_set_density_rejects_bad_values() {
        let mut registry = ConversionRegistry::default();
        registry.set_density("oil", 0.0);
        registry.set_density("oil", -1.5);
        registry.set_density("oil", f64::NAN);
        registry.set_density("oil", f64::INFINITY);
        assert_eq!(registry.density_for("oil"), Some(0.92));
    }

    #[test]
    fn test_add_volume_unit_with_alias() {
        let mut registry = ConversionRegistry::default();
        registry.add_unit("petit_verre", Some("p_verres"), Some(100.0), None);
        assert_eq!(registry.normalize_unit("p_verres"), "petit_verre");
        assert!(registry.supported_units().contains(&"petit_verre".to_string()));
    }

    #[test]
    fn test_add_mass_only_unit() {
        let mut registry = ConversionRegistry::default();
        registry.add_unit("sack", None, None, Some(25000.0));
        assert!(registry.mass_units.contains_key("sack"));
        assert!(!registry.volume_units.contains_key("sack"));
    }

    #[test]
    fn test_add_unit_overwrites_existing_alias() {
        let mut registry = ConversionRegistry::default();
        registry.add_unit("tumbler", Some("cups"), Some(300.0), None);
        assert_eq!(registry.normalize_unit("cups"), "tumbler");
    }

    #[test]
    fn test_add_unit_without_factors_registers_only_alias() {
        let mut registry = ConversionRegistry::default();
        registry.add_unit("phantom", Some("ghost"), None, None);
        assert!(!registry.volume_units.contains_key("phantom"));
        assert!(!registry.mass_units.contains_key("phantom"));
        assert_eq!(registry.normalize_unit("ghost"), "phantom");
    }

    #[test]
    fn test_add_unit_rejects_bad_factors() {
        let mut registry = ConversionRegistry::default();
        registry.add_unit("void", None, Some(0.0), Some(-2.0));
        assert!(!registry.volume_units.contains_key("void"));
        assert!(!registry.mass_units.contains_key("void"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ConversionRegistry::new();
        assert!(registry.supported_units().is_empty());
        assert!(registry.unit_aliases().is_empty());
        assert_eq!(registry.density_for("water"), None);
    }
}
