//! Process-wide shared registry
//!
//! A single default [`ConversionRegistry`] behind a reader-writer lock,
//! exposed through free functions. Mutations (`add_unit`, `set_density`)
//! are visible to every subsequent conversion in the process. For isolated
//! state, construct a `ConversionRegistry` directly instead.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::converter::ConversionResult;
use crate::registry::ConversionRegistry;

static REGISTRY: Lazy<RwLock<ConversionRegistry>> =
    Lazy::new(|| RwLock::new(ConversionRegistry::default()));

// The registry is plain map data and stays consistent even if a writer
// panicked mid-call, so a poisoned lock is safe to recover.
fn read() -> RwLockReadGuard<'static, ConversionRegistry> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, ConversionRegistry> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

/// Convert an amount between two units using the shared registry
///
/// See [`ConversionRegistry::convert`] for semantics.
pub fn convert(
    amount: f64,
    from_unit: &str,
    to_unit: &str,
    ingredient: Option<&str>,
) -> ConversionResult<f64> {
    read().convert(amount, from_unit, to_unit, ingredient)
}

/// Resolve a unit identifier to its canonical symbol
pub fn normalize_unit(unit: &str) -> String {
    read().normalize_unit(unit)
}

/// Sorted list of all supported unit symbols
pub fn supported_units() -> Vec<String> {
    read().supported_units()
}

/// Copy of the shared alias table
pub fn unit_aliases() -> HashMap<String, String> {
    read().unit_aliases()
}

/// Density in g/mL for an ingredient, if registered
pub fn density_for(ingredient: &str) -> Option<f64> {
    read().density_for(ingredient)
}

/// Insert or overwrite an ingredient density in the shared registry
pub fn set_density(ingredient: &str, density: f64) {
    write().set_density(ingredient, density);
}

/// Register a custom unit in the shared registry
pub fn add_unit(name: &str, alias: Option<&str>, to_ml: Option<f64>, to_g: Option<f64>) {
    write().add_unit(name, alias, to_ml, to_g);
}
