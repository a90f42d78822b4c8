//! Recipe unit conversion library
//!
//! Converts cooking quantities between volume units, between mass units,
//! and across the volume/mass boundary using ingredient densities.
//!
//! # Example
//!
//! ```
//! use recipe_units::{convert, Quantity};
//!
//! // volume to volume
//! let ml = convert(3.0, "cups", "milliliters", None)?;
//! assert_eq!(ml, 720.0);
//!
//! // volume to mass, bridged by the ingredient's density
//! let grams = Quantity::new(1.0, "cup").to_for("grams", "flour")?;
//! assert!((grams - 141.6).abs() < 1e-9);
//! # Ok::<(), recipe_units::ConversionError>(())
//! ```

pub mod build_info;
mod builtin;
pub mod converter;
pub mod global;
pub mod quantity;
pub mod registry;

pub use converter::{ConversionError, ConversionResult};
pub use global::{
    add_unit, convert, density_for, normalize_unit, set_density, supported_units, unit_aliases,
};
pub use quantity::{amount, AmountBuilder, Quantity};
pub use registry::ConversionRegistry;
