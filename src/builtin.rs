//! Built-in unit factors, aliases, and ingredient densities
//!
//! Seeds a default `ConversionRegistry`. Volume factors are expressed in
//! milliliters, mass factors in grams, densities in grams per milliliter.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Built-in volume units and their factors to milliliters
pub(crate) fn volume_units() -> HashMap<String, Decimal> {
    let factors = [
        ("drop", dec!(0.05)),
        ("pinch", dec!(0.36)), // about 1/8 tsp
        ("teaspoon", dec!(5.0)),
        ("dessert_spoon", dec!(10.0)),
        ("tablespoon", dec!(15.0)),
        ("fluid_ounce", dec!(29.5735)),
        ("shot", dec!(44.36)), // ~1.5 fl oz
        ("gill", dec!(118.294)), // 1/4 pint
        ("cup", dec!(240.0)), // US standard
        ("wine_glass", dec!(150.0)),
        ("ice_cream_scoop", dec!(48.0)),
        ("pint", dec!(473.176)),
        ("quart", dec!(946.353)),
        ("gallon", dec!(3785.41)),
        ("imp_gallon", dec!(4546.09)), // imperial gallon (UK)
        ("barrel", dec!(117347.764)), // 31 gallons
        ("bushel", dec!(35391.2)),
        ("soda_can", dec!(355.0)), // 12 fl oz
        ("wine_bottle", dec!(750.0)),
        ("milliliter", dec!(1.0)),
        ("centiliter", dec!(10.0)),
        ("deciliter", dec!(100.0)),
        ("liter", dec!(1000.0)),
    ];
    factors
        .into_iter()
        .map(|(name, factor)| (name.to_string(), factor))
        .collect()
}

/// Built-in mass units and their factors to grams
pub(crate) fn mass_units() -> HashMap<String, Decimal> {
    let factors = [
        ("milligram", dec!(0.001)),
        ("gram", dec!(1.0)),
        ("carat", dec!(0.2)),
        ("dram", dec!(1.771845)), // apothecary measure
        ("grain", dec!(0.0647989)),
        ("ounce", dec!(28.3495)),
        ("pound", dec!(453.592)),
        ("stick", dec!(113.4)), // half a stick of butter
        ("kilogram", dec!(1000.0)),
        ("stone", dec!(6350.29)), // 14 pounds
        ("centner", dec!(100000.0)), // 100 kg
        ("ton", dec!(1000000.0)), // metric ton
    ];
    factors
        .into_iter()
        .map(|(name, factor)| (name.to_string(), factor))
        .collect()
}

/// Built-in alias table, alternate name to canonical unit
///
/// Includes self-aliases so every symbol resolves through the same single
/// lookup. The `pony` entry names a symbol registered in no unit table;
/// conversions through it are rejected at path resolution.
pub(crate) fn aliases() -> HashMap<String, String> {
    let pairs = [
        // volume
        ("drops", "drop"),
        ("pinches", "pinch"),
        ("tsp", "teaspoon"),
        ("teaspoons", "teaspoon"),
        ("dst_spoon", "dessert_spoon"),
        ("dessert_spoons", "dessert_spoon"),
        ("tbsp", "tablespoon"),
        ("tablespoons", "tablespoon"),
        ("fl_oz", "fluid_ounce"),
        ("fluid_ounces", "fluid_ounce"),
        ("pony", "pony"),
        ("shot", "shot"),
        ("shots", "shot"),
        ("gill", "gill"),
        ("gills", "gill"),
        ("cup", "cup"),
        ("cups", "cup"),
        ("wine_glass", "wine_glass"),
        ("wine_glasses", "wine_glass"),
        ("ice_cream_scoop", "ice_cream_scoop"),
        ("scoops", "ice_cream_scoop"),
        ("pt", "pint"),
        ("pints", "pint"),
        ("qt", "quart"),
        ("quarts", "quart"),
        ("gal", "gallon"),
        ("gallons", "gallon"),
        ("imp_gal", "imp_gallon"),
        ("imp_gallon", "imp_gallon"),
        ("barrel", "barrel"),
        ("barrels", "barrel"),
        ("bushel", "bushel"),
        ("bushels", "bushel"),
        ("soda_can", "soda_can"),
        ("cans", "soda_can"),
        ("wine_bottle", "wine_bottle"),
        ("bottles", "wine_bottle"),
        ("ml", "milliliter"),
        ("milliliters", "milliliter"),
        ("cl", "centiliter"),
        ("centiliters", "centiliter"),
        ("dl", "deciliter"),
        ("deciliters", "deciliter"),
        ("l", "liter"),
        ("liters", "liter"),
        // mass
        ("mg", "milligram"),
        ("milligrams", "milligram"),
        ("g", "gram"),
        ("grams", "gram"),
        ("ct", "carat"),
        ("carats", "carat"),
        ("dr", "dram"),
        ("drams", "dram"),
        ("gr", "grain"),
        ("grains", "grain"),
        ("oz", "ounce"),
        ("ounces", "ounce"),
        ("lb", "pound"),
        ("lbs", "pound"),
        ("pounds", "pound"),
        ("stick", "stick"),
        ("sticks", "stick"),
        ("kg", "kilogram"),
        ("kilograms", "kilogram"),
        ("stone", "stone"),
        ("stones", "stone"),
        ("centner", "centner"),
        ("cwt", "centner"), // British hundredweight
        ("t", "ton"),
        ("ton", "ton"),
        ("tons", "ton"),
    ];
    pairs
        .into_iter()
        .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
        .collect()
}

/// Built-in ingredient densities in grams per milliliter
pub(crate) fn densities() -> HashMap<String, Decimal> {
    let values = [
        ("water", dec!(1.0)),
        ("milk", dec!(1.036)), // whole, 3.25% fat
        ("cream", dec!(0.994)), // heavy
        ("flour", dec!(0.59)), // wheat, all-purpose
        ("sugar", dec!(0.85)), // granulated
        ("brown_sugar", dec!(0.72)), // packed
        ("powdered_sugar", dec!(0.8)),
        ("butter", dec!(0.911)),
        ("margarine", dec!(0.96)),
        ("honey", dec!(1.43)),
        ("oil", dec!(0.92)), // vegetable
        ("olive_oil", dec!(0.915)),
        ("vinegar", dec!(1.005)), // 5%
        ("yogurt", dec!(1.06)), // plain
        ("sour_cream", dec!(0.978)),
        ("peanut_butter", dec!(1.09)),
        ("ketchup", dec!(1.15)),
        ("mayonnaise", dec!(0.94)),
        ("cocoa_powder", dec!(0.64)),
        ("rice", dec!(0.85)), // white, dry
        ("oats", dec!(0.43)), // rolled
        ("corn_syrup", dec!(1.48)),
        ("maple_syrup", dec!(1.32)),
        ("molasses", dec!(1.45)),
        ("tomato_paste", dec!(1.06)),
    ];
    values
        .into_iter()
        .map(|(name, density)| (name.to_string(), density))
        .collect()
}
