//! Reference tables for the simulation.
//!
//! These values determine simulation output and are fixed: standard drink
//! servings, gastric emptying half-times, peak reductions, Widmark ratios and
//! the impairment classification table.

use crate::types::*;
use once_cell::sync::Lazy;

/// BAC elimination, % per hour
pub const ELIMINATION_RATE: f64 = 0.015;

/// Elimination multiplier applied for chronic drinkers
pub const CHRONIC_ELIMINATION_FACTOR: f64 = 1.2;

/// Widmark numerator constant for ounce/pound inputs
pub const WIDMARK_CONSTANT: f64 = 5.14;

/// Per se legal driving limit
pub const LEGAL_LIMIT: f64 = 0.08;

/// Pure alcohol in one US standard drink, fluid ounces
pub const STANDARD_DRINK_ALCOHOL_OZ: f64 = 0.6;

/// Standard serving for a drink type
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StandardDrink {
    pub oz: f64,
    pub alcohol_percent: f64,
}

pub fn standard_drink(kind: DrinkType) -> StandardDrink {
    let (oz, alcohol_percent) = match kind {
        DrinkType::BeerLight => (12.0, 4.2),
        DrinkType::BeerRegular => (12.0, 5.0),
        DrinkType::BeerIpa => (12.0, 6.5),
        DrinkType::BeerStout => (12.0, 7.0),
        DrinkType::WineLight => (5.0, 11.0),
        DrinkType::WineRed => (5.0, 13.5),
        DrinkType::WineFortified => (3.0, 20.0),
        DrinkType::Spirits => (1.5, 40.0),
        DrinkType::MixedDrink => (1.5, 40.0),
    };
    StandardDrink { oz, alcohol_percent }
}

/// Gastric emptying half-time in minutes (0 = nothing slows absorption)
pub fn gastric_half_time(kind: FoodType) -> f64 {
    match kind {
        FoodType::EmptyStomach => 0.0,
        FoodType::Water => 15.0,
        FoodType::LightSnack => 60.0,
        FoodType::LightMeal => 90.0,
        FoodType::ModerateMeal => 120.0,
        FoodType::FullMeal => 150.0,
        FoodType::HighFatMeal => 180.0,
    }
}

/// Fractional reduction of peak BAC attributed to food in the stomach
pub fn peak_reduction(kind: FoodType) -> f64 {
    match kind {
        FoodType::EmptyStomach => 0.0,
        FoodType::Water => 0.05,
        FoodType::LightSnack => 0.20,
        FoodType::LightMeal => 0.30,
        FoodType::ModerateMeal => 0.40,
        FoodType::FullMeal => 0.45,
        FoodType::HighFatMeal => 0.60,
    }
}

pub fn widmark_ratio(sex: Sex) -> f64 {
    match sex {
        Sex::Male => 0.73,
        Sex::Female => 0.66,
    }
}

pub fn drink_display_name(kind: DrinkType) -> &'static str {
    match kind {
        DrinkType::BeerLight => "Light Beer",
        DrinkType::BeerRegular => "Beer",
        DrinkType::BeerIpa => "IPA",
        DrinkType::BeerStout => "Stout",
        DrinkType::WineLight => "White Wine",
        DrinkType::WineRed => "Red Wine",
        DrinkType::WineFortified => "Fortified Wine",
        DrinkType::Spirits => "Shot/Spirit",
        DrinkType::MixedDrink => "Mixed Drink",
    }
}

pub fn food_display_name(kind: FoodType) -> &'static str {
    match kind {
        FoodType::EmptyStomach => "Empty Stomach",
        FoodType::Water => "Water/Clear Liquid",
        FoodType::LightSnack => "Light Snack",
        FoodType::LightMeal => "Light Meal",
        FoodType::ModerateMeal => "Moderate Meal",
        FoodType::FullMeal => "Full Meal",
        FoodType::HighFatMeal => "High-Fat Meal",
    }
}

/// Impairment table, ascending by threshold
static IMPAIRMENT_LEVELS: Lazy<Vec<ImpairmentLevel>> = Lazy::new(|| {
    vec![
        ImpairmentLevel {
            threshold: 0.0,
            label: "Sober",
            description: "No detectable impairment",
            color: StatusColor::Safe,
            fit_to_drive: DriveFitness::Yes,
            legal_status: "LEGAL",
        },
        ImpairmentLevel {
            threshold: 0.02,
            label: "Minimal Impairment",
            description: "Slight warmth, mild euphoria",
            color: StatusColor::Safe,
            fit_to_drive: DriveFitness::Yes,
            legal_status: "LEGAL",
        },
        ImpairmentLevel {
            threshold: 0.05,
            label: "Mild Impairment",
            description: "Reduced concentration, slower reaction time",
            color: StatusColor::Caution,
            fit_to_drive: DriveFitness::Caution,
            legal_status: "LEGAL",
        },
        ImpairmentLevel {
            threshold: 0.08,
            label: "Moderate Impairment",
            description: "Legal limit reached - DUI threshold",
            color: StatusColor::Warning,
            fit_to_drive: DriveFitness::No,
            legal_status: "ILLEGAL - DUI",
        },
        ImpairmentLevel {
            threshold: 0.15,
            label: "Severe Impairment",
            description: "Enhanced DUI threshold (7+ day jail)",
            color: StatusColor::Danger,
            fit_to_drive: DriveFitness::No,
            legal_status: "ILLEGAL - ENHANCED DUI",
        },
        ImpairmentLevel {
            threshold: 0.20,
            label: "Very Severe Impairment",
            description: "Major loss of motor control, danger of poisoning",
            color: StatusColor::Danger,
            fit_to_drive: DriveFitness::No,
            legal_status: "DANGEROUS - MEDICAL RISK",
        },
        ImpairmentLevel {
            threshold: 0.30,
            label: "Extreme Intoxication",
            description: "Risk of death, medical emergency",
            color: StatusColor::Critical,
            fit_to_drive: DriveFitness::No,
            legal_status: "LIFE-THREATENING",
        },
    ]
});

/// The full impairment table, lowest threshold first
pub fn impairment_levels() -> &'static [ImpairmentLevel] {
    &IMPAIRMENT_LEVELS
}

/// Highest-threshold level whose threshold is at or below `bac`
///
/// The sober entry is the floor, so negative or NaN input also lands there.
pub fn impairment_level(bac: f64) -> &'static ImpairmentLevel {
    let levels = impairment_levels();
    let idx = levels.partition_point(|level| level.threshold <= bac);
    &levels[idx.saturating_sub(1)]
}
