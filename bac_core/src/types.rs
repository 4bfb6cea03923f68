//! Core domain types for the BAC simulator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Physiological profile and partial profile updates
//! - Drink and food log entries
//! - Derived projections (timeline points, peaks, snapshots)
//! - Impairment level records

use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex, selects the Widmark distribution ratio
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(Error::UnknownSex(other.to_string())),
        }
    }
}

/// Physiological profile used by every BAC computation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub sex: Sex,
    pub weight_lbs: f64,
    pub height_inches: u32,
    pub age: u32,
    pub chronic_drinker: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            sex: Sex::Male,
            weight_lbs: 180.0,
            height_inches: 70,
            age: 30,
            chronic_drinker: false,
        }
    }
}

impl Profile {
    /// Shallow-merge a partial update; unset fields keep their current value
    pub fn merge(&mut self, update: &ProfileUpdate) {
        if let Some(sex) = update.sex {
            self.sex = sex;
        }
        if let Some(weight) = update.weight {
            self.weight_lbs = weight;
        }
        if let Some(height) = update.height {
            self.height_inches = height;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(chronic) = update.chronic_drinker {
            self.chronic_drinker = chronic;
        }
    }

    /// Reject a profile the Widmark formula cannot compute with
    pub fn validate(&self) -> Result<(), Error> {
        if !self.weight_lbs.is_finite() || self.weight_lbs <= 0.0 {
            return Err(Error::Config(format!(
                "profile.weight_lbs must be positive, got {}",
                self.weight_lbs
            )));
        }
        Ok(())
    }
}

/// Partial profile, as produced by the message parser
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub chronic_drinker: Option<bool>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.sex.is_none()
            && self.weight.is_none()
            && self.height.is_none()
            && self.age.is_none()
            && self.chronic_drinker.is_none()
    }
}

// ============================================================================
// Drink and Food Types
// ============================================================================

/// Kind of drink; each has a standard serving in the reference tables
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DrinkType {
    BeerLight,
    BeerRegular,
    BeerIpa,
    BeerStout,
    WineLight,
    WineRed,
    WineFortified,
    Spirits,
    MixedDrink,
}

impl DrinkType {
    pub const ALL: [DrinkType; 9] = [
        DrinkType::BeerLight,
        DrinkType::BeerRegular,
        DrinkType::BeerIpa,
        DrinkType::BeerStout,
        DrinkType::WineLight,
        DrinkType::WineRed,
        DrinkType::WineFortified,
        DrinkType::Spirits,
        DrinkType::MixedDrink,
    ];

    /// Snake-case key used in scenario files
    pub fn key(self) -> &'static str {
        match self {
            DrinkType::BeerLight => "beer_light",
            DrinkType::BeerRegular => "beer_regular",
            DrinkType::BeerIpa => "beer_ipa",
            DrinkType::BeerStout => "beer_stout",
            DrinkType::WineLight => "wine_light",
            DrinkType::WineRed => "wine_red",
            DrinkType::WineFortified => "wine_fortified",
            DrinkType::Spirits => "spirits",
            DrinkType::MixedDrink => "mixed_drink",
        }
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for DrinkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        DrinkType::ALL
            .into_iter()
            .find(|d| d.key() == key)
            .ok_or(Error::UnknownDrinkType(key))
    }
}

/// Kind of food, ordered roughly by how much it delays gastric emptying
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FoodType {
    EmptyStomach,
    Water,
    LightSnack,
    LightMeal,
    ModerateMeal,
    FullMeal,
    HighFatMeal,
}

impl FoodType {
    pub const ALL: [FoodType; 7] = [
        FoodType::EmptyStomach,
        FoodType::Water,
        FoodType::LightSnack,
        FoodType::LightMeal,
        FoodType::ModerateMeal,
        FoodType::FullMeal,
        FoodType::HighFatMeal,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FoodType::EmptyStomach => "empty_stomach",
            FoodType::Water => "water",
            FoodType::LightSnack => "light_snack",
            FoodType::LightMeal => "light_meal",
            FoodType::ModerateMeal => "moderate_meal",
            FoodType::FullMeal => "full_meal",
            FoodType::HighFatMeal => "high_fat_meal",
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for FoodType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        FoodType::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or(Error::UnknownFoodType(key))
    }
}

/// A logged drink. Immutable once created; only removable.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Drink {
    pub id: Uuid,
    pub time: DateTime<Utc>,
    pub kind: DrinkType,
    pub size_oz: f64,
    pub alcohol_percent: f64,
}

impl Drink {
    /// Pure alcohol in fluid ounces
    pub fn alcohol_oz(&self) -> f64 {
        self.size_oz * (self.alcohol_percent / 100.0)
    }
}

/// A logged food event
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Food {
    pub id: Uuid,
    pub time: DateTime<Utc>,
    pub kind: FoodType,
}

// ============================================================================
// Derived Projections
// ============================================================================

/// One sample of the BAC curve
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct TimelinePoint {
    pub time: DateTime<Utc>,
    pub bac: f64,
}

/// Highest sampled BAC and when it occurs
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct BacPeak {
    pub bac: f64,
    pub time: DateTime<Utc>,
}

/// Point-in-time snapshot: BAC plus its classification
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BacResult {
    pub bac: f64,
    pub impairment_level: &'static ImpairmentLevel,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Impairment Types
// ============================================================================

/// Display color bucket for a BAC level
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Safe,
    Caution,
    Warning,
    Danger,
    Critical,
}

/// Whether the person should drive at this level
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriveFitness {
    Yes,
    Caution,
    No,
}

impl fmt::Display for DriveFitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            DriveFitness::Yes => "YES",
            DriveFitness::Caution => "CAUTION",
            DriveFitness::No => "NO",
        })
    }
}

/// One step of the impairment classification table
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImpairmentLevel {
    pub threshold: f64,
    pub label: &'static str,
    pub description: &'static str,
    pub color: StatusColor,
    pub fit_to_drive: DriveFitness,
    pub legal_status: &'static str,
}
