//! Structured events handed over by the message parser.
//!
//! The JSON shape is
//! `{drinks: [{type, quantity, alcoholPercent, time}], foods: [{type, time}], profileUpdates: {...}}`
//! where a null `alcoholPercent` means "use the standard value for the type".

use crate::{DrinkType, FoodType, ProfileUpdate, Result, Session};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

fn default_quantity() -> u32 {
    1
}

/// One parsed drink mention
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrinkEvent {
    #[serde(rename = "type")]
    pub kind: DrinkType,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub alcohol_percent: Option<f64>,
    #[serde(default)]
    pub size_oz: Option<f64>,
    pub time: DateTime<Utc>,
}

/// One parsed food mention
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodEvent {
    #[serde(rename = "type")]
    pub kind: FoodType,
    pub time: DateTime<Utc>,
}

/// Everything extracted from one message (or a whole scenario file)
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEvents {
    #[serde(default)]
    pub drinks: Vec<DrinkEvent>,
    #[serde(default)]
    pub foods: Vec<FoodEvent>,
    #[serde(default)]
    pub profile_updates: ProfileUpdate,
}

/// Ids created by applying a batch of events
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppliedEvents {
    pub drink_ids: Vec<Uuid>,
    pub food_ids: Vec<Uuid>,
}

impl ScenarioEvents {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let events = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded scenario from {:?}: {} drink events, {} food events",
            path,
            events.drinks.len(),
            events.foods.len()
        );
        Ok(events)
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty() && self.foods.is_empty() && self.profile_updates.is_empty()
    }
}

impl Session {
    /// Apply parsed events: profile first, then foods, then drinks
    pub fn apply_events(&mut self, events: &ScenarioEvents) -> AppliedEvents {
        if !events.profile_updates.is_empty() {
            self.update_profile(&events.profile_updates);
        }

        let food_ids = events
            .foods
            .iter()
            .map(|f| self.add_food(f.time, f.kind))
            .collect();

        let drink_ids = events
            .drinks
            .iter()
            .flat_map(|d| {
                self.add_drink(d.time, d.kind, d.size_oz, d.alcohol_percent, d.quantity)
            })
            .collect();

        AppliedEvents {
            drink_ids,
            food_ids,
        }
    }
}
