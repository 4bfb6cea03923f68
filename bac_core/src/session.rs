//! Session state: the drink/food log and the profile it is evaluated against.
//!
//! Both collections stay in non-decreasing time order, ties kept in
//! insertion order. Session start is the earlier of the anchor (construction
//! or last clear) and the earliest logged drink, and is recomputed on every
//! insert and removal.

use crate::clock::{Clock, SystemClock};
use crate::tables::{impairment_level, standard_drink};
use crate::{curve, BacResult, Drink, DrinkType, Food, FoodType, Profile, ProfileUpdate};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Minutes between consecutive drinks when a quantity > 1 is logged
pub const QUANTITY_SPACING_MINUTES: i64 = 30;

/// A single drinking scenario
///
/// The session does no locking of its own; callers that share one across
/// threads wrap it in a `Mutex` and hold the lock across mutation + query.
#[derive(Clone, Debug)]
pub struct Session {
    profile: Profile,
    drinks: Vec<Drink>,
    foods: Vec<Food>,
    anchor: DateTime<Utc>,
    start_time: DateTime<Utc>,
    clock: Arc<dyn Clock>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

impl Session {
    /// Create an empty session on the system clock
    pub fn new(profile: Profile) -> Self {
        Self::with_clock(profile, Arc::new(SystemClock))
    }

    /// Create an empty session reading "now" from `clock`
    pub fn with_clock(profile: Profile, clock: Arc<dyn Clock>) -> Self {
        let anchor = clock.now();
        Self {
            profile,
            drinks: Vec::new(),
            foods: Vec::new(),
            anchor,
            start_time: anchor,
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // ------------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------------

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Replace the profile wholesale
    pub fn set_profile(&mut self, profile: Profile) {
        tracing::debug!("Profile replaced: {:?}", profile);
        self.profile = profile;
    }

    /// Merge a partial profile; unset fields keep their values
    pub fn update_profile(&mut self, update: &ProfileUpdate) {
        self.profile.merge(update);
        tracing::debug!("Profile updated: {:?}", self.profile);
    }

    // ------------------------------------------------------------------------
    // Log mutation
    // ------------------------------------------------------------------------

    /// Log `quantity` drinks starting at `time`, 30 minutes apart
    ///
    /// Size and strength default to the standard serving for `kind`.
    /// Returns the ids of the created entries in consumption order.
    pub fn add_drink(
        &mut self,
        time: DateTime<Utc>,
        kind: DrinkType,
        size_oz: Option<f64>,
        alcohol_percent: Option<f64>,
        quantity: u32,
    ) -> Vec<Uuid> {
        let standard = standard_drink(kind);
        let size_oz = size_oz.unwrap_or(standard.oz);
        let alcohol_percent = alcohol_percent.unwrap_or(standard.alcohol_percent);

        let mut ids = Vec::with_capacity(quantity as usize);
        for k in 0..i64::from(quantity) {
            let drink = Drink {
                id: Uuid::new_v4(),
                time: time + Duration::minutes(k * QUANTITY_SPACING_MINUTES),
                kind,
                size_oz,
                alcohol_percent,
            };
            ids.push(drink.id);
            let at = self.drinks.partition_point(|d| d.time <= drink.time);
            self.drinks.insert(at, drink);
        }

        self.recompute_start();
        tracing::debug!(
            "Added {} x {} at {} ({} oz @ {}%), session start {}",
            quantity,
            kind,
            time,
            size_oz,
            alcohol_percent,
            self.start_time
        );
        ids
    }

    /// Log a food event
    pub fn add_food(&mut self, time: DateTime<Utc>, kind: FoodType) -> Uuid {
        let food = Food {
            id: Uuid::new_v4(),
            time,
            kind,
        };
        let id = food.id;
        let at = self.foods.partition_point(|f| f.time <= time);
        self.foods.insert(at, food);
        tracing::debug!("Added food {} at {}", kind, time);
        id
    }

    /// Remove a drink; returns false if no drink has this id
    pub fn remove_drink(&mut self, id: Uuid) -> bool {
        match self.drinks.iter().position(|d| d.id == id) {
            Some(idx) => {
                self.drinks.remove(idx);
                self.recompute_start();
                tracing::debug!("Removed drink {}", id);
                true
            }
            None => {
                tracing::debug!("Drink {} not found", id);
                false
            }
        }
    }

    /// Remove a food entry; returns false if no food has this id
    pub fn remove_food(&mut self, id: Uuid) -> bool {
        match self.foods.iter().position(|f| f.id == id) {
            Some(idx) => {
                self.foods.remove(idx);
                tracing::debug!("Removed food {}", id);
                true
            }
            None => {
                tracing::debug!("Food {} not found", id);
                false
            }
        }
    }

    /// Empty the log and restart the session at "now"
    pub fn clear_scenario(&mut self) {
        self.drinks.clear();
        self.foods.clear();
        self.anchor = self.clock.now();
        self.start_time = self.anchor;
        tracing::debug!("Scenario cleared, session start {}", self.start_time);
    }

    fn recompute_start(&mut self) {
        self.start_time = match self.drinks.first() {
            Some(first) => first.time.min(self.anchor),
            None => self.anchor,
        };
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Logged drinks, oldest first
    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    /// Logged foods, oldest first
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn has_drinks(&self) -> bool {
        !self.drinks.is_empty()
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    // ------------------------------------------------------------------------
    // Point queries
    // ------------------------------------------------------------------------

    /// BAC at an arbitrary instant
    pub fn bac_at(&self, target: DateTime<Utc>) -> f64 {
        curve::bac_at(
            &self.profile,
            &self.drinks,
            &self.foods,
            self.start_time,
            target,
        )
    }

    pub fn bac_now(&self) -> f64 {
        self.bac_at(self.now())
    }

    /// Current BAC with its impairment classification
    pub fn bac_result(&self) -> BacResult {
        let timestamp = self.now();
        let bac = self.bac_at(timestamp);
        BacResult {
            bac,
            impairment_level: impairment_level(bac),
            timestamp,
        }
    }
}
