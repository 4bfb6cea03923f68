//! Absorption model.
//!
//! Pure functions answering how much of a drink's alcohol has reached the
//! bloodstream at a given instant, given the food eaten before the drink.

use crate::tables::gastric_half_time;
use crate::{Food, FoodType};
use chrono::{DateTime, Utc};

/// Floor absorbed immediately on consumption
const IMMEDIATE_FRACTION: f64 = 0.10;

/// Absorption time constant on an empty stomach, minutes
const FASTED_TIME_CONSTANT: f64 = 20.0;

/// Absorption time constant with food present, minutes
const FED_TIME_CONSTANT: f64 = 30.0;

/// Minutes from `from` to `to`, negative when `to` is earlier
pub(crate) fn minutes_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 60_000.0
}

/// Latest food eaten at or before `time` and the minutes since it
///
/// `foods` must be time-ordered. Ties resolve to the entry latest in order.
/// With no food logged, returns `(EmptyStomach, +inf)`.
pub fn most_recent_food(foods: &[Food], time: DateTime<Utc>) -> (FoodType, f64) {
    let eaten = foods.partition_point(|f| f.time <= time);
    match eaten.checked_sub(1).map(|i| &foods[i]) {
        Some(food) => (food.kind, minutes_between(food.time, time)),
        None => (FoodType::EmptyStomach, f64::INFINITY),
    }
}

/// Fraction of a drink consumed at `drink_time` absorbed by `target_time`
///
/// The food state is read at the drink's own time, so food eaten after a
/// drink never changes that drink's curve.
pub fn absorption_factor(
    foods: &[Food],
    drink_time: DateTime<Utc>,
    target_time: DateTime<Utc>,
) -> f64 {
    let minutes_since_drink = minutes_between(drink_time, target_time).max(0.0);
    let (food, minutes_since_food) = most_recent_food(foods, drink_time);
    let half_time = gastric_half_time(food);

    let (effective_minutes, time_constant) = if half_time == 0.0 {
        (minutes_since_drink, FASTED_TIME_CONSTANT)
    } else {
        let delay = (minutes_since_food / half_time).clamp(0.0, 1.0);
        (minutes_since_drink * (0.5 + 0.5 * delay), FED_TIME_CONSTANT)
    };

    let absorbed = IMMEDIATE_FRACTION
        + (1.0 - IMMEDIATE_FRACTION) * (1.0 - (-effective_minutes / time_constant).exp());
    absorbed.clamp(0.0, 1.0)
}
