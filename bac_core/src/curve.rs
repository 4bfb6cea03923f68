//! Widmark BAC curve.
//!
//! BAC = [(A × 5.14) / (W × r)] - (β × H), where A is absorbed alcohol in
//! ounces (reduced by food), W body weight in pounds, r the Widmark ratio,
//! β the elimination rate and H hours since the session started.

use crate::absorption::{absorption_factor, minutes_between, most_recent_food};
use crate::tables::{
    peak_reduction, widmark_ratio, CHRONIC_ELIMINATION_FACTOR, ELIMINATION_RATE,
    WIDMARK_CONSTANT,
};
use crate::{Drink, Food, Profile};
use chrono::{DateTime, Utc};

/// Elimination rate for a profile, % BAC per hour
pub fn elimination_rate(profile: &Profile) -> f64 {
    if profile.chronic_drinker {
        ELIMINATION_RATE * CHRONIC_ELIMINATION_FACTOR
    } else {
        ELIMINATION_RATE
    }
}

/// Alcohol (oz) from `drinks` that has reached the blood by `target`
pub fn absorbed_alcohol_oz(drinks: &[Drink], foods: &[Food], target: DateTime<Utc>) -> f64 {
    drinks
        .iter()
        .filter(|d| d.time <= target)
        .map(|drink| {
            let factor = absorption_factor(foods, drink.time, target);
            let (food, _) = most_recent_food(foods, drink.time);
            drink.alcohol_oz() * factor * (1.0 - peak_reduction(food) * 0.5)
        })
        .sum()
}

/// Instantaneous BAC at `target`, rounded to 4 decimals
///
/// Pure: can be sampled at any instant in any order. Zero before
/// `session_start`, never negative.
pub fn bac_at(
    profile: &Profile,
    drinks: &[Drink],
    foods: &[Food],
    session_start: DateTime<Utc>,
    target: DateTime<Utc>,
) -> f64 {
    if target < session_start {
        return 0.0;
    }

    let absorbed = absorbed_alcohol_oz(drinks, foods, target);
    let from_absorption = if absorbed > 0.0 {
        (absorbed * WIDMARK_CONSTANT) / (profile.weight_lbs * widmark_ratio(profile.sex))
    } else {
        0.0
    };

    let hours = minutes_between(session_start, target).max(0.0) / 60.0;
    let elimination = elimination_rate(profile) * hours;

    round4((from_absorption - elimination).max(0.0))
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrinkType, FoodType, Sex};
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 19, 0, 0).unwrap()
    }

    fn beer(minutes: i64) -> Drink {
        Drink {
            id: Uuid::new_v4(),
            time: t0() + Duration::minutes(minutes),
            kind: DrinkType::BeerRegular,
            size_oz: 12.0,
            alcohol_percent: 5.0,
        }
    }

    #[test]
    fn test_zero_before_session_start() {
        let drinks = vec![beer(0)];
        let bac = bac_at(&Profile::default(), &drinks, &[], t0(), t0() - Duration::minutes(1));
        assert_eq!(bac, 0.0);
    }

    #[test]
    fn test_no_drinks_is_zero() {
        assert_eq!(bac_at(&Profile::default(), &[], &[], t0(), t0()), 0.0);
    }

    #[test]
    fn test_fully_absorbed_single_beer() {
        // Three time constants in, still well above the elimination line
        let drinks = vec![beer(0)];
        let target = t0() + Duration::minutes(60);
        let bac = bac_at(&Profile::default(), &drinks, &[], t0(), target);

        let factor = 0.10 + 0.90 * (1.0 - (-3.0f64).exp());
        let expected = 0.6 * factor * 5.14 / (180.0 * 0.73) - 0.015;
        assert!((bac - round4(expected)).abs() < 1e-12);
    }

    #[test]
    fn test_rounded_to_four_decimals() {
        let drinks = vec![beer(0)];
        let bac = bac_at(&Profile::default(), &drinks, &[], t0(), t0() + Duration::minutes(17));
        assert_eq!(bac, round4(bac));
        assert!(bac > 0.0);
    }

    #[test]
    fn test_female_profile_reaches_higher_bac() {
        let drinks = vec![beer(0)];
        let target = t0() + Duration::minutes(45);
        let male = Profile::default();
        let female = Profile {
            sex: Sex::Female,
            ..Profile::default()
        };
        assert!(
            bac_at(&female, &drinks, &[], t0(), target) > bac_at(&male, &drinks, &[], t0(), target)
        );
    }

    #[test]
    fn test_chronic_drinker_eliminates_faster() {
        let drinks = vec![beer(0), beer(30), beer(60)];
        let target = t0() + Duration::hours(2);
        let normal = Profile::default();
        let chronic = Profile {
            chronic_drinker: true,
            ..Profile::default()
        };
        assert!((elimination_rate(&chronic) - 0.018).abs() < 1e-12);
        assert!(
            bac_at(&chronic, &drinks, &[], t0(), target)
                < bac_at(&normal, &drinks, &[], t0(), target)
        );
    }

    #[test]
    fn test_future_drinks_are_ignored() {
        let drinks = vec![beer(0), beer(120)];
        let target = t0() + Duration::minutes(60);
        let only_first = vec![beer(0)];
        assert_eq!(
            bac_at(&Profile::default(), &drinks, &[], t0(), target),
            bac_at(&Profile::default(), &only_first, &[], t0(), target)
        );
    }

    #[test]
    fn test_food_reduces_absorbed_alcohol() {
        let drinks = vec![beer(0)];
        let foods = vec![Food {
            id: Uuid::new_v4(),
            time: t0() - Duration::minutes(30),
            kind: FoodType::HighFatMeal,
        }];
        let target = t0() + Duration::hours(24);
        // Fully absorbed either way, so only the peak reduction remains
        let fed = absorbed_alcohol_oz(&drinks, &foods, target);
        let fasted = absorbed_alcohol_oz(&drinks, &[], target);
        assert!((fed / fasted - 0.7).abs() < 1e-6);
    }
}
