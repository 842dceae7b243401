use crate::error::{PlanError, Result};
use crate::models::Meal;

/// Pick the candidate whose calories are closest to the target.
///
/// Stable left-to-right scan with a strict `<` comparison, so among
/// equal-distance candidates the first one encountered wins. Fails with
/// [`PlanError::EmptyCandidates`] on an empty slice rather than returning a
/// default.
pub fn select_best_meal<'a>(candidates: &'a [Meal], target_calories: f64) -> Result<&'a Meal> {
    let mut best: Option<(&Meal, f64)> = None;

    for meal in candidates {
        let distance = (meal.calories - target_calories).abs();
        match best {
            Some((_, best_distance)) if distance < best_distance => {
                best = Some((meal, distance));
            }
            None => best = Some((meal, distance)),
            Some(_) => {}
        }
    }

    best.map(|(meal, _)| meal).ok_or(PlanError::EmptyCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealSlot, Suitability};

    fn meal(name: &str, calories: f64) -> Meal {
        Meal {
            id: name.to_lowercase(),
            name: name.to_string(),
            slot: MealSlot::Lunch,
            calories,
            protein: 10.0,
            carbs: 10.0,
            fats: 10.0,
            description: String::new(),
            suitable_for: Suitability::All,
        }
    }

    #[test]
    fn test_selects_nearest_by_calories() {
        let candidates = vec![meal("A", 400.0), meal("B", 600.0), meal("C", 500.0)];

        let best = select_best_meal(&candidates, 520.0).unwrap();
        assert_eq!(best.name, "C");
    }

    #[test]
    fn test_tie_break_first_wins() {
        // 400 and 600 are both 100 away from 500; the first stays.
        let candidates = vec![meal("A", 400.0), meal("B", 600.0)];

        let best = select_best_meal(&candidates, 500.0).unwrap();
        assert_eq!(best.name, "A");
    }

    #[test]
    fn test_exact_match() {
        let candidates = vec![meal("A", 300.0), meal("B", 450.0)];

        let best = select_best_meal(&candidates, 450.0).unwrap();
        assert_eq!(best.name, "B");
    }

    #[test]
    fn test_single_candidate() {
        let candidates = vec![meal("Only", 900.0)];

        let best = select_best_meal(&candidates, 100.0).unwrap();
        assert_eq!(best.name, "Only");
    }

    #[test]
    fn test_empty_candidates_error() {
        let err = select_best_meal(&[], 500.0).unwrap_err();
        assert!(matches!(err, PlanError::EmptyCandidates));
    }
}
