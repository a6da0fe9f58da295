// ABOUTME: Food matching and recommendation heuristic, the analysis core
// ABOUTME: Keyword matcher, time-of-day selector, variance scaling, alternatives, recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Food Matcher & Recommender
//!
//! Given an uploaded image's stored filename, a dietary goal, and the current
//! hour of day, this module selects one food record from the static catalog,
//! applies randomized portion variance, and derives alternatives and textual
//! recommendations.
//!
//! The whole module is pure computation over the read-only catalog: no I/O,
//! no shared mutable state. Randomness comes in through `&mut impl Rng` so
//! tests can pin deterministic outputs with a seeded [`rand::rngs::StdRng`].
//!
//! Draw order is part of the contract (it makes seeded runs reproducible):
//! base confidence first, then the fallback selection index (keyword-miss
//! path only), then the variance factor.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::{catalog, FoodCategory, FoodRecord, Goal};

/// Meal window: fixed hour-of-day ranges used to bucket fallback food
/// selection and to label the `meal_suggestion` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealWindow {
    /// [6, 11)
    Breakfast,
    /// [11, 16)
    Lunch,
    /// [16, 22)
    Dinner,
    /// Everything else
    LateNight,
}

impl MealWindow {
    /// Bucket an hour of day (0-23) into a meal window
    #[must_use]
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=10 => Self::Breakfast,
            11..=15 => Self::Lunch,
            16..=21 => Self::Dinner,
            _ => Self::LateNight,
        }
    }

    /// Display label attached to analyzed foods
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::LateNight => "Late Night Snack",
        }
    }

    /// Categories considered plausible inside this window
    pub fn categories(self) -> &'static [FoodCategory] {
        match self {
            Self::Breakfast => &[
                FoodCategory::Dairy,
                FoodCategory::Fruit,
                FoodCategory::Grain,
                FoodCategory::Meal,
            ],
            Self::Lunch | Self::Dinner => &[
                FoodCategory::Protein,
                FoodCategory::Meal,
                FoodCategory::Vegetable,
            ],
            Self::LateNight => &[
                FoodCategory::Fruit,
                FoodCategory::Snack,
                FoodCategory::Dairy,
            ],
        }
    }
}

/// Fixed category-to-portion lookup; total over the category set
#[must_use]
pub fn estimated_portion(category: FoodCategory) -> &'static str {
    match category {
        FoodCategory::Protein => "150-200g",
        FoodCategory::Vegetable => "1 cup",
        FoodCategory::Fruit => "1 medium piece",
        FoodCategory::Dairy => "200g",
        FoodCategory::Grain => "1 cup cooked",
        FoodCategory::Snack => "1 handful",
        FoodCategory::Soup => "1 bowl",
        // Everything without a dedicated portion gets the generic serving
        FoodCategory::Meal | FoodCategory::Supplement => "1 serving",
    }
}

/// Matched food with variance-scaled macros and derived fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedFood {
    /// Catalog id of the matched record
    pub id: u32,
    /// Display name
    pub name: String,
    /// Scaled calories, rounded to the nearest integer
    pub calories: u32,
    /// Scaled protein grams, rounded to 1 decimal
    pub protein: f64,
    /// Scaled carbohydrate grams, rounded to 1 decimal
    pub carbs: f64,
    /// Scaled fat grams, rounded to 1 decimal
    pub fat: f64,
    /// Category of the matched record
    pub category: FoodCategory,
    /// Display hint carried through from the record
    pub icon: String,
    /// Match-strings carried through from the record
    pub keywords: Vec<String>,
    /// Portion estimate from the fixed category table
    pub estimated_portion: String,
    /// Meal window label for the analysis hour
    pub meal_suggestion: String,
}

/// One alternative suggestion with the reason it was picked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    /// The suggested record, unscaled
    #[serde(flatten)]
    pub food: FoodRecord,
    /// Why this record was suggested
    pub reason: String,
}

/// Result of one analysis pass; constructed fresh per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Matched food with scaled macros
    pub food: AnalyzedFood,
    /// Confidence percentage in [85, 99]
    pub confidence: u8,
    /// Up to 3 other records, unique by id, never containing the match
    pub alternatives: Vec<Alternative>,
    /// Advisory strings; never empty
    pub recommendations: Vec<String>,
}

/// Run the full matching pipeline for one uploaded image.
///
/// `filename` is the stored image filename, `hour` the local hour of day
/// (0-23). The caller guarantees a non-empty filename; the catalog is never
/// empty, so this function cannot fail.
pub fn analyze(filename: &str, goal: Goal, hour: u32, rng: &mut impl Rng) -> AnalysisResult {
    let goal_foods = catalog().for_goal(goal);

    // Base confidence is drawn before anything else; a keyword hit boosts it.
    let mut confidence: u8 = rng.gen_range(85..100);

    let matched = match match_by_keywords(filename) {
        Some(record) => {
            confidence = (confidence + 5).min(99);
            record
        }
        None => select_by_time_of_day(goal_foods, hour, rng),
    };

    let food = apply_variance(matched, hour, rng);
    let alternatives = build_alternatives(matched, goal_foods);
    let recommendations = build_recommendations(&food, goal);

    AnalysisResult {
        food,
        confidence,
        alternatives,
        recommendations,
    }
}

/// Scan the whole catalog for the first record owning a keyword contained in
/// the filename.
///
/// Order matters: goal buckets in the fixed order weight_loss, muscle_gain,
/// maintenance; records within a bucket in declaration order; keywords within
/// a record in declaration order. The first candidate wins; this is a
/// deterministic tie-break, not a best-score selection.
#[must_use]
pub fn match_by_keywords(filename: &str) -> Option<&'static FoodRecord> {
    let filename = filename.to_lowercase();
    for record in catalog().all() {
        for keyword in &record.keywords {
            if filename.contains(keyword.as_str()) {
                return Some(record);
            }
        }
    }
    None
}

/// Fallback selection when no keyword matched: filter the goal's records to
/// the current meal window's categories and pick uniformly at random. An
/// empty filtered set falls back to the unfiltered goal records.
pub fn select_by_time_of_day<'a>(
    goal_foods: &'a [FoodRecord],
    hour: u32,
    rng: &mut impl Rng,
) -> &'a FoodRecord {
    let window = MealWindow::from_hour(hour);
    let filtered: Vec<&FoodRecord> = goal_foods
        .iter()
        .filter(|f| window.categories().contains(&f.category))
        .collect();

    if filtered.is_empty() {
        &goal_foods[rng.gen_range(0..goal_foods.len())]
    } else {
        filtered[rng.gen_range(0..filtered.len())]
    }
}

/// Round to 1 decimal place, the precision macros are reported at
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Apply one uniform variance factor from [0.85, 1.15) to the record's macros
/// and attach the derived portion and meal-suggestion fields.
pub fn apply_variance(record: &FoodRecord, hour: u32, rng: &mut impl Rng) -> AnalyzedFood {
    let variance: f64 = rng.gen_range(0.85..1.15);

    AnalyzedFood {
        id: record.id,
        name: record.name.clone(),
        calories: (f64::from(record.calories) * variance).round() as u32,
        protein: round1(record.protein * variance),
        carbs: round1(record.carbs * variance),
        fat: round1(record.fat * variance),
        category: record.category,
        icon: record.icon.clone(),
        keywords: record.keywords.clone(),
        estimated_portion: estimated_portion(record.category).to_string(),
        meal_suggestion: MealWindow::from_hour(hour).label().to_string(),
    }
}

/// Build up to 3 alternatives for the matched record from the goal's foods.
///
/// Candidates are the same-category records followed by records within 50
/// calories of the match's original (pre-variance) calorie value, catalog
/// order preserved within each sublist. The walk skips ids already emitted,
/// with the match's own id pre-seeded as seen.
#[must_use]
pub fn build_alternatives(matched: &FoodRecord, goal_foods: &[FoodRecord]) -> Vec<Alternative> {
    let mut combined: Vec<&FoodRecord> = Vec::new();
    for food in goal_foods {
        if food.category == matched.category && food.id != matched.id {
            combined.push(food);
        }
    }
    for food in goal_foods {
        let calorie_gap = (i64::from(food.calories) - i64::from(matched.calories)).abs();
        if calorie_gap < 50 && food.id != matched.id {
            combined.push(food);
        }
    }

    let mut seen: HashSet<u32> = HashSet::from([matched.id]);
    let mut alternatives = Vec::new();
    for food in combined {
        if !seen.insert(food.id) {
            continue;
        }
        let reason = if food.category == matched.category {
            format!("Similar {} option", food.category.as_str())
        } else {
            format!("Similar calorie count ({} cal)", food.calories)
        };
        alternatives.push(Alternative {
            food: food.clone(),
            reason,
        });
        if alternatives.len() >= 3 {
            break;
        }
    }
    alternatives
}

/// Accumulate every triggered advisory message, in rule order, over the
/// post-variance macros. An empty result collapses to the single balanced
/// fallback message.
#[must_use]
pub fn build_recommendations(food: &AnalyzedFood, goal: Goal) -> Vec<String> {
    let mut recommendations = Vec::new();

    if goal == Goal::WeightLoss {
        if food.calories > 300 {
            recommendations.push("Consider a smaller portion for weight loss".to_string());
        }
        if food.protein < 20.0 {
            recommendations.push("Add a protein source to stay full longer".to_string());
        }
    } else if goal == Goal::MuscleGain {
        if food.protein < 25.0 {
            recommendations.push("Great for muscle growth - high in protein".to_string());
        }
        if food.calories < 300 {
            recommendations.push("Consider adding a side for extra calories".to_string());
        }
    }

    if food.fat > 15.0 {
        recommendations.push("Contains healthy fats - great for satiety".to_string());
    }
    if food.category == FoodCategory::Vegetable || food.category == FoodCategory::Fruit {
        recommendations.push("Rich in vitamins and fiber".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Balanced choice for your goals".to_string());
    }
    recommendations
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_meal_window_boundaries() {
        assert_eq!(MealWindow::from_hour(5), MealWindow::LateNight);
        assert_eq!(MealWindow::from_hour(6), MealWindow::Breakfast);
        assert_eq!(MealWindow::from_hour(10), MealWindow::Breakfast);
        assert_eq!(MealWindow::from_hour(11), MealWindow::Lunch);
        assert_eq!(MealWindow::from_hour(15), MealWindow::Lunch);
        assert_eq!(MealWindow::from_hour(16), MealWindow::Dinner);
        assert_eq!(MealWindow::from_hour(21), MealWindow::Dinner);
        assert_eq!(MealWindow::from_hour(22), MealWindow::LateNight);
        assert_eq!(MealWindow::from_hour(0), MealWindow::LateNight);
    }

    #[test]
    fn test_keyword_scan_order_is_deterministic() {
        // "chicken" appears on id 2 (weight_loss) and id 10 (muscle_gain);
        // the weight_loss bucket is scanned first.
        let matched = match_by_keywords("food-scan-chicken.jpg").unwrap();
        assert_eq!(matched.id, 2);
        assert_eq!(matched.name, "Grilled Chicken Breast");

        // Case-insensitive
        let matched = match_by_keywords("IMG-SALMON-001.PNG").unwrap();
        assert_eq!(matched.id, 4);

        assert!(match_by_keywords("img-20250101-0001.jpg").is_none());
    }

    #[test]
    fn test_variance_draw_is_reproducible() {
        // Mirror the analyze() draw order for the keyword-match path:
        // confidence first, then the variance factor.
        let mut expected_rng = StdRng::seed_from_u64(7);
        let expected_confidence: u8 = expected_rng.gen_range(85..100);
        let variance: f64 = expected_rng.gen_range(0.85..1.15);

        let mut rng = StdRng::seed_from_u64(7);
        let result = analyze("food-scan-chicken.jpg", Goal::MuscleGain, 12, &mut rng);

        assert_eq!(result.confidence, (expected_confidence + 5).min(99));
        assert_eq!(result.food.calories, (165.0 * variance).round() as u32);
        assert_eq!(result.food.protein, (31.0 * variance * 10.0).round() / 10.0);
        assert_eq!(result.food.fat, (3.6 * variance * 10.0).round() / 10.0);
    }

    #[test]
    fn test_portion_table() {
        assert_eq!(estimated_portion(FoodCategory::Protein), "150-200g");
        assert_eq!(estimated_portion(FoodCategory::Soup), "1 bowl");
        assert_eq!(estimated_portion(FoodCategory::Supplement), "1 serving");
        assert_eq!(estimated_portion(FoodCategory::Meal), "1 serving");
    }
}
