// ABOUTME: Static food catalog keyed by dietary goal, compiled once at startup
// ABOUTME: Defines Goal, FoodCategory, FoodRecord, and the read-only catalog accessor
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static food catalog
//!
//! The catalog maps each dietary goal to an ordered list of [`FoodRecord`]s.
//! It is compiled into an immutable table on first access and never mutated,
//! so concurrent unsynchronized reads are safe. Record ids are globally
//! unique across all goal buckets; the recognition core relies on this for
//! de-duplication when building alternatives.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// User's dietary objective; selects which catalog subset is preferred
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Calorie-deficit oriented foods
    WeightLoss,
    /// Protein- and calorie-dense foods
    MuscleGain,
    /// Balanced everyday foods
    Maintenance,
}

impl Goal {
    /// Parse goal from string; any unrecognized value falls back to
    /// `Maintenance`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "weight_loss" => Self::WeightLoss,
            "muscle_gain" => Self::MuscleGain,
            _ => Self::Maintenance,
        }
    }

    /// Wire-format name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
        }
    }
}

/// Food category, used for time-of-day filtering and portion estimates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum FoodCategory {
    Dairy,
    Protein,
    Vegetable,
    Grain,
    Fruit,
    Supplement,
    Meal,
    Snack,
    Soup,
}

impl FoodCategory {
    /// Wire-format name, also used in alternative-suggestion reasons
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dairy => "dairy",
            Self::Protein => "protein",
            Self::Vegetable => "vegetable",
            Self::Grain => "grain",
            Self::Fruit => "fruit",
            Self::Supplement => "supplement",
            Self::Meal => "meal",
            Self::Snack => "snack",
            Self::Soup => "soup",
        }
    }
}

/// One catalog entry with reference-portion macros
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodRecord {
    /// Globally unique id across all goal buckets
    pub id: u32,
    /// Display name
    pub name: String,
    /// Calories per reference portion
    pub calories: u32,
    /// Protein grams per reference portion
    pub protein: f64,
    /// Carbohydrate grams per reference portion
    pub carbs: f64,
    /// Fat grams per reference portion
    pub fat: f64,
    /// Category
    pub category: FoodCategory,
    /// Opaque display hint, not used in logic
    pub icon: String,
    /// Ordered lowercase match-strings for filename scanning
    pub keywords: Vec<String>,
}

/// The full catalog: one ordered bucket per goal
#[derive(Debug)]
pub struct FoodCatalog {
    weight_loss: Vec<FoodRecord>,
    muscle_gain: Vec<FoodRecord>,
    maintenance: Vec<FoodRecord>,
}

impl FoodCatalog {
    /// Records for a goal, in declaration order
    pub fn for_goal(&self, goal: Goal) -> &[FoodRecord] {
        match goal {
            Goal::WeightLoss => &self.weight_loss,
            Goal::MuscleGain => &self.muscle_gain,
            Goal::Maintenance => &self.maintenance,
        }
    }

    /// All records across every goal bucket, in the fixed scan order
    /// weight_loss, muscle_gain, maintenance
    pub fn all(&self) -> impl Iterator<Item = &FoodRecord> {
        self.weight_loss
            .iter()
            .chain(self.muscle_gain.iter())
            .chain(self.maintenance.iter())
    }

    fn compile() -> Self {
        fn food(
            id: u32,
            name: &str,
            calories: u32,
            protein: f64,
            carbs: f64,
            fat: f64,
            category: FoodCategory,
            icon: &str,
            keywords: &[&str],
        ) -> FoodRecord {
            FoodRecord {
                id,
                name: name.to_string(),
                calories,
                protein,
                carbs,
                fat,
                category,
                icon: icon.to_string(),
                keywords: keywords.iter().map(ToString::to_string).collect(),
            }
        }

        use FoodCategory::{
            Dairy, Fruit, Grain, Meal, Protein, Snack, Soup, Supplement, Vegetable,
        };

        Self {
            weight_loss: vec![
                food(1, "Greek Yogurt", 100, 17.0, 6.0, 0.4, Dairy, "fa-mortar-pestle", &["yogurt", "greek", "dairy"]),
                food(2, "Grilled Chicken Breast", 165, 31.0, 0.0, 3.6, Protein, "fa-drumstick-bite", &["chicken", "grilled", "breast", "poultry"]),
                food(3, "Steamed Broccoli", 55, 4.0, 11.0, 0.6, Vegetable, "fa-carrot", &["broccoli", "vegetable", "green", "steamed"]),
                food(4, "Salmon", 206, 22.0, 0.0, 13.0, Protein, "fa-fish", &["salmon", "fish", "seafood"]),
                food(5, "Quinoa Bowl", 220, 8.0, 39.0, 4.0, Grain, "fa-seedling", &["quinoa", "grain", "bowl", "healthy"]),
                food(6, "Apple", 95, 0.5, 25.0, 0.3, Fruit, "fa-apple-alt", &["apple", "fruit", "red", "green"]),
                food(7, "Mixed Greens Salad", 50, 3.0, 10.0, 2.0, Vegetable, "fa-leaf", &["salad", "greens", "vegetable", "lettuce"]),
                food(8, "Avocado", 160, 2.0, 9.0, 15.0, Fruit, "fa-leaf", &["avocado", "fruit", "green", "healthy fat"]),
            ],
            muscle_gain: vec![
                food(9, "Protein Shake", 150, 30.0, 5.0, 2.0, Supplement, "fa-blender", &["protein", "shake", "supplement", "drink"]),
                food(10, "Brown Rice with Chicken", 450, 40.0, 45.0, 8.0, Meal, "fa-utensils", &["rice", "chicken", "meal", "brown rice"]),
                food(11, "Eggs (3 whole)", 215, 19.0, 1.0, 15.0, Protein, "fa-egg", &["eggs", "egg", "breakfast", "protein"]),
                food(12, "Lean Beef Steak", 250, 26.0, 0.0, 15.0, Protein, "fa-drumstick-bite", &["beef", "steak", "meat", "protein"]),
                food(13, "Sweet Potato", 112, 2.0, 26.0, 0.0, Vegetable, "fa-carrot", &["sweet potato", "potato", "vegetable", "orange"]),
                food(14, "Cottage Cheese", 120, 14.0, 4.0, 5.0, Dairy, "fa-cheese", &["cottage cheese", "cheese", "dairy", "protein"]),
            ],
            maintenance: vec![
                food(15, "Avocado Toast", 250, 8.0, 30.0, 12.0, Meal, "fa-bread-slice", &["avocado", "toast", "bread", "breakfast"]),
                food(16, "Tuna Salad", 180, 20.0, 5.0, 9.0, Protein, "fa-fish", &["tuna", "salad", "fish", "seafood"]),
                food(17, "Oatmeal", 150, 5.0, 27.0, 3.0, Grain, "fa-seedling", &["oatmeal", "oats", "breakfast", "grain"]),
                food(18, "Mixed Nuts", 170, 5.0, 6.0, 15.0, Snack, "fa-cookie-bite", &["nuts", "mixed nuts", "snack", "healthy fat"]),
                food(19, "Vegetable Soup", 120, 4.0, 20.0, 3.0, Soup, "fa-bowl-food", &["soup", "vegetable soup", "broth", "warm"]),
                food(20, "Whole Wheat Pasta", 200, 7.0, 40.0, 1.0, Grain, "fa-utensils", &["pasta", "whole wheat", "noodles", "italian"]),
            ],
        }
    }
}

static CATALOG: OnceLock<FoodCatalog> = OnceLock::new();

/// Read-only accessor for the process-wide catalog
pub fn catalog() -> &'static FoodCatalog {
    CATALOG.get_or_init(FoodCatalog::compile)
}
