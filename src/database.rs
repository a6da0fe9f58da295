// ABOUTME: SQLite-backed storage for user profiles and food logs
// ABOUTME: Inline migrations plus the user-store and food-log-store queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Management
//!
//! User-profile and food-log storage over SQLite. Migrations run inline on
//! startup; the schema mirrors the two tables the HTTP surface needs:
//! `users` (goal lookup) and `food_logs` (consumed-food records).

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};

/// Stored user profile: goal plus daily calorie target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: String,
    /// Stored dietary goal, if any
    pub goal: Option<String>,
    /// Daily calorie target, if any
    pub daily_calories: Option<i64>,
}

/// One consumed-food record ready for insertion
#[derive(Debug, Clone)]
pub struct FoodLogEntry {
    /// Owning user
    pub user_id: String,
    /// Display name of the food
    pub food_name: String,
    /// Calories consumed
    pub calories: f64,
    /// Protein grams
    pub protein: f64,
    /// Carbohydrate grams
    pub carbs: f64,
    /// Fat grams
    pub fat: f64,
    /// Meal type label (breakfast, lunch, dinner, snack)
    pub meal_type: String,
    /// Log date, YYYY-MM-DD
    pub log_date: String,
    /// Log time, locale style h:mm:ss AM/PM
    pub log_time: String,
    /// Whether the entry came from a photo scan
    pub scanned: bool,
    /// Confidence string, e.g. "92%"
    pub confidence: String,
}

/// Database handle for user and food-log storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error when the connection or a migration fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error when a DDL statement fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                goal TEXT,
                daily_calories INTEGER,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS food_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                food_name TEXT NOT NULL,
                calories REAL NOT NULL,
                protein REAL NOT NULL DEFAULT 0,
                carbs REAL NOT NULL DEFAULT 0,
                fat REAL NOT NULL DEFAULT 0,
                meal_type TEXT NOT NULL,
                log_date TEXT NOT NULL,
                log_time TEXT NOT NULL,
                scanned INTEGER NOT NULL DEFAULT 0,
                confidence TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_food_logs_user_id ON food_logs(user_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_food_logs_log_date ON food_logs(log_date)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Fetch a user's stored profile, or `None` when the id is unknown
    ///
    /// # Errors
    ///
    /// Returns an error when the query fails.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let row = sqlx::query("SELECT id, goal, daily_calories FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(UserProfile {
                id: row.try_get("id")?,
                goal: row.try_get("goal")?,
                daily_calories: row.try_get("daily_calories")?,
            })),
            None => Ok(None),
        }
    }

    /// Insert or update a user profile
    ///
    /// # Errors
    ///
    /// Returns an error when the statement fails.
    pub async fn upsert_user(&self, profile: &UserProfile) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, goal, daily_calories, created_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                goal = excluded.goal,
                daily_calories = excluded.daily_calories
            "#,
        )
        .bind(&profile.id)
        .bind(&profile.goal)
        .bind(profile.daily_calories)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persist a food-log entry and return its assigned row id
    ///
    /// # Errors
    ///
    /// Returns an error when the insert fails.
    pub async fn log_food(&self, entry: &FoodLogEntry) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO food_logs
            (user_id, food_name, calories, protein, carbs, fat, meal_type,
             log_date, log_time, scanned, confidence, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.user_id)
        .bind(&entry.food_name)
        .bind(entry.calories)
        .bind(entry.protein)
        .bind(entry.carbs)
        .bind(entry.fat)
        .bind(&entry.meal_type)
        .bind(&entry.log_date)
        .bind(&entry.log_time)
        .bind(entry.scanned)
        .bind(&entry.confidence)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
