//! Habit persistence.
//!
//! Wraps the database with habit-shaped queries. Identifiers are resolved
//! once here; everything downstream works with the habit's row id rather
//! than re-deriving it from the name.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, OptionalExtension};

use super::types::{Cadence, Habit};
use crate::core::datetime::{DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::error::HabitualError;
use crate::storage::Database;

/// Storage for habits and their check-off events.
pub struct HabitStore {
    db: Database,
}

/// Raw habit row before date and cadence fields are parsed.
type HabitRow = (i64, String, String, String, String, String);

impl HabitStore {
    /// Create a store backed by the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, HabitualError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create a store with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert a new habit and return it with its resolved id.
    ///
    /// The name must already be validated; uniqueness is enforced by the
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the name is
    /// already taken.
    pub fn insert(
        &self,
        name: &str,
        description: &str,
        cadence: Cadence,
        start_date: NaiveDate,
        created_at: NaiveDateTime,
    ) -> Result<Habit, HabitualError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO habits (name, description, cadence, start_date, created_at)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                name,
                description,
                cadence.as_str(),
                start_date.format(DATE_FORMAT).to_string(),
                created_at.format(TIMESTAMP_FORMAT).to_string(),
            ],
        )
        .map_err(|e| HabitualError::Database(format!("Failed to insert habit: {e}")))?;

        Ok(Habit {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            description: description.to_string(),
            cadence,
            start_date,
            created_at,
        })
    }

    /// Look up a habit by its normalized name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Habit>, HabitualError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, name, description, cadence, start_date, created_at
                  FROM habits WHERE name = ?1",
            )
            .map_err(|e| HabitualError::Database(format!("Failed to prepare query: {e}")))?;

        let row: Option<HabitRow> = stmt
            .query_row([name], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ))
            })
            .optional()
            .map_err(|e| HabitualError::Database(format!("Failed to query habit: {e}")))?;

        row.map(habit_from_row).transpose()
    }

    /// Look up a habit by name, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `HabitualError::NotFound` for an unknown name.
    pub fn get(&self, name: &str) -> Result<Habit, HabitualError> {
        self.find_by_name(name)?
            .ok_or_else(|| HabitualError::NotFound(name.to_string()))
    }

    /// List habits, optionally restricted to one cadence.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt.
    pub fn list(&self, cadence: Option<Cadence>) -> Result<Vec<Habit>, HabitualError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, name, description, cadence, start_date, created_at
                  FROM habits
                  WHERE (?1 IS NULL OR cadence = ?1)
                  ORDER BY id",
            )
            .map_err(|e| HabitualError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([cadence.map(Cadence::as_str)], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ))
            })
            .map_err(|e| HabitualError::Database(format!("Failed to query habits: {e}")))?;

        let mut habits = Vec::new();
        for row in rows {
            let raw: HabitRow =
                row.map_err(|e| HabitualError::Database(e.to_string()))?;
            habits.push(habit_from_row(raw)?);
        }

        Ok(habits)
    }

    /// Record a check-off event for a habit.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add_checkoff(
        &self,
        habit_id: i64,
        completed_at: NaiveDateTime,
    ) -> Result<(), HabitualError> {
        let conn = self.db.connection();

        conn.execute(
            "INSERT INTO checkoffs (habit_id, completed_at) VALUES (?1, ?2)",
            params![habit_id, completed_at.format(TIMESTAMP_FORMAT).to_string()],
        )
        .map_err(|e| HabitualError::Database(format!("Failed to insert check-off: {e}")))?;

        Ok(())
    }

    /// Completion dates for a habit, most recent first.
    ///
    /// Timestamps are truncated to calendar dates; a day with several
    /// check-offs appears once per check-off, and the streak engine
    /// collapses the duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored timestamp is
    /// corrupt.
    pub fn completion_dates(&self, habit_id: i64) -> Result<Vec<NaiveDate>, HabitualError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT completed_at FROM checkoffs
                  WHERE habit_id = ?1
                  ORDER BY completed_at DESC",
            )
            .map_err(|e| HabitualError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([habit_id], |row| row.get::<_, String>(0))
            .map_err(|e| HabitualError::Database(format!("Failed to query check-offs: {e}")))?;

        let mut dates = Vec::new();
        for row in rows {
            let raw = row.map_err(|e| HabitualError::Database(e.to_string()))?;
            let timestamp =
                NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(|_| {
                    HabitualError::Database(format!("Corrupt check-off timestamp '{raw}'"))
                })?;
            dates.push(timestamp.date());
        }

        Ok(dates)
    }

    /// Number of check-offs recorded for a habit.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn checkoff_count(&self, habit_id: i64) -> Result<i64, HabitualError> {
        let conn = self.db.connection();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM checkoffs WHERE habit_id = ?1",
                [habit_id],
                |row| row.get(0),
            )
            .map_err(|e| HabitualError::Database(format!("Failed to count check-offs: {e}")))?;

        Ok(count)
    }

    /// Reset a habit: delete all check-offs and set a new start date.
    ///
    /// # Errors
    ///
    /// Returns an error if either statement fails.
    pub fn reset(&self, habit_id: i64, start_date: NaiveDate) -> Result<(), HabitualError> {
        let conn = self.db.connection();

        conn.execute("DELETE FROM checkoffs WHERE habit_id = ?1", [habit_id])
            .map_err(|e| HabitualError::Database(format!("Failed to clear check-offs: {e}")))?;

        conn.execute(
            "UPDATE habits SET start_date = ?1 WHERE id = ?2",
            params![start_date.format(DATE_FORMAT).to_string(), habit_id],
        )
        .map_err(|e| HabitualError::Database(format!("Failed to update start date: {e}")))?;

        Ok(())
    }

    /// Delete a habit; check-offs go with it via the foreign key cascade.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&self, habit_id: i64) -> Result<bool, HabitualError> {
        let conn = self.db.connection();

        let rows = conn
            .execute("DELETE FROM habits WHERE id = ?1", [habit_id])
            .map_err(|e| HabitualError::Database(format!("Failed to delete habit: {e}")))?;

        Ok(rows > 0)
    }
}

/// Parse the date and cadence columns of a raw habit row.
fn habit_from_row(row: HabitRow) -> Result<Habit, HabitualError> {
    let (id, name, description, cadence_raw, start_raw, created_raw) = row;

    let cadence = Cadence::parse(&cadence_raw)
        .ok_or_else(|| HabitualError::Database(format!("Corrupt cadence '{cadence_raw}'")))?;

    let start_date = NaiveDate::parse_from_str(&start_raw, DATE_FORMAT)
        .map_err(|_| HabitualError::Database(format!("Corrupt start date '{start_raw}'")))?;

    let created_at = NaiveDateTime::parse_from_str(&created_raw, TIMESTAMP_FORMAT)
        .map_err(|_| HabitualError::Database(format!("Corrupt created-at '{created_raw}'")))?;

    Ok(Habit {
        id,
        name,
        description,
        cadence,
        start_date,
        created_at,
    })
}
