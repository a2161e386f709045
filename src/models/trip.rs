use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-trip expense breakdown, all amounts non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Expenses {
    pub gasoline: f64,
    pub tolls: f64,
    pub food: f64,
}

impl Expenses {
    pub fn total(&self) -> f64 {
        self.gasoline + self.tolls + self.food
    }
}

/// One recorded driving session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(with = "crate::utils::time::hhmm")]
    pub start_time: NaiveTime, // "HH:MM"
    #[serde(with = "crate::utils::time::hhmm")]
    pub end_time: NaiveTime, // "HH:MM"
    pub miles: f64,
    pub gross_earnings: f64,
    pub expenses: Expenses,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub odometer_start: Option<i64>,
    #[serde(default)]
    pub odometer_end: Option<i64>,
}

impl Trip {
    /// High-level constructor for trips created from the CLI.
    /// Assigns a fresh UUID; odometer fields are filled by the trip logic.
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        miles: f64,
        gross_earnings: f64,
        expenses: Expenses,
        vehicle_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            start_time,
            end_time,
            miles,
            gross_earnings,
            expenses,
            vehicle_id,
            odometer_start: None,
            odometer_end: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_range_str(&self) -> String {
        format!(
            "{}-{}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }

    /// Domain constraints checked before any repository mutation.
    pub fn validate(&self) -> AppResult<()> {
        if self.miles < 0.0 || !self.miles.is_finite() {
            return Err(AppError::Validation(format!(
                "miles must be a non-negative number, got {}",
                self.miles
            )));
        }
        if self.gross_earnings < 0.0 || !self.gross_earnings.is_finite() {
            return Err(AppError::Validation(format!(
                "gross earnings must be a non-negative amount, got {}",
                self.gross_earnings
            )));
        }
        for (label, amount) in [
            ("gasoline", self.expenses.gasoline),
            ("tolls", self.expenses.tolls),
            ("food", self.expenses.food),
        ] {
            if amount < 0.0 || !amount.is_finite() {
                return Err(AppError::Validation(format!(
                    "{label} expense must be a non-negative amount, got {amount}"
                )));
            }
        }
        if let (Some(start), Some(end)) = (self.odometer_start, self.odometer_end)
            && end < start
        {
            return Err(AppError::Validation(format!(
                "odometer end ({end}) cannot be lower than odometer start ({start})"
            )));
        }
        Ok(())
    }
}
