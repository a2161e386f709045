use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A car profile trips can be attributed to, carrying a running odometer value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub license_plate: String,
    #[serde(default)]
    pub odometer: Option<i64>,
}

impl Vehicle {
    pub fn new(
        year: Option<i32>,
        make: String,
        model: String,
        license_plate: String,
        odometer: Option<i64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            year,
            make,
            model,
            license_plate,
            odometer,
        }
    }

    /// Display label, e.g. "2021 Toyota Prius".
    pub fn label(&self) -> String {
        match self.year {
            Some(y) => format!("{} {} {}", y, self.make, self.model),
            None => format!("{} {}", self.make, self.model),
        }
    }
}
