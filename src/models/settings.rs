use serde::{Deserialize, Serialize};

/// Distance unit used for display and for the deduction rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Miles,
    Kilometers,
}

impl DistanceUnit {
    pub fn abbrev(&self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mile",
            DistanceUnit::Kilometers => "kilometer",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "miles" | "mi" => Some(DistanceUnit::Miles),
            "kilometers" | "km" => Some(DistanceUnit::Kilometers),
            _ => None,
        }
    }
}

/// Application settings singleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub unit: DistanceUnit,
    pub currency: String,
    pub deduction_rate: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::Miles,
            currency: "USD".to_string(),
            deduction_rate: 0.67,
        }
    }
}
