//! AQI categorisation on the US EPA breakpoints.

use serde::Serialize;

/// Health band for an AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiLevel {
    pub fn label(self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::UnhealthyForSensitive => "Unhealthy for Sensitive",
            AqiLevel::Unhealthy => "Unhealthy",
            AqiLevel::VeryUnhealthy => "Very Unhealthy",
            AqiLevel::Hazardous => "Hazardous",
        }
    }

    /// Display colour used by the dashboard.
    pub fn color(self) -> &'static str {
        match self {
            AqiLevel::Good => "#10b981",
            AqiLevel::Moderate => "#fbbf24",
            AqiLevel::UnhealthyForSensitive => "#f59e0b",
            AqiLevel::Unhealthy => "#ef4444",
            AqiLevel::VeryUnhealthy => "#a855f7",
            AqiLevel::Hazardous => "#7f1d1d",
        }
    }

    /// Lower is more urgent.
    pub fn priority(self) -> u8 {
        match self {
            AqiLevel::Good => 4,
            AqiLevel::Moderate => 3,
            AqiLevel::UnhealthyForSensitive => 2,
            AqiLevel::Unhealthy => 1,
            AqiLevel::VeryUnhealthy | AqiLevel::Hazardous => 0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AqiLevel::Good => "Air quality is satisfactory",
            AqiLevel::Moderate => "Air quality is acceptable",
            AqiLevel::UnhealthyForSensitive => "Sensitive groups may experience health effects",
            AqiLevel::Unhealthy => "Everyone may begin to experience health effects",
            AqiLevel::VeryUnhealthy => "Health alert: everyone may experience serious effects",
            AqiLevel::Hazardous => "Health warnings of emergency conditions",
        }
    }
}

/// Maps an AQI value to its band. Upper bounds are inclusive.
pub fn categorize_aqi(aqi: u32) -> AqiLevel {
    match aqi {
        0..=50 => AqiLevel::Good,
        51..=100 => AqiLevel::Moderate,
        101..=150 => AqiLevel::UnhealthyForSensitive,
        151..=200 => AqiLevel::Unhealthy,
        201..=300 => AqiLevel::VeryUnhealthy,
        _ => AqiLevel::Hazardous,
    }
}
