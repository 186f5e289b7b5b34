//! Rain probability heuristic over the next 24 hourly points.

use serde::{Deserialize, Serialize};

use crate::models::HourlyPoint;

/// Hours considered by [`predict_rain`].
pub const RAIN_WINDOW_HOURS: usize = 24;

/// How many heuristic factors backed a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    fn from_factor_count(count: usize) -> Self {
        match count {
            0 | 1 => Confidence::Low,
            2 => Confidence::Medium,
            _ => Confidence::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainPrediction {
    /// 0..=100
    pub probability: u8,
    pub factors: Vec<String>,
    pub confidence: Confidence,
}

/// Scores humidity, pressure, cloud cover and forecast precipitation.
///
/// Missing readings count as zero. An empty series yields probability 0
/// with low confidence.
pub fn predict_rain(hourly: &[HourlyPoint]) -> RainPrediction {
    let window = &hourly[..hourly.len().min(RAIN_WINDOW_HOURS)];
    if window.is_empty() {
        return RainPrediction {
            probability: 0,
            factors: Vec::new(),
            confidence: Confidence::Low,
        };
    }

    let avg = |field: fn(&HourlyPoint) -> Option<f64>| {
        window.iter().map(|h| field(h).unwrap_or(0.0)).sum::<f64>() / window.len() as f64
    };
    let humidity = avg(|h| h.humidity);
    let pressure = avg(|h| h.pressure);
    let cloud = avg(|h| h.cloud_cover);

    let mut score: u32 = 0;
    let mut factors = Vec::new();
    let mut add = |points: u32, factor: &str| {
        score += points;
        factors.push(factor.to_string());
    };

    if humidity > 80.0 {
        add(30, "High humidity detected");
    }
    if humidity > 90.0 {
        add(20, "Very high humidity");
    }
    if pressure < 1010.0 {
        add(25, "Low atmospheric pressure");
    }
    if cloud > 70.0 {
        add(25, "Heavy cloud cover");
    }
    if window
        .iter()
        .any(|h| h.precipitation_probability.unwrap_or(0.0) > 50.0)
    {
        add(30, "Precipitation in forecast");
    }

    RainPrediction {
        probability: score.min(100) as u8,
        confidence: Confidence::from_factor_count(factors.len()),
        factors,
    }
}
