//! Derived reports: rain prediction, forecast analytics and alerts.

use serde::Serialize;

use crate::alerts::Alert;
use crate::analysis::{calculate_trends, Confidence, RainPrediction};
use crate::models::DailyPoint;

/// Body of `/api/predictions/:city`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub city: String,
    pub rain_probability: u8,
    pub factors: Vec<String>,
    pub confidence: Confidence,
    pub predicted_at: String,
    pub valid_until: String,
}

impl PredictionReport {
    pub fn new(
        city: impl Into<String>,
        prediction: RainPrediction,
        predicted_at: String,
        valid_until: String,
    ) -> Self {
        Self {
            city: city.into(),
            rain_probability: prediction.probability,
            factors: prediction.factors,
            confidence: prediction.confidence,
            predicted_at,
            valid_until,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Period {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureSummary {
    pub max: f64,
    pub min: f64,
    pub average: f64,
    pub hottest_day: DailyPoint,
    pub coldest_day: DailyPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecipitationSummary {
    pub total: f64,
    /// Total spread over every day in the period
    pub average: f64,
    pub rainy_days: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindSummary {
    /// `null` when no day reports a wind maximum
    pub average_max_speed: Option<f64>,
    pub max_speed: Option<f64>,
}

/// Body of `/api/analytics/:city`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub city: String,
    pub period: Period,
    pub temperature: TemperatureSummary,
    pub precipitation: PrecipitationSummary,
    pub wind: WindSummary,
    pub generated_at: String,
}

impl AnalyticsReport {
    /// Summarises a daily series. `None` when no day has a maximum
    /// temperature to build trends from.
    pub fn from_daily(city: impl Into<String>, daily: &[DailyPoint], generated_at: String) -> Option<Self> {
        let trends = calculate_trends(daily)?;
        let first = daily.first()?;
        let last = daily.last()?;

        let total: f64 = daily.iter().filter_map(|d| d.precipitation).sum();
        let rainy_days = daily
            .iter()
            .filter(|d| d.precipitation.is_some_and(|p| p > 0.0))
            .count();

        let winds: Vec<f64> = daily.iter().filter_map(|d| d.wind_speed_max).collect();
        let average_max_speed =
            (!winds.is_empty()).then(|| winds.iter().sum::<f64>() / winds.len() as f64);
        let max_speed = winds.iter().copied().reduce(f64::max);

        Some(Self {
            city: city.into(),
            period: Period {
                start: first.date.clone(),
                end: last.date.clone(),
            },
            temperature: TemperatureSummary {
                max: trends.max_temp,
                min: trends.min_temp,
                average: trends.avg_temp,
                hottest_day: trends.hottest_day,
                coldest_day: trends.coldest_day,
            },
            precipitation: PrecipitationSummary {
                total,
                average: total / daily.len() as f64,
                rainy_days,
            },
            wind: WindSummary {
                average_max_speed,
                max_speed,
            },
            generated_at,
        })
    }
}

/// Body of `/api/alerts/:city`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsReport {
    pub city: String,
    /// Most urgent first
    pub alerts: Vec<Alert>,
    pub count: usize,
    pub generated_at: String,
}

impl AlertsReport {
    pub fn new(city: impl Into<String>, alerts: Vec<Alert>, generated_at: String) -> Self {
        Self {
            city: city.into(),
            count: alerts.len(),
            alerts,
            generated_at,
        }
    }
}
