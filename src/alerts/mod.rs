//! Alerts Module
//!
//! Threshold alerts for a city, ordered by urgency through [`AlertQueue`].

mod queue;

pub use queue::{AlertQueue, Prioritized};

use serde::{Deserialize, Serialize};

/// AQI above this raises a critical alert.
pub const AQI_ALERT_THRESHOLD: u32 = 150;
/// Rain probability (percent) above this raises a warning.
pub const RAIN_ALERT_THRESHOLD: u8 = 70;
/// Temperature (°C) above this raises a heat warning.
pub const HEAT_ALERT_THRESHOLD: f64 = 40.0;
/// Temperature (°C) below this raises a cold warning.
pub const COLD_ALERT_THRESHOLD: f64 = -10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    #[serde(rename = "AQI")]
    Aqi,
    Rain,
    Heat,
    Cold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

impl Severity {
    fn priority(self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Warning => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub priority: u8,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            priority: severity.priority(),
            message: message.into(),
        }
    }
}

impl Prioritized for Alert {
    fn priority(&self) -> u8 {
        self.priority
    }
}

/// Builds the alert list for one city, most urgent first.
pub fn generate_alerts(
    temperature: Option<f64>,
    aqi: Option<u32>,
    rain_probability: Option<u8>,
) -> Vec<Alert> {
    let mut queue = AlertQueue::new();

    if let Some(aqi) = aqi.filter(|&v| v > AQI_ALERT_THRESHOLD) {
        queue.push(Alert::new(
            AlertKind::Aqi,
            Severity::Critical,
            format!("Hazardous air quality detected (AQI: {aqi})"),
        ));
    }

    if let Some(p) = rain_probability.filter(|&p| p > RAIN_ALERT_THRESHOLD) {
        queue.push(Alert::new(
            AlertKind::Rain,
            Severity::Warning,
            format!("High probability of rain ({p}%)"),
        ));
    }

    if let Some(t) = temperature {
        if t > HEAT_ALERT_THRESHOLD {
            queue.push(Alert::new(
                AlertKind::Heat,
                Severity::Warning,
                format!("Heatwave warning: {t}°C"),
            ));
        }
        if t < COLD_ALERT_THRESHOLD {
            queue.push(Alert::new(
                AlertKind::Cold,
                Severity::Warning,
                format!("Extreme cold warning: {t}°C"),
            ));
        }
    }

    queue.drain_sorted()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_alerts_in_mild_conditions() {
        assert!(generate_alerts(Some(20.0), Some(40), Some(10)).is_empty());
        assert!(generate_alerts(None, None, None).is_empty());
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let alerts = generate_alerts(Some(40.0), Some(150), Some(70));
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_aqi_alert_comes_first() {
        let alerts = generate_alerts(Some(41.5), Some(180), Some(85));
        let kinds: Vec<_> = alerts.iter().map(|a| a.kind).collect();

        assert_eq!(kinds, vec![AlertKind::Aqi, AlertKind::Rain, AlertKind::Heat]);
        assert_eq!(alerts[0].severity, Severity::Critical);
        assert_eq!(alerts[0].message, "Hazardous air quality detected (AQI: 180)");
        assert_eq!(alerts[2].message, "Heatwave warning: 41.5°C");
    }

    #[test]
    fn test_cold_alert() {
        let alerts = generate_alerts(Some(-12.0), None, None);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::Cold);
        assert_eq!(alerts[0].message, "Extreme cold warning: -12°C");
    }

    #[test]
    fn test_alert_json_shape() {
        let alert = Alert::new(AlertKind::Aqi, Severity::Critical, "bad air");
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "AQI");
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["priority"], 0);
    }
}
