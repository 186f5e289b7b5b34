//! Temperature trend summary over a daily series.

use serde::Serialize;

use crate::models::DailyPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    pub max_temp: f64,
    pub min_temp: f64,
    pub avg_temp: f64,
    pub hottest_day: DailyPoint,
    pub coldest_day: DailyPoint,
}

/// Summarises daily maximum temperatures.
///
/// Days without a maximum are skipped. Ties resolve to the earliest day.
/// Returns `None` when no day has a maximum.
pub fn calculate_trends(daily: &[DailyPoint]) -> Option<Trends> {
    let mut days = daily
        .iter()
        .filter_map(|d| d.max_temp.map(|t| (t, d)));

    let (first_temp, first_day) = days.next()?;
    let mut hottest = (first_temp, first_day);
    let mut coldest = (first_temp, first_day);
    let mut sum = first_temp;
    let mut count = 1usize;

    for (temp, day) in days {
        if temp > hottest.0 {
            hottest = (temp, day);
        }
        if temp < coldest.0 {
            coldest = (temp, day);
        }
        sum += temp;
        count += 1;
    }

    Some(Trends {
        max_temp: hottest.0,
        min_temp: coldest.0,
        avg_temp: sum / count as f64,
        hottest_day: hottest.1.clone(),
        coldest_day: coldest.1.clone(),
    })
}
