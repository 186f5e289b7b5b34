//! Analysis Module
//!
//! Pure, stateless scoring over weather and air-quality data.

mod air;
mod rain;
mod trends;

pub use air::{categorize_aqi, AqiLevel};
pub use rain::{predict_rain, Confidence, RainPrediction, RAIN_WINDOW_HOURS};
pub use trends::{calculate_trends, Trends};
