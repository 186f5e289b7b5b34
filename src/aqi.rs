//! Air-quality readings
//!
//! There is no live AQI feed yet; [`SimulatedAqi`] draws plausible values.
//! Services depend on [`AqiSource`] so a real provider can slot in.

use std::fmt::Debug;

use rand::Rng;

/// Raw pollutant readings before categorisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AqiReading {
    pub aqi: u32,
    pub pm25: u32,
    pub pm10: u32,
    pub co: u32,
    pub no2: u32,
    pub o3: u32,
}

impl AqiReading {
    /// Derives particulate levels from the index: pm2.5 = 40%, pm10 = 60%.
    pub fn from_index(aqi: u32, co: u32, no2: u32, o3: u32) -> Self {
        Self {
            aqi,
            pm25: aqi * 2 / 5,
            pm10: aqi * 3 / 5,
            co,
            no2,
            o3,
        }
    }
}

pub trait AqiSource: Debug + Send + Sync {
    fn sample(&self, city: &str) -> AqiReading;
}

/// Uniform random readings: AQI in [20, 170).
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedAqi;

impl AqiSource for SimulatedAqi {
    fn sample(&self, _city: &str) -> AqiReading {
        let mut rng = rand::thread_rng();
        AqiReading::from_index(
            rng.gen_range(20..170),
            rng.gen_range(1..6),
            rng.gen_range(10..50),
            rng.gen_range(20..80),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_floors_particulates() {
        let reading = AqiReading::from_index(57, 2, 20, 30);
        assert_eq!(reading.pm25, 22); // floor(22.8)
        assert_eq!(reading.pm10, 34); // floor(34.2)
    }

    #[test]
    fn test_simulated_ranges() {
        let source = SimulatedAqi;
        for _ in 0..500 {
            let r = source.sample("anywhere");
            assert!((20..170).contains(&r.aqi));
            assert!((1..6).contains(&r.co));
            assert!((10..50).contains(&r.no2));
            assert!((20..80).contains(&r.o3));
            assert_eq!(r.pm25, r.aqi * 2 / 5);
        }
    }
}
