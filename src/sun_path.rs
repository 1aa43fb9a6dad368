use crate::angles;
use crate::calendar::{day_number, Hms};
use crate::config::SunPathConfig;
use crate::error::{check_day_number, Result};
use crate::point::SpatialPoint;
use crate::types::SunriseSunset;

/// One sampled sun position of a day.
#[derive(Debug, Clone, PartialEq)]
pub struct SunPathSample {
    pub solar_hour: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub altitude: f64,
    pub azimuth: f64,
    pub point: SpatialPoint,
}

/// The sun's track across the sky for one day, sampled in apparent solar time.
#[derive(Debug, Clone, PartialEq)]
pub struct SunPath {
    pub day_number: i32,
    pub declination: f64,
    pub sunrise_sunset: SunriseSunset,
    pub samples: Vec<SunPathSample>,
}

/// Interpolates between two azimuths along the shorter arc.
pub fn interpolate_angle(a1: f64, a2: f64, fraction: f64) -> f64 {
    let diff = a2 - a1;
    let adjusted_diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    angles::normalize_angle(a1 + adjusted_diff * fraction)
}

fn interpolate_linear(v1: f64, v2: f64, fraction: f64) -> f64 {
    v1 + fraction * (v2 - v1)
}

impl SunPath {
    pub fn points(&self) -> impl Iterator<Item = &SpatialPoint> + '_ {
        self.samples.iter().map(|s| &s.point)
    }

    /// `(azimuth, altitude)` at a solar hour, interpolated between the
    /// bracketing samples. `None` outside the sampled span.
    pub fn position_at(&self, solar_hour: f64) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        if solar_hour < first.solar_hour || solar_hour > last.solar_hour {
            return None;
        }
        let idx = self
            .samples
            .partition_point(|s| s.solar_hour <= solar_hour);
        let before = &self.samples[idx - 1];
        if before.solar_hour == solar_hour || idx == self.samples.len() {
            return Some((before.azimuth, before.altitude));
        }
        let after = &self.samples[idx];
        let fraction = (solar_hour - before.solar_hour) / (after.solar_hour - before.solar_hour);
        Some((
            interpolate_angle(before.azimuth, after.azimuth, fraction),
            interpolate_linear(before.altitude, after.altitude, fraction),
        ))
    }
}

/// Samples the sun path of day `n` every `config.step_minutes` of solar time.
///
/// Points lie on a sphere of `config.radius` and are marked distant.
pub fn sun_path(config: &SunPathConfig, n: i32) -> Result<SunPath> {
    config.validate()?;
    let n = check_day_number(n)?;
    let latitude = config.site.latitude;
    let decl = angles::declination(n);

    let mut samples = Vec::with_capacity((1440 / config.step_minutes + 1) as usize);
    for minutes in (0..=1440).step_by(config.step_minutes as usize) {
        let solar_hour = minutes as f64 / 60.0;
        let hour_angle = angles::hour_angle_from_solar_hour(solar_hour);
        let altitude = angles::altitude_angle(decl, latitude, hour_angle);
        if altitude < 0.0 && !config.include_below_horizon {
            continue;
        }
        let azimuth = angles::azimuth_angle(decl, latitude, hour_angle);
        let point = SpatialPoint::from_azimuth_altitude(azimuth, altitude, config.radius)?
            .named(format!("D{} {}", n, Hms::from_decimal_hours(solar_hour)))
            .with_distant(true);
        samples.push(SunPathSample {
            solar_hour,
            hour_angle,
            zenith: 90.0 - altitude,
            altitude,
            azimuth,
            point,
        });
    }
    log::debug!(
        "sun path for day {} at latitude {}: {} samples",
        n,
        latitude,
        samples.len()
    );

    Ok(SunPath {
        day_number: n,
        declination: decl,
        sunrise_sunset: angles::estimate_sunrise_sunset(latitude, n),
        samples,
    })
}

/// Sun paths for several `(month, day)` dates, e.g. [`crate::calendar::SEVEN_DAYS`].
pub fn sun_paths(config: &SunPathConfig, dates: &[(u32, u32)]) -> Result<Vec<SunPath>> {
    dates
        .iter()
        .map(|&(month, day)| sun_path(config, day_number(month, day)?))
        .collect()
}
