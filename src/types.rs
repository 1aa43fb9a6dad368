use serde::{Deserialize, Serialize};

/// Numeric width used when evaluating an angle kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    Single,
    #[default]
    Double,
}

/// Equation-of-time approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EotModel {
    /// Spencer's Fourier series (Iqbal form).
    #[default]
    Spencer,
    /// Three-term approximation `9.87 sin 2B - 7.53 cos B - 1.5 sin B`.
    Approximate,
}

/// Geographic location plus the meridian of its standard time zone.
///
/// Longitudes are positive east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    pub latitude: f64,
    pub longitude: f64,
    pub std_meridian: f64,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            latitude: 39.8,
            longitude: -89.6,
            std_meridian: -90.0,
        }
    }
}

/// Tilted, oriented receiving surface.
///
/// `orientation` uses the (-180°, 180°] convention: 0° faces south, east is
/// negative and west positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub tilt: f64,
    pub orientation: f64,
}

impl Surface {
    pub const HORIZONTAL: Self = Self {
        tilt: 0.0,
        orientation: 0.0,
    };

    pub fn new(tilt: f64, orientation: f64) -> Self {
        Self { tilt, orientation }
    }

    /// Builds a surface from a compass orientation in (0°, 360°).
    pub fn from_compass(tilt: f64, compass_orientation: f64) -> Self {
        Self {
            tilt,
            orientation: compass_orientation - 180.0,
        }
    }

    pub fn incidence_angle(&self, declination: f64, latitude: f64, hour_angle: f64) -> f64 {
        crate::angles::incidence_angle(
            declination,
            latitude,
            self.tilt,
            self.orientation,
            hour_angle,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub day_number: i32,
    pub declination: f64,
    pub equation_of_time: f64,
    pub apparent_solar_time: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub altitude: f64,
    pub azimuth: f64,
}

impl SolarPosition {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Sunrise and sunset in apparent solar hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunriseSunset {
    pub sunrise: f64,
    pub sunset: f64,
}

impl SunriseSunset {
    pub fn day_length(&self) -> f64 {
        self.sunset - self.sunrise
    }
}
